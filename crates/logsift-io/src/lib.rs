//! File system helpers for reading inputs and writing reports

mod io;
mod paths;

pub use io::{read_bytes, read_lossy, write_report};
pub use paths::Paths;
