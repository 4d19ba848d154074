//! Core log triage: configuration, time-window filtering and chunk planning

mod chunker;
mod config;
mod filter;
mod tokens;
mod types;

pub use chunker::{plan_chunks, shrink_window};
pub use config::{Config, ConfigError};
pub use filter::{filter_lines, parse_line_timestamp, read_filtered, TIMESTAMP_LEN};
pub use tokens::estimate_tokens;
pub use types::{Chunk, TimeWindow};
