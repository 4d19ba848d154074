//! Chat-completion client used to summarize log chunks and reports

mod client;
mod error;
pub mod prompts;
mod reply;

pub use client::{ChatMessage, ChatRequest, CompletionBackend, CompletionClient};
pub use error::CompletionError;
pub use reply::{decode_reply, Reply};
