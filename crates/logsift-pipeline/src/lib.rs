//! Analyzer and enhancer runs over a completion backend

mod analyzer;
mod enhancer;

pub use analyzer::{analyze, analyze_chunk, AnalysisOutcome};
pub use enhancer::{enhance, EnhanceOutcome};

use logsift_client::CompletionClient;
use logsift_core::Config;

/// HTTP completion client for the configured endpoint and model
pub fn client_from_config(config: &Config) -> CompletionClient {
    CompletionClient::new(config.endpoint.clone(), config.model.clone())
        .with_temperature(config.temperature)
}
