use thiserror::Error;

/// A failed completion call
///
/// None of these abort the analyzer; each is recorded against its chunk.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to create JSON payload: {0}")]
    Encode(#[source] reqwest::Error),

    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("error from AI service: {0}")]
    Api(String),

    #[error("AI service returned HTTP {0}")]
    HttpStatus(u16),
}
