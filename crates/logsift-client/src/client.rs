use crate::{decode_reply, CompletionError, Reply};
use serde::{Deserialize, Serialize};

const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Something that can answer a single-turn chat request
pub trait CompletionBackend {
    fn complete(&self, system: &str, user: &str) -> Result<Reply, CompletionError>;
}

impl<T: CompletionBackend + ?Sized> CompletionBackend for &T {
    fn complete(&self, system: &str, user: &str) -> Result<Reply, CompletionError> {
        (**self).complete(system, user)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Body of a chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn single_turn(model: &str, system: &str, user: &str, temperature: f32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature,
        }
    }
}

/// Blocking HTTP client for an OpenAI-compatible chat-completion endpoint
///
/// No authentication, streaming or timeout: each call is one POST that
/// waits for the full body.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Use a preconfigured HTTP client (proxy settings, TLS roots)
    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn post(&self, request: &ChatRequest) -> Result<Reply, CompletionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_builder() {
                    CompletionError::Encode(e)
                } else {
                    CompletionError::Transport(e)
                }
            })?;

        let status = response.status();
        let body = response.bytes().map_err(CompletionError::Read)?;
        tracing::debug!(
            "Raw response ({}): {}",
            status,
            String::from_utf8_lossy(&body)
        );

        if status.is_success() {
            return decode_reply(&body);
        }
        match decode_reply(&body) {
            Err(err @ CompletionError::Api(_)) => Err(err),
            _ => Err(CompletionError::HttpStatus(status.as_u16())),
        }
    }
}

impl CompletionBackend for CompletionClient {
    fn complete(&self, system: &str, user: &str) -> Result<Reply, CompletionError> {
        let request = ChatRequest::single_turn(&self.model, system, user, self.temperature);
        self.post(&request)
    }
}
