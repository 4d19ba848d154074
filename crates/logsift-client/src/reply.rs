//! Decoding of chat-completion response bodies

use crate::CompletionError;
use serde_json::Value;

/// Assistant reply extracted from a well-formed response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `choices[0].message.content`
    Content(String),
    /// The response carried no content (no choices, no message, null content)
    Empty,
}

impl Reply {
    /// Reply text, or `placeholder` when the model returned nothing
    pub fn text_or(self, placeholder: impl Into<String>) -> String {
        match self {
            Reply::Content(text) => text,
            Reply::Empty => placeholder.into(),
        }
    }
}

/// Decode a response body of the form `{choices:[{message:{content}}], error?}`
///
/// An `error` object or string wins over any choices. Missing or null levels
/// decode to [`Reply::Empty`]; levels present with the wrong JSON type are an
/// [`CompletionError::UnexpectedShape`].
pub fn decode_reply(body: &[u8]) -> Result<Reply, CompletionError> {
    let value: Value = serde_json::from_slice(body).map_err(CompletionError::InvalidJson)?;
    let Some(root) = value.as_object() else {
        return Err(shape("body is not a JSON object"));
    };

    match root.get("error") {
        Some(Value::Object(err)) => {
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(CompletionError::Api(message.to_string()));
        }
        Some(Value::String(message)) => return Err(CompletionError::Api(message.clone())),
        _ => {}
    }

    let choices = match root.get("choices") {
        None | Some(Value::Null) => return Ok(Reply::Empty),
        Some(Value::Array(choices)) => choices,
        Some(_) => return Err(shape("`choices` is not an array")),
    };
    let Some(first) = choices.first() else {
        return Ok(Reply::Empty);
    };
    let Some(choice) = first.as_object() else {
        return Err(shape("`choices[0]` is not an object"));
    };

    let message = match choice.get("message") {
        None | Some(Value::Null) => return Ok(Reply::Empty),
        Some(Value::Object(message)) => message,
        Some(_) => return Err(shape("`choices[0].message` is not an object")),
    };

    match message.get("content") {
        None | Some(Value::Null) => Ok(Reply::Empty),
        Some(Value::String(content)) => Ok(Reply::Content(content.clone())),
        Some(_) => Err(shape("`choices[0].message.content` is not a string")),
    }
}

fn shape(detail: &str) -> CompletionError {
    CompletionError::UnexpectedShape(detail.to_string())
}
