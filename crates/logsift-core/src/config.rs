//! Configuration for the analyzer and enhancer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound on `window_secs` (roughly a century)
const MAX_WINDOW_SECS: u64 = 100 * 366 * 24 * 3600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Pipeline configuration
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log file read by the analyzer
    pub log_path: PathBuf,

    /// Analyzer report (checkpoints and final summary); enhancer input
    pub output_path: PathBuf,

    /// Enhancer output
    pub recommendations_path: PathBuf,

    /// Chat-completion endpoint URL
    pub endpoint: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature sent with every request
    pub temperature: f32,

    /// Length of the analyzer time window ending now, in seconds
    pub window_secs: u64,

    /// Target number of lines per chunk
    pub max_lines_per_chunk: usize,

    /// Token-estimate ceiling; larger chunks are shrunk
    pub max_tokens_per_chunk: usize,

    /// Byte ceiling for the findings and errors of the final report
    pub max_summary_chars: usize,

    /// Enhancer input is cut to this many trailing bytes
    pub max_enhance_input_bytes: usize,
}

impl Config {
    pub fn new() -> Self {
        let paths = logsift_io::Paths::new();
        Self {
            log_path: PathBuf::from("/var/log/remote.log"),
            output_path: paths.summary_file(),
            recommendations_path: paths.recommendations_file(),
            endpoint: "http://localhost:1234/v1/chat/completions".to_string(),
            model: "qwen2.5-7b-instruct-1m".to_string(),
            temperature: 0.3,
            window_secs: 3600,
            max_lines_per_chunk: 30,
            max_tokens_per_chunk: 1500,
            max_summary_chars: 20_000,
            max_enhance_input_bytes: 100_000,
        }
    }

    /// Load a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines_per_chunk == 0 {
            return Err(ConfigError::Invalid(
                "max_lines_per_chunk must be at least 1".to_string(),
            ));
        }
        if self.max_tokens_per_chunk == 0 {
            return Err(ConfigError::Invalid(
                "max_tokens_per_chunk must be at least 1".to_string(),
            ));
        }
        if self.window_secs == 0 || self.window_secs > MAX_WINDOW_SECS {
            return Err(ConfigError::Invalid(format!(
                "window_secs must be within 1..={}",
                MAX_WINDOW_SECS
            )));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model is empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        Ok(())
    }

    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.window_secs.min(MAX_WINDOW_SECS) as i64)
    }

    /// Human-readable window length, e.g. `hour` or `90 minutes`
    pub fn window_description(&self) -> String {
        match self.window_secs {
            3600 => "hour".to_string(),
            s if s % 3600 == 0 => format!("{} hours", s / 3600),
            s if s % 60 == 0 => format!("{} minutes", s / 60),
            s => format!("{} seconds", s),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
