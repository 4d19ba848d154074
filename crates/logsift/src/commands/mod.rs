pub mod analyze;
pub mod enhance;
pub mod run;
pub mod version;

use crate::cli::Overrides;
use anyhow::Context;
use logsift_core::Config;
use std::path::Path;

/// Defaults, then the config file, then command-line overrides
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    overrides.apply(&mut config);
    config.validate().context("refusing to start")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, &Overrides::default()).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_load_config_file_then_overrides() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("logsift.json");
        std::fs::write(&path, r#"{"model": "llama-3.1-8b", "max_lines_per_chunk": 20}"#).unwrap();

        let overrides = Overrides {
            chunk_lines: Some(40),
            ..Overrides::default()
        };
        let config = load_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.model, "llama-3.1-8b");
        assert_eq!(config.max_lines_per_chunk, 40);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let overrides = Overrides {
            chunk_tokens: Some(0),
            ..Overrides::default()
        };
        assert!(load_config(None, &overrides).is_err());
    }
}
