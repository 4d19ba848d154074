//! Default locations for report files

use std::path::PathBuf;

/// Resolves default report paths under the user's home directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub base_dir: PathBuf,
}

impl Paths {
    /// Paths rooted at the home directory, or the working directory when
    /// no home directory can be determined
    pub fn new() -> Self {
        let base_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { base_dir }
    }

    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Analyzer report path
    pub fn summary_file(&self) -> PathBuf {
        self.base_dir.join("log_summary.txt")
    }

    /// Enhancer report path
    pub fn recommendations_file(&self) -> PathBuf {
        self.base_dir.join("log_recommendations.txt")
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
