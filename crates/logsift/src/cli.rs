use clap::{Args, Parser, Subcommand};
use logsift_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logsift")]
#[command(version)]
#[command(about = "Summarize recent log lines with a chat-completion model")]
pub struct Cli {
    /// JSON config file; omitted keys keep their defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the last window of the log file chunk by chunk
    Analyze,

    /// Condense a summary report and add recommendations
    Enhance {
        /// Report to enhance (defaults to the analyzer output)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Analyze, then enhance the fresh report
    Run,

    /// Print version information
    Version,
}

/// Per-run overrides applied on top of the config file
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Log file to analyze
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// Analyzer report path
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Enhancer report path
    #[arg(long, global = true)]
    pub recommendations: Option<PathBuf>,

    /// Chat-completion endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Time window in minutes
    #[arg(long, global = true)]
    pub window_mins: Option<u64>,

    /// Lines per chunk
    #[arg(long, global = true)]
    pub chunk_lines: Option<usize>,

    /// Token-estimate ceiling per chunk
    #[arg(long, global = true)]
    pub chunk_tokens: Option<usize>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log {
            config.log_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        if let Some(path) = &self.recommendations {
            config.recommendations_path = path.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(mins) = self.window_mins {
            config.window_secs = mins.saturating_mul(60);
        }
        if let Some(lines) = self.chunk_lines {
            config.max_lines_per_chunk = lines;
        }
        if let Some(tokens) = self.chunk_tokens {
            config.max_tokens_per_chunk = tokens;
        }
    }
}
