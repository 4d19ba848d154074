#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use logsift_client::{CompletionBackend, CompletionError, Reply};
use logsift_core::{Config, TimeWindow};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

/// Backend that replays canned replies and records every request
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<Reply, CompletionError>>>,
    pub requests: RefCell<Vec<(String, String)>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<Reply, CompletionError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn content(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| Ok(Reply::Content(t.to_string())))
                .collect(),
        )
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl CompletionBackend for ScriptedBackend {
    fn complete(&self, system: &str, user: &str) -> Result<Reply, CompletionError> {
        self.requests
            .borrow_mut()
            .push((system.to_string(), user.to_string()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Api("no scripted reply left".to_string())))
    }
}

/// One-hour window ending 2025-03-01T12:00:00Z
pub fn sample_window() -> TimeWindow {
    let end = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    TimeWindow::ending_at(end, Duration::hours(1))
}

/// `count` lines inside [`sample_window`], one per second from 11:01:00
pub fn recent_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "2025-03-01T11:{:02}:{:02}+00:00 host{} sshd[{}]: Failed password for root",
                1 + i / 60,
                i % 60,
                i,
                1000 + i
            )
        })
        .collect()
}

pub fn write_log(path: &Path, lines: &[String]) {
    std::fs::write(path, lines.join("\n") + "\n").unwrap();
}

/// Config with every file under `dir`
pub fn sample_config(dir: &Path) -> Config {
    Config {
        log_path: dir.join("remote.log"),
        output_path: dir.join("log_summary.txt"),
        recommendations_path: dir.join("log_recommendations.txt"),
        ..Config::new()
    }
}
