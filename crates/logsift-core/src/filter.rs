//! Time-window filtering of raw log lines

use crate::TimeWindow;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::path::Path;

/// Width of the RFC3339 timestamp prefix, e.g. `2025-03-01T11:30:00+09:00`
pub const TIMESTAMP_LEN: usize = 25;

/// Parse the fixed-width timestamp at the start of `line`
///
/// Returns `None` for lines shorter than [`TIMESTAMP_LEN`] bytes, lines whose
/// prefix ends inside a multi-byte character, and unparseable prefixes.
/// The date and time must be separated by an uppercase `T` and a UTC
/// designator must be an uppercase `Z`.
pub fn parse_line_timestamp(line: &str) -> Option<DateTime<FixedOffset>> {
    let prefix = line.get(..TIMESTAMP_LEN)?;
    if prefix.as_bytes()[10] != b'T' || prefix.ends_with('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(prefix).ok()
}

/// Keep the lines of `text` whose timestamp lies strictly inside `window`
pub fn filter_lines(text: &str, window: &TimeWindow) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .filter(|line| parse_line_timestamp(line).is_some_and(|t| window.contains(&t)))
        .map(String::from)
        .collect()
}

/// Read the log file at `path` and filter it to `window`
pub fn read_filtered(path: &Path, window: &TimeWindow) -> anyhow::Result<Vec<String>> {
    let content = logsift_io::read_lossy(path)
        .with_context(|| format!("failed to read log file {}", path.display()))?;
    Ok(filter_lines(&content, window))
}
