//! Core types for log triage

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Open time interval `(start, end)` used to select recent log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of length `duration` ending at `end`
    pub fn ending_at(end: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            start: end - duration,
            end,
        }
    }

    /// Window of length `duration` ending now
    pub fn last(duration: Duration) -> Self {
        Self::ending_at(Utc::now(), duration)
    }

    /// True iff `t` lies strictly after `start` and strictly before `end`
    pub fn contains(&self, t: &DateTime<FixedOffset>) -> bool {
        let t = t.with_timezone(&Utc);
        t > self.start && t < self.end
    }
}

/// A contiguous group of filtered log lines sent in one model request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position among all planned chunks
    pub index: usize,
    /// 1-based line number (within the filtered sequence) of the first line
    pub first_line: usize,
    pub lines: Vec<String>,
    /// Token estimate of the joined text
    pub estimated_tokens: usize,
    /// Set when the window was cut down to fit the token ceiling
    pub shrunk: bool,
}

impl Chunk {
    /// 1-based line number of the last line
    pub fn last_line(&self) -> usize {
        self.first_line + self.lines.len() - 1
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`, as sent to the model
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Label used in reports, e.g. `Part 2/5`
    pub fn label(&self, total: usize) -> String {
        format!("Part {}/{}", self.index, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2025, 3, 1, h, m, s)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn test_window_is_open_interval() {
        let end = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let window = TimeWindow::ending_at(end, Duration::hours(1));

        assert!(!window.contains(&at(11, 0, 0)));
        assert!(window.contains(&at(11, 0, 1)));
        assert!(window.contains(&at(11, 59, 59)));
        assert!(!window.contains(&at(12, 0, 0)));
    }

    #[test]
    fn test_window_compares_across_offsets() {
        let end = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let window = TimeWindow::ending_at(end, Duration::hours(1));
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = tokyo.with_ymd_and_hms(2025, 3, 1, 20, 30, 0).unwrap();
        assert!(window.contains(&t));
    }

    #[test]
    fn test_chunk_label_and_bounds() {
        let chunk = Chunk {
            index: 2,
            first_line: 31,
            lines: vec!["a".to_string(), "b".to_string()],
            estimated_tokens: 0,
            shrunk: false,
        };
        assert_eq!(chunk.label(3), "Part 2/3");
        assert_eq!(chunk.last_line(), 32);
        assert_eq!(chunk.text(), "a\nb");
    }
}
