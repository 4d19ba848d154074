//! Plain-text rendering of analysis and recommendation reports

mod enhanced;
mod report;

pub use enhanced::{
    has_recommendations, render_enhanced, truncate_tail, FALLBACK_RECOMMENDATIONS,
    LINE_SEEK_LIMIT,
};
pub use report::{ChunkResult, Report};

use chrono::{DateTime, TimeZone};

/// RFC1123-style timestamp used in report headers
pub fn format_generated_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%a, %d %b %Y %H:%M:%S %Z").to_string()
}
