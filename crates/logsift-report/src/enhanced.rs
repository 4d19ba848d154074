//! Recommendations report built from a previous analysis report

/// How far into the kept tail to look for a line boundary
pub const LINE_SEEK_LIMIT: usize = 1000;

/// Appended when the model reply carries no recommendations of its own
pub const FALLBACK_RECOMMENDATIONS: &str = "\n\n## RECOMMENDATIONS\n\n\
     The AI did not provide specific recommendations. Please review the summary to \
     determine appropriate actions.\n";

/// Keep the trailing `max_bytes` of `data`, starting on a clean line
///
/// Inputs within the limit are returned whole. Otherwise the tail is cut and,
/// when a newline occurs within its first `seek_limit` bytes, everything up to
/// and including that newline is dropped.
pub fn truncate_tail(data: &[u8], max_bytes: usize, seek_limit: usize) -> &[u8] {
    if data.len() <= max_bytes {
        return data;
    }
    let tail = &data[data.len() - max_bytes..];
    let window = &tail[..seek_limit.min(tail.len())];
    match window.iter().position(|&b| b == b'\n') {
        Some(pos) => &tail[pos + 1..],
        None => tail,
    }
}

/// True when `reply` mentions recommendations in any letter case
pub fn has_recommendations(reply: &str) -> bool {
    reply.to_uppercase().contains("RECOMMENDATION")
}

/// Render the enhanced report around the model's reply
pub fn render_enhanced(reply: &str, generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str("# ENHANCED LOG SUMMARY WITH RECOMMENDATIONS\n");
    out.push_str(&format!("Generated on {}\n\n", generated_at));
    out.push_str(reply);

    if !has_recommendations(reply) {
        out.push_str(FALLBACK_RECOMMENDATIONS);
    }
    out
}
