//! Fixed instructions sent to the model

pub const ANALYZER_SYSTEM: &str = "You are a log analyzer. Extract the MOST IMPORTANT issues \
     and patterns from the logs. Be concise. Focus only on critical findings.";

pub const ENHANCER_SYSTEM: &str = "You are a system administrator assistant. Your task is to \
     analyze log summaries, create a concise meta-summary, and provide specific actionable \
     recommendations to address the issues found in the logs.";

/// User message asking for the critical findings in one chunk of log lines
pub fn analyze_chunk(chunk_text: &str) -> String {
    format!(
        "Analyze these logs and identify the most important issues. Keep your response SHORT \
         and FOCUSED only on critical findings:\n\n{}",
        chunk_text
    )
}

/// User message asking for a condensed summary plus a RECOMMENDATIONS section
pub fn enhance_report(report_text: &str) -> String {
    format!(
        "Here is a summary of log analysis. Please create a shorter, more concise summary of \
         the key issues found, and then add a section called \"RECOMMENDATIONS\" that lists \
         specific, actionable steps to address the problems.\n\n{}",
        report_text
    )
}
