//! Analyzer report: per-chunk results, checkpoints and the final summary

const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Outcome of one chunk, tagged with its `Part i/N` label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkResult {
    Success { label: String, analysis: String },
    Failure { label: String, error: String },
}

impl ChunkResult {
    pub fn success(label: impl Into<String>, analysis: impl Into<String>) -> Self {
        Self::Success {
            label: label.into(),
            analysis: analysis.into(),
        }
    }

    pub fn failure(label: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failure {
            label: label.into(),
            error: error.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Success { label, .. } | Self::Failure { label, .. } => label,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Entry text as it appears in reports
    pub fn render(&self) -> String {
        match self {
            Self::Success { label, analysis } => format!("=== {} ===\n\n{}", label, analysis),
            Self::Failure { label, error } => format!("=== {} ===\n\nError: {}", label, error),
        }
    }
}

/// Successful and failed chunk results in processing order
#[derive(Debug, Clone, Default)]
pub struct Report {
    successes: Vec<ChunkResult>,
    errors: Vec<ChunkResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ChunkResult) {
        if result.is_success() {
            self.successes.push(result);
        } else {
            self.errors.push(result);
        }
    }

    pub fn successes(&self) -> &[ChunkResult] {
        &self.successes
    }

    pub fn errors(&self) -> &[ChunkResult] {
        &self.errors
    }

    /// Everything gathered so far, written after each chunk
    pub fn render_checkpoint(&self) -> String {
        let mut out = String::new();

        if !self.successes.is_empty() {
            out.push_str("## SUCCESSFUL ANALYSES\n\n");
            for result in &self.successes {
                out.push_str(&result.render());
                out.push_str(ENTRY_SEPARATOR);
            }
        }

        if !self.errors.is_empty() {
            out.push_str("\n\n## ERRORS\n\n");
            for result in &self.errors {
                out.push_str(&result.render());
                out.push_str("\n\n");
            }
        }

        out
    }

    /// Final summary with a header and a size-bounded body
    ///
    /// Findings, then errors, are appended while the running total of entry
    /// bytes stays within `max_chars`; the first entry that would pass it
    /// ends its section with a note counting the omitted entries.
    pub fn render_final(&self, window: &str, generated_at: &str, max_chars: usize) -> String {
        let mut out = String::new();

        out.push_str("# LOG ANALYSIS SUMMARY\n");
        out.push_str(&format!("Generated on {}\n\n", generated_at));
        out.push_str(&format!(
            "Processed {} chunks of logs from the last {}.\n",
            self.successes.len(),
            window
        ));
        if !self.errors.is_empty() {
            out.push_str(&format!(
                "Encountered {} errors during processing.\n",
                self.errors.len()
            ));
        }
        out.push_str("\n---\n\n");

        out.push_str("## DETAILED FINDINGS\n\n");
        let mut total = 0;
        append_bounded(
            &mut out,
            &self.successes,
            ENTRY_SEPARATOR,
            "analyses",
            &mut total,
            max_chars,
        );

        if !self.errors.is_empty() {
            out.push_str("\n\n## ERRORS\n\n");
            append_bounded(
                &mut out,
                &self.errors,
                "\n\n",
                "errors",
                &mut total,
                max_chars,
            );
        }

        out
    }
}

fn append_bounded(
    out: &mut String,
    results: &[ChunkResult],
    separator: &str,
    noun: &str,
    total: &mut usize,
    max_chars: usize,
) {
    for (i, result) in results.iter().enumerate() {
        let entry = result.render();
        if *total + entry.len() > max_chars {
            out.push_str(&format!(
                "\n\n*Note: {} additional {} were truncated due to size limits.*\n",
                results.len() - i,
                noun
            ));
            return;
        }
        out.push_str(&entry);
        out.push_str(separator);
        *total += entry.len();
    }
}
