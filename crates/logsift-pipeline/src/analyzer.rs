use anyhow::Result;
use logsift_client::{prompts, CompletionBackend};
use logsift_core::{plan_chunks, read_filtered, Chunk, Config, TimeWindow};
use logsift_report::{format_generated_at, ChunkResult, Report};

/// What an analyzer run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub lines_kept: usize,
    pub chunks: usize,
    pub successes: usize,
    pub errors: usize,
    pub checkpoints_written: usize,
    pub final_written: bool,
}

/// Summarize one chunk; failures become an error entry instead of an `Err`
pub fn analyze_chunk<B: CompletionBackend + ?Sized>(
    backend: &B,
    chunk: &Chunk,
    total: usize,
) -> ChunkResult {
    let label = chunk.label(total);
    let prompt = prompts::analyze_chunk(&chunk.text());

    match backend.complete(prompts::ANALYZER_SYSTEM, &prompt) {
        Ok(reply) => {
            let placeholder = format!("No analysis received for {}.", label);
            ChunkResult::success(label, reply.text_or(placeholder))
        }
        Err(err) => ChunkResult::failure(label, err.to_string()),
    }
}

/// Filter, chunk and summarize the configured log file
///
/// The report is rewritten after every chunk. A final summary replaces it
/// when at least one chunk succeeded. Only an unreadable log file is an
/// error; write failures are logged and the run carries on.
pub fn analyze<B: CompletionBackend + ?Sized>(
    config: &Config,
    backend: &B,
    window: &TimeWindow,
) -> Result<AnalysisOutcome> {
    tracing::info!(
        "Filtering logs from {} to {}",
        window.start.to_rfc3339(),
        window.end.to_rfc3339()
    );

    let lines = read_filtered(&config.log_path, window)?;
    tracing::info!(
        "Found {} log lines in the last {}",
        lines.len(),
        config.window_description()
    );

    let chunks = plan_chunks(
        &lines,
        config.max_lines_per_chunk,
        config.max_tokens_per_chunk,
    );
    let total = chunks.len();
    tracing::info!(
        "Processing logs in {} chunks of up to {} lines",
        total,
        config.max_lines_per_chunk.min(lines.len())
    );

    let mut outcome = AnalysisOutcome {
        lines_kept: lines.len(),
        chunks: total,
        ..AnalysisOutcome::default()
    };
    let mut report = Report::new();

    for chunk in &chunks {
        tracing::info!(
            "Processing chunk {}/{} (lines {}-{}, ~{} tokens)",
            chunk.index,
            total,
            chunk.first_line,
            chunk.last_line(),
            chunk.estimated_tokens
        );

        let result = analyze_chunk(backend, chunk, total);
        match &result {
            ChunkResult::Success { .. } => {
                tracing::info!("Successfully processed chunk {}/{}", chunk.index, total);
            }
            ChunkResult::Failure { error, .. } => {
                tracing::warn!(
                    "Error processing chunk {}/{}: {}",
                    chunk.index,
                    total,
                    error
                );
            }
        }
        report.push(result);

        match logsift_io::write_report(&config.output_path, &report.render_checkpoint()) {
            Ok(()) => outcome.checkpoints_written += 1,
            Err(e) => tracing::warn!("Failed to write output file: {}", e),
        }
    }

    outcome.successes = report.successes().len();
    outcome.errors = report.errors().len();

    if outcome.successes == 0 {
        tracing::info!("No successful analyses to summarize");
        return Ok(outcome);
    }

    let generated_at = format_generated_at(&chrono::Local::now());
    let summary = report.render_final(
        &config.window_description(),
        &generated_at,
        config.max_summary_chars,
    );
    match logsift_io::write_report(&config.output_path, &summary) {
        Ok(()) => {
            outcome.final_written = true;
            tracing::info!(
                "Log analysis summary saved to {}",
                config.output_path.display()
            );
        }
        Err(e) => tracing::error!("Failed to write output file: {}", e),
    }

    Ok(outcome)
}
