use anyhow::{Context, Result};
use logsift_client::{prompts, CompletionBackend};
use logsift_core::Config;
use logsift_report::{
    format_generated_at, has_recommendations, render_enhanced, truncate_tail, LINE_SEEK_LIMIT,
};
use std::path::Path;

/// What an enhancer run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceOutcome {
    pub input_bytes: usize,
    pub sent_bytes: usize,
    pub truncated: bool,
    pub fallback_added: bool,
}

/// Condense the report at `input` and write recommendations
///
/// Every failure is returned: the enhancer has a single request and nothing
/// useful to write without it.
pub fn enhance<B: CompletionBackend + ?Sized>(
    config: &Config,
    input: &Path,
    backend: &B,
) -> Result<EnhanceOutcome> {
    let data = logsift_io::read_bytes(input)
        .with_context(|| format!("failed to read summary file {}", input.display()))?;
    tracing::info!("Read {} bytes from summary file", data.len());

    let kept = truncate_tail(&data, config.max_enhance_input_bytes, LINE_SEEK_LIMIT);
    let truncated = kept.len() < data.len();
    if truncated {
        tracing::info!(
            "Summary file is very large, truncating to last {} bytes",
            config.max_enhance_input_bytes
        );
    }
    let summary = String::from_utf8_lossy(kept);

    tracing::info!("Sending request to AI service...");
    let reply = backend
        .complete(prompts::ENHANCER_SYSTEM, &prompts::enhance_report(&summary))
        .context("failed to enhance summary")?
        .text_or("No summary generated.");

    let fallback_added = !has_recommendations(&reply);
    let generated_at = format_generated_at(&chrono::Local::now());
    let enhanced = render_enhanced(&reply, &generated_at);

    logsift_io::write_report(&config.recommendations_path, &enhanced).with_context(|| {
        format!(
            "failed to write output file {}",
            config.recommendations_path.display()
        )
    })?;
    tracing::info!(
        "Enhanced summary with recommendations saved to {}",
        config.recommendations_path.display()
    );

    Ok(EnhanceOutcome {
        input_bytes: data.len(),
        sent_bytes: kept.len(),
        truncated,
        fallback_added,
    })
}
