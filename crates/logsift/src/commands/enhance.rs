use logsift_core::Config;
use logsift_pipeline::{client_from_config, enhance};
use std::path::Path;

pub fn run(config: &Config, input: Option<&Path>) -> anyhow::Result<()> {
    tracing::info!("Log summary enhancer starting...");
    let client = client_from_config(config);
    let input = input.unwrap_or(&config.output_path);

    let outcome = enhance(config, input, &client)?;

    if outcome.truncated {
        println!(
            "Sent the last {} of {} bytes from {}",
            outcome.sent_bytes,
            outcome.input_bytes,
            input.display()
        );
    }
    if outcome.fallback_added {
        println!("Model gave no recommendations; added a placeholder section");
    }
    println!("Recommendations: {}", config.recommendations_path.display());
    Ok(())
}
