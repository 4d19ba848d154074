use logsift_core::{Config, TimeWindow};
use logsift_pipeline::{analyze, client_from_config};

pub fn run(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Log analyzer starting...");
    let client = client_from_config(config);
    let window = TimeWindow::last(config.window());

    let outcome = analyze(config, &client, &window)?;

    println!(
        "Analyzed {} lines in {} chunks: {} succeeded, {} failed",
        outcome.lines_kept, outcome.chunks, outcome.successes, outcome.errors
    );
    if outcome.chunks > 0 {
        println!("Report: {}", config.output_path.display());
    }
    Ok(())
}
