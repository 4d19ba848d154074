use logsift_core::{Config, TimeWindow};
use logsift_pipeline::{analyze, client_from_config, enhance};

/// Analyze the log window, then enhance the report it produced
pub fn run(config: &Config) -> anyhow::Result<()> {
    let client = client_from_config(config);
    let window = TimeWindow::last(config.window());

    let outcome = analyze(config, &client, &window)?;
    println!(
        "Analyzed {} lines in {} chunks: {} succeeded, {} failed",
        outcome.lines_kept, outcome.chunks, outcome.successes, outcome.errors
    );

    if !outcome.final_written {
        println!("No summary to enhance");
        return Ok(());
    }

    enhance(config, &config.output_path, &client)?;
    println!("Recommendations: {}", config.recommendations_path.display());
    Ok(())
}
