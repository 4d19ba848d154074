mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze => commands::analyze::run(&load_config(&cli)?),
        Commands::Enhance { ref input } => {
            commands::enhance::run(&load_config(&cli)?, input.as_deref())
        }
        Commands::Run => commands::run::run(&load_config(&cli)?),
        Commands::Version => commands::version::run(),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<logsift_core::Config> {
    commands::load_config(cli.config.as_deref(), &cli.overrides)
}
