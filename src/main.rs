//! Docksim CLI entry point
//!
//! A Docker command simulator and teaching aid for learning container basics.

use clap::Parser;
use docksim::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => docksim::cli::simulate::execute(args).await,
        Commands::Analyze(args) => docksim::cli::analyze::execute(args).await,
        Commands::Serve(args) => docksim::cli::serve::execute(args).await,
        Commands::Init(args) => docksim::cli::init::execute(args).await,
    }
}
