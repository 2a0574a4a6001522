//! CLI command definitions and handlers

pub mod analyze;
pub mod init;
pub mod serve;
pub mod simulate;

use clap::{Parser, Subcommand};

/// Docksim - a Docker command simulator for teaching container basics
#[derive(Parser)]
#[command(name = "docksim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a docker command line and print the report
    Simulate(simulate::SimulateArgs),

    /// Analyze captured simulator output
    Analyze(analyze::AnalyzeArgs),

    /// Run the HTTP API server
    Serve(serve::ServeArgs),

    /// Scaffold a learning-project directory tree
    Init(init::InitArgs),
}
