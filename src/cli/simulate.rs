//! `docksim simulate` command implementation

use crate::analyzer::command;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the `simulate` command
#[derive(Args)]
pub struct SimulateArgs {
    /// Docker command line to simulate, quoted as a single argument
    pub command: String,

    /// Path to a Dockerfile consulted by build commands
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Execute the `simulate` command
pub async fn execute(args: SimulateArgs) -> anyhow::Result<()> {
    let dockerfile = match args.file {
        Some(ref path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    let report = command::simulate(&args.command, &dockerfile)?;
    println!("{}", report);

    Ok(())
}
