//! `docksim analyze` command implementation

use crate::analyzer::output;
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the `analyze` command
#[derive(Args)]
pub struct AnalyzeArgs {
    /// File holding captured output; stdin is read when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Execute the `analyze` command
pub async fn execute(args: AnalyzeArgs) -> anyhow::Result<()> {
    let text = match args.file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    println!("{}", output::analyze(&text));

    Ok(())
}
