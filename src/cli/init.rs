//! `docksim init` command implementation

use crate::scaffold;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory to scaffold the learning project into
    #[arg(default_value = "docker-learning-app")]
    pub dir: PathBuf,
}

/// Execute the `init` command
pub async fn execute(args: InitArgs) -> anyhow::Result<()> {
    scaffold::create(&args.dir)?;
    println!("Project structure created successfully!");

    Ok(())
}
