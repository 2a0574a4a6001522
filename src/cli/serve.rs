//! `docksim serve` command implementation

use crate::server;
use clap::Args;

/// Arguments for the `serve` command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    pub listen: String,
}

/// Execute the `serve` command
pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    server::run(&args.listen).await
}
