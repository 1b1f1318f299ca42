use anyhow::Result;
use arcade_trio::cli::{run_cli, Cli};
use arcade_trio::core::logging;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Config file plus flag overrides
    let config = cli.resolve_config()?;

    // 2. Logs go to a file, never the game's terminal
    if logging::init(&config)? {
        tracing::info!(seed = ?config.seed, "arcade-trio starting");
    }

    // 3. Launch the chosen game or the menu
    run_cli(cli, config).await
}
