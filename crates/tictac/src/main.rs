//! Tictac - console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Cli, Console, TictacConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TictacConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let console = Console::new(std::io::stdin().lock(), std::io::stdout()).shared();
    let scoreboard = tictac::run(cli.command, config, console)?;

    info!(played = scoreboard.played(), "Session finished");
    Ok(())
}
