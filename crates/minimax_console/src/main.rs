//! Minimax Console - play tic-tac-toe in a terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use minimax_console::{Cli, Console};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout belongs to the game; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.resolve_config()?;
    info!(?config, "Starting console session");

    let mut console = Console::new(config, io::stdin().lock(), io::stdout().lock());
    console.run()
}
