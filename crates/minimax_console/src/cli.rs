//! Command-line interface for minimax_console.

use crate::config::{ConfigError, ConsoleConfig};
use clap::Parser;
use minimax_tictactoe::{Algorithm, Player};
use std::path::PathBuf;
use tracing::instrument;

/// Play tic-tac-toe against a game-tree search engine
#[derive(Parser, Debug)]
#[command(name = "minimax_console")]
#[command(about = "Play tic-tac-toe against a game-tree search engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Engine algorithm: random, minimax, alpha-beta-pruning or alpha-beta-advanced
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Maximum search depth in plies (searches to the end of the game if omitted)
    #[arg(long)]
    pub max_ply: Option<u32>,

    /// Side the human plays (x or o)
    #[arg(long)]
    pub human: Option<Player>,

    /// Let the engine play both sides
    #[arg(long)]
    pub spectate: bool,
}

impl Cli {
    /// Builds the effective configuration: file (or defaults), then flags.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<ConsoleConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::from_file(path)?,
            None => ConsoleConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config = config.with_algorithm(algorithm);
        }
        if self.max_ply.is_some() {
            config = config.with_max_ply(self.max_ply);
        }
        if let Some(human) = self.human {
            config = config.with_human(human);
        }
        if self.spectate {
            config = config.with_spectate(true);
        }

        config.validate()?;
        Ok(config)
    }
}
