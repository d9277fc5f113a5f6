//! Console front-end for the minimax tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags (clap)
//! - **Config**: TOML configuration with CLI overrides
//! - **Console**: the interactive game loop, generic over its input and output

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConsoleConfig};

// Crate-level exports - Game loop
pub use console::Console;
