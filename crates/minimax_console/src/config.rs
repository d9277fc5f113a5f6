//! Console configuration, loaded from TOML and overridable from the CLI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::{Algorithm, MaxPly, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays which side and how the engine searches.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Side the human plays.
    #[serde(default = "default_human")]
    human: Player,

    /// Let the engine play both sides.
    #[serde(default)]
    spectate: bool,

    /// Algorithm the engine plays with.
    #[serde(default)]
    algorithm: Algorithm,

    /// Search depth limit in plies; unbounded when absent.
    #[serde(default)]
    max_ply: Option<u32>,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(algorithm = %config.algorithm, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the settings can be handed to the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        MaxPly::try_from(self.max_ply).map_err(|e| ConfigError::new(e.to_string()))?;
        Ok(())
    }

    /// Sets the human's side.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Sets whether the engine plays both sides.
    pub fn with_spectate(mut self, spectate: bool) -> Self {
        self.spectate = spectate;
        self
    }

    /// Sets the engine's algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the search depth limit.
    pub fn with_max_ply(mut self, max_ply: Option<u32>) -> Self {
        self.max_ply = max_ply;
        self
    }

    /// Checks whether `player` is controlled by the human.
    pub fn is_human(&self, player: Player) -> bool {
        !self.spectate && self.human == player
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            spectate: false,
            algorithm: Algorithm::default(),
            max_ply: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(*config.human(), Player::X);
        assert!(!config.spectate());
        assert_eq!(*config.algorithm(), Algorithm::AlphaBetaAdvanced);
        assert_eq!(*config.max_ply(), None);
        assert!(config.is_human(Player::X));
        assert!(!config.is_human(Player::O));
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
human = "O"
algorithm = "minimax"
max_ply = 4
"#,
        );
        let config = ConsoleConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human(), Player::O);
        assert_eq!(*config.algorithm(), Algorithm::Minimax);
        assert_eq!(*config.max_ply(), Some(4));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = ConsoleConfig::from_file(file.path()).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_spectate_gives_engine_both_sides() {
        let file = write_config("spectate = true\nalgorithm = \"alpha-beta-pruning\"\n");
        let config = ConsoleConfig::from_file(file.path()).unwrap();
        assert!(!config.is_human(Player::X));
        assert!(!config.is_human(Player::O));
        assert_eq!(*config.algorithm(), Algorithm::AlphaBetaPruning);
    }

    #[test]
    fn test_zero_ply_rejected() {
        let file = write_config("max_ply = 0\n");
        let err = ConsoleConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Maximum depth"), "{err}");
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let file = write_config("algorithm = \"negamax\"\n");
        let err = ConsoleConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"), "{err}");
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = ConsoleConfig::from_file("/nonexistent/minimax_console.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"), "{err}");
    }
}
