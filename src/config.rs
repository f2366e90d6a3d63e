//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_timeline.toml";

/// User preferences for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Show the move list newest first.
    history_sort_reversed: bool,

    /// File the terminal UI writes its logs to.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_sort_reversed: false,
            log_file: PathBuf::from("tictactoe_timeline.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Resolves the config for a run.
    ///
    /// An explicit path must load. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if it exists and defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// [`GameConfig::load`] with the fallback file given explicitly.
    #[instrument]
    pub fn load_from(explicit: Option<&Path>, default: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if default.exists() => Self::from_file(default),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the move list order.
    pub fn with_history_sort_reversed(mut self, reversed: bool) -> Self {
        self.history_sort_reversed = reversed;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
