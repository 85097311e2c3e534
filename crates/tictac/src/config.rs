//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::Difficulty;
use tracing::{debug, info, instrument};

/// Defaults for names, difficulty and seed; CLI flags take precedence.
///
/// Unset names and difficulty are asked for at the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TictacConfig {
    /// Name of the player using X.
    #[serde(default)]
    x_name: Option<String>,

    /// Name of the player using O (human vs human only).
    #[serde(default)]
    o_name: Option<String>,

    /// Computer difficulty; asked interactively when absent.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

impl TictacConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x_name = ?config.x_name, difficulty = ?config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies CLI overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        x_name: Option<String>,
        o_name: Option<String>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Self {
        self.x_name = x_name.or(self.x_name);
        self.o_name = o_name.or(self.o_name);
        self.difficulty = difficulty.or(self.difficulty);
        self.seed = seed.or(self.seed);
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
