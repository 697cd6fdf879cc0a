//! Application configuration, loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use unbeaten_core::Player;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "unbeaten.toml";

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Glyph drawn for the human's mark.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Glyph drawn for the opponent's mark.
    #[serde(default = "default_opponent_symbol")]
    opponent_symbol: char,

    /// Show the engine's suggested move for the human in the TUI.
    #[serde(default)]
    show_hints: bool,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_symbol() -> char {
    'O'
}

fn default_opponent_symbol() -> char {
    'X'
}

fn default_log_file() -> PathBuf {
    PathBuf::from("unbeaten.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human_symbol: default_human_symbol(),
            opponent_symbol: default_opponent_symbol(),
            show_hints: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the symbols are usable and the filter is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for symbol in [self.human_symbol, self.opponent_symbol] {
            if symbol.is_whitespace() || symbol == '.' {
                return Err(ConfigError::new(format!(
                    "Symbol {:?} cannot be used for a mark",
                    symbol
                )));
            }
        }
        if self.human_symbol == self.opponent_symbol {
            return Err(ConfigError::new(
                "human_symbol and opponent_symbol must differ".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::new("log_filter must not be empty".to_string()));
        }
        Ok(())
    }

    /// The glyph configured for `player`.
    pub fn symbol_for(&self, player: Player) -> char {
        if player == unbeaten_core::HUMAN {
            self.human_symbol
        } else {
            self.opponent_symbol
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
