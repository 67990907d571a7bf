//! Configuration file loading for the console.
//!
//! Settings come from a TOML file (`board-console.toml` by default). Every
//! key is optional and command-line flags take precedence.

use board_core::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Console settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Rule set to play. Defaults to extended chess.
    #[serde(default)]
    pub variant: Variant,
    /// Draw pieces with Unicode glyphs instead of letters.
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Mark attacked pieces of the side to move with `!`.
    #[serde(default = "default_true")]
    pub show_threats: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            variant: Variant::default(),
            unicode: true,
            show_threats: true,
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("board-console.toml")
    }
}
