//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a game of strictly_wordle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct WordleConfig {
    /// Word file used as the dictionary. The embedded list is used if unset.
    #[serde(default)]
    dictionary: Option<PathBuf>,

    /// File that receives tracing output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Hide the secret word with `*` while Player 1 types it.
    #[serde(default = "default_mask_secret")]
    mask_secret: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_wordle.log")
}

fn default_mask_secret() -> bool {
    true
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            log_file: default_log_file(),
            mask_secret: default_mask_secret(),
        }
    }
}

impl WordleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    ///
    /// Runs before logging is set up, so the caller reports the source.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::from_file(path)?, ConfigSource::File))
        } else {
            info!("Config file not found, using defaults");
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Replaces the dictionary path when an override is given.
    #[instrument(skip(self))]
    pub fn with_dictionary(mut self, dictionary: Option<PathBuf>) -> Self {
        if let Some(path) = dictionary {
            info!(path = %path.display(), "Overriding dictionary");
            self.dictionary = Some(path);
        }
        self
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Read from the config file.
    #[display("config file")]
    File,
    /// The file was missing.
    #[display("defaults (config file not found)")]
    Defaults,
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
