//! Configuration for the trivia front end.
//!
//! Read from `$TRIVIA_CONFIG` or `<config_dir>/trivia/config.toml`. A missing
//! file is not an error; every field has a default.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CURRENCY_SYMBOL, DEFAULT_FINAL_LABEL,
    DEFAULT_TICK_RATE_MS, GAMES_DIR_NAME, LOG_FILE_NAME,
};
use crate::error::{Result, TriviaError};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "TRIVIA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for game files. `~` is expanded.
    pub games_dir: Option<String>,
    /// Prefix for point values on the board and in the dialog.
    pub currency_symbol: String,
    /// Label on the final-question button.
    pub final_label: String,
    /// Input poll interval for the event loop.
    pub tick_rate_ms: u64,
    /// Log file path. `~` is expanded.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games_dir: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            final_label: DEFAULT_FINAL_LABEL.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        let path = resolve_config_path()?;
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| TriviaError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Games directory, defaulting to `<data_dir>/trivia/games`.
    pub fn games_dir(&self) -> Result<PathBuf> {
        match &self.games_dir {
            Some(dir) => Ok(expand(dir)),
            None => Ok(resolve_data_path()?.join(GAMES_DIR_NAME)),
        }
    }

    /// Log file, defaulting to `<data_dir>/trivia/trivia.log`.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(file) => Ok(expand(file)),
            None => Ok(resolve_data_path()?.join(LOG_FILE_NAME)),
        }
    }
}

/// Resolve the configuration file path
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand(&path));
    }

    let config_dir = dirs::config_dir().ok_or(TriviaError::MissingDirectory("config"))?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the data directory path
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(TriviaError::MissingDirectory("data"))?;
    Ok(data_dir.join(APP_DIR_NAME))
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
