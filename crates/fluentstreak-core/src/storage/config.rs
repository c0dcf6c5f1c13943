//! TOML-based application configuration.
//!
//! Stores the default user id and view defaults at
//! `data_dir()/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Application configuration.
///
/// Serialized to/from TOML at `data_dir()/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// User id used when a command does not name one.
    #[serde(default = "default_user")]
    pub default_user: String,
    /// Default calendar window in days.
    #[serde(default = "default_calendar_days")]
    pub calendar_days: u32,
    /// Rows shown by the leaderboard.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: u32,
}

fn default_user() -> String {
    "default".to_string()
}
fn default_calendar_days() -> u32 {
    365
}
fn default_leaderboard_size() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_user: default_user(),
            calendar_days: default_calendar_days(),
            leaderboard_size: default_leaderboard_size(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::DataDir(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first use.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|source| ConfigError::WriteFailed { path, source })
    }

    /// Get a config value as a string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_user" => Some(self.default_user.clone()),
            "calendar_days" => Some(self.calendar_days.to_string()),
            "leaderboard_size" => Some(self.leaderboard_size.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist it.
    ///
    /// # Errors
    /// Returns an error for an unknown key, an unparseable value, or a
    /// failed write.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_user" => self.default_user = value.to_string(),
            "calendar_days" => self.calendar_days = parse_positive(key, value)?,
            "leaderboard_size" => self.leaderboard_size = parse_positive(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
