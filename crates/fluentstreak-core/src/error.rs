//! Core error types for fluentstreak-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! failures are reported synchronously to the immediate caller and never
//! swallowed; the only place a storage failure is absorbed is the fallback
//! store decorator, which logs before switching to its secondary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fluentstreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Streak computation and validation errors
    #[error("Streak error: {0}")]
    Streak(#[from] StreakError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised by the streak engine.
#[derive(Error, Debug)]
pub enum StreakError {
    /// Activity kind string is not one of `speak`, `write`, `describe`.
    #[error("unrecognized activity kind '{0}' (expected speak, write or describe)")]
    InvalidKind(String),

    /// Argument outside the operation's contract, e.g. a zero-day
    /// calendar window or a malformed date at a parse boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// Schema migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Stored document body could not be decoded
    #[error("Malformed document for user '{user_id}': {source}")]
    MalformedDocument {
        user_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Document body could not be encoded
    #[error("Failed to encode document: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    /// Failed to access the data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be parsed
    #[error("Failed to parse config TOML: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize config TOML: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    /// Config file could not be written
    #[error("Failed to write config at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data directory could not be resolved
    #[error("Failed to access data directory: {0}")]
    DataDir(String),

    /// Key does not name a config field
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed for the given key
    #[error("cannot parse '{value}' for config key '{key}'")]
    InvalidValue { key: String, value: String },
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
