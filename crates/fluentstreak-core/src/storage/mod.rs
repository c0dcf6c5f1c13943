//! Persistence for per-user streak and progress documents.
//!
//! The core computes over in-memory documents; this module supplies the
//! injected persistence collaborator: a SQLite-backed document store, an
//! in-memory store, and a fallback decorator that switches to a secondary
//! store when the primary fails.

mod config;
mod database;
mod fallback;
mod store;

pub use config::Config;
pub use database::Database;
pub use fallback::FallbackStore;
pub use store::{MemoryStore, UserStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/fluentstreak[-dev]/` based on FLUENTSTREAK_ENV.
///
/// Set FLUENTSTREAK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FLUENTSTREAK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("fluentstreak-dev")
    } else {
        base_dir.join("fluentstreak")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
