//! Shared helpers for CLI commands.

use chrono::{Local, NaiveDate};
use fluentstreak_core::{Config, Database, FallbackStore, MemoryStore, StreakError};

/// Store used by the commands: SQLite primary with an in-process fallback,
/// so a broken database still yields empty documents instead of aborting.
pub fn open_store() -> Result<FallbackStore<Database, MemoryStore>, Box<dyn std::error::Error>> {
    Ok(FallbackStore::new(Database::open()?, MemoryStore::new()))
}

/// The user named on the command line, or the configured default.
pub fn resolve_user(user: Option<String>, config: &Config) -> String {
    user.unwrap_or_else(|| config.default_user.clone())
}

/// Parse a `--date` value, defaulting to the local calendar day.
pub fn resolve_date(date: Option<String>) -> Result<NaiveDate, StreakError> {
    match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            StreakError::InvalidArgument(format!("malformed date '{s}', expected YYYY-MM-DD"))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
