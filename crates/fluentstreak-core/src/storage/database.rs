//! SQLite-backed per-user document store.
//!
//! One row per user per collection, with the document body stored as JSON
//! text, so each user's document is read and replaced as a whole.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{data_dir, UserStore};
use crate::error::StorageError;
use crate::progress::ProgressRecord;
use crate::streak::StreakData;

/// SQLite database holding streak and progress documents.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `data_dir()/fluentstreak.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("fluentstreak.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        // Concurrent CLI invocations share the file; wait out short locks.
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS streaks (
                    user_id    TEXT PRIMARY KEY,
                    data       TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS progress (
                    user_id    TEXT PRIMARY KEY,
                    data       TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    fn load_doc<T>(&self, table: &str, user_id: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        let sql = format!("SELECT data FROM {table} WHERE user_id = ?1");
        let body: Option<String> = self
            .conn
            .query_row(&sql, params![user_id], |row| row.get(0))
            .optional()?;
        match body {
            Some(body) => {
                debug!(table, user_id, "loaded document");
                serde_json::from_str(&body).map_err(|source| StorageError::MalformedDocument {
                    user_id: user_id.to_string(),
                    source,
                })
            }
            None => {
                debug!(table, user_id, "no document, starting empty");
                Ok(T::default())
            }
        }
    }

    fn save_doc<T: Serialize>(&self, table: &str, user_id: &str, doc: &T) -> Result<(), StorageError> {
        let body = serde_json::to_string(doc).map_err(StorageError::EncodeFailed)?;
        let sql = format!(
            "INSERT INTO {table} (user_id, data, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET
                 data = excluded.data,
                 updated_at = excluded.updated_at"
        );
        self.conn
            .execute(&sql, params![user_id, body, Utc::now().to_rfc3339()])?;
        debug!(table, user_id, "saved document");
        Ok(())
    }

    /// All saved progress documents, for the leaderboard.
    ///
    /// # Errors
    /// Returns an error if the query fails or a document is malformed.
    pub fn all_progress(&self) -> Result<Vec<(String, ProgressRecord)>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_id, data FROM progress ORDER BY user_id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (user_id, body) = row?;
            let record =
                serde_json::from_str(&body).map_err(|source| StorageError::MalformedDocument {
                    user_id: user_id.clone(),
                    source,
                })?;
            out.push((user_id, record));
        }
        Ok(out)
    }
}

impl UserStore for Database {
    fn load_streaks(&self, user_id: &str) -> Result<StreakData, StorageError> {
        self.load_doc("streaks", user_id)
    }

    fn save_streaks(&self, user_id: &str, data: &StreakData) -> Result<(), StorageError> {
        self.save_doc("streaks", user_id, data)
    }

    fn load_progress(&self, user_id: &str) -> Result<ProgressRecord, StorageError> {
        self.load_doc("progress", user_id)
    }

    fn save_progress(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StorageError> {
        self.save_doc("progress", user_id, record)
    }
}
