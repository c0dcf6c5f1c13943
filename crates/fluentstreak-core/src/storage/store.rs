//! The user store trait and an in-memory implementation.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::StorageError;
use crate::progress::ProgressRecord;
use crate::streak::StreakData;

/// Per-user document store for streak and progress data.
///
/// Loading a user that was never saved yields the empty document; users
/// are initialized on first access. Write serialization per user is the
/// caller's responsibility.
pub trait UserStore {
    /// Load a user's streak document, empty if never saved.
    fn load_streaks(&self, user_id: &str) -> Result<StreakData, StorageError>;

    /// Save a user's streak document.
    fn save_streaks(&self, user_id: &str, data: &StreakData) -> Result<(), StorageError>;

    /// Load a user's progress document, empty if never saved.
    fn load_progress(&self, user_id: &str) -> Result<ProgressRecord, StorageError>;

    /// Save a user's progress document.
    fn save_progress(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// In-memory user store, used as a fallback secondary and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    streaks: Mutex<HashMap<String, StreakData>>,
    progress: Mutex<HashMap<String, ProgressRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn load_streaks(&self, user_id: &str) -> Result<StreakData, StorageError> {
        let map = self
            .streaks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(user_id).cloned().unwrap_or_default())
    }

    fn save_streaks(&self, user_id: &str, data: &StreakData) -> Result<(), StorageError> {
        let mut map = self
            .streaks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        map.insert(user_id.to_string(), data.clone());
        Ok(())
    }

    fn load_progress(&self, user_id: &str) -> Result<ProgressRecord, StorageError> {
        let map = self
            .progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(user_id).cloned().unwrap_or_default())
    }

    fn save_progress(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut map = self
            .progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        map.insert(user_id.to_string(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::ActivityKind;
    use chrono::NaiveDate;

    #[test]
    fn test_unknown_user_yields_empty_documents() {
        let store = MemoryStore::new();
        assert_eq!(store.load_streaks("nobody").unwrap(), StreakData::default());
        assert_eq!(
            store.load_progress("nobody").unwrap(),
            ProgressRecord::default()
        );
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let mut data = StreakData::new();
        data.record_activity(
            ActivityKind::Speak,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        store.save_streaks("u1", &data).unwrap();
        assert_eq!(store.load_streaks("u1").unwrap(), data);
        // Other users are unaffected.
        assert_eq!(store.load_streaks("u2").unwrap(), StreakData::default());
    }
}
