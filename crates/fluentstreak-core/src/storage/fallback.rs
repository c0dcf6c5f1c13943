//! Fallback decorator over two user stores.
//!
//! Reads try the primary store and switch to the secondary when it fails;
//! writes go to the primary, and to the secondary only if the primary
//! write fails. Every switch is logged, never silent.

use tracing::warn;

use super::UserStore;
use crate::error::StorageError;
use crate::progress::ProgressRecord;
use crate::streak::StreakData;

/// A primary store with a secondary taking over on failure.
pub struct FallbackStore<P, S> {
    primary: P,
    secondary: S,
}

impl<P: UserStore, S: UserStore> FallbackStore<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: UserStore, S: UserStore> UserStore for FallbackStore<P, S> {
    fn load_streaks(&self, user_id: &str) -> Result<StreakData, StorageError> {
        match self.primary.load_streaks(user_id) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!(user_id, error = %e, "primary store failed loading streaks, using fallback");
                self.secondary.load_streaks(user_id)
            }
        }
    }

    fn save_streaks(&self, user_id: &str, data: &StreakData) -> Result<(), StorageError> {
        match self.primary.save_streaks(user_id, data) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(user_id, error = %e, "primary store failed saving streaks, using fallback");
                self.secondary.save_streaks(user_id, data)
            }
        }
    }

    fn load_progress(&self, user_id: &str) -> Result<ProgressRecord, StorageError> {
        match self.primary.load_progress(user_id) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(user_id, error = %e, "primary store failed loading progress, using fallback");
                self.secondary.load_progress(user_id)
            }
        }
    }

    fn save_progress(&self, user_id: &str, record: &ProgressRecord) -> Result<(), StorageError> {
        match self.primary.save_progress(user_id, record) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(user_id, error = %e, "primary store failed saving progress, using fallback");
                self.secondary.save_progress(user_id, record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::streak::ActivityKind;
    use chrono::NaiveDate;

    /// Store that fails every operation.
    struct FailingStore;

    impl UserStore for FailingStore {
        fn load_streaks(&self, _: &str) -> Result<StreakData, StorageError> {
            Err(StorageError::DataDir("unavailable".to_string()))
        }
        fn save_streaks(&self, _: &str, _: &StreakData) -> Result<(), StorageError> {
            Err(StorageError::DataDir("unavailable".to_string()))
        }
        fn load_progress(&self, _: &str) -> Result<ProgressRecord, StorageError> {
            Err(StorageError::DataDir("unavailable".to_string()))
        }
        fn save_progress(&self, _: &str, _: &ProgressRecord) -> Result<(), StorageError> {
            Err(StorageError::DataDir("unavailable".to_string()))
        }
    }

    fn sample_data() -> StreakData {
        let mut data = StreakData::new();
        data.record_activity(
            ActivityKind::Speak,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        data
    }

    #[test]
    fn test_healthy_primary_is_used() {
        let primary = MemoryStore::new();
        primary.save_streaks("u1", &sample_data()).unwrap();
        let store = FallbackStore::new(primary, MemoryStore::new());
        assert_eq!(store.load_streaks("u1").unwrap(), sample_data());
    }

    #[test]
    fn test_failed_load_falls_back() {
        let secondary = MemoryStore::new();
        secondary.save_streaks("u1", &sample_data()).unwrap();
        let store = FallbackStore::new(FailingStore, secondary);
        assert_eq!(store.load_streaks("u1").unwrap(), sample_data());
    }

    #[test]
    fn test_failed_save_writes_to_secondary() {
        let store = FallbackStore::new(FailingStore, MemoryStore::new());
        store.save_streaks("u1", &sample_data()).unwrap();
        assert_eq!(store.secondary.load_streaks("u1").unwrap(), sample_data());
    }

    #[test]
    fn test_healthy_save_skips_secondary() {
        let store = FallbackStore::new(MemoryStore::new(), MemoryStore::new());
        store.save_streaks("u1", &sample_data()).unwrap();
        assert_eq!(store.primary.load_streaks("u1").unwrap(), sample_data());
        assert_eq!(
            store.secondary.load_streaks("u1").unwrap(),
            StreakData::default()
        );
    }

    #[test]
    fn test_progress_fallback() {
        let store = FallbackStore::new(FailingStore, MemoryStore::new());
        let record = ProgressRecord::default();
        store.save_progress("u1", &record).unwrap();
        assert_eq!(store.load_progress("u1").unwrap(), record);
    }
}
