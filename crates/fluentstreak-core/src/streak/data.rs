//! Persisted per-user streak document.
//!
//! Mirrors the document-store schema: stored statistics alongside the raw
//! activity log. The stored `longest_streak` is monotonically non-decreasing
//! across refreshes, so it never regresses even if historical log entries
//! are pruned later.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::StreakStats;
use super::log::{ActivityKind, ActivityLog};

/// Per-user streak document as read from and written to the user store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakData {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
    #[serde(default)]
    pub activities: ActivityLog,
}

impl StreakData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed activity for `today` and refresh the stored
    /// statistics.
    ///
    /// Idempotent per (day, kind); `last_activity_date` advances to `today`
    /// either way.
    pub fn record_activity(&mut self, kind: ActivityKind, today: NaiveDate) {
        self.activities.record(today, kind);
        self.refresh(today);
        self.last_activity_date = Some(today);
    }

    /// Recompute stored statistics from the log, anchored at `reference`.
    ///
    /// `longest_streak` only ever grows: the stored value wins over a
    /// smaller rescan result.
    pub fn refresh(&mut self, reference: NaiveDate) {
        let scanned = self.activities.stats(reference);
        self.current_streak = scanned.current_streak;
        self.longest_streak = self.longest_streak.max(scanned.longest_streak);
        self.total_days = scanned.total_days;
    }

    /// The stored statistics.
    pub fn stats(&self) -> StreakStats {
        StreakStats {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            total_days: self.total_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_activity_updates_stats() {
        let mut data = StreakData::new();
        data.record_activity(ActivityKind::Speak, date(2024, 1, 4));
        data.record_activity(ActivityKind::Write, date(2024, 1, 5));
        assert_eq!(data.current_streak, 2);
        assert_eq!(data.longest_streak, 2);
        assert_eq!(data.total_days, 2);
        assert_eq!(data.last_activity_date, Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_same_day_second_kind_keeps_streak() {
        let mut data = StreakData::new();
        data.record_activity(ActivityKind::Speak, date(2024, 1, 5));
        data.record_activity(ActivityKind::Write, date(2024, 1, 5));
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.total_days, 1);
        assert_eq!(data.activities.count_on(date(2024, 1, 5)), 2);
    }

    #[test]
    fn test_longest_streak_never_regresses() {
        let mut data = StreakData::new();
        for day in 1..=3 {
            data.record_activity(ActivityKind::Speak, date(2024, 1, day));
        }
        assert_eq!(data.longest_streak, 3);

        // A refresh after the streak breaks keeps the historical maximum.
        data.record_activity(ActivityKind::Speak, date(2024, 1, 10));
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.longest_streak, 3);

        // Even against an emptied log the stored value must not shrink.
        data.activities = ActivityLog::new();
        data.refresh(date(2024, 1, 10));
        assert_eq!(data.longest_streak, 3);
        assert_eq!(data.current_streak, 0);
        assert_eq!(data.total_days, 0);
    }

    #[test]
    fn test_document_json_schema() {
        let mut data = StreakData::new();
        data.record_activity(ActivityKind::Speak, date(2024, 1, 15));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["current_streak"], 1);
        assert_eq!(json["longest_streak"], 1);
        assert_eq!(json["total_days"], 1);
        assert_eq!(json["last_activity_date"], "2024-01-15");
        assert_eq!(json["activities"]["2024-01-15"]["count"], 1);

        let back: StreakData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_empty_document_deserializes() {
        let data: StreakData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, StreakData::default());
    }
}
