//! Per-day activity log.
//!
//! The log maps calendar dates to day records. A date that is absent from
//! the log means "no activity that day"; explicit zero-count records are
//! never stored, so absence and inactivity stay interchangeable.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StreakError;

/// One of the three practice modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Spoken practice
    Speak,
    /// Written practice
    Write,
    /// Image description practice
    Describe,
}

impl ActivityKind {
    /// All kinds, in wire order.
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Speak,
        ActivityKind::Write,
        ActivityKind::Describe,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Speak => "speak",
            ActivityKind::Write => "write",
            ActivityKind::Describe => "describe",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = StreakError;

    /// Parse a wire name. This is the `InvalidKind` boundary: once a value
    /// is an [`ActivityKind`], every operation taking it is total.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speak" => Ok(ActivityKind::Speak),
            "write" => Ok(ActivityKind::Write),
            "describe" => Ok(ActivityKind::Describe),
            other => Err(StreakError::InvalidKind(other.to_string())),
        }
    }
}

/// Completion flags for a single day, without the derived count.
///
/// Used by calendar entries; days missing from the log render as all-false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completions {
    pub speak: bool,
    pub write: bool,
    pub describe: bool,
}

/// Record of completions for one calendar day.
///
/// `count` always equals the number of true flags; it is recomputed on
/// every flag change and never set directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub speak: bool,
    #[serde(default)]
    pub write: bool,
    #[serde(default)]
    pub describe: bool,
    #[serde(default)]
    count: u32,
}

impl DayRecord {
    /// Whether the given kind was completed.
    pub fn has(&self, kind: ActivityKind) -> bool {
        match kind {
            ActivityKind::Speak => self.speak,
            ActivityKind::Write => self.write,
            ActivityKind::Describe => self.describe,
        }
    }

    /// Number of distinct kinds completed (0-3).
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether any kind was completed.
    pub fn is_active(&self) -> bool {
        self.count > 0
    }

    /// Completion flags without the count.
    pub fn completions(&self) -> Completions {
        Completions {
            speak: self.speak,
            write: self.write,
            describe: self.describe,
        }
    }

    /// Mark a kind completed. Returns false if it already was (idempotent).
    fn complete(&mut self, kind: ActivityKind) -> bool {
        if self.has(kind) {
            return false;
        }
        match kind {
            ActivityKind::Speak => self.speak = true,
            ActivityKind::Write => self.write = true,
            ActivityKind::Describe => self.describe = true,
        }
        self.count = [self.speak, self.write, self.describe]
            .iter()
            .filter(|f| **f)
            .count() as u32;
        true
    }
}

/// Sparse per-day activity log: date -> day record, iterated in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog(BTreeMap<NaiveDate, DayRecord>);

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `kind` completed on `date`, creating the day record if needed.
    ///
    /// Idempotent per (date, kind); no other day is touched. Returns true
    /// if the log changed.
    pub fn record(&mut self, date: NaiveDate, kind: ActivityKind) -> bool {
        self.0.entry(date).or_default().complete(kind)
    }

    /// The record for `date`, if any activity was logged.
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.0.get(&date)
    }

    /// Completion count for `date`; an absent day counts as zero.
    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.0.get(&date).map_or(0, DayRecord::count)
    }

    /// Whether `date` has at least one completion.
    pub fn is_active(&self, date: NaiveDate) -> bool {
        self.count_on(date) > 0
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.0.iter()
    }

    /// Dates with at least one completion, ascending.
    pub fn active_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0
            .iter()
            .filter(|(_, rec)| rec.is_active())
            .map(|(date, _)| *date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.as_str().parse::<ActivityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_rejects_unknown() {
        let err = "listen".parse::<ActivityKind>().unwrap_err();
        assert!(matches!(err, StreakError::InvalidKind(s) if s == "listen"));
    }

    #[test]
    fn test_record_creates_day_and_counts() {
        let mut log = ActivityLog::new();
        let d = date(2024, 1, 15);
        assert!(log.record(d, ActivityKind::Speak));
        assert_eq!(log.count_on(d), 1);
        assert!(log.record(d, ActivityKind::Write));
        assert_eq!(log.count_on(d), 2);
        assert!(log.day(d).unwrap().has(ActivityKind::Speak));
        assert!(!log.day(d).unwrap().has(ActivityKind::Describe));
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut log = ActivityLog::new();
        let d = date(2024, 1, 15);
        assert!(log.record(d, ActivityKind::Speak));
        let before = log.clone();
        assert!(!log.record(d, ActivityKind::Speak));
        assert_eq!(log, before);
        assert_eq!(log.count_on(d), 1);
    }

    #[test]
    fn test_record_touches_only_one_day() {
        let mut log = ActivityLog::new();
        log.record(date(2024, 1, 15), ActivityKind::Speak);
        log.record(date(2024, 1, 16), ActivityKind::Write);
        assert_eq!(log.count_on(date(2024, 1, 15)), 1);
        assert_eq!(log.count_on(date(2024, 1, 16)), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_absent_day_counts_zero() {
        let log = ActivityLog::new();
        assert_eq!(log.count_on(date(2024, 1, 15)), 0);
        assert!(!log.is_active(date(2024, 1, 15)));
        assert!(log.day(date(2024, 1, 15)).is_none());
    }

    #[test]
    fn test_day_record_json_schema() {
        let mut log = ActivityLog::new();
        let d = date(2024, 1, 15);
        log.record(d, ActivityKind::Speak);
        log.record(d, ActivityKind::Describe);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "2024-01-15": {
                    "speak": true,
                    "write": false,
                    "describe": true,
                    "count": 2
                }
            })
        );
        let back: ActivityLog = serde_json::from_value(json).unwrap();
        assert_eq!(back, log);
    }
}
