//! Streak statistics derived from the activity log.
//!
//! All computations are pure functions of the log and a reference date,
//! re-derived from scratch on every call. The current-streak walk anchors
//! at exactly the reference date: a reference day with no activity yields
//! a current streak of zero even when the day before was active.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::log::ActivityLog;

/// Derived streak statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    /// Consecutive active days ending at the reference date.
    pub current_streak: u32,
    /// Longest run of consecutive active days anywhere in the log.
    pub longest_streak: u32,
    /// Distinct active days.
    pub total_days: u32,
}

/// A maximal run of consecutive active days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Days in the run, inclusive of both ends.
    pub length: u32,
}

impl ActivityLog {
    /// Consecutive active days counting backward from `reference`.
    ///
    /// The walk starts at `reference` itself, so a day without activity
    /// breaks the streak immediately.
    pub fn current_streak(&self, reference: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = reference;
        while self.is_active(day) {
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    /// Length of the longest run of consecutive active days in the log.
    pub fn longest_run(&self) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;
        for date in self.active_dates() {
            run = match prev {
                Some(p) if (date - p).num_days() == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(date);
        }
        longest
    }

    /// Number of distinct active days, counted fresh on every call.
    pub fn total_days(&self) -> u32 {
        self.active_dates().count() as u32
    }

    /// All three statistics for the given reference date.
    ///
    /// An empty log yields all zeros.
    pub fn stats(&self, reference: NaiveDate) -> StreakStats {
        StreakStats {
            current_streak: self.current_streak(reference),
            longest_streak: self.longest_run(),
            total_days: self.total_days(),
        }
    }

    /// All maximal runs of consecutive active days, ascending by start.
    pub fn streak_periods(&self) -> Vec<StreakPeriod> {
        let mut periods: Vec<StreakPeriod> = Vec::new();
        for date in self.active_dates() {
            match periods.last_mut() {
                Some(period) if (date - period.end).num_days() == 1 => {
                    period.end = date;
                    period.length += 1;
                }
                _ => periods.push(StreakPeriod {
                    start: date,
                    end: date,
                    length: 1,
                }),
            }
        }
        periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::log::ActivityKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn log_with_days(days: &[NaiveDate]) -> ActivityLog {
        let mut log = ActivityLog::new();
        for &d in days {
            log.record(d, ActivityKind::Speak);
        }
        log
    }

    #[test]
    fn test_empty_log_yields_zero_stats() {
        let log = ActivityLog::new();
        assert_eq!(log.stats(date(2024, 1, 5)), StreakStats::default());
    }

    #[test]
    fn test_run_with_gap() {
        // Active 01-01..01-03, skip 01-04, active 01-05.
        let log = log_with_days(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 5),
        ]);
        let stats = log.stats(date(2024, 1, 5));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.total_days, 4);
    }

    #[test]
    fn test_inactive_reference_day_breaks_streak() {
        // Yesterday active, today not: the walk starts at today, so the
        // current streak collapses to zero.
        let log = log_with_days(&[date(2024, 1, 3), date(2024, 1, 4)]);
        assert_eq!(log.current_streak(date(2024, 1, 5)), 0);
        assert_eq!(log.current_streak(date(2024, 1, 4)), 2);
    }

    #[test]
    fn test_streak_spanning_month_boundary() {
        let log = log_with_days(&[date(2024, 1, 30), date(2024, 1, 31), date(2024, 2, 1)]);
        let stats = log.stats(date(2024, 2, 1));
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_longest_run_includes_final_run() {
        // The last run is the longest and must not be dropped by the scan.
        let log = log_with_days(&[
            date(2024, 1, 1),
            date(2024, 1, 5),
            date(2024, 1, 6),
            date(2024, 1, 7),
        ]);
        assert_eq!(log.longest_run(), 3);
    }

    #[test]
    fn test_single_day_log() {
        let log = log_with_days(&[date(2024, 1, 5)]);
        let stats = log.stats(date(2024, 1, 5));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.total_days, 1);
    }

    #[test]
    fn test_streak_periods() {
        let log = log_with_days(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 5),
            date(2024, 1, 6),
            date(2024, 1, 7),
            date(2024, 2, 1),
        ]);
        let periods = log.streak_periods();
        assert_eq!(periods.len(), 3);
        assert_eq!(
            periods[0],
            StreakPeriod {
                start: date(2024, 1, 1),
                end: date(2024, 1, 2),
                length: 2
            }
        );
        assert_eq!(
            periods[1],
            StreakPeriod {
                start: date(2024, 1, 5),
                end: date(2024, 1, 7),
                length: 3
            }
        );
        assert_eq!(
            periods[2],
            StreakPeriod {
                start: date(2024, 2, 1),
                end: date(2024, 2, 1),
                length: 1
            }
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn base() -> NaiveDate {
            date(2024, 1, 1)
        }

        fn arb_log() -> impl Strategy<Value = ActivityLog> {
            // Sparse offsets within a two-month window, arbitrary kinds.
            proptest::collection::vec((0u64..60, 0usize..3), 0..40).prop_map(|entries| {
                let mut log = ActivityLog::new();
                for (offset, kind_idx) in entries {
                    let d = base() + chrono::Days::new(offset);
                    log.record(d, ActivityKind::ALL[kind_idx]);
                }
                log
            })
        }

        proptest! {
            #[test]
            fn longest_at_least_current(log in arb_log(), offset in 0u64..70) {
                let reference = base() + chrono::Days::new(offset);
                let stats = log.stats(reference);
                prop_assert!(stats.longest_streak >= stats.current_streak);
            }

            #[test]
            fn total_days_counts_active_dates(log in arb_log()) {
                let expected = log.iter().filter(|(_, rec)| rec.is_active()).count() as u32;
                prop_assert_eq!(log.total_days(), expected);
            }

            #[test]
            fn total_days_bounds_any_streak(log in arb_log()) {
                prop_assert!(log.total_days() >= log.longest_run());
                for period in log.streak_periods() {
                    prop_assert!(log.total_days() >= period.length);
                }
            }

            #[test]
            fn record_is_idempotent(log in arb_log(), offset in 0u64..60, kind_idx in 0usize..3) {
                let d = base() + chrono::Days::new(offset);
                let kind = ActivityKind::ALL[kind_idx];
                let mut once = log;
                once.record(d, kind);
                let mut twice = once.clone();
                twice.record(d, kind);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn periods_partition_active_days(log in arb_log()) {
                let total: u32 = log.streak_periods().iter().map(|p| p.length).sum();
                prop_assert_eq!(total, log.total_days());
            }
        }
    }
}
