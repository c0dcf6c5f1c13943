//! Trailing-window period rollups (weekly and monthly views).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::log::ActivityLog;
use crate::error::StreakError;

/// Aggregate activity over a trailing window of days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Days in the window with at least one completion.
    pub active_days: u32,
    /// Sum of completion counts across the window.
    pub total_completions: u32,
    /// `total_completions / active_days`, or 0 when no day was active.
    pub average_per_active_day: f64,
}

impl ActivityLog {
    fn trailing_window(&self, window_days: u32, reference: NaiveDate) -> PeriodStats {
        let mut active_days = 0;
        let mut total_completions = 0;
        let mut day = Some(reference);
        for _ in 0..window_days {
            let Some(d) = day else { break };
            let count = self.count_on(d);
            if count > 0 {
                active_days += 1;
                total_completions += count;
            }
            day = d.pred_opt();
        }
        let average_per_active_day = if active_days > 0 {
            f64::from(total_completions) / f64::from(active_days)
        } else {
            0.0
        };
        PeriodStats {
            active_days,
            total_completions,
            average_per_active_day,
        }
    }

    /// Rollup over the trailing `window_days` days ending at `reference`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a zero-day window; silently clamping
    /// would mask a caller bug.
    pub fn period_stats(
        &self,
        window_days: u32,
        reference: NaiveDate,
    ) -> Result<PeriodStats, StreakError> {
        if window_days == 0 {
            return Err(StreakError::InvalidArgument(
                "period window must be at least one day".to_string(),
            ));
        }
        Ok(self.trailing_window(window_days, reference))
    }

    /// Rollup over the trailing 7 days ending at `reference`.
    pub fn weekly_stats(&self, reference: NaiveDate) -> PeriodStats {
        self.trailing_window(7, reference)
    }

    /// Rollup over the trailing 30 days ending at `reference`.
    pub fn monthly_stats(&self, reference: NaiveDate) -> PeriodStats {
        self.trailing_window(30, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::log::ActivityKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_counts_only_window() {
        let mut log = ActivityLog::new();
        // Three days inside the window, two completions each.
        for d in [date(2024, 1, 10), date(2024, 1, 8), date(2024, 1, 4)] {
            log.record(d, ActivityKind::Speak);
            log.record(d, ActivityKind::Write);
        }
        // Outside the window, must be ignored.
        log.record(date(2024, 1, 3), ActivityKind::Describe);

        let stats = log.weekly_stats(date(2024, 1, 10));
        assert_eq!(stats.active_days, 3);
        assert_eq!(stats.total_completions, 6);
        assert!((stats.average_per_active_day - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekly_window_boundary() {
        let mut log = ActivityLog::new();
        // 7-day window ending 01-10 covers 01-04..01-10.
        log.record(date(2024, 1, 4), ActivityKind::Speak);
        log.record(date(2024, 1, 3), ActivityKind::Speak);
        let stats = log.weekly_stats(date(2024, 1, 10));
        assert_eq!(stats.active_days, 1);
        assert_eq!(stats.total_completions, 1);
    }

    #[test]
    fn test_monthly_window() {
        let mut log = ActivityLog::new();
        log.record(date(2024, 1, 2), ActivityKind::Speak);
        log.record(date(2024, 1, 31), ActivityKind::Write);
        log.record(date(2023, 12, 31), ActivityKind::Describe);
        let stats = log.monthly_stats(date(2024, 1, 31));
        assert_eq!(stats.active_days, 2);
        assert_eq!(stats.total_completions, 2);
    }

    #[test]
    fn test_empty_window_average_is_zero() {
        let log = ActivityLog::new();
        let stats = log.monthly_stats(date(2024, 1, 31));
        assert_eq!(stats, PeriodStats::default());
    }

    #[test]
    fn test_zero_window_rejected() {
        let log = ActivityLog::new();
        let err = log.period_stats(0, date(2024, 1, 31)).unwrap_err();
        assert!(matches!(err, StreakError::InvalidArgument(_)));
    }

    #[test]
    fn test_custom_window() {
        let mut log = ActivityLog::new();
        log.record(date(2024, 1, 9), ActivityKind::Speak);
        let stats = log.period_stats(2, date(2024, 1, 10)).unwrap();
        assert_eq!(stats.active_days, 1);
    }
}
