//! Calendar rollup for activity visualization.
//!
//! Produces one entry per day for a trailing window, oldest first, with a
//! 0-4 activity level for color-coding. The sequence is lazy and carries no
//! cursor state between calls; every call rebuilds it from the log.

use std::iter::FusedIterator;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::log::{ActivityLog, Completions};
use crate::error::StreakError;

/// Color-coding bucket for a day's completion count.
///
/// Currently the count caps at 3, so the level equals the count; the cap at
/// 4 keeps the visualization contract stable if more kinds are added.
pub fn activity_level(count: u32) -> u32 {
    count.min(4)
}

/// One day of the activity calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub count: u32,
    /// 0-4 bucket, see [`activity_level`].
    pub level: u32,
    pub activities: Completions,
}

/// Lazy iterator over a trailing calendar window, oldest day first.
///
/// Cloning restarts the walk from the beginning of the window.
#[derive(Debug, Clone)]
pub struct CalendarDays<'a> {
    log: &'a ActivityLog,
    next: NaiveDate,
    remaining: u32,
}

impl ActivityLog {
    /// Calendar entries for the trailing `window_days` days ending at
    /// `reference` (inclusive), oldest first.
    ///
    /// Days missing from the log yield zero counts and all-false flags.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a zero-day window or one that reaches
    /// past the start of the calendar.
    pub fn calendar(
        &self,
        window_days: u32,
        reference: NaiveDate,
    ) -> Result<CalendarDays<'_>, StreakError> {
        if window_days == 0 {
            return Err(StreakError::InvalidArgument(
                "calendar window must be at least one day".to_string(),
            ));
        }
        let start = reference
            .checked_sub_days(Days::new(u64::from(window_days) - 1))
            .ok_or_else(|| {
                StreakError::InvalidArgument(format!(
                    "calendar window of {window_days} days reaches before the start of the calendar"
                ))
            })?;
        Ok(CalendarDays {
            log: self,
            next: start,
            remaining: window_days,
        })
    }
}

impl Iterator for CalendarDays<'_> {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<CalendarDay> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.next;
        let (count, activities) = match self.log.day(date) {
            Some(rec) => (rec.count(), rec.completions()),
            None => (0, Completions::default()),
        };
        self.remaining -= 1;
        match date.succ_opt() {
            Some(next) => self.next = next,
            None => self.remaining = 0,
        }
        Some(CalendarDay {
            date,
            count,
            level: activity_level(count),
            activities,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CalendarDays<'_> {}
impl FusedIterator for CalendarDays<'_> {}
