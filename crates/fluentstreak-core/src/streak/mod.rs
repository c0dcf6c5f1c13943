//! Streak engine: activity log, derived statistics, calendar rollups, and
//! milestone achievements.
//!
//! Every operation is a pure function of the log and a caller-supplied
//! reference date. Nothing here performs I/O or keeps hidden state; the
//! persisted document ([`StreakData`]) is the only thing that carries
//! values between calls, and it is owned by the caller.

pub mod achievements;
mod calendar;
mod data;
mod engine;
mod log;
mod periods;

pub use achievements::{evaluate, Achievement, AchievementStatus, Metric, CATALOG};
pub use calendar::{activity_level, CalendarDay, CalendarDays};
pub use data::StreakData;
pub use engine::{StreakPeriod, StreakStats};
pub use log::{ActivityKind, ActivityLog, Completions, DayRecord};
