//! # FluentStreak Core Library
//!
//! This library provides the backend core for the FluentStreak English
//! practice tracker. Users complete `speak`, `write`, and `describe`
//! exercises; the core turns the resulting per-day activity log into
//! streak statistics, calendar rollups, milestone achievements, and
//! per-section progress summaries.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure date-interval computation over a sparse
//!   per-day log, re-derived from scratch on every call
//! - **Progress**: best-score tracking with capped session history and an
//!   improvement trend over recent sessions
//! - **Storage**: SQLite-backed per-user document store, TOML
//!   configuration, and a fallback decorator over any two stores
//!
//! ## Key Components
//!
//! - [`ActivityLog`]: the per-day activity log and its derived views
//! - [`StreakData`]: the persisted per-user streak document
//! - [`ProgressRecord`]: the persisted per-user progress document
//! - [`UserStore`]: trait the persistence collaborator implements
//! - [`Database`]: SQLite implementation of [`UserStore`]

pub mod error;
pub mod progress;
pub mod storage;
pub mod streak;

pub use error::{ConfigError, CoreError, StorageError, StreakError};
pub use progress::{
    leaderboard, LeaderboardEntry, ProgressHistory, ProgressRecord, ProgressSummary,
    SessionRecord, Trend,
};
pub use storage::{Config, Database, FallbackStore, MemoryStore, UserStore};
pub use streak::{
    ActivityKind, ActivityLog, CalendarDay, CalendarDays, StreakData, StreakPeriod, StreakStats,
};
