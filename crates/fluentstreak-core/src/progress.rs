//! Per-section practice scores and session history.
//!
//! Tracks the best score per practice section, a capped session history,
//! an improvement trend over recent sessions, and an anonymized
//! leaderboard across users.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::streak::ActivityKind;

/// Sessions kept per user; older ones are dropped.
pub const MAX_SESSIONS: usize = 50;
/// Sessions considered by the improvement trend.
const TREND_WINDOW: usize = 5;
/// Sessions returned by the history view.
const HISTORY_LIMIT: usize = 20;
/// Entries returned by the leaderboard.
const LEADERBOARD_LIMIT: usize = 10;
/// Window, in days, for the recent-activity analytic.
const RECENT_DAYS: i64 = 7;

/// One completed practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub section: ActivityKind,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

/// Direction of recent score movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
    InsufficientData,
}

/// Persisted per-user progress document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Best score per section.
    #[serde(default)]
    pub speak: u32,
    #[serde(default)]
    pub write: u32,
    #[serde(default)]
    pub describe: u32,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Summary of a user's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub speak: u32,
    pub write: u32,
    pub describe: u32,
    pub total_sessions: u32,
    pub average_score: f64,
    pub trend: Trend,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Aggregates computed for the history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressAnalytics {
    pub total_sessions: u32,
    pub sessions_by_section: BTreeMap<ActivityKind, u32>,
    pub average_scores_by_section: BTreeMap<ActivityKind, f64>,
    /// Sessions within the trailing week.
    pub recent_activity: u32,
}

/// Recent sessions plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressHistory {
    pub sessions: Vec<SessionRecord>,
    pub analytics: ProgressAnalytics,
}

/// One anonymized leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_tag: String,
    pub total_score: u32,
    pub average_score: f64,
    pub total_sessions: u32,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best stored score for a section.
    pub fn best_score(&self, section: ActivityKind) -> u32 {
        match section {
            ActivityKind::Speak => self.speak,
            ActivityKind::Write => self.write,
            ActivityKind::Describe => self.describe,
        }
    }

    /// Sum of best scores across sections.
    pub fn total_score(&self) -> u32 {
        self.speak + self.write + self.describe
    }

    /// Mean score over all kept sessions, 0 when there are none.
    pub fn average_score(&self) -> f64 {
        if self.sessions.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.sessions.iter().map(|s| s.score).sum();
        f64::from(sum) / self.sessions.len() as f64
    }

    /// Record a finished session: best-score merge plus history append.
    ///
    /// Section scores never decrease; history keeps the most recent
    /// [`MAX_SESSIONS`] entries.
    pub fn record_session(&mut self, section: ActivityKind, score: u32, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        let best = match section {
            ActivityKind::Speak => &mut self.speak,
            ActivityKind::Write => &mut self.write,
            ActivityKind::Describe => &mut self.describe,
        };
        *best = (*best).max(score);
        self.sessions.push(SessionRecord {
            section,
            score,
            timestamp: now,
        });
        if self.sessions.len() > MAX_SESSIONS {
            let excess = self.sessions.len() - MAX_SESSIONS;
            self.sessions.drain(..excess);
        }
    }

    /// Score movement over the last [`TREND_WINDOW`] sessions: the recent
    /// scores are split in half and the half-averages compared, with a 0.5
    /// dead band around "stable".
    pub fn trend(&self) -> Trend {
        let start = self.sessions.len().saturating_sub(TREND_WINDOW);
        let scores: Vec<f64> = self.sessions[start..]
            .iter()
            .map(|s| f64::from(s.score))
            .collect();
        if scores.len() < 2 {
            return Trend::InsufficientData;
        }
        let mid = scores.len() / 2;
        let avg = |half: &[f64]| half.iter().sum::<f64>() / half.len() as f64;
        let first = avg(&scores[..mid]);
        let second = avg(&scores[mid..]);
        if second > first + 0.5 {
            Trend::Improving
        } else if second < first - 0.5 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    /// Summary of scores, volume and trend.
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            speak: self.speak,
            write: self.write,
            describe: self.describe,
            total_sessions: self.sessions.len() as u32,
            average_score: self.average_score(),
            trend: self.trend(),
            last_updated: self.sessions.last().map(|s| s.timestamp),
        }
    }

    /// The last [`HISTORY_LIMIT`] sessions plus aggregates, with recency
    /// measured against `now`.
    pub fn history(&self, now: DateTime<Utc>) -> ProgressHistory {
        let mut sessions_by_section: BTreeMap<ActivityKind, u32> = BTreeMap::new();
        let mut score_sums: BTreeMap<ActivityKind, u32> = BTreeMap::new();
        for session in &self.sessions {
            *sessions_by_section.entry(session.section).or_default() += 1;
            *score_sums.entry(session.section).or_default() += session.score;
        }
        let average_scores_by_section = score_sums
            .iter()
            .map(|(&section, &sum)| {
                let n = sessions_by_section[&section];
                (section, f64::from(sum) / f64::from(n))
            })
            .collect();

        let week_ago = now - Duration::days(RECENT_DAYS);
        let recent_activity = self
            .sessions
            .iter()
            .filter(|s| s.timestamp > week_ago)
            .count() as u32;

        let start = self.sessions.len().saturating_sub(HISTORY_LIMIT);
        ProgressHistory {
            sessions: self.sessions[start..].to_vec(),
            analytics: ProgressAnalytics {
                total_sessions: self.sessions.len() as u32,
                sessions_by_section,
                average_scores_by_section,
                recent_activity,
            },
        }
    }
}

/// Top performers across users, anonymized, sorted by total then average
/// score, at most [`LEADERBOARD_LIMIT`] rows.
pub fn leaderboard<'a, I>(users: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = (&'a str, &'a ProgressRecord)>,
{
    let mut entries: Vec<LeaderboardEntry> = users
        .into_iter()
        .map(|(user_id, record)| LeaderboardEntry {
            user_tag: anonymize(user_id),
            total_score: record.total_score(),
            average_score: record.average_score(),
            total_sessions: record.sessions.len() as u32,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then(b.average_score.total_cmp(&a.average_score))
    });
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

/// Stable anonymous tag for a user id (FNV-1a folded to four digits).
fn anonymize(user_id: &str) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in user_id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    format!("user_{:04}", hash % 10_000)
}
