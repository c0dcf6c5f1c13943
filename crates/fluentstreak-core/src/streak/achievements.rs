//! Milestone achievements over streak statistics.

use serde::{Deserialize, Serialize};

use super::engine::StreakStats;

/// Which statistic an achievement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalDays,
    CurrentStreak,
    LongestStreak,
}

/// A milestone definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub requirement: u32,
    pub metric: Metric,
}

/// The fixed milestone catalog.
pub const CATALOG: [Achievement; 8] = [
    Achievement {
        id: "first_day",
        title: "First Steps",
        description: "Complete your first learning activity",
        emoji: "\u{1F331}",
        requirement: 1,
        metric: Metric::TotalDays,
    },
    Achievement {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Maintain a 7-day learning streak",
        emoji: "\u{1F525}",
        requirement: 7,
        metric: Metric::CurrentStreak,
    },
    Achievement {
        id: "streak_master",
        title: "Streak Master",
        description: "Achieve a 14-day streak",
        emoji: "\u{26A1}",
        requirement: 14,
        metric: Metric::LongestStreak,
    },
    Achievement {
        id: "consistency_king",
        title: "Consistency King",
        description: "Learn for 30 consecutive days",
        emoji: "\u{1F451}",
        requirement: 30,
        metric: Metric::CurrentStreak,
    },
    Achievement {
        id: "dedicated_learner",
        title: "Dedicated Learner",
        description: "Learn for 50 total days",
        emoji: "\u{1F4DA}",
        requirement: 50,
        metric: Metric::TotalDays,
    },
    Achievement {
        id: "century_club",
        title: "Century Club",
        description: "Reach a 100-day learning streak",
        emoji: "\u{1F48E}",
        requirement: 100,
        metric: Metric::LongestStreak,
    },
    Achievement {
        id: "hundred_days",
        title: "Hundred Days",
        description: "Complete 100 total learning days",
        emoji: "\u{1F3AF}",
        requirement: 100,
        metric: Metric::TotalDays,
    },
    Achievement {
        id: "learning_legend",
        title: "Learning Legend",
        description: "Learn for 365 consecutive days",
        emoji: "\u{1F3C6}",
        requirement: 365,
        metric: Metric::LongestStreak,
    },
];

/// An achievement evaluated against a user's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub id: String,
    pub title: String,
    pub description: String,
    pub emoji: String,
    pub requirement: u32,
    pub metric: Metric,
    /// Current value of the measured statistic.
    pub current: u32,
    pub unlocked: bool,
}

impl StreakStats {
    fn metric(&self, metric: Metric) -> u32 {
        match metric {
            Metric::TotalDays => self.total_days,
            Metric::CurrentStreak => self.current_streak,
            Metric::LongestStreak => self.longest_streak,
        }
    }
}

/// Evaluate the full catalog against `stats`, unlocked milestones first,
/// then by ascending requirement.
pub fn evaluate(stats: &StreakStats) -> Vec<AchievementStatus> {
    let mut statuses: Vec<AchievementStatus> = CATALOG
        .iter()
        .map(|a| {
            let current = stats.metric(a.metric);
            AchievementStatus {
                id: a.id.to_string(),
                title: a.title.to_string(),
                description: a.description.to_string(),
                emoji: a.emoji.to_string(),
                requirement: a.requirement,
                metric: a.metric,
                current,
                unlocked: current >= a.requirement,
            }
        })
        .collect();
    statuses.sort_by_key(|s| (!s.unlocked, s.requirement));
    statuses
}
