use clap::Subcommand;
use fluentstreak_core::{Config, UserStore};

use super::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current, longest and total-day streak statistics
    Current {
        #[arg(long)]
        user: Option<String>,
        /// Reference day as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Trailing 7-day rollup
    Week {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Trailing 30-day rollup
    Month {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = common::open_store()?;

    match action {
        StatsAction::Current { user, date } => {
            let user = common::resolve_user(user, &config);
            let date = common::resolve_date(date)?;
            let mut data = store.load_streaks(&user)?;
            // Re-anchor at the requested day; the stored current streak may
            // predate it.
            data.refresh(date);
            println!("{}", serde_json::to_string_pretty(&data.stats())?);
        }
        StatsAction::Week { user, date } => {
            let user = common::resolve_user(user, &config);
            let date = common::resolve_date(date)?;
            let data = store.load_streaks(&user)?;
            let stats = data.activities.weekly_stats(date);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Month { user, date } => {
            let user = common::resolve_user(user, &config);
            let date = common::resolve_date(date)?;
            let data = store.load_streaks(&user)?;
            let stats = data.activities.monthly_stats(date);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
