use chrono::Utc;
use clap::Subcommand;
use fluentstreak_core::{leaderboard, ActivityKind, Config, Database, UserStore};

use super::common;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Record a scored practice session
    Record {
        /// Practice section: speak, write or describe
        section: String,
        /// Session score
        score: u32,
        #[arg(long)]
        user: Option<String>,
    },
    /// Best scores, volume and trend
    Show {
        #[arg(long)]
        user: Option<String>,
    },
    /// Recent sessions with analytics
    History {
        #[arg(long)]
        user: Option<String>,
    },
    /// Anonymous top performers
    Leaderboard,
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        ProgressAction::Record {
            section,
            score,
            user,
        } => {
            let section: ActivityKind = section.parse()?;
            let user = common::resolve_user(user, &config);
            let store = common::open_store()?;
            let mut record = store.load_progress(&user)?;
            record.record_session(section, score, Utc::now());
            store.save_progress(&user, &record)?;
            println!("{}", serde_json::to_string_pretty(&record.summary())?);
        }
        ProgressAction::Show { user } => {
            let user = common::resolve_user(user, &config);
            let store = common::open_store()?;
            let record = store.load_progress(&user)?;
            println!("{}", serde_json::to_string_pretty(&record.summary())?);
        }
        ProgressAction::History { user } => {
            let user = common::resolve_user(user, &config);
            let store = common::open_store()?;
            let record = store.load_progress(&user)?;
            println!("{}", serde_json::to_string_pretty(&record.history(Utc::now()))?);
        }
        ProgressAction::Leaderboard => {
            let db = Database::open()?;
            let users = db.all_progress()?;
            let mut board = leaderboard(users.iter().map(|(id, rec)| (id.as_str(), rec)));
            board.truncate(config.leaderboard_size as usize);
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
    }
    Ok(())
}
