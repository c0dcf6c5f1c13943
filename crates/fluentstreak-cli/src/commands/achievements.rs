use clap::Args;
use fluentstreak_core::streak::achievements;
use fluentstreak_core::{Config, UserStore};

use super::common;

#[derive(Args)]
pub struct AchievementsArgs {
    #[arg(long)]
    pub user: Option<String>,
    /// Reference day as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: AchievementsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let user = common::resolve_user(args.user, &config);
    let date = common::resolve_date(args.date)?;

    let store = common::open_store()?;
    let mut data = store.load_streaks(&user)?;
    data.refresh(date);
    let statuses = achievements::evaluate(&data.stats());
    println!("{}", serde_json::to_string_pretty(&statuses)?);
    Ok(())
}
