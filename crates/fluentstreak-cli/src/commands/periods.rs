use clap::Args;
use fluentstreak_core::{Config, UserStore};

use super::common;

#[derive(Args)]
pub struct PeriodsArgs {
    #[arg(long)]
    pub user: Option<String>,
}

pub fn run(args: PeriodsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let user = common::resolve_user(args.user, &config);

    let store = common::open_store()?;
    let data = store.load_streaks(&user)?;
    let periods = data.activities.streak_periods();
    println!("{}", serde_json::to_string_pretty(&periods)?);
    Ok(())
}
