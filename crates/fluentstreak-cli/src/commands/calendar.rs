use clap::Args;
use fluentstreak_core::{CalendarDay, Config, UserStore};

use super::common;

#[derive(Args)]
pub struct CalendarArgs {
    /// Window size in days (defaults to the configured calendar_days)
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(long)]
    pub user: Option<String>,
    /// Last day of the window as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: CalendarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let user = common::resolve_user(args.user, &config);
    let date = common::resolve_date(args.date)?;
    let days = args.days.unwrap_or(config.calendar_days);

    let store = common::open_store()?;
    let data = store.load_streaks(&user)?;
    let calendar: Vec<CalendarDay> = data.activities.calendar(days, date)?.collect();
    println!("{}", serde_json::to_string_pretty(&calendar)?);
    Ok(())
}
