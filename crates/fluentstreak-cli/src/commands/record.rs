use clap::Args;
use fluentstreak_core::{ActivityKind, Config, UserStore};

use super::common;

#[derive(Args)]
pub struct RecordArgs {
    /// Activity kind: speak, write or describe
    pub kind: String,
    /// User id (defaults to the configured user)
    #[arg(long)]
    pub user: Option<String>,
    /// Day of the activity as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: RecordArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let kind: ActivityKind = args.kind.parse()?;
    let date = common::resolve_date(args.date)?;
    let user = common::resolve_user(args.user, &config);

    let store = common::open_store()?;
    let mut data = store.load_streaks(&user)?;
    data.record_activity(kind, date);
    store.save_streaks(&user, &data)?;

    println!("{}", serde_json::to_string_pretty(&data.stats())?);
    Ok(())
}
