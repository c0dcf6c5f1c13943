use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fluentstreak-cli", version, about = "FluentStreak CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a completed practice activity
    Record(commands::record::RecordArgs),
    /// Streak statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Activity calendar for visualization
    Calendar(commands::calendar::CalendarArgs),
    /// Historical streak periods
    Periods(commands::periods::PeriodsArgs),
    /// Milestone achievements
    Achievements(commands::achievements::AchievementsArgs),
    /// Practice scores and session history
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Record(args) => commands::record::run(args),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Calendar(args) => commands::calendar::run(args),
        Commands::Periods(args) => commands::periods::run(args),
        Commands::Achievements(args) => commands::achievements::run(args),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
