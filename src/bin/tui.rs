use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use furrow::config::Config;
use std::path::PathBuf;

/// Farming calendar: pick a date, plan field tasks.
#[derive(Parser, Debug)]
#[command(name = "furrow", version, about)]
struct Args {
    /// Read settings from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open the calendar on this day (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    furrow::logging::init_or_warn(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if args.date.is_some() {
        config.start_date = args.date;
    }

    furrow::tui::run(config).await
}
