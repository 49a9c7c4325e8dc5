#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the bookings ingestion and aggregation tool.
//!
//! Loads a bookings CSV, applies an optional arrival-date range, and prints
//! the dashboard's output shapes as JSON. Diagnostics go to the log
//! (`RUST_LOG`), data goes to stdout.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hotel_dashboard_analytics::dashboard::Dashboard;
use hotel_dashboard_analytics_models::{DashboardSnapshot, DateRange};
use hotel_dashboard_ingest::read_bookings_file;

#[derive(Parser)]
#[command(
    name = "hotel_dashboard_ingest",
    about = "Hotel bookings ingestion and aggregation tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to the bookings CSV file
    #[arg(long)]
    csv: PathBuf,
    /// Range start date (YYYY-MM-DD); only takes effect together with --to
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Range end date (YYYY-MM-DD); only takes effect together with --from
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Quick range: the last N days ending today
    #[arg(long, conflicts_with_all = ["from", "to"])]
    last_days: Option<i64>,
}

impl InputArgs {
    fn range(&self) -> DateRange {
        self.last_days.map_or(
            DateRange {
                start: self.from,
                end: self.to,
            },
            DateRange::last_days,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print visitor totals over the (optionally filtered) bookings
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the ranked country list (top 10 by visitors)
    TopCountries {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the per-day visitor time series
    Trend {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print all three dashboard shapes as one JSON document
    Snapshot {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { input } => print_json(&load_snapshot(&input)?.totals),
        Commands::TopCountries { input } => print_json(&load_snapshot(&input)?.top_countries),
        Commands::Trend { input } => print_json(&load_snapshot(&input)?.visitors_by_day),
        Commands::Snapshot { input } => print_json(&load_snapshot(&input)?),
    }
}

fn load_snapshot(input: &InputArgs) -> Result<DashboardSnapshot, Box<dyn std::error::Error>> {
    let import = read_bookings_file(&input.csv)?;
    if import.summary.rows_skipped > 0 {
        log::warn!(
            "{} of {} rows were malformed and skipped",
            import.summary.rows_skipped,
            import.summary.rows_read
        );
    }

    let mut dashboard = Dashboard::new();
    dashboard.set_records(import.records);
    dashboard.set_range(input.range());
    Ok(dashboard.snapshot().clone())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
