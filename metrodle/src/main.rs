use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use metrodle::catalog::Catalog;
use metrodle::daily::{DailyConfig, DailySelector};

#[derive(Debug, Parser)]
#[command(name = "metrodle", version)]
#[command(about = "Print the daily station and route for a metro catalog")]
struct Args {
    /// Station catalog JSON document
    catalog: PathBuf,

    /// Puzzle date (YYYY-MM-DD); defaults to today in the game's time zone
    date: Option<NaiveDate>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match Catalog::load(&args.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load catalog {}: {e}", args.catalog.display());
            return ExitCode::FAILURE;
        }
    };

    let config = DailyConfig::default();
    let date = args.date.unwrap_or_else(|| config.today(Utc::now()));

    let selector = DailySelector::new(&catalog, config);
    let daily = selector.assign(date);
    println!("{} (day #{})", date, daily.day_number);
    println!("Station: {}", daily.station);

    match selector.assign_route(date) {
        Ok(route) => {
            println!("Route: {} → {}", route.origin, route.destination);
            if let Some(path) = catalog.route(&route.origin.id, &route.destination.id) {
                for (i, station) in path.iter().enumerate() {
                    println!("  {i:>2}. {station}");
                }
            }
        }
        Err(e) => eprintln!("No route: {e}"),
    }

    ExitCode::SUCCESS
}
