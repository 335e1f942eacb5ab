use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use salattimes::options::DEFAULT_TIMEZONE_OFFSET;
use salattimes::{compute_fasting_times, compute_prayer_times, compute_sun_times, GeoCoordinate};

mod cli;
mod output;

use cli::Args;

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_methods {
        output::print_method_list();
        return Ok(());
    }

    // Presence is enforced by clap unless --list-methods was given
    let coordinate = GeoCoordinate {
        latitude: args.latitude.ok_or("latitude is required")?,
        longitude: args.longitude.ok_or("longitude is required")?,
    };
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let options = args.to_options()?;
    let timezone_offset = options.timezone_offset.unwrap_or(DEFAULT_TIMEZONE_OFFSET);

    match args.mode.as_str() {
        "prayer" => {
            let times = compute_prayer_times(coordinate, date, &args.method, &options)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&times)?);
            } else {
                output::print_header(coordinate, date, timezone_offset);
                output::print_prayer_times(&args.method, &times);
            }
        }
        "fasting" => {
            let fasting =
                compute_fasting_times(coordinate, date, &args.method, args.sehri_margin, &options)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&fasting)?);
            } else {
                output::print_header(coordinate, date, timezone_offset);
                output::print_fasting_times(&args.method, args.sehri_margin, &fasting);
            }
        }
        "sun" => {
            let sun = compute_sun_times(coordinate, date, timezone_offset, &options)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&sun)?);
            } else {
                output::print_header(coordinate, date, timezone_offset);
                output::print_sun_times(&sun);
            }
        }
        _ => unreachable!(),
    }

    Ok(())
}
