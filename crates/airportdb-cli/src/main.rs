//! airportdb — Command-line interface for airportdb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ airportdb stats
//!
//! - Ranked search (code, IATA code, name, city)
//!   $ airportdb search "new york" --limit 5 --scores
//!
//! - Lookup by ICAO code, case-insensitive
//!   $ airportdb code kjfk
//!
//! - Airports of a country
//!   $ airportdb country de
//!
//! - Radius search around a point or an airport
//!   $ airportdb near --lat 40.7128 --lon -74.0060 --radius 50
//!   $ airportdb near --from EGLL --radius 80 --km
//!
//! - Where can I fly in two hours?
//!   $ airportdb reach KJFK --minutes 120
//!   $ airportdb reach KJFK --minutes 120 --up-to
//!
//! Data source
//! -----------
//!
//! By default the dataset bundled with `airportdb-core` is used. Point
//! `--input` (or `AIRPORTDB_DATA`) at a `.json` / `.json.gz` file keyed by
//! ICAO code to use another one. Set `RUST_LOG=debug` for load diagnostics.
mod args;

use crate::args::{CliArgs, Commands};
use airportdb_core::geo::{distance_from_coordinates, Coordinates, Unit};
use airportdb_core::travel::TravelPlanner;
use airportdb_core::{Airport, AirportRepository, DatasetSource};
use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const KM_PER_MILE: f64 = 1.609344;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let unit = if args.km { Unit::Kilometers } else { Unit::Miles };

    let owned;
    let repo: &AirportRepository = match &args.input {
        Some(path) => {
            owned = AirportRepository::new(DatasetSource::Path(path.into()));
            &owned
        }
        None => AirportRepository::global(),
    };
    repo.load()
        .with_context(|| format!("failed to load dataset from {:?}", repo.source()))?;

    match args.command {
        Commands::Stats => {
            let stats = repo.stats();
            println!("Database statistics:");
            println!("  Airports: {}", stats.airports);
            println!("  Countries: {}", stats.countries);
            println!("  With position: {}", stats.with_position);
        }

        Commands::Search {
            term,
            limit,
            scores,
        } => {
            let hits = repo.search_scored(&term, limit);
            if hits.is_empty() {
                println!("No airports found matching: {term}");
            }
            for (airport, score) in hits {
                if scores {
                    print!("{score:>5}  ");
                }
                println!("{}", one_line(&airport));
            }
        }

        Commands::Code { code } => match repo.by_code(&code) {
            Some(a) => print_details(&a),
            None => eprintln!("No airport found for: {code}"),
        },

        Commands::Country { iso2 } => {
            let airports = repo.by_country(&iso2);
            if airports.is_empty() {
                eprintln!("No airports found for country: {iso2}");
            }
            for a in airports {
                println!("{}", one_line(&a));
            }
        }

        Commands::Near {
            from,
            lat,
            lon,
            radius,
        } => {
            let origin = match (from, lat, lon) {
                (Some(code), _, _) => position_of(repo, &code)?,
                (None, Some(lat), Some(lon)) => Coordinates::new(lat, lon),
                _ => bail!("give either --from <ICAO> or --lat/--lon"),
            };
            let radius_miles = to_miles(radius, unit);
            let hits = repo.within_distance_with_distances(&origin, radius_miles)?;
            if hits.is_empty() {
                println!("No airports within {radius} {}", unit.suffix());
            }
            for (a, d) in hits {
                println!("{:>9}  {}", format_distance(d, unit), one_line(&a));
            }
        }

        Commands::Distance { from, to } => {
            let a = position_of(repo, &from)?;
            let b = position_of(repo, &to)?;
            let d = distance_from_coordinates(&a, &b, unit)?;
            println!(
                "{} -> {}: {:.1} {}",
                from.to_uppercase(),
                to.to_uppercase(),
                d,
                unit.suffix()
            );
        }

        Commands::Reach {
            from,
            minutes,
            up_to,
            tolerance,
        } => {
            let origin = position_of(repo, &from)?;
            let planner = TravelPlanner::new(repo);
            let seconds = minutes * 60.0;
            let destinations = if up_to {
                planner.destinations_up_to_time(&origin, seconds)?
            } else {
                planner.destinations_within_time_window(&origin, seconds, tolerance)?
            };
            if destinations.is_empty() {
                println!("No destinations for a {minutes} minute flight from {from}");
            }
            for d in destinations {
                let total = d.flight_time.round() as u64;
                println!(
                    "{:>9}  {:>2}h{:02}m  {}",
                    format_distance(d.distance, unit),
                    total / 3600,
                    total % 3600 / 60,
                    one_line(&d.airport)
                );
            }
        }
    }

    Ok(())
}

fn position_of(repo: &AirportRepository, code: &str) -> anyhow::Result<Coordinates> {
    let airport = repo
        .by_code(code)
        .with_context(|| format!("airport {code} not found"))?;
    airport
        .coordinates()
        .with_context(|| format!("airport {} has no usable position", airport.code))
}

fn to_miles(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Miles => value,
        Unit::Kilometers => value / KM_PER_MILE,
    }
}

fn format_distance(miles: f64, unit: Unit) -> String {
    let value = match unit {
        Unit::Miles => miles,
        Unit::Kilometers => miles * KM_PER_MILE,
    };
    format!("{value:.1} {}", unit.suffix())
}

fn one_line(a: &Airport) -> String {
    let iata = if a.short_code().is_empty() {
        "---"
    } else {
        a.short_code()
    };
    format!("{} {:<3}  {} — {}, {}", a.code, iata, a.name, a.city, a.country)
}

fn print_details(a: &Airport) {
    println!("Airport: {}", a.name);
    println!("ICAO: {}", a.code);
    println!("IATA: {}", a.short_code());
    println!("City: {}", a.city);
    println!("Region: {}", a.region());
    println!("Country: {}", a.country);
    println!("Elevation: {} ft", a.elevation);
    match a.coordinates() {
        Some(c) => println!("Position: {:.4}, {:.4}", c.latitude, c.longitude),
        None => println!("Position: unknown"),
    }
    println!("Timezone: {}", a.timezone);
}
