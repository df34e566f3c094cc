//! Basic usage example for airportdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled airport database
//! - Run a ranked text search
//! - Look up airports by code and country
//! - Find airports around a point

use airportdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== airportdb-rs Basic Usage Example ===\n");

    let repo = AirportRepository::global();
    let index = repo.load()?;
    println!("✓ Loaded {} airports\n", index.len());

    // Example 1: Ranked search
    println!("--- Example 1: Search for 'new york' ---");
    for (i, airport) in repo.search_with_limit("new york", 5).iter().enumerate() {
        println!("{}. {} ({}) {}", i + 1, airport.code, airport.short_code(), airport.name);
    }
    println!();

    // Example 2: Lookup by code (any case)
    println!("--- Example 2: Lookup 'egll' ---");
    if let Some(airport) = repo.by_code("egll") {
        println!("Found: {} in {}, {}", airport.name, airport.city, airport.country);
        println!("Timezone: {}", airport.timezone);
    }
    println!();

    // Example 3: Airports of one country, in dataset order
    println!("--- Example 3: Airports in DE ---");
    for airport in repo.by_country("de") {
        println!("- {} {}", airport.code, airport.name);
    }
    println!();

    // Example 4: Radius search around Manhattan
    println!("--- Example 4: Within 50 miles of Manhattan ---");
    let manhattan = Coordinates::new(40.7128, -74.0060);
    for (airport, miles) in repo.within_distance_with_distances(&manhattan, 50.0)? {
        println!("{:>6.1} mi  {} {}", miles, airport.code, airport.name);
    }

    Ok(())
}
