//! Error handling example for airportdb-rs
//!
//! This example demonstrates which calls can fail and which degrade to
//! empty results.

use airportdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== airportdb-rs Error Handling Example ===\n");

    // Example 1: Loading a dataset that does not exist
    println!("--- Example 1: Loading a missing dataset ---");
    let missing = AirportRepository::new(DatasetSource::Path("/nonexistent/airports.json".into()));
    match missing.load() {
        Ok(index) => println!("  Loaded {} airports?!", index.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Queries before load never fail
    println!("--- Example 2: Querying an unloaded repository ---");
    let repo = AirportRepository::new(DatasetSource::Bundled);
    println!("  search('KJFK') -> {} hits", repo.search("KJFK").len());
    println!("  by_code('KJFK') -> {:?}", repo.by_code("KJFK").map(|a| a.code));
    println!();

    repo.load()?;

    // Example 3: Invalid coordinates are reported, not swallowed
    println!("--- Example 3: Invalid coordinates ---");
    let bad = [
        Coordinates::new(f64::NAN, 0.0),
        Coordinates::new(95.0, 0.0),
        Coordinates::new(0.0, 190.0),
    ];
    for origin in &bad {
        match repo.within_distance(origin, 50.0) {
            Ok(hits) => println!("  {origin:?}: {} hits", hits.len()),
            Err(e) => println!("  {origin:?}: ✗ {e}"),
        }
    }
    println!();

    // Example 4: Lookups that find nothing
    println!("--- Example 4: Missing codes and countries ---");
    for code in ["ZZZZ", "", "WAYTOOLONGCODE"] {
        println!("  by_code({code:?}) -> {:?}", repo.by_code(code).map(|a| a.code));
    }
    println!("  by_country(\"ZZ\") -> {} airports", repo.by_country("ZZ").len());

    Ok(())
}
