//! Reachable destinations example for airportdb-rs
//!
//! Turns a flight-time budget into a list of destinations, either a narrow
//! band around the budget or everything up to it.

use airportdb_core::prelude::*;

fn main() -> Result<()> {
    let repo = AirportRepository::global();
    repo.load()?;

    let home = repo
        .by_code("KJFK")
        .and_then(|a| a.coordinates())
        .ok_or_else(|| AirportDbError::NotFound("KJFK".into()))?;

    let planner = TravelPlanner::new(repo);
    let budget = 2.0 * 3600.0;
    println!(
        "A 2h budget covers up to {:.1} mi at {} mph\n",
        planner.profile().max_distance_for_time(budget),
        planner.profile().cruise_speed
    );

    println!("--- Flights of about two hours (±5%) ---");
    for d in planner.destinations_within_time_window(&home, budget, DEFAULT_TOLERANCE)? {
        print_destination(&d);
    }

    println!("\n--- Everything within two hours ---");
    for d in planner.destinations_up_to_time(&home, budget)? {
        print_destination(&d);
    }

    Ok(())
}

fn print_destination(d: &Destination) {
    let minutes = (d.flight_time / 60.0).round() as u64;
    println!(
        "{:>7.1} mi  {:>3} min  {} {}",
        d.distance, minutes, d.airport.code, d.airport.name
    );
}
