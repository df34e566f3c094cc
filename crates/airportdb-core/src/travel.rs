// crates/airportdb-core/src/travel.rs

//! Travel-time estimates on top of the radius filter.
//!
//! A flight is modelled as a fixed ground/overhead block (taxi, takeoff,
//! landing) plus cruise at constant speed. Distances are statute miles.

use crate::error::GeoError;
use crate::geo::Coordinates;
use crate::model::Airport;
use crate::repository::AirportRepository;
use serde::{Deserialize, Serialize};

/// Band width used by [`TravelPlanner::destinations_within_time_window`].
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Cruise speed and fixed overhead of a simulated flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightProfile {
    /// Miles per hour.
    pub cruise_speed: f64,
    /// Seconds spent on the ground and climbing/descending, per flight.
    pub overhead_seconds: f64,
}

impl Default for FlightProfile {
    fn default() -> Self {
        Self {
            cruise_speed: 450.0,
            overhead_seconds: 25.0 * 60.0,
        }
    }
}

impl FlightProfile {
    /// Furthest distance coverable in `total_seconds`; never negative.
    ///
    /// ```rust
    /// use airportdb_core::travel::FlightProfile;
    ///
    /// let profile = FlightProfile::default();
    /// assert_eq!(profile.max_distance_for_time(3600.0), 262.5);
    /// assert_eq!(profile.max_distance_for_time(1000.0), 0.0);
    /// ```
    pub fn max_distance_for_time(&self, total_seconds: f64) -> f64 {
        (total_seconds - self.overhead_seconds).max(0.0) * self.cruise_speed / 3600.0
    }

    /// Whole seconds needed to fly `distance`, overhead included.
    pub fn time_for_distance(&self, distance: f64) -> f64 {
        ((distance / self.cruise_speed) * 3600.0 + self.overhead_seconds).round()
    }
}

/// A reachable airport with its distance (miles) and flight time (seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub airport: Airport,
    pub distance: f64,
    pub flight_time: f64,
}

/// Answers "where can I fly in this much time" against a repository.
#[derive(Debug, Clone, Copy)]
pub struct TravelPlanner<'a> {
    repository: &'a AirportRepository,
    profile: FlightProfile,
}

impl<'a> TravelPlanner<'a> {
    pub fn new(repository: &'a AirportRepository) -> Self {
        Self::with_profile(repository, FlightProfile::default())
    }

    pub fn with_profile(repository: &'a AirportRepository, profile: FlightProfile) -> Self {
        Self {
            repository,
            profile,
        }
    }

    pub fn profile(&self) -> &FlightProfile {
        &self.profile
    }

    /// Destinations whose flight time lies within `±tolerance` of
    /// `total_seconds`, nearest first.
    pub fn destinations_within_time_window(
        &self,
        origin: &Coordinates,
        total_seconds: f64,
        tolerance: f64,
    ) -> Result<Vec<Destination>, GeoError> {
        let min_time = total_seconds * (1.0 - tolerance);
        let max_time = total_seconds * (1.0 + tolerance);

        Ok(self
            .reachable(origin, max_time)?
            .into_iter()
            .filter(|d| d.flight_time >= min_time && d.flight_time <= max_time)
            .collect())
    }

    /// Every destination reachable within `max_seconds`, nearest first.
    pub fn destinations_up_to_time(
        &self,
        origin: &Coordinates,
        max_seconds: f64,
    ) -> Result<Vec<Destination>, GeoError> {
        self.reachable(origin, max_seconds)
    }

    fn reachable(
        &self,
        origin: &Coordinates,
        max_seconds: f64,
    ) -> Result<Vec<Destination>, GeoError> {
        let max_distance = self.profile.max_distance_for_time(max_seconds);
        let hits = self
            .repository
            .within_distance_with_distances(origin, max_distance)?;

        tracing::debug!(
            max_seconds,
            max_distance,
            candidates = hits.len(),
            "Collected reachable airports"
        );

        Ok(hits
            .into_iter()
            .map(|(airport, distance)| Destination {
                airport,
                distance,
                flight_time: self.profile.time_for_distance(distance),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_distance_for_time() {
        let p = FlightProfile::default();
        assert!((p.max_distance_for_time(3600.0) - 262.5).abs() < 1e-9);
        assert_eq!(p.max_distance_for_time(1000.0), 0.0);
        assert_eq!(p.max_distance_for_time(-50.0), 0.0);
        assert_eq!(p.max_distance_for_time(1500.0), 0.0);
    }

    #[test]
    fn test_time_for_distance() {
        let p = FlightProfile::default();
        assert_eq!(p.time_for_distance(0.0), 1500.0);
        assert_eq!(p.time_for_distance(450.0), 5100.0);
        assert_eq!(p.time_for_distance(262.5), 3600.0);
    }

    #[test]
    fn test_round_trip_is_consistent() {
        let p = FlightProfile {
            cruise_speed: 500.0,
            overhead_seconds: 900.0,
        };
        for secs in [1800.0, 3600.0, 7200.0] {
            let d = p.max_distance_for_time(secs);
            assert_eq!(p.time_for_distance(d), secs);
        }
    }

    #[test]
    fn test_unloaded_repository_has_no_destinations() {
        let repo = AirportRepository::default();
        let planner = TravelPlanner::new(&repo);
        let origin = Coordinates::new(40.7, -74.0);
        assert!(planner
            .destinations_up_to_time(&origin, 7200.0)
            .unwrap()
            .is_empty());
    }
}
