// crates/airportdb-core/src/query.rs

//! Read operations over the repository's current index.
//!
//! Every query works on a snapshot of the index and degrades to an empty
//! result (or `None`) when nothing is loaded. Only invalid coordinates
//! supplied by the caller produce an error.

use crate::error::GeoError;
use crate::geo::{self, Coordinates, Unit};
use crate::loader::canonical_code;
use crate::model::Airport;
use crate::repository::AirportRepository;
use crate::score;
use crate::text::truncate_chars;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Size guards applied to query inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Search terms are cut to this many characters before folding.
    pub max_term_chars: usize,
    /// Result cap used by [`AirportRepository::search`].
    pub default_limit: usize,
    /// Longer code / country inputs are rejected outright.
    pub max_code_chars: usize,
}

impl QueryLimits {
    pub const DEFAULT: QueryLimits = QueryLimits {
        max_term_chars: 100,
        default_limit: 500,
        max_code_chars: 10,
    };
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Simple aggregate statistics for the loaded dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub airports: usize,
    pub countries: usize,
    /// Airports with a usable position (eligible for radius queries).
    pub with_position: usize,
}

impl AirportRepository {
    /// Ranked free-text search across code, short code, name and city,
    /// capped at [`QueryLimits::DEFAULT`]`.default_limit` results.
    pub fn search(&self, term: &str) -> Vec<Airport> {
        self.search_with_limit(term, QueryLimits::DEFAULT.default_limit)
    }

    pub fn search_with_limit(&self, term: &str, limit: usize) -> Vec<Airport> {
        self.search_scored(term, limit)
            .into_iter()
            .map(|(airport, _)| airport)
            .collect()
    }

    /// Like [`search_with_limit`](Self::search_with_limit), keeping each score.
    ///
    /// Results are ordered by descending score; ties keep dataset order.
    pub fn search_scored(&self, term: &str, limit: usize) -> Vec<(Airport, u32)> {
        let Some(index) = self.snapshot() else {
            return Vec::new();
        };
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let term = self
            .folding()
            .fold(truncate_chars(term, QueryLimits::DEFAULT.max_term_chars));

        let mut hits: Vec<_> = index
            .records()
            .iter()
            .filter_map(|r| {
                let s = score::score(&r.keys, &term);
                (s > 0).then_some((r, s))
            })
            .collect();

        hits.sort_by(|a, b| b.1.cmp(&a.1));
        hits.truncate(limit);
        hits.into_iter().map(|(r, s)| (r.to_public(), s)).collect()
    }

    /// Airports within `max_distance` statute miles of `origin`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns the validation error when `origin` itself is invalid.
    pub fn within_distance(
        &self,
        origin: &Coordinates,
        max_distance: f64,
    ) -> Result<Vec<Airport>, GeoError> {
        Ok(self
            .within_distance_with_distances(origin, max_distance)?
            .into_iter()
            .map(|(airport, _)| airport)
            .collect())
    }

    /// Radius filter returning each airport with its distance in miles.
    pub fn within_distance_with_distances(
        &self,
        origin: &Coordinates,
        max_distance: f64,
    ) -> Result<Vec<(Airport, f64)>, GeoError> {
        let Some(index) = self.snapshot() else {
            return Ok(Vec::new());
        };
        origin.validate()?;
        // Negative or NaN radius matches nothing.
        if max_distance.is_nan() || max_distance < 0.0 {
            return Ok(Vec::new());
        }

        let limits = geo::bounding_box_limits(origin, max_distance);
        let mut hits = Vec::new();
        for record in index.records() {
            let Some(position) = record.position.as_ref() else {
                continue;
            };
            if !geo::is_within_bounding_box(origin, position, &limits) {
                continue;
            }
            let d = geo::distance_from_coordinates(origin, position, Unit::Miles)?;
            if d <= max_distance {
                hits.push((record, d));
            }
        }

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(hits
            .into_iter()
            .map(|(r, d)| (r.to_public(), d))
            .collect())
    }

    /// Closest airport within `max_distance` miles, if any.
    pub fn nearest(
        &self,
        origin: &Coordinates,
        max_distance: f64,
    ) -> Result<Option<(Airport, f64)>, GeoError> {
        Ok(self
            .within_distance_with_distances(origin, max_distance)?
            .into_iter()
            .next())
    }

    /// Exact, case-insensitive lookup by canonical code.
    pub fn by_code(&self, code: &str) -> Option<Airport> {
        let index = self.snapshot()?;
        let code = code.trim();
        if code.is_empty() || code.chars().count() > QueryLimits::DEFAULT.max_code_chars {
            return None;
        }
        index.get_indexed(&canonical_code(code)).map(|r| r.to_public())
    }

    /// Airports whose country equals `country` (case-insensitive), in
    /// dataset order.
    pub fn by_country(&self, country: &str) -> Vec<Airport> {
        let Some(index) = self.snapshot() else {
            return Vec::new();
        };
        let country = country.trim();
        if country.is_empty() || country.chars().count() > QueryLimits::DEFAULT.max_code_chars {
            return Vec::new();
        }
        let country = country.to_uppercase();

        index
            .records()
            .iter()
            .filter(|r| r.airport.country == country)
            .map(|r| r.to_public())
            .collect()
    }

    /// Counts over the loaded index; all zero when unloaded.
    pub fn stats(&self) -> DbStats {
        let Some(index) = self.snapshot() else {
            return DbStats::default();
        };
        let countries: HashSet<&str> = index
            .records()
            .iter()
            .map(|r| r.airport.country.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        DbStats {
            airports: index.len(),
            countries: countries.len(),
            with_position: index
                .records()
                .iter()
                .filter(|r| r.position.is_some())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DatasetSource;
    use crate::text::Folding;

    const SAMPLE: &str = r#"{
        "KJFK": {"code": "KJFK", "shortCode": "JFK", "name": "John F Kennedy International Airport", "city": "New York", "country": "US", "latitude": 40.6398, "longitude": -73.7789},
        "KLGA": {"code": "KLGA", "shortCode": "LGA", "name": "LaGuardia Airport", "city": "New York", "country": "US", "latitude": 40.7772, "longitude": -73.8726},
        "KEWR": {"code": "KEWR", "shortCode": "EWR", "name": "Newark Liberty International Airport", "city": "Newark", "country": "US", "latitude": 40.6925, "longitude": -74.1687},
        "EGLL": {"code": "EGLL", "shortCode": "LHR", "name": "London Heathrow Airport", "city": "London", "country": "GB", "latitude": 51.4706, "longitude": -0.461941},
        "NZCH": {"code": "NZCH", "shortCode": "CHC", "name": "Christchurch International Airport", "city": "Christchurch", "country": "NZ", "latitude": -43.4894, "longitude": 172.532},
        "XNOP": {"code": "XNOP", "name": "Nowhere Strip", "city": "New Nowhere", "country": "us"}
    }"#;

    fn loaded() -> AirportRepository {
        let repo =
            AirportRepository::with_folding(DatasetSource::Inline(SAMPLE.into()), Folding::Lowercase);
        repo.load().unwrap();
        repo
    }

    #[test]
    fn test_search_ranks_exact_code_first() {
        let repo = loaded();
        let results = repo.search("KJFK");
        assert_eq!(results[0].code, "KJFK");
    }

    #[test]
    fn test_search_scores_and_order() {
        let repo = loaded();
        let scored = repo.search_scored("new", 500);
        assert!(scored.iter().all(|(_, s)| *s > 0));
        assert!(scored.windows(2).all(|w| w[0].1 >= w[1].1));
        // Newark: name prefix (300) + city prefix (250)
        assert_eq!(scored[0].0.code, "KEWR");
        assert_eq!(scored[0].1, score::NAME_PREFIX + score::CITY_PREFIX);
    }

    #[test]
    fn test_search_limit_and_blank_terms() {
        let repo = loaded();
        assert_eq!(repo.search_with_limit("airport", 2).len(), 2);
        assert!(repo.search("").is_empty());
        assert!(repo.search("   ").is_empty());
        assert!(repo.search("zzzzzz").is_empty());
    }

    #[test]
    fn test_search_truncates_long_terms() {
        let repo = loaded();
        let long = format!("kjfk{}", "x".repeat(500));
        // Still no match, but must not blow up.
        assert!(repo.search(&long).is_empty());
    }

    #[test]
    fn test_within_distance_nearest_first() {
        let repo = loaded();
        let nyc = Coordinates::new(40.7128, -74.0060);
        let hits = repo.within_distance_with_distances(&nyc, 50.0).unwrap();
        let codes: Vec<_> = hits.iter().map(|(a, _)| a.code.as_str()).collect();
        assert!(codes.contains(&"KJFK"));
        assert!(codes.contains(&"KLGA"));
        assert!(!codes.contains(&"EGLL"));
        assert!(hits.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_within_distance_is_inclusive() {
        let repo = loaded();
        let origin = Coordinates::new(40.7128, -74.0060);
        let jfk = repo.by_code("KJFK").unwrap().coordinates().unwrap();
        let exact = geo::distance_miles(&origin, &jfk).unwrap();
        let hits = repo.within_distance(&origin, exact).unwrap();
        assert!(hits.iter().any(|a| a.code == "KJFK"));
    }

    #[test]
    fn test_within_distance_rejects_invalid_origin() {
        let repo = loaded();
        assert_eq!(
            repo.within_distance(&Coordinates::new(123.0, 0.0), 10.0),
            Err(GeoError::LatitudeOutOfRange(123.0))
        );
        assert_eq!(
            repo.within_distance(&Coordinates::new(0.0, f64::NAN), 10.0),
            Err(GeoError::InvalidArguments)
        );
    }

    #[test]
    fn test_within_distance_skips_unpositioned_and_bad_radius() {
        let repo = loaded();
        let origin = Coordinates::new(0.0, 0.0);
        let all = repo.within_distance(&origin, 20_000.0).unwrap();
        assert_eq!(all.len(), 5, "XNOP has no position");
        assert!(repo.within_distance(&origin, -1.0).unwrap().is_empty());
        assert!(repo.within_distance(&origin, f64::NAN).unwrap().is_empty());
    }

    #[test]
    fn test_nearest() {
        let repo = loaded();
        let (airport, d) = repo
            .nearest(&Coordinates::new(51.5, -0.45), 100.0)
            .unwrap()
            .unwrap();
        assert_eq!(airport.code, "EGLL");
        assert!(d < 5.0);
        assert!(repo.nearest(&Coordinates::new(0.0, 0.0), 10.0).unwrap().is_none());
    }

    #[test]
    fn test_by_code_case_and_bounds() {
        let repo = loaded();
        for code in ["KJFK", "kjfk", "KjFk", " kjfk "] {
            assert_eq!(repo.by_code(code).map(|a| a.code), Some("KJFK".to_string()));
        }
        assert!(repo.by_code("").is_none());
        assert!(repo.by_code("KJFKKJFKKJFK").is_none());
        assert!(repo.by_code("ZZZZ").is_none());
    }

    #[test]
    fn test_by_country_preserves_dataset_order() {
        let repo = loaded();
        let us: Vec<_> = repo.by_country("us").into_iter().map(|a| a.code).collect();
        assert_eq!(us, ["KJFK", "KLGA", "KEWR", "XNOP"]);
        assert_eq!(repo.by_country("US").len(), 4);
        assert!(repo.by_country("").is_empty());
        assert!(repo.by_country("ZZ").is_empty());
        assert!(repo.by_country("UNITEDSTATESOFAMERICA").is_empty());
    }

    #[test]
    fn test_stats() {
        let repo = loaded();
        let stats = repo.stats();
        assert_eq!(stats.airports, 6);
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.with_position, 5);
    }

    #[test]
    fn test_unloaded_queries_degrade() {
        let repo = loaded();
        repo.clear();
        let origin = Coordinates::new(40.0, -74.0);
        assert!(repo.search("KJFK").is_empty());
        assert!(repo.within_distance(&origin, 100.0).unwrap().is_empty());
        assert!(repo.by_code("KJFK").is_none());
        assert!(repo.by_country("US").is_empty());
        assert_eq!(repo.stats(), DbStats::default());
    }
}
