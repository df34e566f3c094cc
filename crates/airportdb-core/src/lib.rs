// crates/airportdb-core/src/lib.rs

//! airportdb-core
//! ==============
//!
//! In-memory airport database: loads a keyed dataset once, precomputes
//! folded search keys, and answers ranked text search, radius queries
//! (bounding box pre-filter + Haversine), code and country lookups.
//!
//! ```rust
//! use airportdb_core::prelude::*;
//!
//! let repo = AirportRepository::default();
//! repo.load()?;
//!
//! let jfk = repo.by_code("kjfk").expect("bundled dataset has KJFK");
//! assert_eq!(jfk.short_code(), "JFK");
//!
//! let near = repo.within_distance(&Coordinates::new(40.7128, -74.0060), 50.0)?;
//! assert!(!near.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod geo; // distance math + bounding box
pub mod loader;
pub mod model;
pub mod query; // read operations on AirportRepository
pub mod repository;
pub mod score;
pub mod text;
pub mod travel;

pub mod prelude;

// Re-exports
pub use crate::error::{AirportDbError, GeoError, Result};
pub use crate::geo::{Coordinates, Unit};
pub use crate::loader::DatasetSource;
pub use crate::model::Airport;
pub use crate::query::{DbStats, QueryLimits};
pub use crate::repository::{AirportIndex, AirportRepository};
pub use crate::travel::{Destination, FlightProfile, TravelPlanner};
