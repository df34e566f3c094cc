// crates/airportdb-core/src/prelude.rs
pub use crate::error::{AirportDbError, GeoError, Result};
pub use crate::geo::{distance_km, distance_miles, Coordinates, Unit};
pub use crate::loader::DatasetSource;
pub use crate::model::Airport;
pub use crate::query::{DbStats, QueryLimits};
pub use crate::repository::AirportRepository;
pub use crate::text::Folding;
pub use crate::travel::{Destination, FlightProfile, TravelPlanner, DEFAULT_TOLERANCE};
