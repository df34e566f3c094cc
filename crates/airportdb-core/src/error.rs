// crates/airportdb-core/src/error.rs

use thiserror::Error;

/// Coordinate validation failures raised by the distance engine.
///
/// The three variants are distinct so callers (and tests) can tell a
/// garbage argument apart from a well-formed but out-of-range one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// A coordinate component was `NaN` or infinite.
    #[error("Invalid arguments: coordinates must be finite numbers")]
    InvalidArguments,

    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),
}

/// Errors raised while loading a dataset into the repository.
///
/// Individual malformed rows never produce an error; only failures that
/// make the whole dataset unusable do.
#[derive(Debug, Error)]
pub enum AirportDbError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type Result<T> = std::result::Result<T, AirportDbError>;
