// crates/airportdb-core/src/geo.rs

//! # Geo-Distance Engine
//!
//! Great-circle distances (Haversine) plus a cheap rectangular pre-filter
//! used by radius queries to skip the trigonometry for far-away points.
//!
//! Two call conventions exist, [`distance_from_coordinates`] and
//! [`distance_from_degrees`]; both funnel into the same validation and
//! computation path.

use crate::error::GeoError;
use serde::{Deserialize, Serialize};

/// Statute miles per degree of latitude, used to size the bounding box.
pub const MILES_PER_DEGREE: f64 = 69.0;

/// Below this `|cos(latitude)|` the longitude limit is disabled (poles).
const POLE_COS_EPSILON: f64 = 1e-9;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks this point the same way the distance functions do.
    pub fn validate(&self) -> Result<(), GeoError> {
        validate_point(self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Distance unit; each carries its own Earth radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Miles,
    Kilometers,
}

impl Unit {
    /// Mean Earth radius expressed in this unit.
    pub const fn earth_radius(self) -> f64 {
        match self {
            Unit::Miles => 3959.0,
            Unit::Kilometers => 6371.0,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Miles => "mi",
            Unit::Kilometers => "km",
        }
    }
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance between two coordinate pairs.
///
/// # Errors
///
/// [`GeoError::InvalidArguments`] for non-finite input, then
/// [`GeoError::LatitudeOutOfRange`] / [`GeoError::LongitudeOutOfRange`].
///
/// # Examples
/// ```rust
/// use airportdb_core::geo::{distance_from_coordinates, Coordinates, Unit};
///
/// let jfk = Coordinates::new(40.6413, -73.7781);
/// let lga = Coordinates::new(40.7769, -73.8740);
/// let d = distance_from_coordinates(&jfk, &lga, Unit::Miles).unwrap();
/// assert!(d > 10.0 && d < 12.0);
/// ```
pub fn distance_from_coordinates(
    a: &Coordinates,
    b: &Coordinates,
    unit: Unit,
) -> Result<f64, GeoError> {
    distance_from_degrees(a.latitude, a.longitude, b.latitude, b.longitude, unit)
}

/// Same as [`distance_from_coordinates`], taking four raw degree values.
pub fn distance_from_degrees(
    lat_a: f64,
    lon_a: f64,
    lat_b: f64,
    lon_b: f64,
    unit: Unit,
) -> Result<f64, GeoError> {
    if ![lat_a, lon_a, lat_b, lon_b].iter().all(|v| v.is_finite()) {
        return Err(GeoError::InvalidArguments);
    }
    validate_point(lat_a, lon_a)?;
    validate_point(lat_b, lon_b)?;

    Ok(haversine(lat_a, lon_a, lat_b, lon_b) * unit.earth_radius())
}

pub fn distance_miles(a: &Coordinates, b: &Coordinates) -> Result<f64, GeoError> {
    distance_from_coordinates(a, b, Unit::Miles)
}

pub fn distance_km(a: &Coordinates, b: &Coordinates) -> Result<f64, GeoError> {
    distance_from_coordinates(a, b, Unit::Kilometers)
}

fn validate_point(latitude: f64, longitude: f64) -> Result<(), GeoError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(GeoError::InvalidArguments);
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

/// Central angle in radians. Inputs are assumed validated.
#[inline]
fn haversine(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_phi = degrees_to_radians(lat_b - lat_a);
    let d_lambda = degrees_to_radians(lon_b - lon_a);
    let phi_a = degrees_to_radians(lat_a);
    let phi_b = degrees_to_radians(lat_b);

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

// -----------------------------------------------------------------------------
// BOUNDING BOX PRE-FILTER
// -----------------------------------------------------------------------------

/// Maximum degree deltas a point may differ from the origin by and still
/// possibly lie within the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBoxLimits {
    pub lat_diff_limit: f64,
    pub lon_diff_limit: f64,
}

/// Sizes the pre-filter box for `max_distance` miles around `origin`.
///
/// The longitude limit is `max_distance / (69 * cos(latitude))`, widened to
/// the exact spherical bound `asin(sin(a) / cos(latitude))` where that one is
/// larger (it is, slightly, away from the equator), so the box always
/// contains the whole circle. Near the poles `cos(latitude)` collapses to
/// zero; the longitude limit is then 360, which lets every longitude through.
pub fn bounding_box_limits(origin: &Coordinates, max_distance: f64) -> BoundingBoxLimits {
    let lat_diff_limit = max_distance / MILES_PER_DEGREE;
    let cos_lat = degrees_to_radians(origin.latitude).cos().abs();
    let angular = max_distance / Unit::Miles.earth_radius();

    let lon_diff_limit = if cos_lat < POLE_COS_EPSILON || angular >= std::f64::consts::FRAC_PI_2
    {
        360.0
    } else {
        let approx = max_distance / (MILES_PER_DEGREE * cos_lat);
        let ratio = angular.sin() / cos_lat;
        if ratio >= 1.0 {
            // The circle reaches over the pole.
            360.0
        } else {
            approx.max(ratio.asin().to_degrees()).min(360.0)
        }
    };

    BoundingBoxLimits {
        lat_diff_limit,
        lon_diff_limit,
    }
}

/// Cheap rectangular test; longitude delta wraps across the date line.
#[inline]
pub fn is_within_bounding_box(
    origin: &Coordinates,
    point: &Coordinates,
    limits: &BoundingBoxLimits,
) -> bool {
    if (point.latitude - origin.latitude).abs() > limits.lat_diff_limit {
        return false;
    }

    let mut lon_diff = (point.longitude - origin.longitude).abs();
    if lon_diff > 180.0 {
        lon_diff = 360.0 - lon_diff;
    }
    lon_diff <= limits.lon_diff_limit
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinates = Coordinates::new(40.7128, -74.0060);
    const LONDON: Coordinates = Coordinates::new(51.5074, -0.1278);

    #[test]
    fn test_identical_points_are_zero() {
        assert_eq!(distance_miles(&NYC, &NYC).unwrap(), 0.0);
        assert_eq!(distance_km(&LONDON, &LONDON).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = distance_miles(&NYC, &LONDON).unwrap();
        let ba = distance_miles(&LONDON, &NYC).unwrap();
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance_nyc_london() {
        // ~3461 statute miles
        let d = distance_miles(&NYC, &LONDON).unwrap();
        assert!((d - 3461.0).abs() < 15.0, "got {d}");
    }

    #[test]
    fn test_unit_ratio() {
        let mi = distance_miles(&NYC, &LONDON).unwrap();
        let km = distance_km(&NYC, &LONDON).unwrap();
        assert!((km / mi - 1.60934).abs() < 0.001, "ratio {}", km / mi);
    }

    #[test]
    fn test_both_call_forms_agree() {
        let a = distance_from_coordinates(&NYC, &LONDON, Unit::Kilometers).unwrap();
        let b = distance_from_degrees(
            NYC.latitude,
            NYC.longitude,
            LONDON.latitude,
            LONDON.longitude,
            Unit::Kilometers,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation_errors_are_distinct() {
        assert_eq!(
            distance_from_degrees(f64::NAN, 0.0, 0.0, 0.0, Unit::Miles),
            Err(GeoError::InvalidArguments)
        );
        assert_eq!(
            distance_from_degrees(0.0, 0.0, 0.0, f64::INFINITY, Unit::Miles),
            Err(GeoError::InvalidArguments)
        );
        assert_eq!(
            distance_from_degrees(91.0, 0.0, 0.0, 0.0, Unit::Miles),
            Err(GeoError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            distance_from_degrees(0.0, 0.0, 0.0, -180.5, Unit::Miles),
            Err(GeoError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn test_range_edges_are_valid() {
        assert!(distance_from_degrees(90.0, 180.0, -90.0, -180.0, Unit::Miles).is_ok());
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_bounding_box_limits() {
        let equator = Coordinates::new(0.0, 0.0);
        let limits = bounding_box_limits(&equator, 69.0);
        assert!((limits.lat_diff_limit - 1.0).abs() < 1e-12);
        assert!((limits.lon_diff_limit - 1.0).abs() < 1e-12);

        let sixty = Coordinates::new(60.0, 10.0);
        let limits = bounding_box_limits(&sixty, 69.0);
        assert!((limits.lon_diff_limit - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box_at_pole_disables_longitude() {
        let pole = Coordinates::new(90.0, 0.0);
        let limits = bounding_box_limits(&pole, 100.0);
        assert_eq!(limits.lon_diff_limit, 360.0);
        assert!(limits.lon_diff_limit.is_finite());
        assert!(is_within_bounding_box(
            &pole,
            &Coordinates::new(89.0, 179.0),
            &limits
        ));
    }

    #[test]
    fn test_date_line_wraparound() {
        let limits = BoundingBoxLimits {
            lat_diff_limit: 5.0,
            lon_diff_limit: 5.0,
        };
        let east = Coordinates::new(0.0, 179.0);
        assert!(is_within_bounding_box(
            &east,
            &Coordinates::new(0.0, -179.0),
            &limits
        ));

        let far_east = Coordinates::new(0.0, 170.0);
        assert!(!is_within_bounding_box(
            &far_east,
            &Coordinates::new(0.0, -170.0),
            &limits
        ));
    }

    #[test]
    fn test_bounding_box_has_no_false_negatives() {
        // Sweep points on rings just inside the radius at several latitudes.
        for &lat in &[-80.0, -45.0, 0.0, 30.0, 60.0, 85.0] {
            let origin = Coordinates::new(lat, 179.5);
            let radius = 250.0;
            let limits = bounding_box_limits(&origin, radius);
            for step in 0..72 {
                let bearing = degrees_to_radians(step as f64 * 5.0);
                let angular = (radius * 0.999) / Unit::Miles.earth_radius();
                let phi1 = degrees_to_radians(origin.latitude);
                let lambda1 = degrees_to_radians(origin.longitude);
                let phi2 = (phi1.sin() * angular.cos()
                    + phi1.cos() * angular.sin() * bearing.cos())
                .asin();
                let lambda2 = lambda1
                    + (bearing.sin() * angular.sin() * phi1.cos())
                        .atan2(angular.cos() - phi1.sin() * phi2.sin());
                let mut lon = lambda2.to_degrees();
                if lon > 180.0 {
                    lon -= 360.0;
                } else if lon < -180.0 {
                    lon += 360.0;
                }
                let point = Coordinates::new(phi2.to_degrees(), lon);
                let d = distance_miles(&origin, &point).unwrap();
                assert!(d <= radius);
                assert!(
                    is_within_bounding_box(&origin, &point, &limits),
                    "rejected {point:?} at {d} mi from {origin:?}"
                );
            }
        }
    }
}
