// crates/airportdb-core/src/model.rs

use crate::geo::Coordinates;
use crate::text::Folding;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An airport as handed out to callers.
///
/// `code` is the canonical (trimmed, uppercase) ICAO-style identifier.
/// Coordinates are `None` when the source row had no usable value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub code: String,
    pub short_code: Option<String>,
    pub name: String,
    pub city: String,
    pub country: String,
    pub region: Option<String>,
    /// Feet above mean sea level.
    pub elevation: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: String,
}

impl Airport {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn short_code(&self) -> &str {
        self.short_code.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }

    /// Position of the airport, if it has finite, in-range coordinates.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let c = Coordinates::new(self.latitude?, self.longitude?);
        c.validate().ok().map(|_| c)
    }
}

/// Folded search keys, one per searchable field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchKeys {
    pub code: String,
    pub short_code: String,
    pub name: String,
    pub city: String,
}

impl SearchKeys {
    pub fn from_airport(airport: &Airport, folding: Folding) -> Self {
        Self {
            code: folding.fold(&airport.code),
            short_code: folding.fold(airport.short_code()),
            name: folding.fold(&airport.name),
            city: folding.fold(&airport.city),
        }
    }
}

/// Repository-private record: the public airport plus everything derived
/// from it at load time.
#[derive(Clone, Debug)]
pub(crate) struct IndexedAirport {
    pub(crate) airport: Airport,
    pub(crate) keys: SearchKeys,
    pub(crate) position: Option<Coordinates>,
}

impl IndexedAirport {
    pub(crate) fn new(airport: Airport, folding: Folding) -> Self {
        let keys = SearchKeys::from_airport(&airport, folding);
        let position = airport.coordinates();
        Self {
            airport,
            keys,
            position,
        }
    }

    /// Public view of this record, without the derived fields.
    #[inline]
    pub(crate) fn to_public(&self) -> Airport {
        self.airport.clone()
    }
}

// -----------------------------------------------------------------------------
// RAW ROWS
// -----------------------------------------------------------------------------

/// Builds an [`Airport`] from one untyped dataset row.
///
/// Every field is read defensively: absent, `null` or wrongly typed values
/// fall back to empty strings / `None` / `0`, and `code` falls back to the
/// canonical key. Never fails.
pub fn airport_from_raw(canonical_key: &str, row: &Value) -> Airport {
    let empty = Map::new();
    let obj = row.as_object().unwrap_or(&empty);

    let code = text_field(obj, &["code", "icao"])
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| canonical_key.to_string());

    let short_code = text_field(obj, &["shortCode", "iata"])
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty());

    Airport {
        code,
        short_code,
        name: text_field(obj, &["name"]).unwrap_or_default().to_string(),
        city: text_field(obj, &["city"]).unwrap_or_default().to_string(),
        country: text_field(obj, &["country"])
            .unwrap_or_default()
            .trim()
            .to_uppercase(),
        region: text_field(obj, &["region", "state"])
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        elevation: number_field(obj, &["elevation"])
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        latitude: number_field(obj, &["latitude", "lat"]).filter(|v| v.is_finite()),
        longitude: number_field(obj, &["longitude", "lon"]).filter(|v| v.is_finite()),
        timezone: text_field(obj, &["timezone", "tz"])
            .unwrap_or_default()
            .to_string(),
    }
}

/// First string value found under any of `names`.
fn text_field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|n| obj.get(*n).and_then(Value::as_str))
}

/// First numeric value under any of `names`; numeric strings are accepted.
fn number_field(obj: &Map<String, Value>, names: &[&str]) -> Option<f64> {
    names.iter().find_map(|n| match obj.get(*n)? {
        Value::Number(num) => num.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
