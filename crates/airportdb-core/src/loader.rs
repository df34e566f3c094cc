// crates/airportdb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (bundled bytes, files, gzip) and turns a
//! keyed JSON dataset into an [`AirportIndex`].
//!
//! The dataset is one JSON object keyed by airport code:
//!
//! ```json
//! { "KJFK": { "code": "KJFK", "shortCode": "JFK", "name": "...", "latitude": 40.6, ... } }
//! ```

use crate::error::{AirportDbError, Result};
use crate::model::airport_from_raw;
use crate::repository::AirportIndex;
use crate::text::Folding;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// The dataset compiled into the crate.
static BUNDLED_DATASET: &str = include_str!("../data/airports.json");

/// Environment variable the CLI and [`DatasetSource::from_env`] consult.
pub const DATA_ENV_VAR: &str = "AIRPORTDB_DATA";

/// Where the repository reads its dataset from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    /// The JSON dataset shipped inside the crate.
    #[default]
    Bundled,
    /// A `.json` file, or `.json.gz` with the `compact` feature.
    Path(PathBuf),
    /// A JSON document held in memory (tests, embedding hosts).
    Inline(String),
}

impl DatasetSource {
    /// `Path` when [`DATA_ENV_VAR`] is set and non-empty, `Bundled` otherwise.
    pub fn from_env() -> Self {
        match std::env::var(DATA_ENV_VAR) {
            Ok(p) if !p.trim().is_empty() => DatasetSource::Path(PathBuf::from(p)),
            _ => DatasetSource::Bundled,
        }
    }

    /// Reads and parses the source into its top-level keyed object.
    pub fn read(&self) -> Result<Map<String, Value>> {
        let doc: Value = match self {
            DatasetSource::Bundled => serde_json::from_str(BUNDLED_DATASET)?,
            DatasetSource::Inline(s) => serde_json::from_str(s)?,
            DatasetSource::Path(path) => {
                let reader = open_stream(path)?;
                serde_json::from_reader(reader)?
            }
        };

        match doc {
            Value::Object(map) => Ok(map),
            other => Err(AirportDbError::InvalidData(format!(
                "expected a JSON object keyed by airport code, found {}",
                value_kind(&other)
            ))),
        }
    }
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AirportDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            tracing::debug!(path = %path.display(), "Opening gzip compressed dataset");
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(AirportDbError::InvalidData(
                "Gzip dataset given but 'compact' feature disabled".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// Canonical map key: trimmed and uppercased.
#[inline]
pub fn canonical_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Builds the index from a parsed dataset. Malformed rows are defaulted,
/// rows with a blank key are skipped; this never fails.
pub fn build_index(raw: Map<String, Value>, folding: Folding) -> AirportIndex {
    let mut index = AirportIndex::with_capacity(raw.len());
    let mut skipped = 0usize;

    for (key, row) in raw {
        let code = canonical_code(&key);
        if code.is_empty() {
            skipped += 1;
            continue;
        }
        if !row.is_object() {
            tracing::debug!(%code, kind = value_kind(&row), "Dataset row is not an object");
        }
        let airport = airport_from_raw(&code, &row);
        index.insert(code, airport, folding);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped dataset rows with blank keys");
    }
    index
}

/// Reads `source` and builds the index in one go.
pub fn load_index(source: &DatasetSource, folding: Folding) -> Result<AirportIndex> {
    let raw = source.read()?;
    Ok(build_index(raw, folding))
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
