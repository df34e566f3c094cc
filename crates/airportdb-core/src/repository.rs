// crates/airportdb-core/src/repository.rs

//! # Airport Repository
//!
//! Owns the in-memory dataset. The two views (code map and flat array) are
//! built together into one [`AirportIndex`] and published behind an `Arc`,
//! so a load or clear swaps both at once and readers always see a
//! consistent pair.

use crate::error::Result;
use crate::loader::{self, canonical_code, DatasetSource};
use crate::model::{Airport, IndexedAirport};
use crate::text::Folding;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

/// The loaded dataset: records in dataset order plus a code -> position map.
#[derive(Debug, Default)]
pub struct AirportIndex {
    by_code: HashMap<String, usize>,
    records: Vec<IndexedAirport>,
}

impl AirportIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            by_code: HashMap::with_capacity(capacity),
            records: Vec::with_capacity(capacity),
        }
    }

    /// Adds a record under an already canonical `code`.
    ///
    /// A repeated code replaces the earlier record in place, so both views
    /// keep agreeing.
    pub(crate) fn insert(&mut self, code: String, airport: Airport, folding: Folding) {
        let record = IndexedAirport::new(airport, folding);
        match self.by_code.get(&code) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.by_code.insert(code, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive lookup by canonical code.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.get_indexed(&canonical_code(code)).map(|r| &r.airport)
    }

    /// All airports in dataset order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.records.iter().map(|r| &r.airport)
    }

    #[inline]
    pub(crate) fn get_indexed(&self, canonical: &str) -> Option<&IndexedAirport> {
        self.by_code.get(canonical).map(|&pos| &self.records[pos])
    }

    #[inline]
    pub(crate) fn records(&self) -> &[IndexedAirport] {
        &self.records
    }
}

/// Process-wide repository over the bundled dataset (or [`loader::DATA_ENV_VAR`]).
static GLOBAL: Lazy<AirportRepository> =
    Lazy::new(|| AirportRepository::new(DatasetSource::from_env()));

/// Single owner of the airport dataset and its lifecycle.
///
/// Queries never fail for lack of data: before [`load`](Self::load) (or
/// after [`clear`](Self::clear)) they return empty results.
#[derive(Debug)]
pub struct AirportRepository {
    source: DatasetSource,
    folding: Folding,
    cache: RwLock<Option<Arc<AirportIndex>>>,
}

impl Default for AirportRepository {
    fn default() -> Self {
        Self::new(DatasetSource::Bundled)
    }
}

impl AirportRepository {
    pub fn new(source: DatasetSource) -> Self {
        Self::with_folding(source, Folding::detect())
    }

    pub fn with_folding(source: DatasetSource, folding: Folding) -> Self {
        Self {
            source,
            folding,
            cache: RwLock::new(None),
        }
    }

    /// Shared instance used by the CLI and demos.
    pub fn global() -> &'static AirportRepository {
        &GLOBAL
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn folding(&self) -> Folding {
        self.folding
    }

    /// Loads the dataset once; later calls return the same index.
    ///
    /// Two threads racing on the first load may both build an index, but
    /// only the first one published is kept and returned to both.
    pub fn load(&self) -> Result<Arc<AirportIndex>> {
        if let Some(index) = self.snapshot() {
            return Ok(index);
        }

        let started = Instant::now();
        tracing::debug!(source = ?self.source, folding = ?self.folding, "Loading airport dataset");
        let built = Arc::new(loader::load_index(&self.source, self.folding)?);

        let mut slot = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot.as_ref() {
            return Ok(Arc::clone(existing));
        }
        *slot = Some(Arc::clone(&built));
        drop(slot);

        tracing::info!(
            count = built.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built airport index"
        );
        Ok(built)
    }

    /// Drops the cached dataset. Mostly useful for test isolation.
    pub fn clear(&self) {
        let mut slot = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            tracing::debug!("Cleared airport index");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Current index, if loaded. Never blocks on a load in progress.
    pub(crate) fn snapshot(&self) -> Option<Arc<AirportIndex>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
