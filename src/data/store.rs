use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    data::filter::distinct_in_order,
    data::record::{Record, parse_records},
    foundation::error::{ReelError, ReelResult},
};

/// Where the dataset bytes come from.
pub trait DataSource {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    /// Fetch the raw CSV bytes.
    fn fetch(&self) -> ReelResult<Vec<u8>>;
}

/// Dataset read from the filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> ReelResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            ReelError::unavailable(format!("read dataset '{}': {e}", self.path.display()))
        })
    }
}

/// Dataset held in memory (embedded fixtures, tests).
#[derive(Clone, Debug)]
pub struct BytesSource {
    label: String,
    bytes: Arc<[u8]>,
}

impl BytesSource {
    /// Source serving a copy of `bytes`, reported as `label`.
    pub fn new(label: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

impl DataSource for BytesSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn fetch(&self) -> ReelResult<Vec<u8>> {
        Ok(self.bytes.to_vec())
    }
}

/// Immutable, cheaply cloneable set of loaded records.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Wrap already-parsed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Fetch and parse `source`.
    #[tracing::instrument(skip(source), fields(origin = %source.describe()))]
    pub fn load(source: &dyn DataSource) -> ReelResult<Self> {
        let bytes = source.fetch()?;
        let records = parse_records(bytes.as_slice())?;
        tracing::debug!(records = records.len(), "dataset loaded");
        Ok(Self::from_records(records))
    }

    /// All records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct release years in first-occurrence order; rows without a year are skipped.
    pub fn years(&self) -> Vec<i32> {
        distinct_in_order(self.records.iter().filter_map(|r| r.year))
    }

    /// Distinct production companies in first-occurrence order.
    pub fn companies(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().map(|r| r.company.clone()))
    }

    /// Distinct genres in first-occurrence order.
    pub fn genres(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().map(|r| r.genre.clone()))
    }
}

/// Single-flight cache in front of a [`DataSource`].
///
/// The first successful [`SharedRecords::get`] loads the dataset; later calls
/// share the same [`RecordStore`]. Failed loads are not cached.
pub struct SharedRecords {
    source: Box<dyn DataSource + Send + Sync>,
    slot: Mutex<Option<RecordStore>>,
}

impl SharedRecords {
    /// Cache in front of `source`. Nothing is fetched until the first `get`.
    pub fn new(source: impl DataSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            slot: Mutex::new(None),
        }
    }

    /// The cached store, loading it on first use.
    pub fn get(&self) -> ReelResult<RecordStore> {
        // The lock is held across the load so concurrent callers wait for one fetch.
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ReelError::evaluation("record cache lock poisoned"))?;
        if let Some(store) = slot.as_ref() {
            tracing::trace!(source = %self.source.describe(), "record cache hit");
            return Ok(store.clone());
        }
        let store = RecordStore::load(self.source.as_ref())?;
        *slot = Some(store.clone());
        Ok(store)
    }

    /// True once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.slot.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl std::fmt::Debug for SharedRecords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRecords")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/store.rs"]
mod tests;
