//! Rawi Record Store
//!
//! JSON-file persistence for author records with a queryable index.
//!
//! Each record is written to `<storage_dir>/<safe-name>.json`, where the
//! safe name is derived deterministically from the author identifier.
//! A single `index.json` holds one [`IndexEntry`] per identifier with the
//! summary fields used for listing and search.
//!
//! The index is a derived cache: a corrupt or unreadable `index.json` is
//! reinitialized empty instead of crashing, and record files on disk are
//! never touched by that recovery. Writers must be serialized; the
//! `&mut self` discipline on [`JsonFileStore::save`] enforces that within
//! a process.

#![warn(missing_docs)]

use rawi_domain::naming::storage_key;
use rawi_domain::record::IndexEntry;
use rawi_domain::traits::RecordStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record or export could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk shape of `index.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct IndexFile {
    #[serde(default)]
    authors: BTreeMap<String, IndexEntry>,

    /// Unix seconds of the last successful save
    #[serde(default)]
    last_updated: u64,
}

/// JSON-file record store.
pub struct JsonFileStore {
    storage_dir: PathBuf,
}

impl JsonFileStore {
    /// Open (or initialize) a store rooted at `storage_dir`.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.into();
        fs::create_dir_all(&storage_dir)?;

        let store = Self { storage_dir };
        if !store.index_path().exists() {
            store.write_index(&IndexFile::default())?;
        }
        Ok(store)
    }

    /// Directory the store writes into.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    fn index_path(&self) -> PathBuf {
        self.storage_dir.join("index.json")
    }

    fn record_path(&self, identifier: &str) -> PathBuf {
        self.storage_dir.join(format!("{}.json", storage_key(identifier)))
    }

    /// Read the index, reinitializing it empty when missing or corrupt.
    fn load_index(&self) -> IndexFile {
        let path = self.index_path();
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Could not read index {}: {}", path.display(), e);
                }
                return IndexFile::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(index) => index,
            Err(e) => {
                // Record files remain the source of truth; the cache
                // repopulates on subsequent saves.
                warn!("Corrupt index {}: {}; reinitializing empty", path.display(), e);
                IndexFile::default()
            }
        }
    }

    fn write_index(&self, index: &IndexFile) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(index)?;
        fs::write(self.index_path(), contents)?;
        Ok(())
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

impl RecordStore for JsonFileStore {
    type Error = StoreError;

    fn save(&mut self, identifier: &str, record: &Value) -> Result<PathBuf, Self::Error> {
        let path = self.record_path(identifier);
        let contents = serde_json::to_string_pretty(record)?;
        fs::write(&path, contents)?;

        let mut index = self.load_index();
        let entry = IndexEntry::project(
            identifier,
            record,
            path.to_string_lossy(),
            Self::now(),
        );
        index.authors.insert(identifier.to_string(), entry);
        index.last_updated = Self::now();
        self.write_index(&index)?;

        Ok(path)
    }

    fn get(&self, identifier: &str) -> Result<Option<Value>, Self::Error> {
        let index = self.load_index();

        // Prefer the indexed path; fall back to the derived file name so
        // records survive a reinitialized index.
        let path = index
            .authors
            .get(identifier)
            .map(|entry| PathBuf::from(&entry.file_path))
            .filter(|p| p.exists())
            .unwrap_or_else(|| self.record_path(identifier));

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn search(&self, term: &str) -> Result<Vec<IndexEntry>, Self::Error> {
        let index = self.load_index();
        Ok(index
            .authors
            .values()
            .filter(|entry| entry.matches(term))
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<IndexEntry>, Self::Error> {
        let index = self.load_index();
        Ok(index.authors.values().cloned().collect())
    }

    fn export_all(&self, destination: &Path) -> Result<PathBuf, Self::Error> {
        let index = self.load_index();

        let mut all: serde_json::Map<String, Value> = serde_json::Map::new();
        for identifier in index.authors.keys() {
            if let Some(record) = self.get(identifier)? {
                all.insert(identifier.clone(), record);
            }
        }

        let contents = serde_json::to_string_pretty(&Value::Object(all))?;
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(destination, contents)?;
        Ok(destination.to_path_buf())
    }
}
