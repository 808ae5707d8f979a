//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates (`rawi-llm`,
//! `rawi-store`).

use crate::record::IndexEntry;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Trait for the text-generation service boundary.
///
/// The service is a black box: given a prompt, it returns free-form text.
/// Any failure (network, auth, empty response) is reported through the
/// associated error type and is treated by callers as "no usable text
/// from this attempt", never as a pipeline abort.
pub trait GenerationProvider {
    /// Error type for generation operations
    type Error;

    /// Generate a text completion for the given prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for persisting structured records with a queryable index.
///
/// Implementations key records by author identifier, deriving file
/// locations deterministically from it. Every successful save upserts an
/// [`IndexEntry`]; the index is a derived cache and is repopulated by
/// later saves if it is lost.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Persist a record and upsert its index entry, returning the
    /// location the record was written to.
    fn save(&mut self, identifier: &str, record: &Value) -> Result<PathBuf, Self::Error>;

    /// Fetch a stored record by identifier.
    fn get(&self, identifier: &str) -> Result<Option<Value>, Self::Error>;

    /// Case-insensitive search against identifier or full name.
    fn search(&self, term: &str) -> Result<Vec<IndexEntry>, Self::Error>;

    /// Every index entry known to the store.
    fn list_all(&self) -> Result<Vec<IndexEntry>, Self::Error>;

    /// Write a single JSON object mapping every known identifier to its
    /// full record, returning the location written.
    fn export_all(&self, destination: &Path) -> Result<PathBuf, Self::Error>;
}
