//! Error types for the extractor

use thiserror::Error;

/// Hard errors from the extraction pipeline.
///
/// Per-identifier conditions (a failed generation attempt, unrecoverable
/// JSON, a record that would not persist) are not represented here; they
/// are reported through [`crate::types::ExtractionFailure`] and the
/// pipeline report so one author's failure never aborts the rest.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure writing exports or artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure on an export
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
