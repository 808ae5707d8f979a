//! Result and failure types for extraction

use rawi_domain::AuthorRecord;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// The two attempt phases of the extraction protocol.
///
/// A section is extracted with at most two generation calls: the primary
/// attempt with the full schema and full content, then (only after a
/// primary failure) the fallback attempt with the simplified schema and a
/// content excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    /// Full-schema prompt over the whole section content
    Primary,
    /// Simplified-schema prompt over a content excerpt
    Fallback,
}

impl fmt::Display for AttemptPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptPhase::Primary => write!(f, "primary"),
            AttemptPhase::Fallback => write!(f, "fallback"),
        }
    }
}

/// Why a single attempt produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The generation service call failed (network, auth, empty, timeout)
    Service(String),
    /// The service responded, but no valid JSON could be recovered
    NoJson,
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Service(reason) => write!(f, "generation service error: {}", reason),
            AttemptError::NoJson => write!(f, "no valid JSON recovered from response"),
        }
    }
}

/// A successfully extracted record for one section.
#[derive(Debug, Clone)]
pub struct Extracted {
    /// Section identifier the record belongs to
    pub identifier: String,

    /// The recovered record as parsed JSON
    pub value: Value,

    /// Canonical serialization of `value` (stable indent, unescaped
    /// Unicode)
    pub canonical: String,

    /// Best-effort typed view; `None` when the value does not fit the
    /// schema (the record is still valid JSON and is kept)
    pub record: Option<AuthorRecord>,

    /// Which attempt phase produced the record
    pub phase: AttemptPhase,
}

/// Terminal per-identifier failure: both attempts produced no record.
///
/// This is an explicit absence-of-result signal, not a crash; callers
/// report it and continue with the remaining identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    /// Section identifier that failed
    pub identifier: String,

    /// What went wrong on the primary attempt
    pub primary: AttemptError,

    /// What went wrong on the fallback attempt
    pub fallback: AttemptError,
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no valid structured data for '{}' (primary: {}; fallback: {})",
            self.identifier, self.primary, self.fallback
        )
    }
}

impl std::error::Error for ExtractionFailure {}

/// One section successfully processed by the pipeline.
#[derive(Debug, Clone)]
pub struct SectionSuccess {
    /// Section identifier
    pub identifier: String,

    /// The extracted record
    pub value: Value,

    /// Canonical serialization of the record
    pub canonical: String,

    /// Which attempt phase produced the record
    pub phase: AttemptPhase,

    /// Where the record store wrote the record, when persistence worked
    pub saved_to: Option<PathBuf>,
}

/// A record that extracted but did not persist.
#[derive(Debug, Clone)]
pub struct PersistenceWarning {
    /// Section identifier affected
    pub identifier: String,

    /// What the store or artifact writer reported
    pub reason: String,
}

/// Outcome of one pipeline run over a document.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Author sections found by the segmenter
    pub sections_found: usize,

    /// Sections that yielded a record, in document order
    pub successes: Vec<SectionSuccess>,

    /// Sections where both attempts failed, in document order
    pub failures: Vec<ExtractionFailure>,

    /// Records that extracted but hit disk-write problems
    pub persistence_warnings: Vec<PersistenceWarning>,

    /// Where the aggregate export was written, when configured
    pub export_path: Option<PathBuf>,
}

impl PipelineReport {
    /// True when the segmenter found nothing to process.
    pub fn is_empty(&self) -> bool {
        self.sections_found == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_names_identifier_and_phases() {
        let failure = ExtractionFailure {
            identifier: "5 - القاضي".to_string(),
            primary: AttemptError::NoJson,
            fallback: AttemptError::Service("timed out".to_string()),
        };
        let text = failure.to_string();
        assert!(text.contains("5 - القاضي"));
        assert!(text.contains("no valid JSON"));
        assert!(text.contains("timed out"));
    }

    #[test]
    fn empty_report_is_empty() {
        assert!(PipelineReport::default().is_empty());
    }
}
