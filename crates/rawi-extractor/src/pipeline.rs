//! Document-order extraction pipeline
//!
//! Drives a whole document through segment -> extract -> persist ->
//! export. Sections are processed sequentially in document order; no
//! section's outcome depends on another's, and every per-identifier
//! failure - extraction or persistence - is recorded distinctly and never
//! aborts the rest of the run.

use crate::artifacts::{write_record_json, write_section_text};
use crate::error::ExtractorError;
use crate::protocol::Extractor;
use crate::segment::segment;
use crate::types::{PersistenceWarning, PipelineReport, SectionSuccess};
use rawi_domain::traits::{GenerationProvider, RecordStore};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Segments a document and extracts, persists and exports its records.
pub struct Pipeline<P, S>
where
    P: GenerationProvider,
    S: RecordStore,
{
    extractor: Extractor<P>,
    store: S,
    artifacts_dir: Option<PathBuf>,
    export_path: Option<PathBuf>,
}

impl<P, S> Pipeline<P, S>
where
    P: GenerationProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
    S: RecordStore,
    S::Error: std::fmt::Display,
{
    /// Create a pipeline over an extractor and a record store.
    pub fn new(extractor: Extractor<P>, store: S) -> Self {
        Self {
            extractor,
            store,
            artifacts_dir: None,
            export_path: None,
        }
    }

    /// Also write per-identifier `.txt`/`.json` artifacts into `dir`.
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = Some(dir.into());
        self
    }

    /// Also write the aggregate export of this run to `path`.
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    /// Process raw document text end to end.
    ///
    /// Returns a report listing every success and every distinct
    /// per-identifier failure. Zero sections found is a graceful empty
    /// report, not an error.
    pub async fn run(&mut self, text: &str) -> Result<PipelineReport, ExtractorError> {
        let sections = segment(text);

        let mut report = PipelineReport {
            sections_found: sections.len(),
            ..Default::default()
        };

        if sections.is_empty() {
            info!("No author sections found in document");
            return Ok(report);
        }

        info!("Found {} author sections", sections.len());

        // Later duplicates of an identifier overwrite earlier ones here,
        // matching the store's upsert behavior.
        let mut aggregate: serde_json::Map<String, Value> = serde_json::Map::new();

        for section in &sections {
            if let Some(dir) = &self.artifacts_dir {
                if let Err(e) = write_section_text(dir, &section.identifier, &section.content) {
                    warn!("Could not write content artifact for '{}': {}", section.identifier, e);
                    report.persistence_warnings.push(PersistenceWarning {
                        identifier: section.identifier.clone(),
                        reason: format!("content artifact: {}", e),
                    });
                }
            }

            match self.extractor.extract(&section.identifier, &section.content).await {
                Ok(extracted) => {
                    aggregate.insert(extracted.identifier.clone(), extracted.value.clone());

                    let saved_to = match self.store.save(&extracted.identifier, &extracted.value) {
                        Ok(path) => Some(path),
                        Err(e) => {
                            warn!("Could not persist '{}': {}", extracted.identifier, e);
                            report.persistence_warnings.push(PersistenceWarning {
                                identifier: extracted.identifier.clone(),
                                reason: e.to_string(),
                            });
                            None
                        }
                    };

                    if let Some(dir) = &self.artifacts_dir {
                        if let Err(e) =
                            write_record_json(dir, &extracted.identifier, &extracted.canonical)
                        {
                            warn!(
                                "Could not write record artifact for '{}': {}",
                                extracted.identifier, e
                            );
                            report.persistence_warnings.push(PersistenceWarning {
                                identifier: extracted.identifier.clone(),
                                reason: format!("record artifact: {}", e),
                            });
                        }
                    }

                    report.successes.push(SectionSuccess {
                        identifier: extracted.identifier,
                        value: extracted.value,
                        canonical: extracted.canonical,
                        phase: extracted.phase,
                        saved_to,
                    });
                }
                Err(failure) => {
                    warn!("{}", failure);
                    report.failures.push(failure);
                }
            }
        }

        if let Some(path) = &self.export_path {
            if aggregate.is_empty() {
                info!("No records extracted; skipping aggregate export");
            } else {
                let contents = serde_json::to_string_pretty(&Value::Object(aggregate))?;
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(path, contents)?;
                report.export_path = Some(path.clone());
            }
        }

        info!(
            "Pipeline complete: {} extracted, {} failed, {} persistence warnings",
            report.successes.len(),
            report.failures.len(),
            report.persistence_warnings.len()
        );

        Ok(report)
    }

    /// The record store backing this pipeline.
    pub fn store(&self) -> &S {
        &self.store
    }
}
