//! Rawi Extractor
//!
//! Turns raw Arabic biographical-dictionary text into structured author
//! records via a text-generation service.
//!
//! # Architecture
//!
//! ```text
//! Text -> Segmenter -> sections -> Protocol -> LLM -> Recovery -> Records -> Store
//! ```
//!
//! # Key Features
//!
//! - **Segmentation**: ordinal+name markers delimit per-author spans,
//!   with false-positive suppression for page ranges and references
//! - **Two-Phase Protocol**: a full-schema attempt, then one stricter
//!   simplified-schema fallback; failures are explicit per-identifier
//!   results, never aborts
//! - **JSON Recovery**: locates valid JSON in prose-wrapped, fenced or
//!   padded responses
//! - **Canonicalization**: stable, human-diffable JSON with Arabic script
//!   left unescaped
//!
//! # Example Usage
//!
//! ```no_run
//! use rawi_extractor::{Extractor, ExtractorConfig, Pipeline};
//! use rawi_llm::MockProvider;
//! use rawi_store::JsonFileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"author": {"full_name": "القاضي عياض"}}"#);
//! let extractor = Extractor::new(provider, ExtractorConfig::default());
//! let store = JsonFileStore::new("authors_data")?;
//!
//! let mut pipeline = Pipeline::new(extractor, store)
//!     .with_export_path("all_authors.json");
//!
//! let report = pipeline.run("5- القاضي\nنص السيرة").await?;
//! println!("Extracted: {}", report.successes.len());
//! println!("Failed: {}", report.failures.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod artifacts;
mod config;
mod error;
mod pipeline;
mod prompt;
mod protocol;
mod recovery;
mod segment;
mod types;

pub use artifacts::{write_record_json, write_section_text};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use pipeline::Pipeline;
pub use prompt::PromptBuilder;
pub use protocol::Extractor;
pub use recovery::{canonicalize, recover};
pub use segment::segment;
pub use types::{
    AttemptError, AttemptPhase, Extracted, ExtractionFailure, PersistenceWarning, PipelineReport,
    SectionSuccess,
};
