//! Rawi Domain Layer
//!
//! Core data model for the Rawi biographical extraction pipeline.
//! This crate defines the fundamental value objects and the trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **AuthorSection**: a span of source text attributed to one author
//!   marker ("ordinal - name") found in a biographical dictionary
//! - **AuthorRecord**: the structured biographical schema produced by the
//!   extraction protocol; every optional field is an explicit `Option`
//! - **IndexEntry**: a lightweight summary projection of a stored record,
//!   enabling listing and search without loading full records
//! - **Naming**: deterministic filesystem-safe transforms of author
//!   identifiers for record files and download artifacts
//!
//! ## Architecture
//!
//! - Value objects and pure transforms only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for the generation service and the record store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod naming;
pub mod record;
pub mod section;
pub mod traits;

// Re-exports for convenience
pub use record::{AuthorProfile, AuthorRecord, HadithRef, IndexEntry, PlaceRef, TravelEntry};
pub use section::AuthorSection;
