//! Papershelf Domain Layer
//!
//! Core data model for the paper ingestion pipeline and the trait
//! interfaces the infrastructure layers implement.
//!
//! ## Key Concepts
//!
//! - **PaperRecord**: one catalog entry — a classified, archived paper
//! - **ClassifyRequest**: a document plus the rubric prompt to judge it by
//! - **DocumentClassifier**: the seam between the pipeline and whatever
//!   LLM service produces the classification text
//!
//! Infrastructure implementations (HTTP classifier, JSON catalog) live in
//! other crates; this crate holds only the shared vocabulary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod traits;

// Re-exports for convenience
pub use record::PaperRecord;
pub use traits::{ClassifyRequest, DocumentClassifier};
