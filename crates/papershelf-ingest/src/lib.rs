//! Papershelf Ingestion
//!
//! Turns an inbox of PDF papers into a categorized archive plus catalog
//! entries, using an external LLM classifier.
//!
//! # Architecture
//!
//! ```text
//! Inbox → Classifier → Parser → Normalizer → Archive → Catalog
//! ```
//!
//! # Key Features
//!
//! - **Defensive response parsing**: tolerates fenced or bare JSON output
//! - **Category normalization**: strips rubric numbering and nicknames,
//!   yielding a filesystem-safe directory name
//! - **Idempotent re-runs**: cataloged filenames are skipped, identical
//!   archived copies are a no-op
//! - **Batch isolation**: one document's failure never aborts the run
//!
//! # Example Usage
//!
//! ```no_run
//! use papershelf_ingest::{IngestConfig, IngestionPipeline};
//! use papershelf_catalog::JsonCatalog;
//! use papershelf_llm::MockClassifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IngestConfig::default();
//! let classifier = MockClassifier::new(r#"{"title": "T", "category": "C"}"#);
//! let catalog = JsonCatalog::load(&config.catalog_path)?;
//!
//! let mut pipeline = IngestionPipeline::new(classifier, catalog, config);
//! let report = pipeline.run().await?;
//!
//! println!("Recorded: {}", report.recorded());
//! println!("Skipped:  {}", report.skipped());
//! println!("Failed:   {}", report.failed());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod archive;
mod category;
mod config;
mod error;
mod parser;
mod pipeline;
mod prompt;
mod types;

pub use archive::{ArchiveOrganizer, ArchivedPaper};
pub use category::normalize_category;
pub use config::IngestConfig;
pub use error::IngestError;
pub use parser::parse_classifier_response;
pub use pipeline::IngestionPipeline;
pub use prompt::{RubricPrompt, DEFAULT_RUBRIC};
pub use types::{ClassificationDraft, DocumentOutcome, DocumentStatus, FailureReason, IngestReport};
