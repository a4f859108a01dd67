//! Error types for ingestion

use thiserror::Error;

/// Errors that can occur while ingesting a document
#[derive(Error, Debug)]
pub enum IngestError {
    /// Classification service unreachable or returned an error
    #[error("Classification service error: {0}")]
    Service(String),

    /// Classifier output could not be parsed as a classification record
    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),

    /// Category label empty or unsafe after normalization
    #[error("Invalid category label: {0}")]
    InvalidCategory(String),

    /// A different file with the same name already sits at the archive
    /// destination
    #[error("Archive conflict: {0} already exists with different content")]
    ArchiveConflict(String),

    /// Classification call exceeded the configured time budget
    #[error("Classification timeout")]
    Timeout,

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog error (duplicate append or persistence failure)
    #[error("Catalog error: {0}")]
    Catalog(#[from] papershelf_catalog::CatalogError),
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::MalformedResponse(e.to_string())
    }
}
