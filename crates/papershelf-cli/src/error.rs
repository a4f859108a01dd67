//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key supplied
    #[error("No API key. Set GEMINI_API_KEY or pass --api-key.")]
    MissingApiKey,

    /// Ingestion error
    #[error("Ingestion error: {0}")]
    Ingest(#[from] papershelf_ingest::IngestError),

    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] papershelf_catalog::CatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
