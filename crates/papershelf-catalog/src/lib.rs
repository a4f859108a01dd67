//! Papershelf Catalog Layer
//!
//! Append-only JSON catalog of classified papers.
//!
//! # Architecture
//!
//! The catalog is one pretty-printed JSON array of `PaperRecord` objects
//! at a fixed path. It is expected to live under version control, so saves
//! must be stable in layout and atomic on disk (write to a temp file in
//! the same directory, then rename over the target).
//!
//! # Examples
//!
//! ```no_run
//! use papershelf_catalog::JsonCatalog;
//!
//! let mut catalog = JsonCatalog::load("data/papers.json").unwrap();
//! assert!(!catalog.contains("unseen.pdf"));
//! ```

#![warn(missing_docs)]

use papershelf_domain::PaperRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record with this filename is already cataloged
    #[error("Duplicate filename in catalog: {0}")]
    DuplicateFilename(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic replace of the catalog file failed
    #[error("Failed to persist catalog: {0}")]
    Persist(String),
}

/// JSON-file-backed implementation of the catalog
///
/// Owns the in-memory record list for the duration of a pipeline run.
/// Mutation is append-only; `save` rewrites the whole file atomically.
pub struct JsonCatalog {
    path: PathBuf,
    records: Vec<PaperRecord>,
}

impl JsonCatalog {
    /// Load the catalog from `path`
    ///
    /// A missing file is not an error: it yields an empty catalog, which
    /// is the normal state on first run. A present-but-malformed file is
    /// an error — silently discarding an existing catalog would lose data.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();

        let records = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };

        Ok(Self { path, records })
    }

    /// Whether a record with this filename is already cataloged
    pub fn contains(&self, filename: &str) -> bool {
        self.records.iter().any(|r| r.filename == filename)
    }

    /// Append a record
    ///
    /// Fails with `DuplicateFilename` if the filename is already present.
    /// The pipeline pre-filters duplicates, so hitting this is a bug
    /// upstream, but the catalog enforces its own invariant regardless.
    pub fn append(&mut self, record: PaperRecord) -> Result<(), CatalogError> {
        if self.contains(&record.filename) {
            return Err(CatalogError::DuplicateFilename(record.filename));
        }
        self.records.push(record);
        Ok(())
    }

    /// Persist the catalog atomically
    ///
    /// Serializes pretty-printed (stable field order, trailing newline) so
    /// diffs stay readable, writes to a temp file in the target directory,
    /// and renames it over the catalog path. A crash mid-save leaves the
    /// previous catalog intact.
    pub fn save(&self) -> Result<(), CatalogError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut contents = serde_json::to_string_pretty(&self.records)?;
        contents.push('\n');

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| CatalogError::Persist(e.to_string()))?;

        Ok(())
    }

    /// All records, in append order
    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    /// Number of cataloged records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
