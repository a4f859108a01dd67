//! File the archived copy under its category directory

use crate::error::IngestError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where an archived document ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedPaper {
    /// Absolute/on-disk destination path
    pub path: PathBuf,

    /// Path relative to the archive root, `/`-joined for link rendering
    pub relative_path: String,
}

/// Moves classified documents into per-category directories under a fixed
/// archive root.
pub struct ArchiveOrganizer {
    root: PathBuf,
}

impl ArchiveOrganizer {
    /// Create an organizer rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The archive root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Move `document` into the category's directory
    ///
    /// The category directory is created if absent. If the destination
    /// already holds a file of the same name:
    ///
    /// - identical bytes: treated as an already-archived copy — the
    ///   inbound source is removed and the existing file is returned
    /// - differing bytes: `ArchiveConflict`, nothing is mutated
    pub fn archive(&self, document: &Path, category: &str) -> Result<ArchivedPaper, IngestError> {
        let file_name = document
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                IngestError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("document has no usable filename: {}", document.display()),
                ))
            })?
            .to_string();

        let category_dir = self.root.join(category);
        fs::create_dir_all(&category_dir)?;

        let destination = category_dir.join(&file_name);

        if destination.exists() {
            let incoming = fs::read(document)?;
            let existing = fs::read(&destination)?;
            if incoming != existing {
                return Err(IngestError::ArchiveConflict(file_name));
            }
            // Already archived; drop the redundant inbound copy
            debug!(file = %file_name, "identical copy already archived, removing inbound");
            fs::remove_file(document)?;
        } else {
            fs::rename(document, &destination)?;
        }

        Ok(ArchivedPaper {
            relative_path: format!("{}/{}", category, file_name),
            path: destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_pdf(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_archive_moves_into_category_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let organizer = ArchiveOrganizer::new(tmp.path().join("papers"));
        let doc = write_pdf(tmp.path(), "a.pdf", b"%PDF-a");

        let archived = organizer.archive(&doc, "Systems and Scale").unwrap();

        assert!(!doc.exists());
        assert!(archived.path.exists());
        assert_eq!(archived.relative_path, "Systems and Scale/a.pdf");
        assert_eq!(fs::read(&archived.path).unwrap(), b"%PDF-a");
    }

    #[test]
    fn test_archive_creates_category_dir_idempotently() {
        let tmp = tempfile::tempdir().unwrap();
        let organizer = ArchiveOrganizer::new(tmp.path().join("papers"));

        let doc1 = write_pdf(tmp.path(), "a.pdf", b"%PDF-a");
        let doc2 = write_pdf(tmp.path(), "b.pdf", b"%PDF-b");
        organizer.archive(&doc1, "Semantic Reasoning").unwrap();
        organizer.archive(&doc2, "Semantic Reasoning").unwrap();

        let dir = tmp.path().join("papers").join("Semantic Reasoning");
        assert!(dir.join("a.pdf").exists());
        assert!(dir.join("b.pdf").exists());
    }

    #[test]
    fn test_archive_identical_existing_is_noop_success() {
        let tmp = tempfile::tempdir().unwrap();
        let organizer = ArchiveOrganizer::new(tmp.path().join("papers"));

        let doc = write_pdf(tmp.path(), "a.pdf", b"%PDF-a");
        organizer.archive(&doc, "Systems and Scale").unwrap();

        // Same name, same bytes lands again
        let doc_again = write_pdf(tmp.path(), "a.pdf", b"%PDF-a");
        let archived = organizer.archive(&doc_again, "Systems and Scale").unwrap();

        assert!(!doc_again.exists());
        assert!(archived.path.exists());
    }

    #[test]
    fn test_archive_conflict_differing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let organizer = ArchiveOrganizer::new(tmp.path().join("papers"));

        let doc = write_pdf(tmp.path(), "a.pdf", b"%PDF-a");
        organizer.archive(&doc, "Systems and Scale").unwrap();

        let doc_conflicting = write_pdf(tmp.path(), "a.pdf", b"%PDF-DIFFERENT");
        let result = organizer.archive(&doc_conflicting, "Systems and Scale");

        assert!(matches!(result, Err(IngestError::ArchiveConflict(_))));
        // Neither side mutated
        assert!(doc_conflicting.exists());
        let dest = tmp.path().join("papers/Systems and Scale/a.pdf");
        assert_eq!(fs::read(dest).unwrap(), b"%PDF-a");
    }
}
