//! Result and intermediate types for ingestion

/// Parsed-but-not-yet-normalized classification of one document
///
/// This is the transient shape between the classifier's raw text and a
/// cataloged `PaperRecord`; it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationDraft {
    /// Full paper title
    pub title: String,

    /// Raw category label, possibly numbered/annotated
    pub category: String,

    /// One-sentence summary (empty if the classifier omitted it)
    pub summary: String,

    /// Classifier's stated reason for the category, if any
    pub justification: Option<String>,

    /// Key concepts in the classifier's order
    pub key_concepts: Vec<String>,
}

/// Why a document failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Classification service unreachable or errored
    Service,
    /// Response could not be parsed
    Parse,
    /// Category label empty or unsafe
    Category,
    /// Destination collision with differing content
    ArchiveConflict,
    /// Filesystem error outside the archive move itself
    Io,
    /// Catalog integrity violation (defense-in-depth duplicate catch)
    Catalog,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureReason::Service => "service-error",
            FailureReason::Parse => "parse-error",
            FailureReason::Category => "category-error",
            FailureReason::ArchiveConflict => "archive-conflict",
            FailureReason::Io => "io-error",
            FailureReason::Catalog => "catalog-error",
        };
        f.write_str(s)
    }
}

/// Terminal state of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Archived and appended to the catalog
    Recorded {
        /// Canonical category the document was filed under
        category: String,
    },
    /// Already cataloged; inbound copy discarded
    Skipped,
    /// Left in the inbox for a future run
    Failed {
        /// Why the document failed
        reason: FailureReason,
        /// Diagnostic detail for the log
        detail: String,
    },
}

/// Outcome for one discovered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    /// Document filename
    pub filename: String,

    /// Terminal state reached
    pub status: DocumentStatus,
}

/// Result of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Per-document outcomes in discovery order
    pub outcomes: Vec<DocumentOutcome>,
}

impl IngestReport {
    /// Number of documents archived and recorded
    pub fn recorded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, DocumentStatus::Recorded { .. }))
            .count()
    }

    /// Number of duplicate documents skipped
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, DocumentStatus::Skipped))
            .count()
    }

    /// Number of documents that failed
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, DocumentStatus::Failed { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::Service.to_string(), "service-error");
        assert_eq!(FailureReason::Parse.to_string(), "parse-error");
        assert_eq!(FailureReason::Category.to_string(), "category-error");
        assert_eq!(
            FailureReason::ArchiveConflict.to_string(),
            "archive-conflict"
        );
    }

    #[test]
    fn test_report_counts() {
        let report = IngestReport {
            outcomes: vec![
                DocumentOutcome {
                    filename: "a.pdf".to_string(),
                    status: DocumentStatus::Recorded {
                        category: "Systems and Scale".to_string(),
                    },
                },
                DocumentOutcome {
                    filename: "b.pdf".to_string(),
                    status: DocumentStatus::Skipped,
                },
                DocumentOutcome {
                    filename: "c.pdf".to_string(),
                    status: DocumentStatus::Failed {
                        reason: FailureReason::Parse,
                        detail: "bad json".to_string(),
                    },
                },
            ],
        };

        assert_eq!(report.recorded(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
    }
}
