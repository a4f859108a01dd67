//! Per-document ingestion state machine

use crate::archive::ArchiveOrganizer;
use crate::category::normalize_category;
use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::parser::parse_classifier_response;
use crate::prompt::RubricPrompt;
use crate::types::{DocumentOutcome, DocumentStatus, FailureReason, IngestReport};
use papershelf_catalog::{CatalogError, JsonCatalog};
use papershelf_domain::{ClassifyRequest, DocumentClassifier, PaperRecord};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Drives each inbound document through
/// `Discovered -> Classified -> Parsed -> Normalized -> Archived ->
/// Recorded`, or to `Skipped`/`Failed`.
///
/// The pipeline owns the in-memory catalog for the duration of a run and
/// persists it exactly once at the end. Per-document failures are
/// isolated; only catalog load/save failures abort the run.
pub struct IngestionPipeline<C>
where
    C: DocumentClassifier,
{
    classifier: Arc<C>,
    catalog: JsonCatalog,
    archiver: ArchiveOrganizer,
    prompt: RubricPrompt,
    config: IngestConfig,
}

impl<C> IngestionPipeline<C>
where
    C: DocumentClassifier + Send + Sync + 'static,
    C::Error: std::fmt::Display,
{
    /// Create a new pipeline
    ///
    /// The catalog must already be loaded (so a corrupt catalog file stops
    /// the run before anything is classified or moved).
    pub fn new(classifier: C, catalog: JsonCatalog, config: IngestConfig) -> Self {
        let archiver = ArchiveOrganizer::new(&config.archive_dir);
        let prompt = config
            .rubric
            .clone()
            .map(RubricPrompt::custom)
            .unwrap_or_default();

        Self {
            classifier: Arc::new(classifier),
            catalog,
            archiver,
            prompt,
            config,
        }
    }

    /// Process every inbound document, then persist the catalog
    pub async fn run(&mut self) -> Result<IngestReport, IngestError> {
        let documents = self.discover()?;

        info!(
            inbox = %self.config.inbox_dir.display(),
            count = documents.len(),
            "starting ingestion run"
        );

        let mut report = IngestReport::default();

        for document in documents {
            let filename = document
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            let status = self.process_document(&document, &filename).await;

            match &status {
                DocumentStatus::Recorded { category } => {
                    info!(file = %filename, category = %category, "filed");
                }
                DocumentStatus::Skipped => {
                    info!(file = %filename, "already cataloged, skipped");
                }
                DocumentStatus::Failed { reason, detail } => {
                    warn!(file = %filename, reason = %reason, detail = %detail, "failed");
                }
            }

            report.outcomes.push(DocumentOutcome { filename, status });
        }

        // Save failure is fatal: a lost catalog write corrupts durable
        // state, unlike any single document's failure.
        self.catalog.save()?;

        info!(
            recorded = report.recorded(),
            skipped = report.skipped(),
            failed = report.failed(),
            "ingestion run complete"
        );

        Ok(report)
    }

    /// The in-memory catalog (records appended so far this run included)
    pub fn catalog(&self) -> &JsonCatalog {
        &self.catalog
    }

    /// Enumerate inbound PDFs in sorted name order
    ///
    /// Sentinel entries (dotfiles such as `.gitkeep`), non-PDF files, and
    /// subdirectories are ignored. A missing inbox means an empty run, not
    /// an error.
    fn discover(&self) -> Result<Vec<PathBuf>, IngestError> {
        let inbox = &self.config.inbox_dir;
        if !inbox.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(inbox)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if !name.to_ascii_lowercase().ends_with(".pdf") {
                continue;
            }
            documents.push(path);
        }

        documents.sort();
        Ok(documents)
    }

    /// Run one document to a terminal state
    async fn process_document(&mut self, document: &Path, filename: &str) -> DocumentStatus {
        // Dedup guard: a cataloged filename means this exact document was
        // already processed; the inbound copy is redundant.
        if self.catalog.contains(filename) {
            if let Err(e) = fs::remove_file(document) {
                return DocumentStatus::Failed {
                    reason: FailureReason::Io,
                    detail: format!("failed to remove duplicate inbound copy: {}", e),
                };
            }
            return DocumentStatus::Skipped;
        }

        match self.ingest_document(document, filename).await {
            Ok(category) => DocumentStatus::Recorded { category },
            Err(e) => DocumentStatus::Failed {
                reason: failure_reason(&e),
                detail: e.to_string(),
            },
        }
    }

    /// Classify, parse, normalize, archive, and record one document
    async fn ingest_document(
        &mut self,
        document: &Path,
        filename: &str,
    ) -> Result<String, IngestError> {
        let pdf_bytes = fs::read(document)?;
        let request = ClassifyRequest::new(filename, pdf_bytes, self.prompt.render());

        let response = self.call_classifier(request).await?;
        debug!(file = %filename, chars = response.len(), "classifier response received");

        let draft = parse_classifier_response(&response)?;
        let category = normalize_category(&draft.category)?;

        let archived = self.archiver.archive(document, &category)?;

        let record = PaperRecord {
            title: draft.title,
            category: category.clone(),
            summary: draft.summary,
            justification: draft.justification,
            key_concepts: draft.key_concepts,
            filename: filename.to_string(),
            reference_link: format!(
                "{}/{}",
                self.config.reference_base_url.trim_end_matches('/'),
                archived.relative_path
            ),
        };

        self.catalog.append(record)?;
        Ok(category)
    }

    /// Invoke the blocking classifier off the async runtime
    ///
    /// The classifier call is the run's only suspension point. When a time
    /// budget is configured, expiry counts as a service failure for this
    /// document; the document stays in the inbox.
    async fn call_classifier(&self, request: ClassifyRequest) -> Result<String, IngestError> {
        let classifier = Arc::clone(&self.classifier);

        let call = tokio::task::spawn_blocking(move || {
            classifier
                .classify(&request)
                .map_err(|e| IngestError::Service(e.to_string()))
        });

        let joined = match self.config.timeout() {
            Some(budget) => timeout(budget, call).await.map_err(|_| IngestError::Timeout)?,
            None => call.await,
        };

        joined.map_err(|e| IngestError::Service(format!("Task join error: {}", e)))?
    }
}

/// Map a per-document error to its tagged failure reason
fn failure_reason(error: &IngestError) -> FailureReason {
    match error {
        IngestError::Service(_) | IngestError::Timeout => FailureReason::Service,
        IngestError::MalformedResponse(_) => FailureReason::Parse,
        IngestError::InvalidCategory(_) => FailureReason::Category,
        IngestError::ArchiveConflict(_) => FailureReason::ArchiveConflict,
        IngestError::Io(_) => FailureReason::Io,
        IngestError::Catalog(CatalogError::DuplicateFilename(_)) => FailureReason::Catalog,
        IngestError::Catalog(_) => FailureReason::Io,
    }
}
