//! Trait definitions for external interactions
//!
//! These traits define the boundary between the ingestion pipeline and the
//! classification service. Implementations live in `papershelf-llm`.

/// A document handed to the classifier together with the rubric to judge
/// it by.
#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    /// Document filename, used for logging and mock lookup
    pub document_name: String,

    /// Raw PDF bytes
    pub pdf_bytes: Vec<u8>,

    /// Full rubric prompt text
    pub prompt: String,
}

impl ClassifyRequest {
    /// Build a request for one document.
    pub fn new(
        document_name: impl Into<String>,
        pdf_bytes: Vec<u8>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            document_name: document_name.into(),
            pdf_bytes,
            prompt: prompt.into(),
        }
    }
}

/// Trait for the external classification service
///
/// Implemented by the infrastructure layer (`papershelf-llm`). The return
/// value is the service's raw text output; the pipeline owns parsing it.
pub trait DocumentClassifier {
    /// Error type for classifier operations
    type Error;

    /// Classify one document against the rubric, returning raw text
    fn classify(&self, request: &ClassifyRequest) -> Result<String, Self::Error>;
}
