//! Papershelf Classifier Layer
//!
//! Implementations of the `DocumentClassifier` trait from
//! `papershelf-domain`.
//!
//! # Providers
//!
//! - `MockClassifier`: deterministic mock for testing
//! - `GeminiClassifier`: Gemini generateContent API integration
//!
//! # Examples
//!
//! ```
//! use papershelf_llm::MockClassifier;
//! use papershelf_domain::{ClassifyRequest, DocumentClassifier};
//!
//! let classifier = MockClassifier::new(r#"{"title": "T", "category": "C"}"#);
//! let request = ClassifyRequest::new("paper.pdf", vec![0x25, 0x50], "rubric");
//! let result = classifier.classify(&request).unwrap();
//! assert!(result.contains("title"));
//! ```

#![warn(missing_docs)]

pub mod gemini;

use papershelf_domain::{ClassifyRequest, DocumentClassifier};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiClassifier;

/// Errors that can occur while talking to the classification service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Classifier error: {0}")]
    Other(String),
}

/// Mock classifier for deterministic testing
///
/// Returns pre-configured responses keyed by document name without making
/// any network calls.
///
/// # Examples
///
/// ```
/// use papershelf_llm::MockClassifier;
/// use papershelf_domain::{ClassifyRequest, DocumentClassifier};
///
/// let mut classifier = MockClassifier::default();
/// classifier.add_response("a.pdf", "response for a");
/// classifier.add_response("b.pdf", "response for b");
///
/// let request = ClassifyRequest::new("a.pdf", vec![], "rubric");
/// assert_eq!(classifier.classify(&request).unwrap(), "response for a");
/// ```
#[derive(Debug, Clone)]
pub struct MockClassifier {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockClassifier {
    /// Create a new MockClassifier with a fixed response for all documents
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given document name
    pub fn add_response(&mut self, document_name: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(document_name.into(), response.into());
    }

    /// Configure a service error for a specific document name
    pub fn add_error(&mut self, document_name: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(document_name.into(), "ERROR".to_string());
    }

    /// Get the number of times classify was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(r#"{"title": "Untitled", "category": "Uncategorized"}"#)
    }
}

impl DocumentClassifier for MockClassifier {
    type Error = LlmError;

    fn classify(&self, request: &ClassifyRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(&request.document_name) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
