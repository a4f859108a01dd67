//! Gemini Classifier Implementation
//!
//! Sends each PDF inline (base64) together with the rubric prompt to the
//! Gemini generateContent API and returns the model's raw text output.
//!
//! # Features
//!
//! - Async HTTP communication with the generateContent endpoint
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use papershelf_llm::GeminiClassifier;
//!
//! let classifier = GeminiClassifier::new("api-key", "gemini-3-flash-preview");
//! // The classify_document method is async; the DocumentClassifier trait
//! // impl provides a blocking wrapper.
//! ```

use crate::LlmError;
use base64::{engine::general_purpose::STANDARD, Engine};
use papershelf_domain::{ClassifyRequest, DocumentClassifier};
use std::time::Duration;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default timeout for classification requests (120 seconds — a full PDF
/// upload plus generation can be slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Gemini API classifier
///
/// Posts the document and rubric to `models/<model>:generateContent` and
/// extracts the first candidate's text.
pub struct GeminiClassifier {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl GeminiClassifier {
    /// Create a new Gemini classifier
    ///
    /// # Parameters
    ///
    /// - `api_key`: Gemini API key
    /// - `model`: model to use (e.g., "gemini-3-flash-preview")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the API endpoint (useful for test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Classify one document via the generateContent API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service is unreachable
    /// - The model is not available
    /// - The response body has no candidate text
    pub async fn classify_document(&self, request: &ClassifyRequest) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [
                { "text": request.prompt },
                { "inlineData": {
                    "mimeType": "application/pdf",
                    "data": STANDARD.encode(&request.pdf_bytes)
                } }
            ]}]
        });

        // Retry loop with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        let json: serde_json::Value = response.json().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to decode response: {}", e))
                        })?;
                        return Self::extract_candidate_text(&json);
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }

    /// Pull the first candidate's text out of a generateContent response
    fn extract_candidate_text(json: &serde_json::Value) -> Result<String, LlmError> {
        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                LlmError::InvalidResponse("Response contained no candidate text".to_string())
            })
    }
}

impl DocumentClassifier for GeminiClassifier {
    type Error = LlmError;

    fn classify(&self, request: &ClassifyRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.classify_document(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_classifier_creation() {
        let classifier = GeminiClassifier::new("key", "gemini-3-flash-preview");
        assert_eq!(classifier.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(classifier.model, "gemini-3-flash-preview");
        assert_eq!(classifier.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_gemini_classifier_with_endpoint() {
        let classifier =
            GeminiClassifier::new("key", "m").with_endpoint("http://localhost:9000/v1beta");
        assert_eq!(classifier.endpoint, "http://localhost:9000/v1beta");
    }

    #[test]
    fn test_gemini_classifier_with_max_retries() {
        let classifier = GeminiClassifier::new("key", "m").with_max_retries(5);
        assert_eq!(classifier.max_retries, 5);
    }

    #[test]
    fn test_extract_candidate_text() {
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "hello" }] } }]
        });
        assert_eq!(
            GeminiClassifier::extract_candidate_text(&json).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_extract_candidate_text_missing() {
        let json = serde_json::json!({ "candidates": [] });
        let result = GeminiClassifier::extract_candidate_text(&json);
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Unroutable endpoint to trigger a communication error
        let classifier = GeminiClassifier::new("key", "m")
            .with_endpoint("http://127.0.0.1:1/v1beta")
            .with_max_retries(1);

        let request =
            papershelf_domain::ClassifyRequest::new("paper.pdf", vec![0x25, 0x50], "rubric");
        let result = classifier.classify_document(&request).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
