//! Sift LLM Provider Layer
//!
//! Generative-content backends implementing the `ContentGenerator` trait from
//! `sift-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google generative-language API over HTTP
//!
//! # Examples
//!
//! ```
//! use sift_llm::MockProvider;
//! use sift_domain::traits::{ContentGenerator, GenerationRequest};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = GenerationRequest::with_inline_data("Summarize", "application/pdf", "JVBERi0=");
//! let result = provider.generate(&request).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use sift_domain::traits::{ContentGenerator, GenerationRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No API credential was configured
    #[error("Missing API credential: set {0}")]
    MissingCredential(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use sift_llm::MockProvider;
///
/// // Every call fails, as if the network were down
/// let provider = MockProvider::failing("connection refused");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, String>,
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for every request
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Ok(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            default_response: Err(message.into()),
            ..Self::new("")
        }
    }

    /// Answer requests whose attachment has `mime_type` with `response`
    pub fn add_response(&mut self, mime_type: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(mime_type.into(), Ok(response.into()));
    }

    /// Fail requests whose attachment has `mime_type` with `message`
    pub fn add_failure(&mut self, mime_type: impl Into<String>, message: impl Into<String>) {
        lock(&self.responses).insert(mime_type.into(), Err(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<GenerationRequest> {
        lock(&self.requests).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl ContentGenerator for MockProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        lock(&self.requests).push(request.clone());

        let keyed = request
            .inline_data
            .as_ref()
            .and_then(|inline| lock(&self.responses).get(&inline.mime_type).cloned());

        keyed
            .unwrap_or_else(|| self.default_response.clone())
            .map_err(LlmError::Communication)
    }
}
