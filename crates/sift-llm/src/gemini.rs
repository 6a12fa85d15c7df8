//! Gemini Provider Implementation
//!
//! Calls the `generateContent` endpoint of Google's generative-language API
//! with a prompt and an optional inline file payload.
//!
//! # Features
//!
//! - Async HTTP communication via `reqwest`
//! - Configurable endpoint, model and timeout
//! - Credential read once at startup; a missing key is not fatal, every call
//!   just fails with [`LlmError::MissingCredential`]
//!
//! Nothing is retried: a failed call is reported to the caller, which decides
//! whether to fall back.
//!
//! # Examples
//!
//! ```no_run
//! use sift_llm::GeminiProvider;
//!
//! // Reads GEMINI_API_KEY; logs a warning if it is absent
//! let provider = GeminiProvider::from_env("gemini-1.5-flash");
//! println!("credential configured: {}", provider.has_credential());
//! ```

use crate::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sift_domain::traits::{ContentGenerator, GenerationRequest};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for generation requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPart<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPart<'a> {
    mime_type: &'a str,
    data: &'a str,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: API credential, `None` when not configured
    /// - `model`: Model to use (e.g., "gemini-1.5-flash")
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Create a provider with the key read from `GEMINI_API_KEY`
    pub fn from_env(model: impl Into<String>) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        if api_key.is_none() {
            warn!("{} is not set; remote extraction will fall back to local text", API_KEY_ENV);
        }
        Self::new(api_key, model)
    }

    /// Override the API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    /// Whether an API key is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

fn build_request_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    let mut parts = vec![Part::Text {
        text: &request.prompt,
    }];
    if let Some(inline) = &request.inline_data {
        parts.push(Part::InlineData {
            inline_data: InlineDataPart {
                mime_type: &inline.mime_type,
                data: &inline.data,
            },
        });
    }
    GenerateContentRequest {
        contents: vec![Content { parts }],
    }
}

/// Concatenate the text parts of the first candidate
fn parse_response_body(body: &str) -> Result<String, LlmError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| LlmError::InvalidResponse("Response has no candidates".to_string()))?;

    Ok(content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join(""))
}

#[async_trait]
impl ContentGenerator for GeminiProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingCredential(API_KEY_ENV.to_string()))?;

        let body = build_request_body(request);
        debug!("POST {} (prompt {} chars)", self.url(), request.prompt.len());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, text)));
        }

        parse_response_body(&text)
    }
}
