//! Remote strategy: generative-model extraction with local fallback

use crate::error::ExtractorError;
use crate::local::LocalExtractor;
use crate::parser::parse_model_response;
use crate::prompt::extraction_prompt;
use crate::stats::text_metadata;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sift_domain::traits::{ContentGenerator, Extractor, GenerationRequest};
use sift_domain::{now_millis, ExtractionResult, ProcessingStats, RawFile};
use sift_llm::gemini::DEFAULT_TIMEOUT_SECS;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sends non-text files to a generative model
///
/// Plain-text types never leave the machine. When the model call fails for
/// any reason the file is extracted locally instead; only when that fails too
/// does extraction fail, carrying the remote error's message.
pub struct RemoteExtractor<G: ContentGenerator> {
    generator: G,
    local: LocalExtractor,
    request_timeout: Duration,
}

impl<G: ContentGenerator> RemoteExtractor<G> {
    /// Create a remote extractor around a content generator
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            local: LocalExtractor::new(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// The wrapped generator
    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn extract_plain_text(&self, file: &RawFile, start: u64) -> Result<ExtractionResult, ExtractorError> {
        let (text, _) = self.local.extract_text(file.mime_type(), &file.bytes)?;
        Ok(ExtractionResult {
            metadata: text_metadata(&text, file.mime_type(), Some(1)),
            text,
            structured_data: None,
            processing_stats: ProcessingStats::since(start),
            confidence_scores: None,
        })
    }

    /// Call the model, mapping both errors and timeouts to a message
    async fn call_model(&self, file: &RawFile) -> Result<String, String> {
        let request = GenerationRequest::with_inline_data(
            extraction_prompt(file.mime_type()),
            file.mime_type(),
            STANDARD.encode(&file.bytes),
        );

        debug!(
            "Sending {} ({} bytes) to model {}",
            file.name(),
            file.bytes.len(),
            self.generator.model_name()
        );

        match tokio::time::timeout(self.request_timeout, self.generator.generate(&request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!(
                "Request timed out after {}s",
                self.request_timeout.as_secs()
            )),
        }
    }
}

fn is_plain_text(mime_type: &str) -> bool {
    mime_type.to_ascii_lowercase().starts_with("text/")
}

#[async_trait]
impl<G: ContentGenerator> Extractor for RemoteExtractor<G> {
    type Error = ExtractorError;

    fn name(&self) -> &str {
        "remote"
    }

    async fn extract(&self, file: &RawFile) -> Result<ExtractionResult, Self::Error> {
        let start = now_millis();

        if is_plain_text(file.mime_type()) {
            return self.extract_plain_text(file, start);
        }

        match self.call_model(file).await {
            Ok(response) => {
                let structured = parse_model_response(&response);
                let text = structured.summary.clone();
                let mut metadata =
                    text_metadata(&text, file.mime_type(), structured.metadata.page_count);
                metadata.document_type = Some(structured.metadata.document_type.clone());
                info!(
                    "Model extracted {} key points from {}",
                    structured.key_points.len(),
                    file.name()
                );

                Ok(ExtractionResult {
                    text,
                    metadata,
                    structured_data: Some(structured),
                    processing_stats: ProcessingStats::since(start),
                    confidence_scores: None,
                })
            }
            Err(remote_error) => {
                warn!(
                    "Remote extraction failed for {}, falling back to local text: {}",
                    file.name(),
                    remote_error
                );
                self.local.extract_sync(file).map_err(|fallback_error| {
                    warn!("Local fallback failed for {}: {}", file.name(), fallback_error);
                    ExtractorError::Remote(remote_error)
                })
            }
        }
    }
}
