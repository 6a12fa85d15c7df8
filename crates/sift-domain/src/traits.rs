//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and the
//! infrastructure that turns bytes into text.

use crate::{ExtractionResult, RawFile};
use async_trait::async_trait;
use std::fmt::Display;
use std::sync::Arc;

/// Trait for turning one file's bytes into text and metadata
///
/// Implemented by the extraction layer (sift-extractor), once per strategy.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Error type for extraction operations
    type Error: Display + Send;

    /// Short strategy name for logs ("local", "remote")
    fn name(&self) -> &str;

    /// Extract text and metadata from a file
    async fn extract(&self, file: &RawFile) -> Result<ExtractionResult, Self::Error>;
}

#[async_trait]
impl<T> Extractor for Box<T>
where
    T: Extractor + ?Sized,
{
    type Error = T::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn extract(&self, file: &RawFile) -> Result<ExtractionResult, Self::Error> {
        (**self).extract(file).await
    }
}

#[async_trait]
impl<T> Extractor for Arc<T>
where
    T: Extractor + ?Sized,
{
    type Error = T::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn extract(&self, file: &RawFile) -> Result<ExtractionResult, Self::Error> {
        (**self).extract(file).await
    }
}

/// Inline binary payload sent alongside a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,

    /// Base64-encoded content
    pub data: String,
}

/// One request to a generative-content backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Instruction text
    pub prompt: String,

    /// Optional attached file
    pub inline_data: Option<InlineData>,
}

impl GenerationRequest {
    /// Request with an attached base64 payload
    pub fn with_inline_data(
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Trait for generative-content backends
///
/// Implemented by the infrastructure layer (sift-llm)
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Error type for generation calls
    type Error: Display + Send;

    /// Model identifier, for logs
    fn model_name(&self) -> &str;

    /// Generate a text response
    async fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error>;
}

#[async_trait]
impl<T> ContentGenerator for Arc<T>
where
    T: ContentGenerator + ?Sized,
{
    type Error = T::Error;

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, Self::Error> {
        (**self).generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_request() {
        let request = GenerationRequest::with_inline_data("p", "application/pdf", "QUJD");
        let inline = request.inline_data.unwrap();
        assert_eq!(inline.mime_type, "application/pdf");
        assert_eq!(inline.data, "QUJD");
    }
}
