//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// PDF could not be parsed
    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    /// Remote call failed and the local fallback failed too
    ///
    /// Carries the remote failure's message.
    #[error("Remote extraction failed: {0}")]
    Remote(String),

    /// Invalid format in model response
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<lopdf::Error> for ExtractorError {
    fn from(e: lopdf::Error) -> Self {
        ExtractorError::Pdf(e.to_string())
    }
}
