//! Sift Extractor
//!
//! Turns the raw bytes of one accepted file into text, statistics and,
//! when a generative model is involved, a structured summary.
//!
//! # Strategies
//!
//! - [`LocalExtractor`]: PDF pages via `lopdf`, everything else as UTF-8
//!   text. Deterministic and offline.
//! - [`RemoteExtractor`]: plain text stays local; other files are sent to a
//!   [`ContentGenerator`](sift_domain::traits::ContentGenerator) as base64
//!   inline data and the JSON answer becomes [`sift_domain::StructuredData`].
//!   Any model failure falls back to local extraction.
//!
//! # Example Usage
//!
//! ```
//! use sift_domain::traits::Extractor;
//! use sift_domain::RawFile;
//! use sift_extractor::LocalExtractor;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let file = RawFile::new("notes.txt", "text/plain", 0, b"a b c".to_vec());
//! let result = LocalExtractor::new().extract(&file).await.unwrap();
//!
//! assert_eq!(result.metadata.word_count, 3);
//! assert_eq!(result.metadata.char_count, 5);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod local;
mod parser;
mod pdf;
mod prompt;
mod remote;
pub mod stats;

#[cfg(test)]
mod tests;

pub use config::{ExtractorConfig, StrategyKind};
pub use error::ExtractorError;
pub use local::{decode_text, LocalExtractor};
pub use parser::{parse_model_response, parse_structured, UNKNOWN_DOCUMENT_TYPE};
pub use pdf::{is_pdf, parse_pdf, PdfText, PDF_MIME_TYPE};
pub use prompt::{extraction_prompt, EXTRACTION_PROMPT};
pub use remote::RemoteExtractor;

use sift_domain::traits::Extractor;
use sift_llm::GeminiProvider;
use tracing::info;

/// A type-erased extractor, as chosen at startup
pub type BoxedExtractor = Box<dyn Extractor<Error = ExtractorError>>;

/// Build the extractor selected by `config`
///
/// The remote strategy talks to the Gemini API with the key from
/// `GEMINI_API_KEY`. A missing key is not an error here; each remote call
/// then fails and falls back to local extraction.
pub fn build_extractor(config: &ExtractorConfig) -> Result<BoxedExtractor, ExtractorError> {
    config.validate()?;

    match config.strategy {
        StrategyKind::Local => {
            info!("Using local extraction");
            Ok(Box::new(LocalExtractor::new()))
        }
        StrategyKind::Remote => {
            info!("Using remote extraction with model {}", config.model);
            let provider = GeminiProvider::from_env(config.model.clone())
                .with_endpoint(config.api_base.clone())
                .with_timeout(config.request_timeout());
            Ok(Box::new(
                RemoteExtractor::new(provider).with_timeout(config.request_timeout()),
            ))
        }
    }
}
