//! Local strategy: PDF parsing and lossy UTF-8 text decoding

use crate::error::ExtractorError;
use crate::pdf::{is_pdf, parse_pdf};
use crate::stats::text_metadata;
use async_trait::async_trait;
use sift_domain::traits::Extractor;
use sift_domain::{now_millis, ExtractionResult, ProcessingStats, RawFile};
use tracing::debug;

/// Extracts text without any network access
///
/// PDFs are parsed page by page; every other type is decoded as UTF-8, with
/// invalid sequences replaced by U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalExtractor;

impl LocalExtractor {
    /// Create a new local extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract text and page count from raw bytes
    pub(crate) fn extract_text(
        &self,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<(String, Option<u32>), ExtractorError> {
        if is_pdf(mime_type) {
            let parsed = parse_pdf(bytes)?;
            Ok((parsed.text, Some(parsed.page_count)))
        } else {
            Ok((decode_text(bytes), None))
        }
    }

    /// Synchronous body of [`Extractor::extract`]
    pub fn extract_sync(&self, file: &RawFile) -> Result<ExtractionResult, ExtractorError> {
        let start = now_millis();
        let (text, page_count) = self.extract_text(file.mime_type(), &file.bytes)?;
        debug!(
            "Locally extracted {} chars from {}",
            text.len(),
            file.name()
        );

        Ok(ExtractionResult {
            metadata: text_metadata(&text, file.mime_type(), page_count),
            text,
            structured_data: None,
            processing_stats: ProcessingStats::since(start),
            confidence_scores: None,
        })
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[async_trait]
impl Extractor for LocalExtractor {
    type Error = ExtractorError;

    fn name(&self) -> &str {
        "local"
    }

    async fn extract(&self, file: &RawFile) -> Result<ExtractionResult, Self::Error> {
        self.extract_sync(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::test_support::build_pdf;

    fn raw(mime: &str, bytes: &[u8]) -> RawFile {
        RawFile::new("file", mime, 0, bytes.to_vec())
    }

    #[test]
    fn test_plain_text() {
        let result = LocalExtractor::new()
            .extract_sync(&raw("text/plain", b"a b c"))
            .unwrap();

        assert_eq!(result.text, "a b c");
        assert_eq!(result.metadata.word_count, 3);
        assert_eq!(result.metadata.char_count, 5);
        assert_eq!(result.metadata.page_count, None);
        assert_eq!(result.metadata.file_type, "text/plain");
        assert!(result.structured_data.is_none());
    }

    #[test]
    fn test_empty_file() {
        let result = LocalExtractor::new()
            .extract_sync(&raw("text/csv", b""))
            .unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.metadata.word_count, 0);
        assert_eq!(result.metadata.char_count, 0);
    }

    #[test]
    fn test_latin1_text_is_decoded_lossily() {
        let result = LocalExtractor::new()
            .extract_sync(&raw("text/csv", b"caf\xe9,1"))
            .unwrap();

        assert_eq!(result.text, "caf\u{FFFD},1");
        assert_eq!(result.metadata.word_count, 1);
        assert_eq!(result.metadata.char_count, 6);
    }

    #[test]
    fn test_decode_text_keeps_valid_utf8() {
        assert_eq!(decode_text("naïve".as_bytes()), "naïve");
        assert_eq!(decode_text(&[0xff, b'a']), "\u{FFFD}a");
    }

    #[test]
    fn test_pdf_pages() {
        let bytes = build_pdf(&["Hello", "World"]);
        let result = LocalExtractor::new()
            .extract_sync(&raw("application/pdf", &bytes))
            .unwrap();

        assert_eq!(result.metadata.page_count, Some(2));
        assert!(result.text.contains("Hello"));
        assert!(result.text.contains("World"));
        assert_eq!(result.metadata.file_type, "application/pdf");
    }

    #[test]
    fn test_corrupt_pdf() {
        let result = LocalExtractor::new().extract_sync(&raw("application/pdf", b"%PDF-broken"));
        assert!(matches!(result, Err(ExtractorError::Pdf(_))));
    }

    #[test]
    fn test_stats_are_ordered() {
        let result = LocalExtractor::new()
            .extract_sync(&raw("text/plain", b"x"))
            .unwrap();
        let stats = result.processing_stats;
        assert!(stats.end_time_ms >= stats.start_time_ms);
        assert_eq!(stats.duration_ms, stats.end_time_ms - stats.start_time_ms);
    }
}
