//! Extraction output types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Output of one successful extractor invocation
///
/// Consumed immediately to populate a record's preview and summary, then
/// dropped; the full text is never retained by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Full extracted text (may be empty)
    pub text: String,

    /// Basic document metadata
    pub metadata: DocumentMetadata,

    /// AI-derived structure, only when the remote strategy ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,

    /// Wall-clock timestamps bracketing the extraction
    pub processing_stats: ProcessingStats,

    /// Per-field confidence, when a strategy reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_scores: Option<HashMap<String, f64>>,
}

impl ExtractionResult {
    /// Condense into the summary kept on a completed record
    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary {
            word_count: self.metadata.word_count,
            char_count: self.metadata.char_count,
            page_count: self.metadata.page_count,
            file_type: self.metadata.file_type.clone(),
            document_type: self.metadata.document_type.clone(),
            duration_ms: self.processing_stats.duration_ms,
        }
    }
}

/// Basic metadata about an extracted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Number of pages, when the format has pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Count of maximal non-whitespace runs
    pub word_count: usize,

    /// Length of the untrimmed text in characters
    pub char_count: usize,

    /// MIME type of the source file
    pub file_type: String,

    /// Document type reported by the remote model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

/// Structured summary produced by the remote model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    /// Free-text summary
    pub summary: String,

    /// Bullet-style key points
    pub key_points: Vec<String>,

    /// Model-reported metadata
    pub metadata: StructuredMetadata,
}

/// Metadata block of a structured model response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredMetadata {
    /// Kind of document ("invoice", "report", ..., or "unknown")
    pub document_type: String,

    /// Page count as reported by the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// Wall-clock bracket around one extraction, Unix milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStats {
    /// When extraction started
    pub start_time_ms: u64,
    /// When extraction finished
    pub end_time_ms: u64,
    /// `end_time_ms - start_time_ms`
    pub duration_ms: u64,
}

impl ProcessingStats {
    /// Build stats from a start timestamp, ending now
    pub fn since(start_time_ms: u64) -> Self {
        let end_time_ms = now_millis().max(start_time_ms);
        Self {
            start_time_ms,
            end_time_ms,
            duration_ms: end_time_ms - start_time_ms,
        }
    }
}

/// What a completed record keeps from its extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionSummary {
    /// Word count of the extracted text
    pub word_count: usize,
    /// Character count of the extracted text
    pub char_count: usize,
    /// Page count, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Source MIME type
    pub file_type: String,
    /// Model-reported document type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    /// Extraction duration in milliseconds
    pub duration_ms: u64,
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
