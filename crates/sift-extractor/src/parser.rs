//! Parse model output into structured data

use crate::error::ExtractorError;
use serde_json::Value;
use sift_domain::{StructuredData, StructuredMetadata};
use tracing::warn;

/// Document type recorded when the response could not be parsed
pub const UNKNOWN_DOCUMENT_TYPE: &str = "unknown";

/// Parse a model response, falling back to the raw text
///
/// A response that is not a JSON object becomes a summary holding the raw
/// text, no key points and document type `"unknown"`.
pub fn parse_model_response(response: &str) -> StructuredData {
    match parse_structured(response) {
        Ok(data) => data,
        Err(e) => {
            warn!("Model response is not structured JSON, using raw text: {}", e);
            StructuredData {
                summary: response.to_string(),
                key_points: Vec::new(),
                metadata: StructuredMetadata {
                    document_type: UNKNOWN_DOCUMENT_TYPE.to_string(),
                    page_count: None,
                },
            }
        }
    }
}

/// Strictly parse a model response into structured data
pub fn parse_structured(response: &str) -> Result<StructuredData, ExtractorError> {
    let json_str = extract_json(response);

    let json: Value = serde_json::from_str(json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let key_points = obj
        .get("keyPoints")
        .and_then(|v| v.as_array())
        .map(|points| {
            points
                .iter()
                .filter_map(|p| p.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let metadata = obj.get("metadata").and_then(|v| v.as_object());

    let document_type = metadata
        .and_then(|m| m.get("documentType"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(UNKNOWN_DOCUMENT_TYPE)
        .to_string();

    let page_count = metadata
        .and_then(|m| m.get("pageCount"))
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok());

    Ok(StructuredData {
        summary,
        key_points,
        metadata: StructuredMetadata {
            document_type,
            page_count,
        },
    })
}

/// Extract JSON from a response, handling markdown code fences
///
/// The fence may be preceded by prose; only the first fenced block is used.
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(fence_start) = trimmed.find("```") else {
        return trimmed;
    };

    let after_fence = &trimmed[fence_start + 3..];
    // Skip the language tag (```json) up to the end of the line
    let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_fence[body_start..];

    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}
