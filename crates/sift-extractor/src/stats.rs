//! Text statistics shared by every strategy

use sift_domain::DocumentMetadata;

/// Number of maximal non-whitespace runs; 0 for blank text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of the untrimmed text in characters
///
/// Counts Unicode scalar values, so a character outside the Basic
/// Multilingual Plane counts once rather than as two UTF-16 code units.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Metadata for `text` extracted from a file of type `file_type`
pub fn text_metadata(text: &str, file_type: &str, page_count: Option<u32>) -> DocumentMetadata {
    DocumentMetadata {
        page_count,
        word_count: word_count(text),
        char_count: char_count(text),
        file_type: file_type.to_string(),
        document_type: None,
    }
}
