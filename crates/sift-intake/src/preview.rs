//! Preview text for completed records

/// Marker appended to every preview
pub const ELLIPSIS: &str = "...";

/// First `max_chars` characters of `text` followed by `"..."`
///
/// The marker is appended even when nothing was cut, so every preview has
/// the same shape.
pub fn make_preview(text: &str, max_chars: usize) -> String {
    let mut preview: String = text.chars().take(max_chars).collect();
    preview.push_str(ELLIPSIS);
    preview
}
