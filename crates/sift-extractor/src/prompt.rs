//! Prompt sent with every remote extraction request

/// Instructions given to the model alongside the file payload
///
/// The model is asked for a single JSON object so the response can be parsed
/// into [`sift_domain::StructuredData`].
pub const EXTRACTION_PROMPT: &str = r#"You are a document analysis assistant. Read the attached file and describe its content.

Respond with a single JSON object and nothing else, using exactly this shape:

{
  "summary": "A concise summary of the whole document in a few sentences",
  "keyPoints": ["The most important facts or findings, one per entry"],
  "metadata": {
    "documentType": "A short label such as report, invoice, letter, spreadsheet or presentation",
    "pageCount": 1
  }
}

Rules:
- Write the summary in the language of the document.
- Give between three and ten key points, each a single sentence.
- Set pageCount to the number of pages if the format has pages, otherwise 1.
- Do not wrap the JSON in prose. A ```json fence is acceptable."#;

/// Build the prompt for a file of the given MIME type
pub fn extraction_prompt(mime_type: &str) -> String {
    format!("{}\n\nThe attached file has MIME type {}.", EXTRACTION_PROMPT, mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_field() {
        for field in ["summary", "keyPoints", "documentType", "pageCount"] {
            assert!(EXTRACTION_PROMPT.contains(field), "prompt is missing {}", field);
        }
    }

    #[test]
    fn test_prompt_mentions_mime_type() {
        let prompt = extraction_prompt("application/msword");
        assert!(prompt.starts_with(EXTRACTION_PROMPT));
        assert!(prompt.ends_with("MIME type application/msword."));
    }
}
