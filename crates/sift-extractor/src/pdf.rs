//! PDF text extraction via lopdf

use crate::error::ExtractorError;
use lopdf::Document;
use tracing::debug;

/// Text and page count of a parsed PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfText {
    /// Text of every page, in page order
    pub text: String,
    /// Number of pages in the document
    pub page_count: u32,
}

/// MIME type that selects the PDF parser
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Whether a MIME type names a PDF
pub fn is_pdf(mime_type: &str) -> bool {
    mime_type.eq_ignore_ascii_case(PDF_MIME_TYPE)
}

/// Parse PDF bytes into text and a page count
pub fn parse_pdf(bytes: &[u8]) -> Result<PdfText, ExtractorError> {
    let document = Document::load_mem(bytes)?;

    if document.is_encrypted() {
        return Err(ExtractorError::Pdf("document is encrypted".to_string()));
    }

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let page_count = page_numbers.len() as u32;
    debug!("PDF has {} pages", page_count);

    if page_numbers.is_empty() {
        return Ok(PdfText {
            text: String::new(),
            page_count: 0,
        });
    }

    let text = document.extract_text(&page_numbers)?;

    Ok(PdfText { text, page_count })
}

#[cfg(test)]
pub(crate) mod test_support {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build an in-memory PDF with one page per entry of `pages`
    pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::build_pdf;
    use super::*;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf("application/pdf"));
        assert!(is_pdf("Application/PDF"));
        assert!(!is_pdf("text/plain"));
    }

    #[test]
    fn test_parse_single_page() {
        let bytes = build_pdf(&["Hello World"]);
        let parsed = parse_pdf(&bytes).unwrap();

        assert_eq!(parsed.page_count, 1);
        assert!(parsed.text.contains("Hello World"), "got {:?}", parsed.text);
    }

    #[test]
    fn test_parse_multiple_pages() {
        let bytes = build_pdf(&["first", "second", "third"]);
        let parsed = parse_pdf(&bytes).unwrap();

        assert_eq!(parsed.page_count, 3);
        let first = parsed.text.find("first").unwrap();
        let third = parsed.text.find("third").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_garbage_is_error() {
        let result = parse_pdf(b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractorError::Pdf(_))));
    }
}
