//! Cross-strategy tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::pdf::test_support::build_pdf;
    use crate::{
        build_extractor, BoxedExtractor, ExtractorConfig, ExtractorError, LocalExtractor,
        RemoteExtractor, StrategyKind,
    };
    use sift_domain::traits::Extractor;
    use sift_domain::RawFile;
    use sift_llm::MockProvider;

    const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    fn strategies(response: &str) -> Vec<BoxedExtractor> {
        vec![
            Box::new(LocalExtractor::new()),
            Box::new(RemoteExtractor::new(MockProvider::new(response))),
        ]
    }

    #[tokio::test]
    async fn test_text_counts_agree_across_strategies() {
        let file = RawFile::new("abc.txt", "text/plain", 0, b"a b c".to_vec());

        for extractor in strategies("unused") {
            let result = extractor.extract(&file).await.unwrap();
            assert_eq!(result.text, "a b c", "strategy {}", extractor.name());
            assert_eq!(result.metadata.word_count, 3);
            assert_eq!(result.metadata.char_count, 5);
        }
    }

    #[tokio::test]
    async fn test_empty_text_across_strategies() {
        let file = RawFile::new("empty.csv", "text/csv", 0, Vec::new());

        for extractor in strategies("unused") {
            let result = extractor.extract(&file).await.unwrap();
            assert_eq!(result.metadata.word_count, 0);
            assert_eq!(result.metadata.char_count, 0);
        }
    }

    #[tokio::test]
    async fn test_page_count_differs_for_text() {
        let file = RawFile::new("n.txt", "text/plain", 0, b"hello".to_vec());

        let local = LocalExtractor::new().extract(&file).await.unwrap();
        let remote = RemoteExtractor::new(MockProvider::default())
            .extract(&file)
            .await
            .unwrap();

        assert_eq!(local.metadata.page_count, None);
        assert_eq!(remote.metadata.page_count, Some(1));
    }

    #[tokio::test]
    async fn test_remote_network_failure_still_succeeds() {
        let extractor = RemoteExtractor::new(MockProvider::failing("network unreachable"));
        let bytes = build_pdf(&["Quarterly report"]);
        let file = RawFile::new("q.pdf", "application/pdf", 0, bytes);

        let result = extractor.extract(&file).await.unwrap();
        assert!(result.text.contains("Quarterly report"));
        assert_eq!(result.metadata.page_count, Some(1));
        assert!(result.structured_data.is_none());
    }

    #[tokio::test]
    async fn test_fenced_response() {
        let response = "```json\n{\"summary\": \"A memo\", \"keyPoints\": [\"one\", \"two\"], \"metadata\": {\"documentType\": \"memo\", \"pageCount\": 2}}\n```";
        let extractor = RemoteExtractor::new(MockProvider::new(response));
        let file = RawFile::new("m.docx", DOCX, 0, b"binary".to_vec());

        let result = extractor.extract(&file).await.unwrap();
        let structured = result.structured_data.unwrap();
        assert_eq!(structured.summary, "A memo");
        assert_eq!(structured.key_points.len(), 2);
        assert_eq!(structured.metadata.document_type, "memo");
        assert_eq!(result.metadata.page_count, Some(2));
    }

    #[tokio::test]
    async fn test_unparseable_response_becomes_summary() {
        let extractor = RemoteExtractor::new(MockProvider::new("I could not read this file."));
        let file = RawFile::new("m.docx", DOCX, 0, b"binary".to_vec());

        let result = extractor.extract(&file).await.unwrap();
        assert_eq!(result.text, "I could not read this file.");
        assert_eq!(result.metadata.document_type.as_deref(), Some("unknown"));
        let structured = result.structured_data.unwrap();
        assert!(structured.key_points.is_empty());
    }

    #[tokio::test]
    async fn test_responses_selected_by_file_type() {
        let mut provider = MockProvider::failing("unsupported");
        provider.add_response(DOCX, r#"{"summary": "Word file"}"#);
        let extractor = RemoteExtractor::new(provider.clone());

        let docx = extractor
            .extract(&RawFile::new("a.docx", DOCX, 0, b"binary".to_vec()))
            .await
            .unwrap();
        let png = extractor
            .extract(&RawFile::new("b.png", "image/png", 0, b"pixels".to_vec()))
            .await
            .unwrap();

        assert_eq!(docx.text, "Word file");
        assert!(docx.structured_data.is_some());
        assert_eq!(png.text, "pixels");
        assert!(png.structured_data.is_none());
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_zip_docx_with_failing_remote_falls_back() {
        let extractor = RemoteExtractor::new(MockProvider::failing("API key invalid"));
        let file = RawFile::new("x.docx", DOCX, 0, vec![0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe]);

        let result = extractor.extract(&file).await.unwrap();
        assert!(result.text.starts_with("PK"));
        assert_eq!(result.metadata.file_type, DOCX);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_with_failing_remote() {
        let extractor = RemoteExtractor::new(MockProvider::failing("API key invalid"));
        let file = RawFile::new("x.pdf", "application/pdf", 0, b"%PDF-broken".to_vec());

        let err = extractor.extract(&file).await.unwrap_err();
        assert!(matches!(err, ExtractorError::Remote(_)));
        assert!(err.to_string().contains("API key invalid"));
    }

    #[test]
    fn test_build_extractor_by_strategy() {
        let local = build_extractor(&ExtractorConfig::default()).unwrap();
        assert_eq!(local.name(), "local");

        let remote = build_extractor(&ExtractorConfig::remote()).unwrap();
        assert_eq!(remote.name(), "remote");
    }

    #[test]
    fn test_build_extractor_rejects_invalid_config() {
        let config = ExtractorConfig {
            strategy: StrategyKind::Remote,
            request_timeout_secs: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            build_extractor(&config),
            Err(ExtractorError::Config(_))
        ));
    }
}
