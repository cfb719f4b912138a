//! Tests for the extraction backends

use std::fs;

use pawnkyc::adapters::extractor::{MockExtractor, build_extractor};
use pawnkyc::core::ports::{DocumentExtractor, DocumentInput, ExtractionError, ExtractorKind};
use tempfile::TempDir;

use super::common::JOHN_DOE_MRZ;

#[test]
fn test_mock_ignores_input() {
    let extractor = MockExtractor::default();
    let a = extractor.extract(&DocumentInput::default()).unwrap();
    let b = extractor.extract(&DocumentInput::from_mrz_text("anything")).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, MockExtractor::sample_identity());
    assert_eq!(extractor.provider(), "mock");
}

#[test]
fn test_mock_unavailable() {
    let err = MockExtractor::unavailable("timeout").extract(&DocumentInput::default()).unwrap_err();
    assert!(matches!(err, ExtractionError::Unavailable(ref reason) if reason == "timeout"));
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_build_extractor_provider_tags() {
    assert_eq!(build_extractor(ExtractorKind::Mock).provider(), "mock");
    assert_eq!(build_extractor(ExtractorKind::Mrz).provider(), "mrz");
}

#[test]
fn test_extractor_kind_parsing() {
    assert_eq!("MRZ".parse::<ExtractorKind>().unwrap(), ExtractorKind::Mrz);
    assert_eq!("mock".parse::<ExtractorKind>().unwrap(), ExtractorKind::Mock);
    assert!("ocr-cloud".parse::<ExtractorKind>().is_err());
    assert_eq!(ExtractorKind::default(), ExtractorKind::Mock);
}

#[test]
fn test_mrz_backend_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("id-card.txt");
    fs::write(&path, JOHN_DOE_MRZ).unwrap();

    let input = DocumentInput::from_path(&path).unwrap();
    assert_eq!(input.file_name.as_deref(), Some("id-card.txt"));

    let data = build_extractor(ExtractorKind::Mrz).extract(&input).unwrap();
    assert_eq!(data.document_number.as_deref(), Some("AA123456"));
    assert!(data.mrz_valid);
}

#[test]
fn test_missing_document_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = DocumentInput::from_path(&temp.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ExtractionError::Io(_)));
}
