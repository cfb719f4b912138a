//! Deterministic extraction double
//!
//! Returns the same data for every document. Used in tests and demo
//! environments where no OCR backend is wired up.

use crate::core::models::{ExtractedData, FieldConfidences};
use crate::core::ports::{DocumentExtractor, DocumentInput, ExtractionError, ExtractorKind};

#[derive(Debug, Clone)]
enum Outcome {
    Data(ExtractedData),
    Unavailable(String),
}

/// Extractor that ignores its input
#[derive(Debug, Clone)]
pub struct MockExtractor {
    outcome: Outcome,
}

impl MockExtractor {
    /// Always return `data`
    #[must_use]
    pub const fn new(data: ExtractedData) -> Self {
        Self {
            outcome: Outcome::Data(data),
        }
    }

    /// Always fail as if the backend were down
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Unavailable(reason.into()),
        }
    }

    /// The canned identity returned by [`MockExtractor::default`]
    #[must_use]
    pub fn sample_identity() -> ExtractedData {
        ExtractedData {
            full_name: Some("JOHN DOE".to_string()),
            given_names: Some("JOHN".to_string()),
            surname: Some("DOE".to_string()),
            date_of_birth: Some("1980-01-01".to_string()),
            document_number: Some("AA123456".to_string()),
            national_number: None,
            expiry_date: Some("2030-01-01".to_string()),
            document_type: Some("ID".to_string()),
            mrz_present: true,
            mrz_valid: true,
            confidences: FieldConfidences {
                name: Some(0.95),
                dob: Some(0.9),
                doc_number: Some(0.9),
            },
        }
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new(Self::sample_identity())
    }
}

impl DocumentExtractor for MockExtractor {
    fn provider(&self) -> &str {
        ExtractorKind::Mock.provider_tag()
    }

    fn extract(&self, input: &DocumentInput) -> Result<ExtractedData, ExtractionError> {
        log::debug!(
            "mock extraction for {}",
            input.file_name.as_deref().unwrap_or("<unnamed document>")
        );
        match &self.outcome {
            Outcome::Data(data) => Ok(data.clone()),
            Outcome::Unavailable(reason) => Err(ExtractionError::Unavailable(reason.clone())),
        }
    }
}
