//! MRZ text extraction backend
//!
//! Reads the machine-readable zone as text (either supplied alongside the
//! document, or the document itself when it is a text file) and runs it
//! through [`parse_mrz`].

use crate::core::models::ExtractedData;
use crate::core::ports::{DocumentExtractor, DocumentInput, ExtractionError, ExtractorKind};
use crate::core::services::parse_mrz;

/// Confidence reported for each field the MRZ parser found
pub const FIELD_CONFIDENCE: f64 = 0.9;

/// Extractor backed by the MRZ text parser
#[derive(Debug, Clone, Copy, Default)]
pub struct MrzTextExtractor;

impl MrzTextExtractor {
    /// Create the extractor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn text_of(input: &DocumentInput) -> Result<String, ExtractionError> {
        if let Some(text) = &input.mrz_text {
            return Ok(text.clone());
        }
        String::from_utf8(input.bytes.clone()).map_err(|_| {
            ExtractionError::UnsupportedInput(format!(
                "{} is not MRZ text",
                input.file_name.as_deref().unwrap_or("document")
            ))
        })
    }
}

impl DocumentExtractor for MrzTextExtractor {
    fn provider(&self) -> &str {
        ExtractorKind::Mrz.provider_tag()
    }

    fn extract(&self, input: &DocumentInput) -> Result<ExtractedData, ExtractionError> {
        let text = Self::text_of(input)?;
        let mut data = parse_mrz(&text);

        let found = |field: &Option<String>| field.is_some().then_some(FIELD_CONFIDENCE);
        data.confidences.name = found(&data.full_name);
        data.confidences.dob = found(&data.date_of_birth);
        data.confidences.doc_number = found(&data.document_number);

        if !data.mrz_present {
            log::warn!(
                "no MRZ found in {}",
                input.file_name.as_deref().unwrap_or("document")
            );
        }
        Ok(data)
    }
}
