//! Extracted document data
//!
//! Everything an extraction backend managed to read from a document.
//! Every field is optional: extraction may fail partially, and the
//! engine must be able to tell which fields were actually found.

use serde::{Deserialize, Serialize};

/// Per-field confidence reported by the extraction backend, each in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfidences {
    /// Confidence in the extracted name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<f64>,

    /// Confidence in the extracted date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<f64>,

    /// Confidence in the extracted document number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<f64>,
}

/// Identity claims derived from a scanned document or MRZ payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    /// Full name (`given + " " + surname` for MRZ sources)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Given names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,

    /// Surname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// Date of birth (ISO `YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Document number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    /// National register number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_number: Option<String>,

    /// Document expiry date (ISO `YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    /// Document type (e.g. "ID", "P")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// An MRZ line pair was found
    #[serde(default)]
    pub mrz_present: bool,

    /// The MRZ structure looked plausible
    #[serde(default)]
    pub mrz_valid: bool,

    /// Backend-reported confidences
    #[serde(default)]
    pub confidences: FieldConfidences,
}
