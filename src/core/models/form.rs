//! Form data model
//!
//! The identity claims a customer types into the KYC form.

use serde::{Deserialize, Serialize};

/// User-asserted identity claims
///
/// At least one of `document_number` / `national_number` should be present
/// for a meaningful comparison. Missing identifiers lower the score, they
/// are never rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    /// Full name as entered by the customer
    #[serde(default)]
    pub full_name: String,

    /// Date of birth (ISO `YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    /// Passport / ID card number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    /// National register number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_number: Option<String>,
}

impl FormData {
    /// Create a form with only a name filled in
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    /// Set the date of birth
    #[must_use]
    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = Some(dob.into());
        self
    }

    /// Set the document number
    #[must_use]
    pub fn with_document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    /// Set the national register number
    #[must_use]
    pub fn with_national_number(mut self, number: impl Into<String>) -> Self {
        self.national_number = Some(number.into());
        self
    }
}
