//! Mismatch reason codes
//!
//! Short machine-readable tags naming which comparison failed.

use serde::{Deserialize, Serialize};

/// Reason a check did not award its full points
///
/// Decisions keep these in a `Vec` in the order the checks ran. The order
/// is reproducible but carries no meaning; consumers should test for
/// membership, not position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Normalized names differ
    NameMismatch,
    /// Both dates of birth present and different
    DobMismatch,
    /// A date of birth is missing on either side
    DobMissing,
    /// Document numbers differ
    DocMismatch,
    /// National register numbers differ
    NationalMismatch,
    /// No identifier pair was available to compare
    DocMissing,
    /// The customer asked for a human review
    ManualOverride,
}

impl ReasonCode {
    /// The wire name of this code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameMismatch => "name_mismatch",
            Self::DobMismatch => "dob_mismatch",
            Self::DobMissing => "dob_missing",
            Self::DocMismatch => "doc_mismatch",
            Self::NationalMismatch => "national_mismatch",
            Self::DocMissing => "doc_missing",
            Self::ManualOverride => "manual_override",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReasonCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name_mismatch" => Ok(Self::NameMismatch),
            "dob_mismatch" => Ok(Self::DobMismatch),
            "dob_missing" => Ok(Self::DobMissing),
            "doc_mismatch" => Ok(Self::DocMismatch),
            "national_mismatch" => Ok(Self::NationalMismatch),
            "doc_missing" => Ok(Self::DocMissing),
            "manual_override" => Ok(Self::ManualOverride),
            _ => Err(format!("Unknown reason code: {s}")),
        }
    }
}
