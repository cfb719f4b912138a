//! Decision model
//!
//! The auditable outcome of one verification attempt. A decision is never
//! mutated: a manual override produces a new one derived from the prior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ExtractedData, ReasonCode};

/// Final verification status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    /// Identity matched with high confidence
    Verified,
    /// Plausible match, a human should look
    NeedsReview,
    /// Hard failure or score too low
    Fail,
    /// Customer escalated to a human after an automatic result
    ManualReviewRequested,
}

impl DecisionStatus {
    /// The wire name of this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::NeedsReview => "needs_review",
            Self::Fail => "fail",
            Self::ManualReviewRequested => "manual_review_requested",
        }
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attempt bookkeeping carried on every decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempts {
    /// Number of automatic verification tries
    pub auto: u32,
    /// Whether a manual review was requested
    pub manual_override: bool,
}

/// Outcome of a KYC evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Verification status
    pub status: DecisionStatus,

    /// Match score, 0-100
    pub score: u8,

    /// Reason codes in check order
    #[serde(default)]
    pub reasons: Vec<ReasonCode>,

    /// The data the score was computed from
    pub extracted: ExtractedData,

    /// Extraction backend that produced `extracted`
    pub provider: String,

    /// Attempt counters
    pub attempts: Attempts,

    /// When this decision was made
    pub verified_at: DateTime<Utc>,

    /// UI locale active at verification time
    pub locale: String,

    /// Internal tag explaining a manual override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<String>,
}

impl Decision {
    /// Whether the given reason code was recorded
    #[must_use]
    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reasons.contains(&code)
    }
}
