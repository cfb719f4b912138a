//! Status decision

use crate::core::models::{DecisionStatus, ExtractedData, ReasonCode};

/// Scores at or above this are verified
pub const VERIFIED_THRESHOLD: u8 = 85;
/// Scores below this fail
pub const FAIL_THRESHOLD: u8 = 60;

/// Derive the verification status
///
/// Priority order:
/// 1. A date-of-birth conflict fails regardless of score
/// 2. `score < 60` fails
/// 3. `score >= 85` is verified
/// 4. Everything else needs review
///
/// `_extracted` is part of the signature but is not consulted. MRZ validity
/// only reaches the status through the score bonus.
#[must_use]
pub fn decide_status(
    score: u8,
    reasons: &[ReasonCode],
    _extracted: &ExtractedData,
) -> DecisionStatus {
    if reasons.contains(&ReasonCode::DobMismatch) || score < FAIL_THRESHOLD {
        DecisionStatus::Fail
    } else if score >= VERIFIED_THRESHOLD {
        DecisionStatus::Verified
    } else {
        DecisionStatus::NeedsReview
    }
}
