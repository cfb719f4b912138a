//! Match scoring
//!
//! Compares the customer's form against extracted document data and
//! produces a 0-100 score plus the reason codes for every check that did
//! not award full points.

use crate::core::models::{ExtractedData, FormData, ReasonCode};

use super::normalize::{normalize, normalize_identifier};

/// Points for a name match
pub const NAME_WEIGHT: u32 = 40;
/// Points for a date-of-birth match
pub const DOB_WEIGHT: u32 = 30;
/// Points for a document / national number match
pub const DOCUMENT_WEIGHT: u32 = 30;
/// Bonus when the MRZ looked structurally valid
pub const MRZ_BONUS: u32 = 5;
/// Upper bound of the score
pub const MAX_SCORE: u8 = 100;

/// Share of the name weight still awarded on a mismatch, scaled by confidence
const NAME_PARTIAL_FACTOR: f64 = 0.3;
/// Name confidence assumed when the backend reports none
const DEFAULT_NAME_CONFIDENCE: f64 = 0.5;

/// Score and reason codes for one form/document pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    /// Total score, clamped to `0..=100`
    pub score: u8,
    /// Reason codes in check order (name, date of birth, document)
    pub reasons: Vec<ReasonCode>,
}

/// Compute the weighted match score
///
/// Each check runs independently and appends its own reason code on
/// failure. Missing fields lower the score; nothing here fails.
#[must_use]
pub fn compute_score(form: &FormData, extracted: &ExtractedData) -> ScoreOutcome {
    let mut reasons = Vec::new();

    let mut points = score_name(form, extracted, &mut reasons);
    points += score_dob(form, extracted, &mut reasons);
    points += score_document(form, extracted, &mut reasons);
    if extracted.mrz_valid {
        points += MRZ_BONUS;
    }

    let score = u8::try_from(points).map_or(MAX_SCORE, |p| p.min(MAX_SCORE));
    ScoreOutcome { score, reasons }
}

fn score_name(form: &FormData, extracted: &ExtractedData, reasons: &mut Vec<ReasonCode>) -> u32 {
    let claimed = normalize(&form.full_name);
    let found = extracted.full_name.as_deref().map(normalize).unwrap_or_default();

    if claimed == found {
        return NAME_WEIGHT;
    }

    reasons.push(ReasonCode::NameMismatch);
    partial_name_credit(extracted.confidences.name)
}

/// `floor(40 * 0.3 * confidence)`, i.e. 0-12 points
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn partial_name_credit(confidence: Option<f64>) -> u32 {
    let confidence = confidence
        .filter(|c| c.is_finite())
        .unwrap_or(DEFAULT_NAME_CONFIDENCE)
        .clamp(0.0, 1.0);
    (f64::from(NAME_WEIGHT) * NAME_PARTIAL_FACTOR * confidence).floor() as u32
}

fn score_dob(form: &FormData, extracted: &ExtractedData, reasons: &mut Vec<ReasonCode>) -> u32 {
    match (present(form.dob.as_deref()), present(extracted.date_of_birth.as_deref())) {
        (Some(claimed), Some(found)) if claimed == found => DOB_WEIGHT,
        (Some(_), Some(_)) => {
            reasons.push(ReasonCode::DobMismatch);
            0
        },
        _ => {
            reasons.push(ReasonCode::DobMissing);
            0
        },
    }
}

/// Document number first; national number when either side lacks one
fn score_document(
    form: &FormData,
    extracted: &ExtractedData,
    reasons: &mut Vec<ReasonCode>,
) -> u32 {
    let pairs = [
        (
            form.document_number.as_deref(),
            extracted.document_number.as_deref(),
            ReasonCode::DocMismatch,
        ),
        (
            form.national_number.as_deref(),
            extracted.national_number.as_deref(),
            ReasonCode::NationalMismatch,
        ),
    ];

    for (claimed, found, mismatch) in pairs {
        if let (Some(claimed), Some(found)) = (identifier(claimed), identifier(found)) {
            if claimed == found {
                return DOCUMENT_WEIGHT;
            }
            reasons.push(mismatch);
            return 0;
        }
    }

    reasons.push(ReasonCode::DocMissing);
    0
}

/// Dates compare as plain strings; only an empty one counts as missing
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn identifier(value: Option<&str>) -> Option<String> {
    value.map(normalize_identifier).filter(|v| !v.is_empty())
}
