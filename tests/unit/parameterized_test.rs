//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use pawnkyc::core::models::{DecisionStatus, ExtractedData, FieldConfidences, FormData, ReasonCode};
use pawnkyc::core::services::{
    compute_score, decide_status, normalize, normalize_identifier, parse_mrz,
};
use test_case::test_case;

use super::common::{john_doe_extracted, john_doe_form};

// =============================================================================
// Normalization Tests
// =============================================================================

#[test_case("José Pérez", "JOSE PEREZ" ; "acute accents stripped")]
#[test_case("Zoë Brontë", "ZOE BRONTE" ; "diaeresis stripped")]
#[test_case("François Müller", "FRANCOIS MULLER" ; "cedilla and umlaut stripped")]
#[test_case("  anna   marie  ", "ANNA MARIE" ; "whitespace collapsed")]
#[test_case("O'Brien-Smith", "O BRIEN SMITH" ; "punctuation becomes space")]
#[test_case("DOE<<JOHN", "DOE JOHN" ; "mrz fillers become space")]
#[test_case("", "" ; "empty stays empty")]
#[test_case("123", "" ; "digits only folds to empty")]
fn test_normalize(input: &str, expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test_case("ab-123 456", "AB123456" ; "separators dropped")]
#[test_case("85.01.01-123.45", "85010112345" ; "national number punctuation dropped")]
#[test_case(" x ", "X" ; "trimmed and uppercased")]
#[test_case("--", "" ; "nothing left")]
fn test_normalize_identifier(input: &str, expected: &str) {
    assert_eq!(normalize_identifier(input), expected);
}

// =============================================================================
// MRZ Tests
// =============================================================================

#[test_case("", false ; "empty input")]
#[test_case("no filler here\nor here", false ; "no filler lines")]
#[test_case("ONLY<<ONE", false ; "single filler line")]
#[test_case("A<B\nC<D", true ; "two filler lines")]
#[test_case("header\nP<UTODOE<<JOHN\nL898902C36UTO7408122F1204159<<<<<<<<<<<<<<06", true ; "header line ignored")]
fn test_mrz_presence(input: &str, present: bool) {
    assert_eq!(parse_mrz(input).mrz_present, present);
}

#[test_case("AB<CD\n991332<<X", None ; "invalid month skipped")]
#[test_case("AB<CD\n120100<<X", None ; "zero day rejected")]
#[test_case("AB<CD\n491231<<X", Some("2049-12-31") ; "year below pivot is 2000s")]
#[test_case("AB<CD\n500101<<X", Some("1950-01-01") ; "pivot year is 1900s")]
#[test_case("AB<CD\n123456800101<<X", Some("1980-01-01") ; "first valid run wins")]
fn test_mrz_date_of_birth(input: &str, expected: Option<&str>) {
    assert_eq!(parse_mrz(input).date_of_birth.as_deref(), expected);
}

#[test_case("X<Y\nDOE<<JOHN<PAUL<<<", Some("JOHN PAUL DOE") ; "given names before surname")]
#[test_case("X<Y\nDOE<<<<<<", Some("DOE") ; "surname only")]
#[test_case("X<Y\n<<<<<<<<", None ; "filler only")]
fn test_mrz_full_name(input: &str, expected: Option<&str>) {
    assert_eq!(parse_mrz(input).full_name.as_deref(), expected);
}

// =============================================================================
// Scoring Tests
// =============================================================================

fn score(form: &FormData, extracted: &ExtractedData) -> (u8, Vec<ReasonCode>) {
    let outcome = compute_score(form, extracted);
    (outcome.score, outcome.reasons)
}

#[test_case(john_doe_form(), 100, vec![] ; "full match capped at 100")]
#[test_case(FormData::new("Jane Roe").with_dob("1980-01-01").with_document_number("AA123456"), 75, vec![ReasonCode::NameMismatch] ; "name mismatch earns partial credit")]
#[test_case(FormData::new("John Doe").with_document_number("AA123456"), 75, vec![ReasonCode::DobMissing] ; "missing dob")]
#[test_case(FormData::new("John Doe").with_dob("1981-02-02").with_document_number("AA123456"), 75, vec![ReasonCode::DobMismatch] ; "dob mismatch")]
#[test_case(FormData::new("John Doe").with_dob("1980-01-01").with_document_number("ZZ999999"), 75, vec![ReasonCode::DocMismatch] ; "document mismatch")]
#[test_case(FormData::new("John Doe").with_dob("1980-01-01"), 75, vec![ReasonCode::DocMissing] ; "no identifiers")]
#[test_case(FormData::new("jóhn  doe").with_dob("1980-01-01").with_document_number("aa-123 456"), 100, vec![] ; "normalized fields match")]
fn test_score_against_john_doe(form: FormData, expected: u8, reasons: Vec<ReasonCode>) {
    assert_eq!(score(&form, &john_doe_extracted()), (expected, reasons));
}

#[test_case(Some(1.0), 12 ; "full confidence")]
#[test_case(Some(0.95), 11 ; "high confidence floors")]
#[test_case(None, 6 ; "missing confidence defaults to half")]
#[test_case(Some(0.0), 0 ; "zero confidence")]
#[test_case(Some(7.5), 12 ; "out of range clamps high")]
#[test_case(Some(-1.0), 0 ; "out of range clamps low")]
#[test_case(Some(f64::NAN), 6 ; "nan treated as missing")]
fn test_name_partial_credit(confidence: Option<f64>, expected: u8) {
    let form = FormData::new("Jane Roe");
    let extracted = ExtractedData {
        full_name: Some("JOHN DOE".to_string()),
        confidences: FieldConfidences {
            name: confidence,
            ..Default::default()
        },
        ..ExtractedData::default()
    };
    assert_eq!(compute_score(&form, &extracted).score, expected);
}

#[test]
fn test_national_number_fallback() {
    let form = FormData::new("John Doe")
        .with_dob("1980-01-01")
        .with_national_number("85.01.01-123.45");
    let extracted = ExtractedData {
        national_number: Some("850101 12345".to_string()),
        ..john_doe_extracted()
    };
    assert_eq!(score(&form, &extracted), (100, vec![]));

    let other = FormData::new("John Doe")
        .with_dob("1980-01-01")
        .with_national_number("00000000000");
    assert_eq!(score(&other, &extracted), (75, vec![ReasonCode::NationalMismatch]));
}

#[test]
fn test_names_that_fold_to_empty_match() {
    let extracted = ExtractedData {
        full_name: Some("   ".to_string()),
        ..ExtractedData::default()
    };
    assert_eq!(
        score(&FormData::new(""), &extracted),
        (40, vec![ReasonCode::DobMissing, ReasonCode::DocMissing])
    );
    assert_eq!(score(&FormData::default(), &ExtractedData::default()).0, 40);

    // Punctuation-only input folds to empty as well
    let outcome = compute_score(&FormData::new("--"), &ExtractedData::default());
    assert!(!outcome.reasons.contains(&ReasonCode::NameMismatch));
}

// =============================================================================
// Status Tests
// =============================================================================

#[test_case(100, &[], DecisionStatus::Verified ; "perfect score")]
#[test_case(85, &[], DecisionStatus::Verified ; "verified threshold")]
#[test_case(84, &[], DecisionStatus::NeedsReview ; "just below verified")]
#[test_case(60, &[], DecisionStatus::NeedsReview ; "review threshold")]
#[test_case(59, &[], DecisionStatus::Fail ; "just below review")]
#[test_case(100, &[ReasonCode::DobMismatch], DecisionStatus::Fail ; "dob mismatch overrides score")]
#[test_case(75, &[ReasonCode::DobMissing], DecisionStatus::NeedsReview ; "missing dob is not a hard fail")]
fn test_decide_status(score: u8, reasons: &[ReasonCode], expected: DecisionStatus) {
    assert_eq!(decide_status(score, reasons, &ExtractedData::default()), expected);
}
