//! MRZ parsing
//!
//! Reads identity fields out of machine-readable-zone text. Parsing is
//! best effort: every field degrades independently to `None` and the
//! function never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::ExtractedData;

/// Filler / padding character used by MRZ lines
pub const MRZ_FILLER: char = '<';

/// Document number candidate: 8-12 uppercase letters or digits
static DOCUMENT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z0-9]{8,12}").expect("document number pattern is valid"));

/// Date candidate: six digits read as YYMMDD
static DATE_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]{6}").expect("date pattern is valid"));

/// Parse MRZ text into extracted identity data
///
/// Only the last two lines containing [`MRZ_FILLER`] are considered. With
/// fewer than two such lines the result has `mrz_present == false` and
/// nothing else set.
///
/// # Examples
///
/// ```
/// use pawnkyc::core::services::parse_mrz;
///
/// let data = parse_mrz("AA123456<0UTO8001014M3001012<<<<<<<<<<<2\nDOE<<JOHN<<<<<<<<<<<<<<<<<<<<<");
/// assert!(data.mrz_present);
/// assert_eq!(data.date_of_birth.as_deref(), Some("1980-01-01"));
/// assert_eq!(data.full_name.as_deref(), Some("JOHN DOE"));
/// ```
#[must_use]
pub fn parse_mrz(raw: &str) -> ExtractedData {
    let lines: Vec<&str> =
        raw.lines().map(str::trim).filter(|line| line.contains(MRZ_FILLER)).collect();

    let [.., first, second] = lines.as_slice() else {
        log::debug!("no MRZ line pair found ({} candidate line(s))", lines.len());
        return ExtractedData::default();
    };

    let joined = format!("{first}{second}");

    let document_number = DOCUMENT_NUMBER.find(&joined).map(|m| m.as_str().to_string());
    let date_of_birth = DATE_CANDIDATE.find_iter(&joined).find_map(|m| parse_yymmdd(m.as_str()));
    let (surname, given_names) = split_name_line(second);
    let full_name = join_name(given_names.as_deref(), surname.as_deref());

    log::debug!(
        "parsed MRZ: document_number={} dob={} name={}",
        document_number.is_some(),
        date_of_birth.is_some(),
        full_name.is_some()
    );

    ExtractedData {
        full_name,
        given_names,
        surname,
        date_of_birth,
        mrz_present: true,
        mrz_valid: document_number.is_some(),
        document_number,
        ..ExtractedData::default()
    }
}

/// Read a `YYMMDD` run as an ISO date
///
/// Years `>= 50` pivot into the 1900s, the rest into the 2000s. Only the
/// month (1-12) and day (1-31) ranges are checked.
fn parse_yymmdd(digits: &str) -> Option<String> {
    let yy: u32 = digits.get(0..2)?.parse().ok()?;
    let mm: u32 = digits.get(2..4)?.parse().ok()?;
    let dd: u32 = digits.get(4..6)?.parse().ok()?;

    if !(1..=12).contains(&mm) || !(1..=31).contains(&dd) {
        return None;
    }

    let year = if yy >= 50 { 1900 + yy } else { 2000 + yy };
    Some(format!("{year:04}-{mm:02}-{dd:02}"))
}

/// Split a name line on `<<` into `(surname, given_names)`
fn split_name_line(line: &str) -> (Option<String>, Option<String>) {
    let mut segments = line.split("<<");
    let surname = segments.next().and_then(clean_segment);
    let given_names = segments.next().and_then(clean_segment);
    (surname, given_names)
}

/// Replace fillers with spaces and collapse whitespace
fn clean_segment(segment: &str) -> Option<String> {
    let cleaned = segment.replace(MRZ_FILLER, " ").split_whitespace().collect::<Vec<_>>().join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}

fn join_name(given: Option<&str>, surname: Option<&str>) -> Option<String> {
    let name = [given, surname].into_iter().flatten().collect::<Vec<_>>().join(" ");
    (!name.is_empty()).then_some(name)
}
