//! Name and identifier normalization
//!
//! This module contains pure string folding with no I/O dependencies.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a personal name for comparison
///
/// Strips diacritics (canonical decomposition, combining marks dropped),
/// uppercases, turns anything that is not `A-Z` or whitespace into a space,
/// then collapses and trims whitespace.
///
/// The output only contains `A-Z` and single spaces, so the function is
/// idempotent.
///
/// # Examples
///
/// ```
/// use pawnkyc::core::services::normalize;
///
/// assert_eq!(normalize("José Pérez"), "JOSE PEREZ");
/// assert_eq!(normalize("  anna  marie "), "ANNA MARIE");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let base: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let letters: String = base
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_uppercase() || c.is_whitespace() { c } else { ' ' })
        .collect();

    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a document or national number for comparison
///
/// Keeps ASCII alphanumerics only, uppercased.
#[must_use]
pub fn normalize_identifier(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
