//! Extraction backends
//!
//! Implements `DocumentExtractor`:
//!
//! - [`mock`] - Deterministic canned data
//! - [`mrz_text`] - MRZ text parsing

pub mod mock;
pub mod mrz_text;

pub use mock::MockExtractor;
pub use mrz_text::MrzTextExtractor;

use crate::core::ports::{DocumentExtractor, ExtractorKind};

/// Build the configured extraction backend
#[must_use]
pub fn build_extractor(kind: ExtractorKind) -> Box<dyn DocumentExtractor> {
    match kind {
        ExtractorKind::Mock => Box::new(MockExtractor::default()),
        ExtractorKind::Mrz => Box::new(MrzTextExtractor::new()),
    }
}
