//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the decision engine
//! and external systems (extraction backends, record storage).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The engine depends only on these traits, never on concrete
//! implementations. Backend selection is passed in by the caller, so
//! tests can swap in deterministic doubles.

mod document_extractor;
mod kyc_store;

#[cfg(test)]
pub use document_extractor::MockDocumentExtractor;
pub use document_extractor::{DocumentExtractor, DocumentInput, ExtractionError, ExtractorKind};
pub use kyc_store::{KycStore, StoreError, authorize_status_change, authorize_upsert};
