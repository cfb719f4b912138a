//! Domain models for pawnkyc
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`FormData`] - What the customer says about themselves
//! - [`ExtractedData`] - What the document says
//! - [`Decision`] - The engine's verdict
//! - [`ReasonCode`] - Why a check lost points
//! - [`KycRecord`] - What gets persisted per subject

mod decision;
mod extracted;
mod form;
mod reason;
mod record;

pub use decision::{Attempts, Decision, DecisionStatus};
pub use extracted::{ExtractedData, FieldConfidences};
pub use form::FormData;
pub use reason::ReasonCode;
pub use record::{Actor, KycRecord, LifecycleStatus};
