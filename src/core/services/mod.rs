//! Business logic services
//!
//! The decision engine itself ([`normalize`], [`mrz`], [`scoring`],
//! [`status`], [`evaluation`]) is pure: it operates on data passed in and
//! returns new records.
//!
//! - [`verification`] - Caller flow over the extractor and store ports
//! - [`quote`] - Loan payment calculation

pub mod evaluation;
pub mod mrz;
pub mod normalize;
pub mod quote;
pub mod scoring;
pub mod status;
pub mod verification;

pub use evaluation::{
    EvaluationContext, KycEngine, MANUAL_OVERRIDE_REASON, evaluate_kyc, manual_review_override,
};
pub use mrz::parse_mrz;
pub use normalize::{normalize, normalize_identifier};
pub use quote::{QuoteError, monthly_payment};
pub use scoring::{ScoreOutcome, compute_score};
pub use status::decide_status;
pub use verification::{KycService, VerificationError};
