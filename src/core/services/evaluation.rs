//! Evaluation orchestration
//!
//! Packages score and status into a [`Decision`], and derives the
//! manual-review decision a customer can request after an automatic
//! result.
//!
//! Both operations are pure: the timestamp, locale and provider come in
//! through an [`EvaluationContext`]. [`KycEngine`] is the thin wrapper
//! that stamps the current time.

use chrono::{DateTime, Utc};

use crate::core::models::{Attempts, Decision, DecisionStatus, ExtractedData, FormData, ReasonCode};
use crate::core::ports::ExtractorKind;

use super::scoring::compute_score;
use super::status::decide_status;

/// Internal tag stored on decisions produced by a manual override
pub const MANUAL_OVERRIDE_REASON: &str = "user_requested_after_auto_fail";

/// Everything a decision needs besides the form and extracted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    /// Provider tag of the active extraction backend
    pub provider: String,
    /// UI locale active at verification time
    pub locale: String,
    /// Verification timestamp
    pub now: DateTime<Utc>,
}

impl EvaluationContext {
    /// Create a context stamped with the current time
    #[must_use]
    pub fn new(provider: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            locale: locale.into(),
            now: Utc::now(),
        }
    }

    /// Pin the timestamp
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Evaluate a KYC submission
///
/// Never fails: gaps in the form or the extraction show up as a low score
/// and reason codes. A `fail` status is a normal return value.
#[must_use]
pub fn evaluate_kyc(
    form: &FormData,
    extracted: &ExtractedData,
    attempts_auto: u32,
    ctx: &EvaluationContext,
) -> Decision {
    let outcome = compute_score(form, extracted);
    let status = decide_status(outcome.score, &outcome.reasons, extracted);

    log::debug!(
        "kyc evaluated: status={status} score={} reasons={:?}",
        outcome.score,
        outcome.reasons
    );

    Decision {
        status,
        score: outcome.score,
        reasons: outcome.reasons,
        extracted: extracted.clone(),
        provider: ctx.provider.clone(),
        attempts: Attempts {
            auto: attempts_auto,
            manual_override: false,
        },
        verified_at: ctx.now,
        locale: ctx.locale.clone(),
        override_reason: None,
    }
}

/// Derive a manual-review decision from the current one
///
/// Keeps the prior score, extracted data, provider and automatic attempt
/// count; appends [`ReasonCode::ManualOverride`] to a copy of the prior
/// reasons. Without a prior decision the score is 0 and the provider is
/// the default backend's.
///
/// This is an escape hatch, not a retry: no extraction runs.
#[must_use]
pub fn manual_review_override(current: Option<&Decision>, ctx: &EvaluationContext) -> Decision {
    let (score, mut reasons, extracted, provider, auto) = match current {
        Some(prior) => (
            prior.score,
            prior.reasons.clone(),
            prior.extracted.clone(),
            prior.provider.clone(),
            prior.attempts.auto,
        ),
        None => (
            0,
            Vec::new(),
            ExtractedData::default(),
            ExtractorKind::default().provider_tag().to_string(),
            0,
        ),
    };
    reasons.push(ReasonCode::ManualOverride);

    Decision {
        status: DecisionStatus::ManualReviewRequested,
        score,
        reasons,
        extracted,
        provider,
        attempts: Attempts {
            auto,
            manual_override: true,
        },
        verified_at: ctx.now,
        locale: ctx.locale.clone(),
        override_reason: Some(MANUAL_OVERRIDE_REASON.to_string()),
    }
}

/// Decision engine bound to one provider and locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycEngine {
    provider: String,
    locale: String,
}

impl KycEngine {
    /// Create an engine
    #[must_use]
    pub fn new(provider: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            locale: locale.into(),
        }
    }

    /// Provider tag stamped on decisions
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Locale stamped on decisions
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Evaluate a submission now
    #[must_use]
    pub fn evaluate(&self, form: &FormData, extracted: &ExtractedData, attempts_auto: u32) -> Decision {
        evaluate_kyc(form, extracted, attempts_auto, &self.context())
    }

    /// Request a manual review now
    #[must_use]
    pub fn manual_review(&self, current: Option<&Decision>) -> Decision {
        manual_review_override(current, &self.context())
    }

    fn context(&self) -> EvaluationContext {
        EvaluationContext::new(self.provider.clone(), self.locale.clone())
    }
}
