//! Verification service - the caller-side KYC flow
//!
//! Wires an extraction backend, the decision engine and a KYC store:
//! read the prior record, extract, evaluate, persist. Extraction and
//! storage failures propagate; the engine step itself cannot fail.

use thiserror::Error;

use crate::core::models::{Actor, FormData, KycRecord, LifecycleStatus};
use crate::core::ports::{DocumentExtractor, DocumentInput, ExtractionError, KycStore, StoreError};

use super::evaluation::KycEngine;

/// Errors surfaced to the caller of the verification flow
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The extraction backend failed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The store rejected or failed the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// KYC verification flow over injected collaborators
pub struct KycService {
    extractor: Box<dyn DocumentExtractor>,
    store: Box<dyn KycStore>,
    locale: String,
}

impl std::fmt::Debug for KycService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KycService")
            .field("provider", &self.extractor.provider())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl KycService {
    /// Create a service
    #[must_use]
    pub fn new(
        extractor: Box<dyn DocumentExtractor>,
        store: Box<dyn KycStore>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            extractor,
            store,
            locale: locale.into(),
        }
    }

    fn engine(&self) -> KycEngine {
        KycEngine::new(self.extractor.provider(), self.locale.clone())
    }

    /// Current record for a subject, `None` if not yet submitted
    pub fn current(&self, subject_id: &str) -> Result<Option<KycRecord>, VerificationError> {
        Ok(self.store.get(subject_id)?)
    }

    /// Run an automatic verification and persist the result
    ///
    /// The automatic attempt counter continues from the stored record.
    pub fn verify(
        &self,
        subject_id: &str,
        form: &FormData,
        input: &DocumentInput,
    ) -> Result<KycRecord, VerificationError> {
        let previous = self.store.get(subject_id)?;
        let attempts_auto =
            previous.as_ref().map_or(1, |p| p.decision.attempts.auto.saturating_add(1));

        let extracted = self.extractor.extract(input)?;
        let decision = self.engine().evaluate(form, &extracted, attempts_auto);

        log::info!(
            "subject {subject_id}: {} (score {}, attempt {attempts_auto})",
            decision.status,
            decision.score
        );

        let record = KycRecord::submit(subject_id, form, decision, previous.as_ref());
        self.store.upsert(&Actor::Subject(subject_id.to_string()), &record)?;
        Ok(record)
    }

    /// Escalate the subject's latest decision to a human reviewer
    pub fn request_manual_review(&self, subject_id: &str) -> Result<KycRecord, VerificationError> {
        let previous = self.store.get(subject_id)?;
        let decision = self.engine().manual_review(previous.as_ref().map(|p| &p.decision));
        let form = previous.as_ref().map(KycRecord::form).unwrap_or_default();

        log::info!("subject {subject_id}: manual review requested");

        let record = KycRecord::submit(subject_id, &form, decision, previous.as_ref());
        self.store.upsert(&Actor::Subject(subject_id.to_string()), &record)?;
        Ok(record)
    }

    /// Administrative status transition
    pub fn review(
        &self,
        actor: &Actor,
        subject_id: &str,
        status: LifecycleStatus,
    ) -> Result<KycRecord, VerificationError> {
        let record = self.store.set_status(actor, subject_id, status)?;
        log::info!("subject {subject_id}: status set to {status} by {}", actor.id());
        Ok(record)
    }
}
