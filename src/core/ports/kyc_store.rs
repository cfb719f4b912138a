//! KYC store port
//!
//! Defines the interface for reading and writing KYC records, plus the
//! authorization rules every store must apply.

use thiserror::Error;

use super::super::models::{Actor, KycRecord, LifecycleStatus};

/// Errors raised by KYC stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be (de)serialized
    #[error("invalid record data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The actor may not perform this write
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A write tried to change a field that is fixed once created
    #[error("field '{0}' cannot be changed")]
    ImmutableField(&'static str),

    /// Subject id is empty or contains unsupported characters
    #[error("invalid subject id: {0:?}")]
    InvalidSubject(String),

    /// No record exists for this subject
    #[error("no KYC record for subject {0}")]
    NotFound(String),
}

/// Persistence for KYC records
///
/// Records are keyed by subject id. Writes are last-writer-wins; ordering
/// of concurrent submissions is the store's concern.
pub trait KycStore: Send + Sync {
    /// Fetch the record for a subject
    ///
    /// `None` means the subject has not submitted yet.
    fn get(&self, subject_id: &str) -> Result<Option<KycRecord>, StoreError>;

    /// Create or replace a subject's record
    fn upsert(&self, actor: &Actor, record: &KycRecord) -> Result<(), StoreError>;

    /// Transition a record's lifecycle status (admin only)
    fn set_status(
        &self,
        actor: &Actor,
        subject_id: &str,
        status: LifecycleStatus,
    ) -> Result<KycRecord, StoreError>;
}

/// Check whether `actor` may write `record` over `existing`
///
/// Rules:
/// 1. Only the subject may create or update their own record
/// 2. `subject_id` and `created_at` never change
/// 3. A subject's write must carry the status implied by its decision
/// 4. Once an administrator has moved a record off that default status, a
///    subject's write may not change it
pub fn authorize_upsert(
    actor: &Actor,
    existing: Option<&KycRecord>,
    record: &KycRecord,
) -> Result<(), StoreError> {
    match actor {
        Actor::Subject(id) if *id == record.subject_id => {},
        _ => {
            return Err(StoreError::Forbidden(format!(
                "{} may not write the record of {}",
                actor.id(),
                record.subject_id
            )));
        },
    }

    if let Some(existing) = existing {
        if existing.subject_id != record.subject_id {
            return Err(StoreError::ImmutableField("subject_id"));
        }
        if existing.created_at != record.created_at {
            return Err(StoreError::ImmutableField("created_at"));
        }
        let default_status = LifecycleStatus::from_decision(existing.decision.status);
        if existing.status != default_status && record.status != existing.status {
            return Err(StoreError::Forbidden(format!(
                "status {} was set by an administrator",
                existing.status
            )));
        }
    }

    if record.status != LifecycleStatus::from_decision(record.decision.status) {
        return Err(StoreError::Forbidden("status is managed by administrators".to_string()));
    }

    Ok(())
}

/// Check whether `actor` may transition a record's status
pub fn authorize_status_change(actor: &Actor) -> Result<(), StoreError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(StoreError::Forbidden(format!("{} is not an administrator", actor.id())))
    }
}
