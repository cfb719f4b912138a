//! Persisted KYC record
//!
//! What the store keeps per subject: the identity fields the customer
//! submitted, the latest decision, and a coarse lifecycle status that
//! admins may transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Decision, DecisionStatus, FormData};

/// Externally visible record status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    /// Waiting for a decision or a human review
    #[default]
    Pending,
    /// Identity accepted
    Verified,
    /// Identity refused
    Rejected,
}

impl LifecycleStatus {
    /// Default mapping from an engine decision to a record status
    #[must_use]
    pub const fn from_decision(status: DecisionStatus) -> Self {
        match status {
            DecisionStatus::Verified => Self::Verified,
            DecisionStatus::Fail => Self::Rejected,
            DecisionStatus::NeedsReview | DecisionStatus::ManualReviewRequested => Self::Pending,
        }
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Verified => write!(f, "verified"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for LifecycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Invalid status: {s}. Use: pending, verified, rejected")),
        }
    }
}

/// Who is performing a store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// The authenticated customer, by subject id
    Subject(String),
    /// A back-office administrator
    Admin(String),
}

impl Actor {
    /// Whether this actor holds the administrative role
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    /// The actor's id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Subject(id) | Self::Admin(id) => id,
        }
    }
}

/// KYC record keyed by subject id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycRecord {
    /// Stable subject id from the identity provider
    pub subject_id: String,

    /// Name as submitted
    pub full_name: String,

    /// Date of birth as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    /// Document number as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    /// National register number as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_number: Option<String>,

    /// Lifecycle status
    pub status: LifecycleStatus,

    /// Latest decision
    pub decision: Decision,

    /// First submission time (immutable)
    pub created_at: DateTime<Utc>,

    /// Last write time
    pub updated_at: DateTime<Utc>,
}

impl KycRecord {
    /// Build the record for a new submission
    ///
    /// `created_at` is carried over from `previous` when there is one.
    #[must_use]
    pub fn submit(
        subject_id: &str,
        form: &FormData,
        decision: Decision,
        previous: Option<&Self>,
    ) -> Self {
        let now = decision.verified_at;
        Self {
            subject_id: subject_id.to_string(),
            full_name: form.full_name.clone(),
            dob: form.dob.clone(),
            document_number: form.document_number.clone(),
            national_number: form.national_number.clone(),
            status: LifecycleStatus::from_decision(decision.status),
            decision,
            created_at: previous.map_or(now, |p| p.created_at),
            updated_at: now,
        }
    }

    /// The identity fields as a form
    #[must_use]
    pub fn form(&self) -> FormData {
        FormData {
            full_name: self.full_name.clone(),
            dob: self.dob.clone(),
            document_number: self.document_number.clone(),
            national_number: self.national_number.clone(),
        }
    }
}
