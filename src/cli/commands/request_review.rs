//! Request a manual review

use pawnkyc::config::KycConfig;
use pawnkyc::output::{DecisionReport, OutputMode};

use super::service::build_service;

/// Escalate the subject's latest decision to a human
pub fn request_review(config: &KycConfig, subject: &str, mode: OutputMode) -> anyhow::Result<()> {
    let record = build_service(config).request_manual_review(subject)?;
    DecisionReport::from_record(record).render(mode);
    Ok(())
}
