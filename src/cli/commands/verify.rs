//! Verify a subject and save the record

use std::path::Path;

use pawnkyc::config::KycConfig;
use pawnkyc::core::models::FormData;
use pawnkyc::core::ports::DocumentInput;
use pawnkyc::output::{DecisionReport, OutputMode};

use super::service::build_service;

/// Full verification flow for one subject
pub fn verify(
    config: &KycConfig,
    subject: &str,
    form: &FormData,
    document: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let input = DocumentInput::from_path(document)?;
    let record = build_service(config).verify(subject, form, &input)?;
    DecisionReport::from_record(record).render(mode);
    Ok(())
}
