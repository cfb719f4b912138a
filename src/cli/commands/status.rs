//! Show a subject's record

use pawnkyc::config::KycConfig;
use pawnkyc::output::{DecisionReport, OperationResult, OutputMode};

use super::service::build_service;

/// Print the current record, or note that nothing was submitted
pub fn status(config: &KycConfig, subject: &str, mode: OutputMode) -> anyhow::Result<()> {
    match build_service(config).current(subject)? {
        Some(record) => DecisionReport::from_record(record).render(mode),
        None => OperationResult {
            success: false,
            message: format!("No KYC submitted for {subject}."),
        }
        .render(mode),
    }
    Ok(())
}
