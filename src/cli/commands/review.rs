//! Administrative status transition

use pawnkyc::config::KycConfig;
use pawnkyc::core::models::{Actor, LifecycleStatus};
use pawnkyc::output::{OperationResult, OutputMode};

use super::service::build_service;

/// Set a record's lifecycle status as an administrator
pub fn review(
    config: &KycConfig,
    admin: &str,
    subject: &str,
    status: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let status: LifecycleStatus = status.parse().map_err(anyhow::Error::msg)?;
    let record = build_service(config).review(&Actor::Admin(admin.to_string()), subject, status)?;

    OperationResult {
        success: true,
        message: format!("{}: {}", record.subject_id, record.status),
    }
    .render(mode);
    Ok(())
}
