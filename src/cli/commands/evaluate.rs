//! Evaluate a document against form data

use std::path::Path;

use pawnkyc::adapters::extractor::build_extractor;
use pawnkyc::config::KycConfig;
use pawnkyc::core::models::FormData;
use pawnkyc::core::ports::DocumentInput;
use pawnkyc::core::services::KycEngine;
use pawnkyc::output::{DecisionReport, OutputMode};

/// Run extraction and the engine, print the decision, save nothing
pub fn evaluate(
    config: &KycConfig,
    form: &FormData,
    document: &Path,
    attempts: u32,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let extractor = build_extractor(config.extractor.backend);
    let input = DocumentInput::from_path(document)?;
    let extracted = extractor.extract(&input)?;

    let engine = KycEngine::new(extractor.provider(), config.engine.locale.clone());
    DecisionReport::transient(engine.evaluate(form, &extracted, attempts)).render(mode);
    Ok(())
}
