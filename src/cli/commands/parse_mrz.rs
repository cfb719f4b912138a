//! Parse MRZ text from a file

use std::fs;
use std::path::Path;

use pawnkyc::core::services::parse_mrz as parse;
use pawnkyc::output::{ExtractionReport, OutputMode};

/// Print the fields found in an MRZ text file
pub fn parse_mrz(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let text = fs::read_to_string(file)?;
    let report = ExtractionReport {
        extracted: parse(&text),
    };
    report.render(mode);
    Ok(())
}
