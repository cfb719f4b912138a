//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Decision, DecisionStatus, ExtractedData, KycRecord};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn status_label(status: DecisionStatus) -> String {
    let label = status.as_str().to_uppercase();
    match status {
        DecisionStatus::Verified => label.green().bold().to_string(),
        DecisionStatus::NeedsReview => label.yellow().bold().to_string(),
        DecisionStatus::Fail => label.red().bold().to_string(),
        DecisionStatus::ManualReviewRequested => label.cyan().bold().to_string(),
    }
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Result of an evaluation
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    /// Subject the decision belongs to, when persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    /// Record lifecycle status, when persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
    /// The decision
    pub decision: Decision,
}

impl DecisionReport {
    /// Report for a decision that was not persisted
    #[must_use]
    pub const fn transient(decision: Decision) -> Self {
        Self {
            subject_id: None,
            lifecycle: None,
            decision,
        }
    }

    /// Report for a persisted record
    #[must_use]
    pub fn from_record(record: KycRecord) -> Self {
        Self {
            subject_id: Some(record.subject_id),
            lifecycle: Some(record.status.to_string()),
            decision: record.decision,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let d = &self.decision;
        if let Some(subject) = &self.subject_id {
            println!("Subject:  {subject}");
        }
        println!("Status:   {}", status_label(d.status));
        println!("Score:    {}/100", d.score);
        if let Some(lifecycle) = &self.lifecycle {
            println!("Record:   {lifecycle}");
        }
        println!("Provider: {}", d.provider);
        println!(
            "Attempts: {} automatic{}",
            d.attempts.auto,
            if d.attempts.manual_override { ", manual review requested" } else { "" }
        );

        if d.reasons.is_empty() {
            println!("\nAll checks matched.");
        } else {
            println!("\nReasons:");
            for reason in &d.reasons {
                println!("  - {reason}");
            }
        }
    }
}

/// Result of MRZ parsing
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    /// Parsed data
    pub extracted: ExtractedData,
}

impl ExtractionReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let e = &self.extracted;
        if !e.mrz_present {
            println!("No MRZ found.");
            return;
        }
        println!("MRZ:             {}", if e.mrz_valid { "valid" } else { "invalid structure" });
        println!("Name:            {}", field(e.full_name.as_deref()));
        println!("Date of birth:   {}", field(e.date_of_birth.as_deref()));
        println!("Document number: {}", field(e.document_number.as_deref()));
    }
}

/// Monthly payment quote
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuoteResult {
    /// Loan principal
    pub principal: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    /// Term in months
    pub months: u32,
    /// Monthly payment, rounded to cents
    pub monthly_payment: f64,
}

impl QuoteResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!(
                    "{:.2} over {} month(s) at {}%: {:.2} per month",
                    self.principal, self.months, self.annual_rate, self.monthly_payment
                );
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
