//! Loan payment quote

use pawnkyc::core::services::monthly_payment;
use pawnkyc::output::{OutputMode, QuoteResult};

/// Print the monthly payment for a loan
pub fn quote(principal: f64, rate: f64, months: u32, mode: OutputMode) -> anyhow::Result<()> {
    let payment = monthly_payment(principal, rate, months)?;
    QuoteResult {
        principal,
        annual_rate: rate,
        months,
        monthly_payment: payment,
    }
    .render(mode);
    Ok(())
}
