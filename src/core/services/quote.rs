//! Loan quote - fixed-rate monthly payment

use thiserror::Error;

/// Invalid loan parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuoteError {
    /// Term must be at least one month
    #[error("loan term must be at least one month")]
    ZeroTerm,

    /// Principal must be finite and non-negative
    #[error("invalid principal: {0}")]
    InvalidPrincipal(f64),

    /// Annual rate must be finite and non-negative
    #[error("invalid annual rate: {0}")]
    InvalidRate(f64),
}

/// Monthly payment of an amortized loan, rounded to cents
///
/// `annual_rate_percent` is a yearly percentage (e.g. `12.0` for 12%).
/// A zero rate splits the principal evenly.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    months: u32,
) -> Result<f64, QuoteError> {
    if months == 0 {
        return Err(QuoteError::ZeroTerm);
    }
    if !principal.is_finite() || principal < 0.0 {
        return Err(QuoteError::InvalidPrincipal(principal));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(QuoteError::InvalidRate(annual_rate_percent));
    }

    let n = f64::from(months);
    let r = annual_rate_percent / 1200.0;
    let payment = if r.abs() < f64::EPSILON {
        principal / n
    } else {
        principal * r / (1.0 - (1.0 + r).powf(-n))
    };

    Ok((payment * 100.0).round() / 100.0)
}
