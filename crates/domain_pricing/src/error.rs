//! Error types for the pricing domain

use thiserror::Error;

/// Errors from the pricing domain
///
/// Calculation itself is total and never fails; the only failure mode is
/// validation, which aggregates every violation found so callers can show
/// them all at once.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl PricingError {
    /// The individual violations behind this error
    pub fn violations(&self) -> &[String] {
        match self {
            PricingError::Validation(errors) => errors,
        }
    }
}
