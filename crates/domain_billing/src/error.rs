//! Billing domain errors

use thiserror::Error;

use crate::invoice::InvoiceStatus;

/// Errors from the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// An invoice lifecycle transition that is not allowed
    #[error("invalid invoice transition from {from:?} to {to:?}")]
    InvalidStateTransition {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },

    /// A payment that cannot be recorded
    #[error("invalid payment: {0}")]
    InvalidPayment(String),
}
