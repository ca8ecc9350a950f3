//! Pricing Domain - Fee Calculation Engine
//!
//! This crate implements the pure calculation core used by pro formas and
//! invoices: it aggregates billable services, recorded time entries, and
//! reimbursable expenses, applies an optional discount to professional
//! fees, and computes VAT with independent applicability switches for
//! fees and expenses.
//!
//! # Calculation Rules
//!
//! - **Professional fees** are the pool of service charges plus time-entry
//!   charges. Only this pool is eligible for discounting.
//! - **Expenses** (disbursements) are summed separately and are never
//!   discounted; each expense carries its own VAT applicability flag.
//! - **VAT** defaults to the South African 15% rate and is charged on the
//!   post-discount professional fees and on VAT-applicable expenses. The
//!   top-level `vat_amount` reports professional-fee VAT only; expense VAT
//!   appears in the breakdown and in the final total.
//! - **Contingency services** contribute zero to every total: the fee
//!   depends on a case outcome unknown at estimate time, so the percentage
//!   is carried for display only.
//!
//! # Example
//!
//! ```rust
//! use domain_pricing::{PricingCalculator, ServiceItem};
//! use core_kernel::Money;
//! use rust_decimal_macros::dec;
//!
//! let services = vec![ServiceItem::fixed("Opinion on merits", Money::new(dec!(10000)), None)];
//! let result = PricingCalculator::calculate(&services, &[], &[], None, None);
//!
//! assert_eq!(result.total.amount(), dec!(11500)); // R10,000 + 15% VAT
//! ```
//!
//! The engine is a pure function of its inputs: no I/O, no logging, no
//! shared state. `calculate` never fails; `validate_pricing` is the
//! explicit error-reporting gate and aggregates every violation.

pub mod service;
pub mod time_entry;
pub mod expense;
pub mod discount;
pub mod vat;
pub mod calculator;
pub mod breakdown;
pub mod estimate;
pub mod validation;
pub mod error;

pub use service::{ServiceItem, ServicePricing};
pub use time_entry::TimeEntry;
pub use expense::Expense;
pub use discount::{Discount, DiscountCalculation, DiscountType};
pub use vat::{VatCalculation, VatConfig};
pub use calculator::{
    Breakdown, CalculationResult, ExpenseCalculation, PricingCalculator, ServiceCalculation,
    TimeEntryCalculation,
};
pub use breakdown::{BreakdownSummary, BreakdownTotals, ExpenseLine, ServiceLine, TimeEntryLine, VatSummary};
pub use estimate::{estimate_hours, Complexity, MatterType};
pub use validation::{validate_pricing, PricingValidator, ValidationResult};
pub use error::PricingError;
