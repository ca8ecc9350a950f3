//! Billing Domain - Rate Cards, Pro Formas, and Invoices
//!
//! This crate sits on top of the pricing engine and models the documents
//! a practice actually issues:
//!
//! - **Rate cards**: reusable, named pricing definitions for standard
//!   legal services. The storage schema recognizes four pricing types
//!   (`hourly`, `fixed`, `per_item`, `percentage`); only the first two map
//!   onto the calculation engine's service branches, and the mapping makes
//!   that explicit.
//! - **Standard service templates**: bar-association or system templates
//!   an advocate can instantiate into their own rate cards.
//! - **Pro forma estimates**: non-binding fee estimates assembled from
//!   rate cards before any work is recorded.
//! - **Invoices**: billing documents assembled from a full
//!   [`domain_pricing::CalculationResult`], with a payment lifecycle.

pub mod rate_card;
pub mod proforma;
pub mod invoice;
pub mod error;

pub use rate_card::{RateCard, RatePricingType, ServiceCategory, StandardServiceTemplate};
pub use proforma::{ProFormaEstimate, ProFormaLineItem};
pub use invoice::{Invoice, InvoiceItem, InvoiceItemType, InvoiceStatus};
pub use error::BillingError;
