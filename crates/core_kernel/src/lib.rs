//! Core Kernel - Foundational types and utilities for the billing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money values in South African Rand with precise decimal arithmetic
//! - Percentage rates for VAT and contingency calculations
//! - Strongly-typed identifiers for billing entities

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Rate, MoneyError};
pub use identifiers::{
    ServiceId, TimeEntryId, ExpenseId, RateCardId, TemplateId,
    MatterId, InvoiceId, ProFormaId, AdvocateId,
};
pub use error::CoreError;
