//! Discount rules
//!
//! At most one discount applies per calculation, and only against the
//! professional-fee pool (services + time entries). Expenses are never
//! discounted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Types of discounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// A percentage of the professional fees
    Percentage,
    /// A flat Rand amount
    Fixed,
}

/// A discount against professional fees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    /// Percentage points for [`DiscountType::Percentage`], a Rand amount
    /// for [`DiscountType::Fixed`]
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Discount {
    /// Creates a percentage discount (value in percentage points)
    pub fn percentage(value: Decimal) -> Self {
        Self {
            discount_type: DiscountType::Percentage,
            value,
            description: None,
        }
    }

    /// Creates a flat-amount discount
    pub fn fixed(value: Decimal) -> Self {
        Self {
            discount_type: DiscountType::Fixed,
            value,
            description: None,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Computes the discount amount against a professional-fee base.
    ///
    /// A fixed discount is capped at the base so it cannot drive the
    /// professional fees negative. A percentage discount is deliberately
    /// NOT capped at 100%: values above 100 produce a negative taxable
    /// base, matching how quotes have historically been issued.
    pub fn amount_on(&self, professional_fees: Money) -> Money {
        match self.discount_type {
            DiscountType::Percentage => professional_fees.multiply(self.value / dec!(100)),
            DiscountType::Fixed => Money::new(self.value).min(professional_fees),
        }
    }

    /// Computes the discount and records the base it applied to
    pub fn calculate(&self, professional_fees: Money) -> DiscountCalculation {
        DiscountCalculation {
            config: self.clone(),
            amount: self.amount_on(professional_fees),
            applied_to: professional_fees,
        }
    }
}

/// The discount line of a calculation breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCalculation {
    /// The discount rule that was applied
    pub config: Discount,
    /// The resulting discount amount
    pub amount: Money,
    /// The professional-fee base the discount was applied to
    pub applied_to: Money,
}
