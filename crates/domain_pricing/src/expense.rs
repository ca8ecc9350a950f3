//! Disbursements and reimbursable costs
//!
//! Expenses are costs incurred on a client's behalf (filing fees, travel,
//! counsel's disbursements). They are summed separately from professional
//! fees and are never subject to a discount.

use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, Money};

/// A disbursement or reimbursable cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// What the cost was for
    pub description: String,
    /// Free-form category, e.g. "filing", "travel"
    pub category: String,
    /// The amount disbursed
    pub amount: Money,
    /// Whether VAT applies to this expense; omitted means applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_applicable: Option<bool>,
}

impl Expense {
    /// Creates a new expense, VAT-applicable by default
    pub fn new(description: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            category: category.into(),
            amount,
            vat_applicable: None,
        }
    }

    /// Marks the expense as exempt from VAT
    pub fn vat_exempt(mut self) -> Self {
        self.vat_applicable = Some(false);
        self
    }

    /// True unless the expense was explicitly marked exempt
    pub fn is_vat_applicable(&self) -> bool {
        self.vat_applicable != Some(false)
    }
}
