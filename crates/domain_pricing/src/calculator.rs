//! The pricing calculation engine
//!
//! [`PricingCalculator::calculate`] is total and pure: it never fails,
//! performs no I/O, and holds no state. Missing optional numerics are
//! coerced to safe defaults (1 for multiplicative counts, 0 via the type
//! system for absent rates), so the engine always produces a displayable
//! estimate. Input that should be rejected is the business of
//! [`crate::validation`], which runs before data is acted on.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::discount::{Discount, DiscountCalculation};
use crate::expense::Expense;
use crate::service::ServiceItem;
use crate::time_entry::TimeEntry;
use crate::vat::{VatCalculation, VatConfig};

/// Per-service line of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCalculation {
    pub service: ServiceItem,
    pub amount: Money,
    /// Human-readable arithmetic, e.g. `3 hours × R 4,000.00 = R 12,000.00`
    pub calculation: String,
}

/// Per-time-entry line of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryCalculation {
    pub time_entry: TimeEntry,
    pub amount: Money,
}

/// Per-expense line of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCalculation {
    pub expense: Expense,
    pub amount: Money,
    /// VAT charged on this expense (zero when exempt or VAT is off)
    pub vat_amount: Money,
}

/// Itemized breakdown of a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub services: Vec<ServiceCalculation>,
    pub time_entries: Vec<TimeEntryCalculation>,
    pub expenses: Vec<ExpenseCalculation>,
    pub discount: Option<DiscountCalculation>,
    pub vat: VatCalculation,
}

/// The fully derived result of a pricing calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// services + time entries + expenses, pre-discount and pre-VAT
    pub subtotal: Money,
    pub services_total: Money,
    pub time_entries_total: Money,
    pub expenses_total: Money,
    /// Zero when no discount is configured
    pub discount_amount: Money,
    /// VAT on post-discount professional fees only. Expense VAT is
    /// reported in the breakdown and included in `total`, but is NOT
    /// folded into this field.
    pub vat_amount: Money,
    /// subtotal − discount + professional-fee VAT + expense VAT
    pub total: Money,
    pub breakdown: Breakdown,
}

impl CalculationResult {
    /// The pool eligible for discounting: services + time entries
    pub fn professional_fees(&self) -> Money {
        self.services_total + self.time_entries_total
    }
}

/// Pure calculation engine for rate cards, discounts, and VAT across
/// pro formas and invoices
pub struct PricingCalculator;

impl PricingCalculator {
    /// Calculates the itemized total for a set of billable items.
    ///
    /// # Arguments
    ///
    /// * `services` - billable service items (any pricing branch)
    /// * `time_entries` - raw recorded time
    /// * `expenses` - disbursements; never discounted
    /// * `discount` - optional discount against professional fees
    /// * `vat_config` - optional VAT settings; defaults to 15% SA VAT
    ///   applicable to both pools
    ///
    /// # Returns
    ///
    /// A [`CalculationResult`] with all totals and the per-line breakdown.
    /// This operation never fails.
    pub fn calculate(
        services: &[ServiceItem],
        time_entries: &[TimeEntry],
        expenses: &[Expense],
        discount: Option<&Discount>,
        vat_config: Option<VatConfig>,
    ) -> CalculationResult {
        let vat = vat_config.unwrap_or_default();

        let service_calculations = Self::calculate_services(services);
        let services_total: Money = service_calculations.iter().map(|c| c.amount).sum();

        let time_entry_calculations = Self::calculate_time_entries(time_entries);
        let time_entries_total: Money = time_entry_calculations.iter().map(|c| c.amount).sum();

        let expense_calculations = Self::calculate_expenses(expenses, &vat);
        let expenses_total: Money = expense_calculations.iter().map(|c| c.amount).sum();
        let expenses_vat: Money = expense_calculations.iter().map(|c| c.vat_amount).sum();

        let subtotal = services_total + time_entries_total + expenses_total;

        // Discount applies only to professional fees, never to expenses
        let professional_fees = services_total + time_entries_total;
        let discount_calculation = discount.map(|d| d.calculate(professional_fees));
        let discount_amount = discount_calculation
            .as_ref()
            .map(|d| d.amount)
            .unwrap_or_else(Money::zero);

        // VAT on professional fees is charged on the post-discount base
        let taxable_fees = professional_fees - discount_amount;
        let services_vat = if vat.applicable_to_services {
            vat.rate.apply(&taxable_fees)
        } else {
            Money::zero()
        };

        // The headline vat_amount covers professional fees only; expense
        // VAT stays in the breakdown (and in the total)
        let vat_amount = services_vat;

        let total = subtotal - discount_amount + services_vat + expenses_vat;

        CalculationResult {
            subtotal,
            services_total,
            time_entries_total,
            expenses_total,
            discount_amount,
            vat_amount,
            total,
            breakdown: Breakdown {
                services: service_calculations,
                time_entries: time_entry_calculations,
                expenses: expense_calculations,
                discount: discount_calculation,
                vat: VatCalculation {
                    config: vat,
                    services_vat,
                    expenses_vat,
                    total_vat: vat_amount,
                },
            },
        }
    }

    fn calculate_services(services: &[ServiceItem]) -> Vec<ServiceCalculation> {
        services
            .iter()
            .map(|service| ServiceCalculation {
                amount: service.amount(),
                calculation: service.pricing.calculation_display(),
                service: service.clone(),
            })
            .collect()
    }

    fn calculate_time_entries(time_entries: &[TimeEntry]) -> Vec<TimeEntryCalculation> {
        time_entries
            .iter()
            .map(|entry| TimeEntryCalculation {
                amount: entry.amount(),
                time_entry: entry.clone(),
            })
            .collect()
    }

    fn calculate_expenses(expenses: &[Expense], vat: &VatConfig) -> Vec<ExpenseCalculation> {
        expenses
            .iter()
            .map(|expense| {
                let vat_amount = if expense.is_vat_applicable() && vat.applicable_to_expenses {
                    vat.rate.apply(&expense.amount)
                } else {
                    Money::zero()
                };
                ExpenseCalculation {
                    amount: expense.amount,
                    vat_amount,
                    expense: expense.clone(),
                }
            })
            .collect()
    }
}
