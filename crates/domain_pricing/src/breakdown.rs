//! Display-oriented projections of a calculation
//!
//! Nothing here computes anything new: these helpers reshape a
//! [`CalculationResult`] into flat structures and text suitable for
//! pro-forma previews, PDF line items, and analysis exports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::calculator::{CalculationResult, PricingCalculator};
use crate::expense::Expense;
use crate::service::ServiceItem;
use crate::time_entry::TimeEntry;

/// A flattened service line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub name: String,
    pub amount: Money,
    pub description: String,
}

/// A flattened time-entry line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryLine {
    pub description: String,
    pub hours: Decimal,
    pub rate: Money,
    pub amount: Money,
}

/// A flattened expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub description: String,
    pub amount: Money,
    pub vat_amount: Money,
}

/// The VAT section of a breakdown summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatSummary {
    pub rate: Rate,
    pub services_vat: Money,
    pub expenses_vat: Money,
    pub total_vat: Money,
}

/// The totals section of a breakdown summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownTotals {
    pub subtotal: Money,
    pub services_total: Money,
    pub time_entries_total: Money,
    pub expenses_total: Money,
    pub discount_amount: Money,
    pub vat_amount: Money,
    pub total: Money,
}

/// A display-friendly summary of a full calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSummary {
    pub services: Vec<ServiceLine>,
    pub time_entries: Vec<TimeEntryLine>,
    pub expenses: Vec<ExpenseLine>,
    pub vat: VatSummary,
    pub totals: BreakdownTotals,
}

impl PricingCalculator {
    /// Runs a default-VAT, no-discount calculation and flattens it for
    /// analysis or export
    pub fn generate_breakdown(
        services: &[ServiceItem],
        time_entries: &[TimeEntry],
        expenses: &[Expense],
    ) -> BreakdownSummary {
        let result = Self::calculate(services, time_entries, expenses, None, None);

        BreakdownSummary {
            services: result
                .breakdown
                .services
                .iter()
                .map(|s| ServiceLine {
                    name: s.service.name.clone(),
                    amount: s.amount,
                    description: s.service.description.clone().unwrap_or_default(),
                })
                .collect(),
            time_entries: result
                .breakdown
                .time_entries
                .iter()
                .map(|t| TimeEntryLine {
                    description: t.time_entry.description.clone(),
                    hours: t.time_entry.hours,
                    rate: t.time_entry.rate,
                    amount: t.amount,
                })
                .collect(),
            expenses: result
                .breakdown
                .expenses
                .iter()
                .map(|e| ExpenseLine {
                    description: e.expense.description.clone(),
                    amount: e.amount,
                    vat_amount: e.vat_amount,
                })
                .collect(),
            vat: VatSummary {
                rate: result.breakdown.vat.config.rate,
                services_vat: result.breakdown.vat.services_vat,
                expenses_vat: result.breakdown.vat.expenses_vat,
                total_vat: result.breakdown.vat.total_vat,
            },
            totals: BreakdownTotals {
                subtotal: result.subtotal,
                services_total: result.services_total,
                time_entries_total: result.time_entries_total,
                expenses_total: result.expenses_total,
                discount_amount: result.discount_amount,
                vat_amount: result.vat_amount,
                total: result.total,
            },
        }
    }

    /// Renders a multi-line text report of a calculation, section by
    /// section, for plain-text previews and emails
    pub fn generate_breakdown_text(result: &CalculationResult) -> String {
        let mut lines: Vec<String> = Vec::new();

        if !result.breakdown.services.is_empty() {
            lines.push("SERVICES:".to_string());
            for calc in &result.breakdown.services {
                lines.push(format!("  {}: {}", calc.service.name, calc.calculation));
            }
            lines.push(format!("  Subtotal: {}", result.services_total));
            lines.push(String::new());
        }

        if !result.breakdown.time_entries.is_empty() {
            lines.push("TIME ENTRIES:".to_string());
            for calc in &result.breakdown.time_entries {
                lines.push(format!(
                    "  {}: {}h × {} = {}",
                    calc.time_entry.description,
                    calc.time_entry.hours.normalize(),
                    calc.time_entry.rate,
                    calc.amount
                ));
            }
            lines.push(format!("  Subtotal: {}", result.time_entries_total));
            lines.push(String::new());
        }

        if !result.breakdown.expenses.is_empty() {
            lines.push("EXPENSES:".to_string());
            for calc in &result.breakdown.expenses {
                lines.push(format!("  {}: {}", calc.expense.description, calc.amount));
                if calc.vat_amount.is_positive() {
                    lines.push(format!("    VAT: {}", calc.vat_amount));
                }
            }
            lines.push(format!("  Subtotal: {}", result.expenses_total));
            lines.push(String::new());
        }

        lines.push(format!("SUBTOTAL: {}", result.subtotal));

        if result.discount_amount.is_positive() {
            lines.push(format!("DISCOUNT: -{}", result.discount_amount));
        }

        if result.vat_amount.is_positive() {
            let pct = result.breakdown.vat.config.rate.as_percentage().round_dp(0).normalize();
            lines.push(format!("VAT ({}%): {}", pct, result.vat_amount));
        }

        lines.push(format!("TOTAL: {}", result.total));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::Discount;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_generate_breakdown_flattens_lines() {
        let services = vec![
            ServiceItem::fixed("Opinion", Money::new(dec!(10000)), None)
                .with_description("Written opinion on prospects"),
        ];
        let expenses = vec![Expense::new("Filing fee", "filing", Money::new(dec!(1000)))];

        let summary = PricingCalculator::generate_breakdown(&services, &[], &expenses);

        assert_eq!(summary.services.len(), 1);
        assert_eq!(summary.services[0].name, "Opinion");
        assert_eq!(summary.services[0].description, "Written opinion on prospects");
        assert_eq!(summary.expenses[0].vat_amount.amount(), dec!(150));
        assert_eq!(summary.totals.subtotal.amount(), dec!(11000));
    }

    #[test]
    fn test_breakdown_text_sections() {
        let services = vec![ServiceItem::hourly(
            "Trial preparation",
            Money::new(dec!(4000)),
            Some(dec!(3)),
        )];
        let time_entries = vec![TimeEntry::new(
            "Perusal of record",
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            dec!(1.5),
            Money::new(dec!(3500)),
        )];
        let discount = Discount::percentage(dec!(10));
        let result =
            PricingCalculator::calculate(&services, &time_entries, &[], Some(&discount), None);

        let text = PricingCalculator::generate_breakdown_text(&result);

        assert!(text.contains("SERVICES:"));
        assert!(text.contains("  Trial preparation: 3 hours × R 4,000.00 = R 12,000.00"));
        assert!(text.contains("TIME ENTRIES:"));
        assert!(text.contains("  Perusal of record: 1.5h × R 3,500.00 = R 5,250.00"));
        assert!(text.contains("SUBTOTAL: R 17,250.00"));
        assert!(text.contains("DISCOUNT: -R 1,725.00"));
        assert!(text.contains("VAT (15%): R 2,328.75"));
        assert!(text.contains("TOTAL: R 17,853.75"));
        // No expenses section when there are no expenses
        assert!(!text.contains("EXPENSES:"));
    }
}
