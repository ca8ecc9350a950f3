//! Pricing DTOs
//!
//! Request shapes mirror the domain's serialized form (tagged pricing
//! branches, snake_case), so payloads built from serialized domain types
//! round-trip cleanly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use domain_pricing::{
    CalculationResult, Complexity, Discount, DiscountType, Expense, ServiceItem, TimeEntry,
    ValidationResult, VatConfig,
};

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub services: Vec<ServiceItemRequest>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntryRequest>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRequest>,
    pub discount: Option<DiscountRequest>,
    pub vat: Option<VatRequest>,
}

impl CalculateRequest {
    /// Converts the request into domain inputs
    pub fn into_domain(
        self,
    ) -> (
        Vec<ServiceItem>,
        Vec<TimeEntry>,
        Vec<Expense>,
        Option<Discount>,
        Option<VatConfig>,
    ) {
        (
            self.services.into_iter().map(|s| s.into_domain()).collect(),
            self.time_entries
                .into_iter()
                .map(|t| t.into_domain())
                .collect(),
            self.expenses.into_iter().map(|e| e.into_domain()).collect(),
            self.discount.map(|d| d.into_domain()),
            self.vat.map(|v| v.into_domain()),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct ServiceItemRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub pricing: ServicePricingRequest,
}

/// Pricing branch of a service request, tagged like the domain type
#[derive(Debug, Deserialize)]
#[serde(tag = "pricing_type", rename_all = "snake_case")]
pub enum ServicePricingRequest {
    Hourly {
        rate: Decimal,
        estimated_hours: Option<Decimal>,
    },
    Fixed {
        fee: Decimal,
        quantity: Option<Decimal>,
    },
    Contingency {
        percentage: Decimal,
    },
}

impl ServiceItemRequest {
    pub fn into_domain(self) -> ServiceItem {
        let item = match self.pricing {
            ServicePricingRequest::Hourly {
                rate,
                estimated_hours,
            } => ServiceItem::hourly(self.name, Money::new(rate), estimated_hours),
            ServicePricingRequest::Fixed { fee, quantity } => {
                ServiceItem::fixed(self.name, Money::new(fee), quantity)
            }
            ServicePricingRequest::Contingency { percentage } => {
                ServiceItem::contingency(self.name, percentage)
            }
        };
        match self.description {
            Some(description) => item.with_description(description),
            None => item,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeEntryRequest {
    pub description: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub rate: Decimal,
}

impl TimeEntryRequest {
    fn into_domain(self) -> TimeEntry {
        TimeEntry::new(self.description, self.date, self.hours, Money::new(self.rate))
    }
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub vat_applicable: Option<bool>,
}

impl ExpenseRequest {
    fn into_domain(self) -> Expense {
        let mut expense = Expense::new(self.description, self.category, Money::new(self.amount));
        expense.vat_applicable = self.vat_applicable;
        expense
    }
}

#[derive(Debug, Deserialize)]
pub struct DiscountRequest {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: Decimal,
    pub description: Option<String>,
}

impl DiscountRequest {
    fn into_domain(self) -> Discount {
        let discount = match self.discount_type {
            DiscountType::Percentage => Discount::percentage(self.value),
            DiscountType::Fixed => Discount::fixed(self.value),
        };
        match self.description {
            Some(description) => discount.with_description(description),
            None => discount,
        }
    }
}

/// Partial VAT settings; unspecified fields take the South African
/// defaults
#[derive(Debug, Deserialize)]
pub struct VatRequest {
    pub rate: Option<Decimal>,
    pub applicable_to_services: Option<bool>,
    pub applicable_to_expenses: Option<bool>,
}

impl VatRequest {
    pub(crate) fn into_domain(self) -> VatConfig {
        let defaults = VatConfig::default();
        VatConfig {
            rate: self.rate.map(Rate::new).unwrap_or(defaults.rate),
            applicable_to_services: self
                .applicable_to_services
                .unwrap_or(defaults.applicable_to_services),
            applicable_to_expenses: self
                .applicable_to_expenses
                .unwrap_or(defaults.applicable_to_expenses),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub result: CalculationResult,
    /// The grand total rendered for display, e.g. `R 11,500.00`
    pub formatted_total: String,
}

impl CalculateResponse {
    pub fn from_result(result: CalculationResult) -> Self {
        let formatted_total = result.total.to_string();
        Self {
            result,
            formatted_total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EstimateHoursRequest {
    pub matter_type: String,
    pub complexity: Complexity,
    #[serde(default)]
    pub services: Vec<ServiceItemRequest>,
}

#[derive(Debug, Serialize)]
pub struct EstimateHoursResponse {
    pub estimated_hours: u32,
}

#[derive(Debug, Serialize)]
pub struct BreakdownTextResponse {
    pub text: String,
}
