//! Billable service items
//!
//! A service is a unit of legal work priced in one of three ways: hourly,
//! fixed fee, or contingency. The pricing branches are modelled as a tagged
//! union so each carries only the fields that are authoritative for it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, ServiceId};

/// Pricing branch for a service item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pricing_type", rename_all = "snake_case")]
pub enum ServicePricing {
    /// Billed at an hourly rate for an estimated number of hours
    Hourly {
        rate: Money,
        /// Estimated hours; treated as 1 when absent
        estimated_hours: Option<Decimal>,
    },
    /// Billed as a flat fee, optionally multiplied by a quantity
    Fixed {
        fee: Money,
        /// Quantity; treated as 1 when absent
        quantity: Option<Decimal>,
    },
    /// A percentage of a future case outcome. The outcome is unknown at
    /// estimate time, so the amount is always zero; the percentage is
    /// carried through for display only.
    Contingency { percentage: Decimal },
}

impl ServicePricing {
    /// Computes the billable amount for this pricing branch
    pub fn amount(&self) -> Money {
        match self {
            ServicePricing::Hourly {
                rate,
                estimated_hours,
            } => rate.multiply(estimated_hours.unwrap_or(Decimal::ONE)),
            ServicePricing::Fixed { fee, quantity } => {
                fee.multiply(quantity.unwrap_or(Decimal::ONE))
            }
            ServicePricing::Contingency { .. } => Money::zero(),
        }
    }

    /// Human-readable arithmetic behind [`Self::amount`], e.g.
    /// `3 hours × R 4,000.00 = R 12,000.00`
    pub fn calculation_display(&self) -> String {
        match self {
            ServicePricing::Hourly {
                rate,
                estimated_hours,
            } => {
                let hours = estimated_hours.unwrap_or(Decimal::ONE).normalize();
                format!("{} hours × {} = {}", hours, rate, self.amount())
            }
            ServicePricing::Fixed { fee, quantity } => {
                let quantity = quantity.unwrap_or(Decimal::ONE);
                if quantity > Decimal::ONE {
                    format!("{} × {} = {}", quantity.normalize(), fee, self.amount())
                } else {
                    format!("{}", fee)
                }
            }
            ServicePricing::Contingency { percentage } => {
                format!(
                    "{}% contingency (calculated on outcome)",
                    percentage.normalize()
                )
            }
        }
    }

    /// Declared estimated hours, if this branch carries any
    pub fn estimated_hours(&self) -> Option<Decimal> {
        match self {
            ServicePricing::Hourly {
                estimated_hours, ..
            } => *estimated_hours,
            _ => None,
        }
    }
}

/// A billable unit of legal service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Unique identifier (uniqueness is not enforced by the engine)
    pub id: ServiceId,
    /// Service name, e.g. "Drafting heads of argument"
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Pricing branch
    #[serde(flatten)]
    pub pricing: ServicePricing,
}

impl ServiceItem {
    /// Creates an hourly-billed service
    pub fn hourly(name: impl Into<String>, rate: Money, estimated_hours: Option<Decimal>) -> Self {
        Self {
            id: ServiceId::new(),
            name: name.into(),
            description: None,
            pricing: ServicePricing::Hourly {
                rate,
                estimated_hours,
            },
        }
    }

    /// Creates a fixed-fee service
    pub fn fixed(name: impl Into<String>, fee: Money, quantity: Option<Decimal>) -> Self {
        Self {
            id: ServiceId::new(),
            name: name.into(),
            description: None,
            pricing: ServicePricing::Fixed { fee, quantity },
        }
    }

    /// Creates a contingency service (always zero-amount at estimate time)
    pub fn contingency(name: impl Into<String>, percentage: Decimal) -> Self {
        Self {
            id: ServiceId::new(),
            name: name.into(),
            description: None,
            pricing: ServicePricing::Contingency { percentage },
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The billable amount for this service
    pub fn amount(&self) -> Money {
        self.pricing.amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_amount() {
        let service = ServiceItem::hourly("Consultation", Money::new(dec!(4000)), Some(dec!(3)));
        assert_eq!(service.amount().amount(), dec!(12000));
    }

    #[test]
    fn test_hourly_defaults_to_one_hour() {
        let service = ServiceItem::hourly("Consultation", Money::new(dec!(4000)), None);
        assert_eq!(service.amount().amount(), dec!(4000));
    }

    #[test]
    fn test_fixed_amount_with_quantity() {
        let service = ServiceItem::fixed("Notice of motion", Money::new(dec!(1500)), Some(dec!(4)));
        assert_eq!(service.amount().amount(), dec!(6000));
    }

    #[test]
    fn test_contingency_is_always_zero() {
        let service = ServiceItem::contingency("Damages claim", dec!(25));
        assert!(service.amount().is_zero());
        assert_eq!(
            service.pricing.calculation_display(),
            "25% contingency (calculated on outcome)"
        );
    }

    #[test]
    fn test_hourly_calculation_display() {
        let service = ServiceItem::hourly("Trial preparation", Money::new(dec!(4000)), Some(dec!(3)));
        assert_eq!(
            service.pricing.calculation_display(),
            "3 hours × R 4,000.00 = R 12,000.00"
        );
    }

    #[test]
    fn test_fixed_calculation_display_without_quantity() {
        let service = ServiceItem::fixed("Opinion", Money::new(dec!(10000)), None);
        assert_eq!(service.pricing.calculation_display(), "R 10,000.00");
    }

    #[test]
    fn test_pricing_branch_is_flattened_on_the_wire() {
        let service = ServiceItem::hourly("Consultation", Money::new(dec!(4000)), Some(dec!(3)));
        let value = serde_json::to_value(&service).unwrap();

        assert_eq!(value["pricing_type"], "hourly");
        assert_eq!(value["rate"], "4000");
        assert_eq!(value["estimated_hours"], "3");
        assert!(value.get("pricing").is_none());
    }

    #[test]
    fn test_deserializes_from_tagged_json() {
        let service: ServiceItem = serde_json::from_str(
            r#"{
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Opinion",
                "description": null,
                "pricing_type": "fixed",
                "fee": "10000"
            }"#,
        )
        .unwrap();

        assert_eq!(service.name, "Opinion");
        assert_eq!(service.amount().amount(), dec!(10000));
    }
}
