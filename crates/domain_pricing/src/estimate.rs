//! Rough hours estimation for new matters
//!
//! A heuristic lookup table, not a derived invariant: base hours keyed by
//! matter type and complexity, plus whatever hours the selected services
//! already declare. Used to seed pro-forma estimates before any time has
//! been recorded.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::service::ServiceItem;

/// Matter complexity bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Recognized matter types for the base-hours table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatterType {
    Commercial,
    Litigation,
    Corporate,
}

impl MatterType {
    /// Parses a matter-type string, falling back to `Commercial` for
    /// anything unrecognized
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "litigation" => MatterType::Litigation,
            "corporate" => MatterType::Corporate,
            _ => MatterType::Commercial,
        }
    }
}

/// Base hours by complexity and matter type (configuration data)
fn base_hours(complexity: Complexity, matter_type: MatterType) -> Decimal {
    use Complexity::*;
    use MatterType::*;
    match (complexity, matter_type) {
        (Low, Commercial) => dec!(5),
        (Low, Litigation) => dec!(10),
        (Low, Corporate) => dec!(8),
        (Medium, Commercial) => dec!(15),
        (Medium, Litigation) => dec!(25),
        (Medium, Corporate) => dec!(20),
        (High, Commercial) => dec!(40),
        (High, Litigation) => dec!(60),
        (High, Corporate) => dec!(50),
    }
}

/// Estimates total hours for a matter.
///
/// # Arguments
///
/// * `matter_type` - free-form matter type; unrecognized values use the
///   commercial column
/// * `complexity` - complexity band
/// * `services` - already-selected services whose declared estimated
///   hours are added on top of the base
///
/// # Returns
///
/// The estimate rounded to the nearest whole hour.
pub fn estimate_hours(matter_type: &str, complexity: Complexity, services: &[ServiceItem]) -> u32 {
    let base = base_hours(complexity, MatterType::parse(matter_type));
    let service_hours: Decimal = services
        .iter()
        .filter_map(|s| s.pricing.estimated_hours())
        .sum();

    (base + service_hours)
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;

    #[test]
    fn test_base_table_lookup() {
        assert_eq!(estimate_hours("litigation", Complexity::High, &[]), 60);
        assert_eq!(estimate_hours("corporate", Complexity::Medium, &[]), 20);
        assert_eq!(estimate_hours("commercial", Complexity::Low, &[]), 5);
    }

    #[test]
    fn test_unknown_matter_type_falls_back_to_commercial() {
        assert_eq!(estimate_hours("family", Complexity::Medium, &[]), 15);
        assert_eq!(estimate_hours("", Complexity::Low, &[]), 5);
    }

    #[test]
    fn test_service_hours_are_added_and_rounded() {
        let services = vec![
            ServiceItem::hourly("Consultation", Money::new(dec!(2500)), Some(dec!(2.5))),
            ServiceItem::hourly("Drafting", Money::new(dec!(2500)), Some(dec!(4))),
            // Fixed services declare no hours
            ServiceItem::fixed("Opinion", Money::new(dec!(10000)), None),
        ];
        // 5 base + 6.5 service hours = 11.5, rounds to 12
        assert_eq!(estimate_hours("commercial", Complexity::Low, &services), 12);
    }
}
