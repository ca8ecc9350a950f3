//! VAT configuration and calculation lines
//!
//! A single flat-rate VAT with independent on/off switches for the two
//! pools it can apply to: professional fees and expenses.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

/// VAT configuration for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VatConfig {
    /// The VAT rate as a decimal fraction, e.g. 0.15 for 15%
    pub rate: Rate,
    /// Whether VAT is charged on professional fees (services + time)
    pub applicable_to_services: bool,
    /// Whether VAT is charged on VAT-applicable expenses
    pub applicable_to_expenses: bool,
}

impl VatConfig {
    /// Standard South African VAT: 15%, applicable to both pools
    pub fn south_african() -> Self {
        Self {
            rate: Rate::new(dec!(0.15)),
            applicable_to_services: true,
            applicable_to_expenses: true,
        }
    }

    /// Disables VAT entirely (e.g. a practice below the registration threshold)
    pub fn none() -> Self {
        Self {
            rate: Rate::new(dec!(0)),
            applicable_to_services: false,
            applicable_to_expenses: false,
        }
    }
}

impl Default for VatConfig {
    fn default() -> Self {
        Self::south_african()
    }
}

/// The VAT split of a calculation breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatCalculation {
    /// The configuration that was applied
    pub config: VatConfig,
    /// VAT on post-discount professional fees
    pub services_vat: Money,
    /// VAT on VAT-applicable expenses
    pub expenses_vat: Money,
    /// Mirrors the result's top-level `vat_amount` (professional-fee VAT
    /// only); expense VAT is reported separately, not folded in
    pub total_vat: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_south_african_vat() {
        let vat = VatConfig::default();
        assert_eq!(vat.rate.as_decimal(), dec!(0.15));
        assert!(vat.applicable_to_services);
        assert!(vat.applicable_to_expenses);
    }

    #[test]
    fn test_none_disables_both_pools() {
        let vat = VatConfig::none();
        assert!(!vat.applicable_to_services);
        assert!(!vat.applicable_to_expenses);
        assert!(vat.rate.apply(&Money::new(dec!(100))).is_zero());
    }
}
