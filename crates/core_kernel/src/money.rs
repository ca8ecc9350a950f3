//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of South African Rand
//! amounts using rust_decimal for precise calculations without
//! floating-point errors. The practice bills in a single currency, so
//! amounts carry no currency tag (multi-currency is out of scope).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount in South African Rand
///
/// Money keeps the full decimal precision of the arithmetic that produced
/// it; rounding happens only at display time. This lets calculation
/// identities (e.g. total = subtotal - discount + VAT) hold exactly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value from a decimal Rand amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount of cents
    pub fn from_minor(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the smaller of two amounts
    pub fn min(self, other: Money) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Rounds to whole cents
    pub fn round_to_cents(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Rounds using banker's rounding (round half to even)
    pub fn round_bankers(&self, dp: u32) -> Self {
        Self(self.0.round_dp_with_strategy(
            dp,
            rust_decimal::RoundingStrategy::MidpointNearestEven,
        ))
    }

    /// Multiplies by a scalar (e.g. hours or a quantity)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(self.0 / divisor))
    }
}

/// Renders the amount as `R 1,234.56`: digits grouped in threes, always
/// two decimal places. Negative amounts place the minus sign immediately
/// before the numerals: `R -1,234.56`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let unsigned = format!("{:.2}", rounded.abs());
        let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));
        write!(f, "R {}{}.{}", sign, group_thousands(whole), cents)
    }
}

/// Parses amounts in display form (`R 1,234.56`) or plain decimals.
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .trim_start_matches('R')
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        Decimal::from_str(&cleaned)
            .map(Self)
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor).expect("Division by zero in Money::div")
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Represents a percentage rate (e.g. the VAT rate or a discount rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal fraction (e.g. 0.15 for 15%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction (e.g. 0.15 for 15%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from percentage points (e.g. 15.0 for 15%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate in percentage points
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_money_min() {
        let a = Money::new(dec!(1500));
        let b = Money::new(dec!(10000));
        assert_eq!(a.min(b), a);
        assert_eq!(b.min(a), a);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [dec!(1), dec!(2.5), dec!(3)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(6.5));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(dec!(0)).to_string(), "R 0.00");
        assert_eq!(Money::new(dec!(950)).to_string(), "R 950.00");
        assert_eq!(Money::new(dec!(4000)).to_string(), "R 4,000.00");
        assert_eq!(Money::new(dec!(12000)).to_string(), "R 12,000.00");
        assert_eq!(Money::new(dec!(1234567.891)).to_string(), "R 1,234,567.89");
    }

    #[test]
    fn test_display_negative_amounts() {
        assert_eq!(Money::new(dec!(-1234.5)).to_string(), "R -1,234.50");
        // A sub-cent negative rounds to zero and drops the sign
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "R 0.00");
    }

    #[test]
    fn test_parse_display_form() {
        let parsed: Money = "R 12,000.00".parse().unwrap();
        assert_eq!(parsed.amount(), dec!(12000.00));

        let plain: Money = "2587.5".parse().unwrap();
        assert_eq!(plain.amount(), dec!(2587.5));

        assert!("not money".parse::<Money>().is_err());
    }

    #[test]
    fn test_division_by_zero() {
        let m = Money::new(dec!(100));
        assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(15.0));
        let amount = Money::new(dec!(10000.00));

        assert_eq!(rate.apply(&amount).amount(), dec!(1500.00));
        assert_eq!(rate.as_decimal(), dec!(0.15));
    }
}
