//! Integration tests for Money and Rate
//!
//! Exercises the public money API the way downstream crates use it:
//! Rand display formatting, exact arithmetic, and rate application.

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal_macros::dec;

#[test]
fn rand_formatting_contract() {
    // Always two decimals, digits grouped in threes
    assert_eq!(Money::new(dec!(10000)).to_string(), "R 10,000.00");
    assert_eq!(Money::new(dec!(2587.5)).to_string(), "R 2,587.50");
    assert_eq!(Money::new(dec!(150)).to_string(), "R 150.00");

    // Negative totals keep the minus sign in front of the numerals
    assert_eq!(Money::new(dec!(-19837.5)).to_string(), "R -19,837.50");
}

#[test]
fn arithmetic_preserves_full_precision() {
    // 1.5h at R3,500/h must not lose the half-rand
    let amount = Money::new(dec!(3500)).multiply(dec!(1.5));
    assert_eq!(amount.amount(), dec!(5250.0));

    let vat = Rate::from_percentage(dec!(15)).apply(&Money::new(dec!(17250)));
    assert_eq!(vat.amount(), dec!(2587.50));
}

#[test]
fn totals_sum_exactly() {
    let parts = vec![
        Money::new(dec!(12000)),
        Money::new(dec!(5250)),
        Money::new(dec!(2587.5)),
    ];
    let total: Money = parts.into_iter().sum();
    assert_eq!(total.amount(), dec!(19837.5));
}

#[test]
fn division_by_zero_is_an_error() {
    let result = Money::new(dec!(100)).divide(dec!(0));
    assert_eq!(result, Err(MoneyError::DivisionByZero));
}

#[test]
fn rate_percentage_round_trip() {
    let rate = Rate::from_percentage(dec!(15));
    assert_eq!(rate.as_percentage(), dec!(15));
    assert_eq!(rate.to_string(), "15%");
}
