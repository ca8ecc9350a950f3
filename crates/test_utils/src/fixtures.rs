//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the pricing and billing domains. Fixtures
//! are consistent and predictable so unit tests can assert on exact Rand
//! amounts.

use chrono::NaiveDate;
use core_kernel::{AdvocateId, MatterId, Money, RateCardId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical senior-junior hourly rate
    pub fn hourly_rate() -> Money {
        Money::new(dec!(2500))
    }

    /// A typical fixed fee for a written opinion
    pub fn opinion_fee() -> Money {
        Money::new(dec!(10000))
    }

    /// A typical court filing fee
    pub fn filing_fee() -> Money {
        Money::new(dec!(1000))
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }

    /// A negative amount for refund scenarios
    pub fn refund() -> Money {
        Money::new(dec!(-500))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard date work was performed
    pub fn work_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    /// Standard invoice due date
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    /// A due date firmly in the past, for overdue tests
    pub fn past_due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic advocate ID for testing
    pub fn advocate_id() -> AdvocateId {
        AdvocateId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic matter ID for testing
    pub fn matter_id() -> MatterId {
        MatterId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic rate card ID for testing
    pub fn rate_card_id() -> RateCardId {
        RateCardId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// Standard estimated hours for a consultation
    pub fn consultation_hours() -> Decimal {
        dec!(2)
    }

    /// Fractional hours for rounding tests
    pub fn fractional_hours() -> Decimal {
        dec!(1.5)
    }

    /// Standard percentage discount
    pub fn discount_percentage() -> Decimal {
        dec!(10)
    }

    /// The South African VAT rate as a fraction
    pub fn vat_rate() -> Decimal {
        dec!(0.15)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard service name
    pub fn service_name() -> &'static str {
        "Consultation"
    }

    /// Standard time entry description
    pub fn time_entry_description() -> &'static str {
        "Perusal of record"
    }

    /// Standard expense description
    pub fn expense_description() -> &'static str {
        "Court filing fee"
    }

    /// Standard expense category
    pub fn expense_category() -> &'static str {
        "filing"
    }
}
