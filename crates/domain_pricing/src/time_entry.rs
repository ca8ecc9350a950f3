//! Recorded billable time
//!
//! Time entries are raw units of billable work, independent of any service
//! catalogue. They always count as professional fees: VAT is never charged
//! on an entry in isolation, only on the pooled fee total.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, TimeEntryId};

/// A recorded unit of billable time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    /// What the time was spent on
    pub description: String,
    /// Date the work was performed
    pub date: NaiveDate,
    /// Hours worked (fractional hours allowed)
    pub hours: Decimal,
    /// Hourly rate charged
    pub rate: Money,
}

impl TimeEntry {
    /// Creates a new time entry
    pub fn new(
        description: impl Into<String>,
        date: NaiveDate,
        hours: Decimal,
        rate: Money,
    ) -> Self {
        Self {
            id: TimeEntryId::new(),
            description: description.into(),
            date,
            hours,
            rate,
        }
    }

    /// The billable amount: hours × rate
    pub fn amount(&self) -> Money {
        self.rate.multiply(self.hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_amount_is_hours_times_rate() {
        let entry = TimeEntry::new("Heads of argument", date(), dec!(1.5), Money::new(dec!(3500)));
        assert_eq!(entry.amount().amount(), dec!(5250));
    }

    #[test]
    fn test_zero_hours_bills_nothing() {
        let entry = TimeEntry::new("Aborted consultation", date(), dec!(0), Money::new(dec!(3500)));
        assert!(entry.amount().is_zero());
    }
}
