//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about and use defaults for
//! everything else.

use chrono::NaiveDate;
use core_kernel::{AdvocateId, Money};
use rust_decimal::Decimal;

use domain_billing::{RateCard, RatePricingType, ServiceCategory};
use domain_pricing::{Expense, ServiceItem, TimeEntry};

use crate::fixtures::{DecimalFixtures, IdFixtures, MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for [`ServiceItem`] test data
pub struct ServiceItemBuilder {
    name: String,
    description: Option<String>,
    rate: Money,
    estimated_hours: Option<Decimal>,
    fixed_fee: Option<Money>,
    quantity: Option<Decimal>,
    contingency_percentage: Option<Decimal>,
}

impl Default for ServiceItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceItemBuilder {
    /// Creates a builder defaulting to an hourly consultation
    pub fn new() -> Self {
        Self {
            name: StringFixtures::service_name().to_string(),
            description: None,
            rate: MoneyFixtures::hourly_rate(),
            estimated_hours: Some(DecimalFixtures::consultation_hours()),
            fixed_fee: None,
            quantity: None,
            contingency_percentage: None,
        }
    }

    /// Sets the service name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Makes this an hourly service
    pub fn hourly(mut self, rate: Money, estimated_hours: Option<Decimal>) -> Self {
        self.rate = rate;
        self.estimated_hours = estimated_hours;
        self.fixed_fee = None;
        self.contingency_percentage = None;
        self
    }

    /// Makes this a fixed-fee service
    pub fn fixed(mut self, fee: Money, quantity: Option<Decimal>) -> Self {
        self.fixed_fee = Some(fee);
        self.quantity = quantity;
        self.contingency_percentage = None;
        self
    }

    /// Makes this a contingency service
    pub fn contingency(mut self, percentage: Decimal) -> Self {
        self.contingency_percentage = Some(percentage);
        self.fixed_fee = None;
        self
    }

    /// Builds the service item
    pub fn build(self) -> ServiceItem {
        let item = if let Some(percentage) = self.contingency_percentage {
            ServiceItem::contingency(self.name, percentage)
        } else if let Some(fee) = self.fixed_fee {
            ServiceItem::fixed(self.name, fee, self.quantity)
        } else {
            ServiceItem::hourly(self.name, self.rate, self.estimated_hours)
        };

        match self.description {
            Some(description) => item.with_description(description),
            None => item,
        }
    }
}

/// Builder for [`TimeEntry`] test data
pub struct TimeEntryBuilder {
    description: String,
    date: NaiveDate,
    hours: Decimal,
    rate: Money,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEntryBuilder {
    /// Creates a builder with standard fixture values
    pub fn new() -> Self {
        Self {
            description: StringFixtures::time_entry_description().to_string(),
            date: TemporalFixtures::work_date(),
            hours: DecimalFixtures::fractional_hours(),
            rate: MoneyFixtures::hourly_rate(),
        }
    }

    /// Sets the description
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the work date
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the hours worked
    pub fn hours(mut self, hours: Decimal) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the hourly rate
    pub fn at_rate(mut self, rate: Money) -> Self {
        self.rate = rate;
        self
    }

    /// Builds the time entry
    pub fn build(self) -> TimeEntry {
        TimeEntry::new(self.description, self.date, self.hours, self.rate)
    }
}

/// Builder for [`Expense`] test data
pub struct ExpenseBuilder {
    description: String,
    category: String,
    amount: Money,
    vat_applicable: Option<bool>,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseBuilder {
    /// Creates a builder defaulting to a VAT-applicable filing fee
    pub fn new() -> Self {
        Self {
            description: StringFixtures::expense_description().to_string(),
            category: StringFixtures::expense_category().to_string(),
            amount: MoneyFixtures::filing_fee(),
            vat_applicable: None,
        }
    }

    /// Sets the description
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Marks the expense VAT-exempt
    pub fn vat_exempt(mut self) -> Self {
        self.vat_applicable = Some(false);
        self
    }

    /// Builds the expense
    pub fn build(self) -> Expense {
        let mut expense = Expense::new(self.description, self.category, self.amount);
        expense.vat_applicable = self.vat_applicable;
        expense
    }
}

/// Builder for [`RateCard`] test data
pub struct RateCardBuilder {
    advocate_id: AdvocateId,
    service_name: String,
    category: ServiceCategory,
    pricing_type: RatePricingType,
    hourly_rate: Option<Money>,
    fixed_fee: Option<Money>,
    estimated_hours_min: Option<Decimal>,
    estimated_hours_max: Option<Decimal>,
    active: bool,
}

impl Default for RateCardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RateCardBuilder {
    /// Creates a builder defaulting to an active hourly consultation card
    pub fn new() -> Self {
        Self {
            advocate_id: IdFixtures::advocate_id(),
            service_name: StringFixtures::service_name().to_string(),
            category: ServiceCategory::Consultation,
            pricing_type: RatePricingType::Hourly,
            hourly_rate: Some(MoneyFixtures::hourly_rate()),
            fixed_fee: None,
            estimated_hours_min: Some(DecimalFixtures::consultation_hours()),
            estimated_hours_max: None,
            active: true,
        }
    }

    /// Sets the advocate
    pub fn for_advocate(mut self, advocate_id: AdvocateId) -> Self {
        self.advocate_id = advocate_id;
        self
    }

    /// Sets the service name and category
    pub fn service(mut self, name: impl Into<String>, category: ServiceCategory) -> Self {
        self.service_name = name.into();
        self.category = category;
        self
    }

    /// Makes this an hourly card
    pub fn hourly(mut self, rate: Money) -> Self {
        self.pricing_type = RatePricingType::Hourly;
        self.hourly_rate = Some(rate);
        self.fixed_fee = None;
        self
    }

    /// Makes this a fixed-fee card
    pub fn fixed(mut self, fee: Money) -> Self {
        self.pricing_type = RatePricingType::Fixed;
        self.fixed_fee = Some(fee);
        self.hourly_rate = None;
        self
    }

    /// Sets the estimated hours range
    pub fn with_estimated_hours(mut self, min: Decimal, max: Decimal) -> Self {
        self.estimated_hours_min = Some(min);
        self.estimated_hours_max = Some(max);
        self
    }

    /// Marks the card inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Builds the rate card
    pub fn build(self) -> RateCard {
        let mut card = RateCard::new(
            self.advocate_id,
            self.service_name,
            self.category,
            self.pricing_type,
        );
        card.hourly_rate = self.hourly_rate;
        card.fixed_fee = self.fixed_fee;
        card.estimated_hours_min = self.estimated_hours_min;
        card.estimated_hours_max = self.estimated_hours_max;
        card.is_active = self.active;
        card
    }
}
