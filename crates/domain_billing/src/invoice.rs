//! Invoice assembly and lifecycle
//!
//! Invoices are built from a finished [`CalculationResult`]: each line of
//! the calculation breakdown becomes an invoice item, and the invoice
//! carries the calculation's totals verbatim. Note the invoice's
//! `vat_amount` is the full VAT charged (professional-fee VAT plus expense
//! VAT), unlike the calculation's headline figure.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AdvocateId, InvoiceId, MatterId, Money};
use domain_pricing::CalculationResult;

use crate::error::BillingError;

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Invoice is being drafted
    Draft,
    /// Invoice has been issued
    Issued,
    /// Invoice has been sent to the instructing attorney
    Sent,
    /// Partial payment received
    PartiallyPaid,
    /// Fully paid
    Paid,
    /// Past due date
    Overdue,
    /// Cancelled/voided
    Cancelled,
    /// Written off as bad debt
    WrittenOff,
}

/// A fee note for professional services and disbursements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    /// Human-readable invoice number
    pub invoice_number: String,
    pub matter_id: MatterId,
    pub advocate_id: AdvocateId,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItem>,
    /// Pre-discount, pre-VAT total
    pub subtotal: Money,
    pub discount_amount: Money,
    /// Full VAT charged: professional-fee VAT plus expense VAT
    pub vat_amount: Money,
    pub total: Money,
    pub amount_paid: Money,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Builds a draft invoice from a finished calculation.
    ///
    /// Every breakdown line (services, time entries, expenses) becomes an
    /// invoice item. The calculation's totals are carried over unchanged;
    /// contingency lines keep their zero amount.
    pub fn from_calculation(
        matter_id: MatterId,
        advocate_id: AdvocateId,
        due_date: NaiveDate,
        calculation: &CalculationResult,
    ) -> Self {
        let now = Utc::now();
        let mut items = Vec::new();

        for line in &calculation.breakdown.services {
            items.push(InvoiceItem::new(
                line.service.name.clone(),
                InvoiceItemType::ProfessionalFee,
                line.amount,
            ));
        }
        for line in &calculation.breakdown.time_entries {
            items.push(
                InvoiceItem::new(
                    line.time_entry.description.clone(),
                    InvoiceItemType::TimeCharge,
                    line.time_entry.rate,
                )
                .with_quantity(line.time_entry.hours),
            );
        }
        for line in &calculation.breakdown.expenses {
            items.push(InvoiceItem::new(
                line.expense.description.clone(),
                InvoiceItemType::Disbursement,
                line.amount,
            ));
        }

        Self {
            id: InvoiceId::new_v7(),
            invoice_number: generate_invoice_number(),
            matter_id,
            advocate_id,
            invoice_date: now.date_naive(),
            due_date,
            items,
            subtotal: calculation.subtotal,
            discount_amount: calculation.discount_amount,
            vat_amount: calculation.breakdown.vat.services_vat
                + calculation.breakdown.vat.expenses_vat,
            total: calculation.total,
            amount_paid: Money::zero(),
            status: InvoiceStatus::Draft,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Issues the invoice. Only drafts can be issued.
    pub fn issue(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Draft => {
                self.status = InvoiceStatus::Issued;
                self.updated_at = Utc::now();
                Ok(())
            }
            other => Err(BillingError::InvalidStateTransition {
                from: other,
                to: InvoiceStatus::Issued,
            }),
        }
    }

    /// Marks the invoice as sent to the instructing attorney
    pub fn send(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Issued => {
                self.status = InvoiceStatus::Sent;
                self.updated_at = Utc::now();
                Ok(())
            }
            other => Err(BillingError::InvalidStateTransition {
                from: other,
                to: InvoiceStatus::Sent,
            }),
        }
    }

    /// Cancels the invoice. Paid invoices cannot be cancelled.
    pub fn cancel(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Paid | InvoiceStatus::Cancelled | InvoiceStatus::WrittenOff => {
                Err(BillingError::InvalidStateTransition {
                    from: self.status,
                    to: InvoiceStatus::Cancelled,
                })
            }
            _ => {
                self.status = InvoiceStatus::Cancelled;
                self.updated_at = Utc::now();
                Ok(())
            }
        }
    }

    /// Records a payment against the invoice.
    ///
    /// Rejects non-positive amounts and payments against cancelled or
    /// written-off invoices. Overpayment is allowed and simply marks the
    /// invoice paid.
    pub fn record_payment(&mut self, amount: Money) -> Result<(), BillingError> {
        if !amount.is_positive() {
            return Err(BillingError::InvalidPayment(format!(
                "payment amount must be positive, got {amount}"
            )));
        }
        if matches!(
            self.status,
            InvoiceStatus::Cancelled | InvoiceStatus::WrittenOff
        ) {
            return Err(BillingError::InvalidPayment(format!(
                "cannot record payment against a {:?} invoice",
                self.status
            )));
        }

        self.amount_paid = self.amount_paid + amount;
        self.updated_at = Utc::now();

        if self.amount_paid >= self.total {
            self.status = InvoiceStatus::Paid;
        } else {
            self.status = InvoiceStatus::PartiallyPaid;
        }
        Ok(())
    }

    /// Checks if the invoice is past due and still collectable
    pub fn is_overdue(&self) -> bool {
        let today = Utc::now().date_naive();
        today > self.due_date
            && !matches!(
                self.status,
                InvoiceStatus::Paid | InvoiceStatus::Cancelled | InvoiceStatus::WrittenOff
            )
    }

    /// Returns the balance due
    pub fn balance_due(&self) -> Money {
        self.total - self.amount_paid
    }
}

/// A line item on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: Uuid,
    pub description: String,
    pub item_type: InvoiceItemType,
    pub quantity: Decimal,
    pub unit_price: Money,
}

impl InvoiceItem {
    /// Creates a new invoice item with quantity 1
    pub fn new(
        description: impl Into<String>,
        item_type: InvoiceItemType,
        unit_price: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            item_type,
            quantity: Decimal::ONE,
            unit_price,
        }
    }

    /// Sets the quantity (hours for time charges)
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Calculates the total for this item
    pub fn total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Types of invoice items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceItemType {
    /// A billed service (fixed fee or quoted hourly work)
    ProfessionalFee,
    /// Recorded time billed at an hourly rate
    TimeCharge,
    /// A disbursement passed through at cost
    Disbursement,
    /// Other charge
    Other,
}

/// Generates a unique invoice number
fn generate_invoice_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("INV-{}", duration.as_millis() % 10_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_pricing::{Expense, PricingCalculator, ServiceItem};
    use rust_decimal_macros::dec;

    fn sample_calculation() -> CalculationResult {
        let services = vec![ServiceItem::fixed("Opinion", Money::new(dec!(10000)), None)];
        let expenses = vec![Expense::new("Travel", "travel", Money::new(dec!(2000)))];
        PricingCalculator::calculate(&services, &[], &expenses, None, None)
    }

    fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn test_invoice_carries_full_vat() {
        let calculation = sample_calculation();
        let invoice = Invoice::from_calculation(
            MatterId::new(),
            AdvocateId::new(),
            due_date(),
            &calculation,
        );

        // services VAT 1500 + expense VAT 300, not the calculation's
        // headline 1500
        assert_eq!(invoice.vat_amount.amount(), dec!(1800));
        assert_eq!(invoice.total, calculation.total);
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.status, InvoiceStatus::Draft);
    }

    #[test]
    fn test_payment_lifecycle() {
        let calculation = sample_calculation();
        let mut invoice = Invoice::from_calculation(
            MatterId::new(),
            AdvocateId::new(),
            due_date(),
            &calculation,
        );

        invoice.issue().unwrap();
        invoice.send().unwrap();

        invoice.record_payment(Money::new(dec!(5000))).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::PartiallyPaid);
        assert_eq!(invoice.balance_due().amount(), dec!(8800));

        invoice.record_payment(Money::new(dec!(8800))).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert!(invoice.balance_due().is_zero());
    }

    #[test]
    fn test_issue_requires_draft() {
        let calculation = sample_calculation();
        let mut invoice = Invoice::from_calculation(
            MatterId::new(),
            AdvocateId::new(),
            due_date(),
            &calculation,
        );

        invoice.issue().unwrap();
        let err = invoice.issue().unwrap_err();
        assert!(matches!(err, BillingError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_cannot_pay_cancelled_invoice() {
        let calculation = sample_calculation();
        let mut invoice = Invoice::from_calculation(
            MatterId::new(),
            AdvocateId::new(),
            due_date(),
            &calculation,
        );

        invoice.cancel().unwrap();
        assert!(invoice.record_payment(Money::new(dec!(100))).is_err());
    }

    #[test]
    fn test_rejects_non_positive_payment() {
        let calculation = sample_calculation();
        let mut invoice = Invoice::from_calculation(
            MatterId::new(),
            AdvocateId::new(),
            due_date(),
            &calculation,
        );

        assert!(invoice.record_payment(Money::zero()).is_err());
        assert!(invoice.record_payment(Money::new(dec!(-50))).is_err());
    }

    #[test]
    fn test_time_charges_keep_hours_as_quantity() {
        use chrono::NaiveDate;
        use domain_pricing::TimeEntry;

        let time_entries = vec![TimeEntry::new(
            "Consultation",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            dec!(2.5),
            Money::new(dec!(3000)),
        )];
        let calculation = PricingCalculator::calculate(&[], &time_entries, &[], None, None);
        let invoice = Invoice::from_calculation(
            MatterId::new(),
            AdvocateId::new(),
            due_date(),
            &calculation,
        );

        let item = &invoice.items[0];
        assert_eq!(item.item_type, InvoiceItemType::TimeCharge);
        assert_eq!(item.quantity, dec!(2.5));
        assert_eq!(item.total().amount(), dec!(7500));
    }
}
