//! Pro forma estimates
//!
//! A pro forma is a non-binding fee estimate issued before work begins.
//! It is assembled from an advocate's rate cards: each active card
//! becomes a line item priced from its rate (falling back to a default
//! hourly rate when the card has none), with 15% VAT on the subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_pricing::VatConfig;

use crate::rate_card::{RateCard, RatePricingType, ServiceCategory};

/// A single line of a pro forma estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProFormaLineItem {
    pub service_name: String,
    pub description: String,
    /// Hours for hourly lines, 1 for fixed lines
    pub quantity: Decimal,
    pub unit_price: Money,
    pub total_amount: Money,
    pub service_category: ServiceCategory,
    pub estimated_hours: Option<Decimal>,
}

/// A non-binding fee estimate assembled from rate cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProFormaEstimate {
    pub line_items: Vec<ProFormaLineItem>,
    pub subtotal: Money,
    pub vat_amount: Money,
    pub total_amount: Money,
    pub estimated_hours: Decimal,
}

impl ProFormaEstimate {
    /// Builds an estimate from rate cards.
    ///
    /// # Arguments
    ///
    /// * `rate_cards` - candidate cards; inactive cards are skipped
    /// * `fallback_hourly_rate` - used when a card carries no rate at all
    /// * `vat` - VAT settings; the services switch governs whether VAT is
    ///   added to the estimate
    ///
    /// Per card: hours default to the card's minimum estimate (or 1),
    /// the unit price falls back hourly rate → fixed fee → fallback, and
    /// hourly cards bill rate × hours while all others bill the rate
    /// once.
    pub fn from_rate_cards(
        rate_cards: &[RateCard],
        fallback_hourly_rate: Money,
        vat: VatConfig,
    ) -> Self {
        let mut line_items = Vec::new();
        let mut total_hours = Decimal::ZERO;

        for card in rate_cards.iter().filter(|c| c.is_active) {
            let hours = card.estimated_hours_min.unwrap_or(Decimal::ONE);
            let rate = card
                .hourly_rate
                .or(card.fixed_fee)
                .unwrap_or(fallback_hourly_rate);
            let is_hourly = card.pricing_type == RatePricingType::Hourly;
            let amount = if is_hourly { rate.multiply(hours) } else { rate };

            line_items.push(ProFormaLineItem {
                service_name: card.service_name.clone(),
                description: card
                    .service_description
                    .clone()
                    .unwrap_or_else(|| format!("{} services", card.service_category.label())),
                quantity: if is_hourly { hours } else { Decimal::ONE },
                unit_price: rate,
                total_amount: amount,
                service_category: card.service_category,
                estimated_hours: Some(hours),
            });

            total_hours += hours;
        }

        let subtotal: Money = line_items.iter().map(|item| item.total_amount).sum();
        let vat_amount = if vat.applicable_to_services {
            vat.rate.apply(&subtotal)
        } else {
            Money::zero()
        };

        Self {
            line_items,
            subtotal,
            vat_amount,
            total_amount: subtotal + vat_amount,
            estimated_hours: total_hours,
        }
    }

    /// True when the estimate has no billable lines
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
