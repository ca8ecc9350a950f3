//! Pro forma DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AdvocateId, Money};
use domain_billing::{ProFormaEstimate, RateCard, RatePricingType, ServiceCategory};

use crate::dto::pricing::VatRequest;

#[derive(Debug, Deserialize)]
pub struct ProFormaRequest {
    /// Advocate the estimate is issued for; generated when absent
    pub advocate_id: Option<Uuid>,
    #[serde(default)]
    pub rate_cards: Vec<RateCardRequest>,
    /// Overrides the configured fallback hourly rate
    pub fallback_hourly_rate: Option<Decimal>,
    pub vat: Option<VatRequest>,
}

#[derive(Debug, Deserialize)]
pub struct RateCardRequest {
    pub service_name: String,
    pub service_description: Option<String>,
    pub service_category: ServiceCategory,
    pub pricing_type: RatePricingType,
    pub hourly_rate: Option<Decimal>,
    pub fixed_fee: Option<Decimal>,
    pub estimated_hours_min: Option<Decimal>,
    pub estimated_hours_max: Option<Decimal>,
}

impl RateCardRequest {
    pub fn into_domain(self, advocate_id: AdvocateId) -> RateCard {
        let mut card = RateCard::new(
            advocate_id,
            self.service_name,
            self.service_category,
            self.pricing_type,
        );
        card.service_description = self.service_description;
        card.hourly_rate = self.hourly_rate.map(Money::new);
        card.fixed_fee = self.fixed_fee.map(Money::new);
        card.estimated_hours_min = self.estimated_hours_min;
        card.estimated_hours_max = self.estimated_hours_max;
        card
    }
}

#[derive(Debug, Serialize)]
pub struct ProFormaResponse {
    #[serde(flatten)]
    pub estimate: ProFormaEstimate,
    /// The grand total rendered for display, e.g. `R 17,250.00`
    pub formatted_total: String,
}

impl ProFormaResponse {
    pub fn from_estimate(estimate: ProFormaEstimate) -> Self {
        let formatted_total = estimate.total_amount.to_string();
        Self {
            estimate,
            formatted_total,
        }
    }
}
