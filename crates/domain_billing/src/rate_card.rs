//! Rate cards and standard service templates
//!
//! A rate card is an advocate's reusable pricing definition for a standard
//! service. Rate cards are the typical source of the calculation engine's
//! service items, but the storage schema is a superset of what the engine
//! prices: `per_item` and `percentage` cards exist at this layer and are
//! not convertible into engine branches.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AdvocateId, Money, RateCardId, TemplateId};
use domain_pricing::ServiceItem;

/// Categories of standard legal services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Consultation,
    Research,
    Drafting,
    CourtAppearance,
    Negotiation,
    DocumentReview,
    Correspondence,
    Filing,
    Travel,
    Other,
}

impl ServiceCategory {
    /// Human-readable label, e.g. "Court appearance"
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Consultation => "Consultation",
            ServiceCategory::Research => "Research",
            ServiceCategory::Drafting => "Drafting",
            ServiceCategory::CourtAppearance => "Court appearance",
            ServiceCategory::Negotiation => "Negotiation",
            ServiceCategory::DocumentReview => "Document review",
            ServiceCategory::Correspondence => "Correspondence",
            ServiceCategory::Filing => "Filing",
            ServiceCategory::Travel => "Travel",
            ServiceCategory::Other => "Other",
        }
    }
}

/// Pricing types the storage schema recognizes.
///
/// A superset of the engine's service branches: `PerItem` and `Percentage`
/// are accepted at the data-model layer but have no calculation branch, so
/// converting such a card into a [`ServiceItem`] yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePricingType {
    Hourly,
    Fixed,
    PerItem,
    Percentage,
}

/// A reusable, named pricing definition for a standard legal service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub id: RateCardId,
    pub advocate_id: AdvocateId,
    pub service_name: String,
    pub service_description: Option<String>,
    pub service_category: ServiceCategory,
    /// Matter type this card is tailored to, if any
    pub matter_type: Option<String>,
    pub pricing_type: RatePricingType,
    pub hourly_rate: Option<Money>,
    pub fixed_fee: Option<Money>,
    pub minimum_fee: Option<Money>,
    pub maximum_fee: Option<Money>,
    pub estimated_hours_min: Option<Decimal>,
    pub estimated_hours_max: Option<Decimal>,
    pub is_default: bool,
    pub is_active: bool,
    pub requires_approval: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RateCard {
    /// Creates an hourly rate card
    pub fn hourly(
        advocate_id: AdvocateId,
        service_name: impl Into<String>,
        category: ServiceCategory,
        rate: Money,
    ) -> Self {
        Self::new(advocate_id, service_name, category, RatePricingType::Hourly)
            .with_hourly_rate(rate)
    }

    /// Creates a fixed-fee rate card
    pub fn fixed(
        advocate_id: AdvocateId,
        service_name: impl Into<String>,
        category: ServiceCategory,
        fee: Money,
    ) -> Self {
        Self::new(advocate_id, service_name, category, RatePricingType::Fixed).with_fixed_fee(fee)
    }

    /// Creates a blank card of the given pricing type
    pub fn new(
        advocate_id: AdvocateId,
        service_name: impl Into<String>,
        category: ServiceCategory,
        pricing_type: RatePricingType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RateCardId::new_v7(),
            advocate_id,
            service_name: service_name.into(),
            service_description: None,
            service_category: category,
            matter_type: None,
            pricing_type,
            hourly_rate: None,
            fixed_fee: None,
            minimum_fee: None,
            maximum_fee: None,
            estimated_hours_min: None,
            estimated_hours_max: None,
            is_default: false,
            is_active: true,
            requires_approval: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Instantiates an advocate's rate card from a standard template.
    ///
    /// A template with a default hourly rate becomes an hourly card;
    /// otherwise it becomes a fixed-fee card.
    pub fn from_template(template: &StandardServiceTemplate, advocate_id: AdvocateId) -> Self {
        let pricing_type = if template.default_hourly_rate.is_some() {
            RatePricingType::Hourly
        } else {
            RatePricingType::Fixed
        };

        let mut card = Self::new(
            advocate_id,
            template.template_name.clone(),
            template.service_category,
            pricing_type,
        );
        card.service_description = template.template_description.clone();
        card.hourly_rate = template.default_hourly_rate;
        card.fixed_fee = template.default_fixed_fee;
        card.estimated_hours_min = template.estimated_hours;
        card
    }

    /// Sets the hourly rate
    pub fn with_hourly_rate(mut self, rate: Money) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Sets the fixed fee
    pub fn with_fixed_fee(mut self, fee: Money) -> Self {
        self.fixed_fee = Some(fee);
        self
    }

    /// Sets the estimated hours range
    pub fn with_estimated_hours(mut self, min: Decimal, max: Decimal) -> Self {
        self.estimated_hours_min = Some(min);
        self.estimated_hours_max = Some(max);
        self
    }

    /// Restricts the card to a matter type
    pub fn for_matter_type(mut self, matter_type: impl Into<String>) -> Self {
        self.matter_type = Some(matter_type.into());
        self
    }

    /// Deactivates the card
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Converts this card into an engine service item.
    ///
    /// Only `Hourly` and `Fixed` cards have calculation branches;
    /// `PerItem` and `Percentage` cards return `None` and must be
    /// reconciled by the calling layer.
    pub fn to_service_item(&self) -> Option<ServiceItem> {
        let item = match self.pricing_type {
            RatePricingType::Hourly => ServiceItem::hourly(
                self.service_name.clone(),
                self.hourly_rate.unwrap_or_else(Money::zero),
                self.estimated_hours_min,
            ),
            RatePricingType::Fixed => ServiceItem::fixed(
                self.service_name.clone(),
                self.fixed_fee.unwrap_or_else(Money::zero),
                None,
            ),
            RatePricingType::PerItem | RatePricingType::Percentage => return None,
        };

        Some(match &self.service_description {
            Some(description) => item.with_description(description.clone()),
            None => item,
        })
    }
}

/// A system or bar-association service template advocates can adopt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardServiceTemplate {
    pub id: TemplateId,
    pub template_name: String,
    pub template_description: Option<String>,
    pub service_category: ServiceCategory,
    /// Matter types the template applies to; empty means all
    pub matter_types: Vec<String>,
    pub default_hourly_rate: Option<Money>,
    pub default_fixed_fee: Option<Money>,
    pub estimated_hours: Option<Decimal>,
    pub is_system_template: bool,
    pub bar_association: Option<String>,
}

impl StandardServiceTemplate {
    /// Creates a new system template
    pub fn new(template_name: impl Into<String>, category: ServiceCategory) -> Self {
        Self {
            id: TemplateId::new_v7(),
            template_name: template_name.into(),
            template_description: None,
            service_category: category,
            matter_types: Vec::new(),
            default_hourly_rate: None,
            default_fixed_fee: None,
            estimated_hours: None,
            is_system_template: true,
            bar_association: None,
        }
    }

    /// True if the template applies to the given matter type
    pub fn applies_to(&self, matter_type: &str) -> bool {
        self.matter_types.is_empty() || self.matter_types.iter().any(|m| m == matter_type)
    }
}
