//! Pro forma handlers

use axum::{extract::State, Json};

use core_kernel::{AdvocateId, Money};
use domain_billing::ProFormaEstimate;
use domain_pricing::VatConfig;

use crate::dto::proforma::{ProFormaRequest, ProFormaResponse};
use crate::error::ApiError;
use crate::AppState;

/// Builds a pro forma estimate from the submitted rate cards.
///
/// The fallback hourly rate comes from the request when given, otherwise
/// from the server configuration.
pub async fn estimate(
    State(state): State<AppState>,
    Json(request): Json<ProFormaRequest>,
) -> Result<Json<ProFormaResponse>, ApiError> {
    let advocate_id = request
        .advocate_id
        .map(AdvocateId::from_uuid)
        .unwrap_or_default();

    let fallback = Money::new(
        request
            .fallback_hourly_rate
            .unwrap_or(state.config.fallback_hourly_rate),
    );
    let vat = request
        .vat
        .map(|v| v.into_domain())
        .unwrap_or_else(VatConfig::default);

    let cards: Vec<_> = request
        .rate_cards
        .into_iter()
        .map(|c| c.into_domain(advocate_id))
        .collect();

    let estimate = ProFormaEstimate::from_rate_cards(&cards, fallback, vat);

    tracing::debug!(
        lines = estimate.line_items.len(),
        total = %estimate.total_amount,
        "pro forma estimated"
    );
    Ok(Json(ProFormaResponse::from_estimate(estimate)))
}
