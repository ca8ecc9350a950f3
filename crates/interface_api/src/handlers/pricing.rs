//! Pricing handlers

use axum::Json;

use domain_pricing::{self, PricingCalculator, PricingValidator};

use crate::dto::pricing::*;
use crate::error::ApiError;

/// Calculates the itemized total for a set of billable items.
///
/// Inputs are validated first; violations come back as a 422 with every
/// problem listed in `details`.
pub async fn calculate(
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let (services, time_entries, expenses, discount, vat) = request.into_domain();

    domain_pricing::validate_pricing(&services, &time_entries, &expenses)?;

    let result =
        PricingCalculator::calculate(&services, &time_entries, &expenses, discount.as_ref(), vat);

    tracing::debug!(total = %result.total, "pricing calculated");
    Ok(Json(CalculateResponse::from_result(result)))
}

/// Validates pricing inputs and reports every violation.
///
/// Always returns 200: the validation report itself is the payload.
pub async fn validate(
    Json(request): Json<CalculateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let (services, time_entries, expenses, _, _) = request.into_domain();
    let result = PricingValidator::validate(&services, &time_entries, &expenses);
    Ok(Json(result.into()))
}

/// Estimates total hours for a matter from its type, complexity, and
/// already-selected services
pub async fn estimate_hours(
    Json(request): Json<EstimateHoursRequest>,
) -> Result<Json<EstimateHoursResponse>, ApiError> {
    let services: Vec<_> = request
        .services
        .into_iter()
        .map(|s| s.into_domain())
        .collect();

    let estimated_hours =
        domain_pricing::estimate_hours(&request.matter_type, request.complexity, &services);

    Ok(Json(EstimateHoursResponse { estimated_hours }))
}

/// Renders the plain-text breakdown report for a calculation
pub async fn breakdown_text(
    Json(request): Json<CalculateRequest>,
) -> Result<Json<BreakdownTextResponse>, ApiError> {
    let (services, time_entries, expenses, discount, vat) = request.into_domain();

    domain_pricing::validate_pricing(&services, &time_entries, &expenses)?;

    let result =
        PricingCalculator::calculate(&services, &time_entries, &expenses, discount.as_ref(), vat);
    let text = PricingCalculator::generate_breakdown_text(&result);

    Ok(Json(BreakdownTextResponse { text }))
}
