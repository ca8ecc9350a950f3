//! API integration tests
//!
//! Drives the full router through an in-process test server. Payloads are
//! plain JSON the way a frontend would send them; some are built by
//! serializing domain values from the shared builders.

use axum::http::StatusCode;
use axum_test::TestServer;
use interface_api::{config::ApiConfig, create_router};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use serde_json::json;

use test_utils::builders::ServiceItemBuilder;

fn server() -> TestServer {
    TestServer::new(create_router(ApiConfig::default())).expect("router should start")
}

fn decimal_field(body: &serde_json::Value, field: &str) -> Decimal {
    body[field]
        .as_str()
        .unwrap_or_else(|| panic!("{field} should be a decimal string"))
        .parse()
        .unwrap()
}

#[derive(Debug, Deserialize)]
struct CalculateBody {
    subtotal: Decimal,
    services_total: Decimal,
    discount_amount: Decimal,
    vat_amount: Decimal,
    total: Decimal,
    formatted_total: String,
}

#[derive(Debug, Deserialize)]
struct ValidateBody {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<Vec<String>>,
}

#[tokio::test]
async fn health_returns_ok() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn calculate_prices_a_fixed_service() {
    let server = server();

    let response = server
        .post("/api/v1/pricing/calculate")
        .json(&json!({
            "services": [
                { "name": "Opinion", "pricing_type": "fixed", "fee": 10000 }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: CalculateBody = response.json();
    assert_eq!(body.subtotal, dec!(10000));
    assert_eq!(body.services_total, dec!(10000));
    assert_eq!(body.discount_amount, dec!(0));
    assert_eq!(body.vat_amount, dec!(1500));
    assert_eq!(body.total, dec!(11500));
    assert_eq!(body.formatted_total, "R 11,500.00");
}

#[tokio::test]
async fn calculate_accepts_serialized_domain_services() {
    let server = server();

    // Builders produce the same wire shape the API accepts
    let service = ServiceItemBuilder::new()
        .named("Consultation")
        .hourly(core_kernel::Money::new(dec!(4000)), Some(dec!(3)))
        .build();

    let response = server
        .post("/api/v1/pricing/calculate")
        .json(&json!({ "services": [serde_json::to_value(&service).unwrap()] }))
        .await;
    response.assert_status_ok();

    let body: CalculateBody = response.json();
    assert_eq!(body.subtotal, dec!(12000));
    assert_eq!(body.total, dec!(13800));
}

#[tokio::test]
async fn calculate_applies_discount_and_expense_vat() {
    let server = server();

    let response = server
        .post("/api/v1/pricing/calculate")
        .json(&json!({
            "services": [
                { "name": "Opinion", "pricing_type": "fixed", "fee": 10000 }
            ],
            "expenses": [
                { "description": "Travel", "category": "travel", "amount": 2000 }
            ],
            "discount": { "type": "percentage", "value": 10 }
        }))
        .await;
    response.assert_status_ok();

    let body: CalculateBody = response.json();
    assert_eq!(body.discount_amount, dec!(1000));
    // Headline VAT covers professional fees only
    assert_eq!(body.vat_amount, dec!(1350));
    // 12000 - 1000 + 1350 + 300 expense VAT
    assert_eq!(body.total, dec!(12650));
}

#[tokio::test]
async fn calculate_rejects_invalid_input_with_details() {
    let server = server();

    let response = server
        .post("/api/v1/pricing/calculate")
        .json(&json!({
            "services": [
                { "name": "", "pricing_type": "hourly", "rate": -100 }
            ]
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = response.json();
    assert_eq!(body.error, "validation_error");
    let details = body.details.expect("validation details");
    assert_eq!(details.len(), 2);
}

#[tokio::test]
async fn validate_reports_every_violation() {
    let server = server();

    let response = server
        .post("/api/v1/pricing/validate")
        .json(&json!({
            "services": [
                { "name": "Claim", "pricing_type": "contingency", "percentage": 150 }
            ],
            "expenses": [
                { "description": "", "category": "other", "amount": 0 }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: ValidateBody = response.json();
    assert!(!body.is_valid);
    assert_eq!(body.errors.len(), 3);
    assert!(body.warnings.is_empty());
}

#[tokio::test]
async fn estimate_hours_uses_base_table_and_service_hours() {
    let server = server();

    let response = server
        .post("/api/v1/pricing/estimate-hours")
        .json(&json!({
            "matter_type": "litigation",
            "complexity": "high"
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["estimated_hours"], 60);

    let response = server
        .post("/api/v1/pricing/estimate-hours")
        .json(&json!({
            "matter_type": "commercial",
            "complexity": "low",
            "services": [
                { "name": "Consultation", "pricing_type": "hourly", "rate": 2500, "estimated_hours": 6.5 }
            ]
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    // 5 base + 6.5 declared, rounded
    assert_eq!(body["estimated_hours"], 12);
}

#[tokio::test]
async fn breakdown_text_renders_sections() {
    let server = server();

    let response = server
        .post("/api/v1/pricing/breakdown-text")
        .json(&json!({
            "services": [
                { "name": "Opinion", "pricing_type": "fixed", "fee": 10000 }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("SERVICES:"));
    assert!(text.contains("  Opinion: R 10,000.00"));
    assert!(text.contains("VAT (15%): R 1,500.00"));
    assert!(text.contains("TOTAL: R 11,500.00"));
}

#[tokio::test]
async fn proforma_estimate_from_rate_cards() {
    let server = server();

    let response = server
        .post("/api/v1/proforma/estimate")
        .json(&json!({
            "rate_cards": [
                {
                    "service_name": "Consultation",
                    "service_category": "consultation",
                    "pricing_type": "hourly",
                    "hourly_rate": 2500,
                    "estimated_hours_min": 2
                },
                {
                    "service_name": "Opinion",
                    "service_category": "drafting",
                    "pricing_type": "fixed",
                    "fixed_fee": 10000
                }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(decimal_field(&body, "subtotal"), dec!(15000));
    assert_eq!(decimal_field(&body, "vat_amount"), dec!(2250));
    assert_eq!(decimal_field(&body, "total_amount"), dec!(17250));
    assert_eq!(body["formatted_total"], "R 17,250.00");
    assert_eq!(body["line_items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn proforma_uses_configured_fallback_rate() {
    let server = server();

    let response = server
        .post("/api/v1/proforma/estimate")
        .json(&json!({
            "rate_cards": [
                {
                    "service_name": "Appearance",
                    "service_category": "court_appearance",
                    "pricing_type": "hourly",
                    "estimated_hours_min": 3
                }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    // 3h at the default R2,500 fallback
    assert_eq!(decimal_field(&body, "subtotal"), dec!(7500));
}
