//! HTTP API Layer
//!
//! This crate provides the REST API over the pricing engine using Axum.
//! Every endpoint is a thin adapter: DTOs are converted to domain types,
//! the pure engine does the work, and the result is serialized back.
//! There is no database and no authentication here; persistence and
//! identity are handled by external collaborators.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, pricing, proforma};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState { config };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let pricing_routes = Router::new()
        .route("/calculate", post(pricing::calculate))
        .route("/validate", post(pricing::validate))
        .route("/estimate-hours", post(pricing::estimate_hours))
        .route("/breakdown-text", post(pricing::breakdown_text));

    let proforma_routes = Router::new().route("/estimate", post(proforma::estimate));

    let api_routes = Router::new()
        .nest("/pricing", pricing_routes)
        .nest("/proforma", proforma_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
