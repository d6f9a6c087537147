//! HTTP API Layer
//!
//! This crate provides the REST API for the Takaful pricing core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote pricing, policy catalog, health checks
//! - **Middleware**: Request logging, tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses with field maps
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(catalog, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_pricing::PolicyCatalog;

use crate::config::ApiConfig;
use crate::handlers::{health, policy, quote};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PolicyCatalog>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `catalog` - Loaded policy catalog
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(catalog: PolicyCatalog, config: ApiConfig) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
        config,
    };

    // Public routes (no API prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Policy catalog and quoting routes
    let policy_routes = Router::new()
        .route("/", get(policy::list_policies))
        .route("/:code", get(policy::get_policy))
        .route("/:code/quotes", post(quote::create_quote));

    let api_routes = Router::new()
        .nest("/policies", policy_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

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
