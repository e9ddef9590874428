//! HTTP API Layer
//!
//! This crate receives completed adjusting requests from the intake wizard
//! and re-checks them before accepting.
//!
//! # Architecture
//!
//! - **Handlers**: Health and intake request endpoints
//! - **Middleware**: JWT authentication, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Registry**: In-memory store of accepted requests
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(IntakeRegistry::new()), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod registry;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, intake};
use crate::middleware::{audit_middleware, auth_middleware};
use crate::registry::IntakeRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<IntakeRegistry>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `registry` - Store for accepted requests
/// * `config` - API configuration
pub fn create_router(registry: Arc<IntakeRegistry>, config: ApiConfig) -> Router {
    let state = AppState { registry, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let intake_routes = Router::new()
        .route(
            "/",
            get(intake::list_intake_requests).post(intake::create_intake_request),
        )
        .route("/:id", get(intake::get_intake_request));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/intake-requests", intake_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

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
