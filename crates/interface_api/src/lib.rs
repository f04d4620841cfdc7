//! HTTP API Layer
//!
//! This crate provides the REST API for the company and employee directory
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Request id propagation, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Port errors mapped onto HTTP status codes
//! - **State**: Services wired to the configured store backend
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::from_config(&config).await?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod state;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{company, employee, health};
use crate::middleware::{request_logging_middleware, REQUEST_ID_HEADER};

pub use crate::state::{AppState, StartupError};

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Services shared across handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let company_routes = Router::new()
        .route("/", get(company::list_companies).post(company::create_company))
        .route("/save", post(company::save_company))
        .route(
            "/:company_code",
            get(company::get_company)
                .put(company::update_company)
                .delete(company::delete_company),
        );

    let employee_routes = Router::new()
        .route("/", get(employee::list_employees).post(employee::create_employee))
        .route("/save", post(employee::save_employee))
        .route(
            "/:employee_code",
            get(employee::get_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        );

    let api_routes = Router::new()
        .nest("/company", company_routes)
        .nest("/employee", employee_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
