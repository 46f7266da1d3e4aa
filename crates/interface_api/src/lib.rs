//! HTTP API Layer
//!
//! This crate provides the REST API for slips using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per route, thin wrappers over `SlipService`
//! - **Extractors**: path id and JSON body parsing with JSON 400s
//! - **Middleware**: tracing, request logging, panic recovery
//! - **Error Handling**: consistent `{"error": ...}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(SlipService::new(Arc::new(SlipRepository::new(pool))));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use domain_slip::SlipService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, slip};
use crate::middleware::{panic_response, request_logging};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: SlipService,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Slip service wired to a store
pub fn create_router(service: SlipService) -> Router {
    let state = AppState { service };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let slip_routes = Router::new()
        .route("/slips", get(slip::get_all_slips).post(slip::create_slip))
        .route(
            "/slips/:id",
            get(slip::get_slip)
                .put(slip::update_slip)
                .delete(slip::delete_slip),
        );

    Router::new()
        .merge(health_routes)
        .merge(slip_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
