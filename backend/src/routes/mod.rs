//! Route definitions for the Macro Tracker API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod body_composition;
mod calculations;
mod chat;
mod export;
mod goals;
mod health;
mod nutrition;

pub use body_composition::body_composition_routes;
pub use calculations::calculation_routes;
pub use chat::chat_routes;
pub use export::export_routes;
pub use goals::goals_routes;
pub use nutrition::nutrition_routes;

/// Largest accepted request body (history exports can carry years of entries)
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Macro Tracker API v1" }))
        .nest("/calculations", calculation_routes())
        .nest("/goals", goals_routes())
        .nest("/nutrition", nutrition_routes())
        .nest("/body-composition", body_composition_routes())
        .nest("/export", export_routes())
        .nest("/chat", chat_routes())
}
