//! AI chat route
//!
//! The assistant is not available in this build; the endpoint exists so
//! clients get a stable, explicit answer.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use macro_tracker_shared::types::ChatRequest;
use tracing::debug;

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/", post(chat))
}

/// POST /api/v1/chat - Always 503
async fn chat(Json(req): Json<ChatRequest>) -> ApiResult<Json<serde_json::Value>> {
    debug!(message_len = req.message.len(), "Chat request received while disabled");
    Err(ApiError::Unavailable("AI chat is disabled".to_string()))
}
