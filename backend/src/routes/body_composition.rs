//! Body composition history API routes

use crate::error::ApiResult;
use crate::services::BodyCompositionService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use macro_tracker_shared::types::{HistoryResponse, HistoryUpsertRequest};

/// Create body composition routes
pub fn body_composition_routes() -> Router<AppState> {
    Router::new().route("/history", post(save_measurements))
}

/// POST /api/v1/body-composition/history - Save measurements for a date
///
/// Returns the updated history for the caller to persist.
async fn save_measurements(
    State(state): State<AppState>,
    Json(req): Json<HistoryUpsertRequest>,
) -> ApiResult<Json<HistoryResponse>> {
    let response = BodyCompositionService::save_measurements(req, state.strict_profiles())?;
    Ok(Json(response))
}
