//! Nutrition API routes

use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use macro_tracker_shared::types::{
    DailySummaryRequest, DailySummaryResponse, PortionRequest, PortionResponse,
};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/portion", post(calculate_portion))
        .route("/daily-summary", post(daily_summary))
}

/// POST /api/v1/nutrition/portion - Nutrients for a quantity of a database food
async fn calculate_portion(Json(req): Json<PortionRequest>) -> ApiResult<Json<PortionResponse>> {
    let (portion, entry) = NutritionService::portion(req)?;
    Ok(Json(PortionResponse { portion, entry }))
}

/// POST /api/v1/nutrition/daily-summary - Day totals and progress toward goals
async fn daily_summary(Json(req): Json<DailySummaryRequest>) -> Json<DailySummaryResponse> {
    Json(NutritionService::daily_summary(req))
}
