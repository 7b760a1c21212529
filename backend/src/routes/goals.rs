//! Macro goals API routes

use crate::error::ApiResult;
use crate::services::GoalsService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use macro_tracker_shared::types::{
    PercentageGoalsRequest, ResolveGoalsRequest, ResolvedGoalsResponse,
};
use macro_tracker_shared::{MacroGoals, MacroSplit};

/// Create goals routes
pub fn goals_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve_goals))
        .route("/from-percentages", post(goals_from_percentages))
        .route("/percentages", post(percentages_from_goals))
}

/// POST /api/v1/goals/resolve - Custom goals if set, otherwise TDEE-derived goals
async fn resolve_goals(
    State(state): State<AppState>,
    Json(req): Json<ResolveGoalsRequest>,
) -> ApiResult<Json<ResolvedGoalsResponse>> {
    let resolved = GoalsService::resolve(
        &req.profile,
        req.custom_goals.as_ref(),
        state.strict_profiles(),
    )?;
    Ok(Json(resolved))
}

/// POST /api/v1/goals/from-percentages - Convert an edited split to gram goals
async fn goals_from_percentages(
    Json(req): Json<PercentageGoalsRequest>,
) -> ApiResult<Json<MacroGoals>> {
    let goals = GoalsService::from_percentages(&req)?;
    Ok(Json(goals))
}

/// POST /api/v1/goals/percentages - Percentage split of existing goals
async fn percentages_from_goals(Json(goals): Json<MacroGoals>) -> Json<MacroSplit> {
    Json(GoalsService::percentages(&goals))
}
