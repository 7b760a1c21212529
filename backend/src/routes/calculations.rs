//! Energy and body composition API routes

use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use macro_tracker_shared::{BodyCompositionResult, BodyProfile, EnergyBreakdown};

/// Create calculation routes
pub fn calculation_routes() -> Router<AppState> {
    Router::new()
        .route("/energy", post(energy))
        .route("/body-composition", post(body_composition))
}

/// POST /api/v1/calculations/energy - BMR and TDEE for a profile
async fn energy(
    State(state): State<AppState>,
    Json(profile): Json<BodyProfile>,
) -> ApiResult<Json<EnergyBreakdown>> {
    let breakdown = ProfileService::energy(&profile, state.strict_profiles())?;
    Ok(Json(breakdown))
}

/// POST /api/v1/calculations/body-composition - Navy body fat estimate
async fn body_composition(
    State(state): State<AppState>,
    Json(profile): Json<BodyProfile>,
) -> ApiResult<Json<BodyCompositionResult>> {
    let result = ProfileService::body_composition(&profile, state.strict_profiles())?;
    Ok(Json(result))
}
