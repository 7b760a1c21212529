//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (configuration loaded, engine usable)
//! - /health/live - Liveness probe (always returns OK if server is running)

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use macro_tracker_shared::{calculate_bmr, ActivityLevel, BiologicalSex, BodyProfile, WeightGoal};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub calculations: CheckStatus,
    pub strict_profile_validation: bool,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness probe - runs a reference calculation through the engine
/// Returns 503 if it does not produce a finite result
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let calculations = engine_check();
    let is_healthy = calculations.status == "healthy";

    let response = HealthResponse {
        status: if is_healthy { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks {
            calculations,
            strict_profile_validation: state.strict_profiles(),
        }),
    };

    if is_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe - checks if the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

fn engine_check() -> CheckStatus {
    let probe = BodyProfile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 25,
        sex: BiologicalSex::Male,
        activity_level: ActivityLevel::Moderate,
        goal: WeightGoal::Maintain,
        neck_cm: 38.0,
        waist_cm: 85.0,
        hip_cm: 0.0,
    };
    let bmr = calculate_bmr(&probe);

    if bmr.is_finite() && bmr > 0.0 {
        CheckStatus {
            status: "healthy".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "unhealthy".to_string(),
            message: Some(format!("reference BMR came out as {}", bmr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        let response = liveness_check().await;
        assert_eq!(response.status, "alive");
    }

    #[tokio::test]
    async fn test_readiness_check_runs_engine() {
        let state = AppState::new(AppConfig::default());
        let Ok(response) = readiness_check(State(state)).await else {
            panic!("engine check should pass");
        };
        assert_eq!(response.status, "ready");
        let checks = response.0.checks.as_ref().unwrap();
        assert_eq!(checks.calculations.status, "healthy");
        assert!(!checks.strict_profile_validation);
    }
}
