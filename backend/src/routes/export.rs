//! Export API routes

use crate::error::{ApiError, ApiResult};
use crate::services::ExportService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use macro_tracker_shared::types::{HistoryExportRequest, ReportRequest};

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/report", post(export_report))
        .route("/body-composition.csv", post(export_history_csv))
}

/// POST /api/v1/export/report - Progress report as a JSON download
async fn export_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> ApiResult<impl IntoResponse> {
    let report = ExportService::build_report(req, state.strict_profiles())?;

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("JSON serialization error: {}", e)))?;

    let disposition = format!("attachment; filename=\"{}\"", report.file_name());
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid header: {}", e)))?,
    );

    Ok((headers, json))
}

/// POST /api/v1/export/body-composition.csv - Measurement history as CSV
async fn export_history_csv(Json(req): Json<HistoryExportRequest>) -> ApiResult<impl IntoResponse> {
    let csv = ExportService::history_csv(&req.history)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"body-composition-history.csv\""),
    );

    Ok((headers, csv))
}
