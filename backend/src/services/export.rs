//! Export service for progress reports
//!
//! Supports two formats:
//! - JSON: the full progress report (profile, goals, day summary, history)
//! - CSV: body composition history for spreadsheets

use crate::error::ApiError;
use crate::services::goals::GoalsService;
use crate::services::profile::ProfileService;
use chrono::{DateTime, NaiveDate, Utc};
use macro_tracker_shared::types::ReportRequest;
use macro_tracker_shared::{
    compare_history, normalize_history, BodyCompositionLogEntry, BodyCompositionResult,
    BodyCompositionTrend, BodyProfile, DailyLog, DailyProgress, EnergyBreakdown, MacroGoals,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Current report layout version
pub const REPORT_VERSION: &str = "1.0";

/// Complete progress report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub report_version: String,
    pub generated_at: DateTime<Utc>,
    pub name: String,
    pub profile: BodyProfile,
    pub energy: EnergyBreakdown,
    pub goals: MacroGoals,
    pub custom_goals: bool,
    pub body_composition: BodyCompositionResult,
    pub selected_date: NaiveDate,
    pub day: DailyLog,
    pub progress: DailyProgress,
    pub history: Vec<BodyCompositionLogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<BodyCompositionTrend>,
}

impl ProgressReport {
    /// Download name, e.g. `Report_MacroTracker_Ana_Souza_2024-05-01.json`
    pub fn file_name(&self) -> String {
        let name: String = self
            .name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        format!("Report_MacroTracker_{}_{}.json", name, self.selected_date)
    }
}

/// One CSV row of body composition history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryCsvRow {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub fat_percentage: f64,
    pub lean_body_mass_kg: f64,
    pub fat_mass_kg: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: f64,
}

impl From<&BodyCompositionLogEntry> for HistoryCsvRow {
    fn from(entry: &BodyCompositionLogEntry) -> Self {
        Self {
            date: entry.date,
            weight_kg: entry.weight_kg,
            fat_percentage: entry.fat_percentage,
            lean_body_mass_kg: entry.lean_body_mass_kg,
            fat_mass_kg: (entry.fat_mass_kg() * 100.0).round() / 100.0,
            neck_cm: entry.neck_cm,
            waist_cm: entry.waist_cm,
            hip_cm: entry.hip_cm,
        }
    }
}

/// Export service
pub struct ExportService;

impl ExportService {
    /// Assemble the progress report for `req.selected_date`
    pub fn build_report(req: ReportRequest, strict: bool) -> Result<ProgressReport, ApiError> {
        if req.name.trim().is_empty() {
            return Err(ApiError::BadRequest("Report name cannot be empty".to_string()));
        }

        let energy = ProfileService::energy(&req.profile, strict)?;
        let body_composition = ProfileService::body_composition(&req.profile, strict)?;
        let resolved = GoalsService::resolve(&req.profile, req.custom_goals.as_ref(), strict)?;

        let day = DailyLog::from_foods(req.foods);
        let progress = day.progress(&resolved.goals);

        let history = normalize_history(req.history);
        let trend = compare_history(&history);

        info!(
            selected_date = %req.selected_date,
            foods = day.foods.len(),
            history_entries = history.len(),
            "Built progress report"
        );

        Ok(ProgressReport {
            report_version: REPORT_VERSION.to_string(),
            generated_at: Utc::now(),
            name: req.name,
            profile: req.profile,
            energy,
            goals: resolved.goals,
            custom_goals: resolved.custom,
            body_composition,
            selected_date: req.selected_date,
            day,
            progress,
            history,
            trend,
        })
    }

    /// Body composition history as CSV, oldest first
    pub fn history_csv(history: &[BodyCompositionLogEntry]) -> Result<String, ApiError> {
        let mut rows: Vec<HistoryCsvRow> = history.iter().map(HistoryCsvRow::from).collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Self::to_csv(&rows)
    }

    /// Convert data to CSV string
    fn to_csv<T: Serialize>(data: &[T]) -> Result<String, ApiError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
