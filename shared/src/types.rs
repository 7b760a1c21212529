//! API request and response types
//!
//! Shared by the HTTP API and the WASM bindings so both surfaces speak the
//! same JSON.

use crate::body_composition::{BodyCompositionLogEntry, BodyCompositionTrend};
use crate::daily_log::{DailyLog, DailyProgress, FoodEntry};
use crate::food::{FoodDatabaseItem, Portion, PortionUnit};
use crate::macro_goals::MacroGoals;
use crate::profile::BodyProfile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Goals
// ============================================================================

/// Resolve goals request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveGoalsRequest {
    pub profile: BodyProfile,
    #[serde(default)]
    pub custom_goals: Option<MacroGoals>,
}

/// Resolved goals plus where they came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedGoalsResponse {
    pub goals: MacroGoals,
    /// `true` when the user's override was returned
    pub custom: bool,
}

/// Percentage split submitted from the goal editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageGoalsRequest {
    pub calories: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

// ============================================================================
// Nutrition
// ============================================================================

/// Portion calculation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionRequest {
    pub food: FoodDatabaseItem,
    pub quantity: f64,
    #[serde(default)]
    pub unit: PortionUnit,
    /// When present the response also carries a ready-to-log entry
    #[serde(default)]
    pub entry_id: Option<String>,
}

/// Portion calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionResponse {
    pub portion: Portion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<FoodEntry>,
}

/// Daily summary request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryRequest {
    pub foods: Vec<FoodEntry>,
    pub goals: MacroGoals,
}

/// Daily summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub log: DailyLog,
    pub progress: DailyProgress,
}

// ============================================================================
// Body Composition
// ============================================================================

/// Save today's measurements into an existing history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryUpsertRequest {
    pub date: NaiveDate,
    pub profile: BodyProfile,
    #[serde(default)]
    pub history: Vec<BodyCompositionLogEntry>,
}

/// History after an upsert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entry: BodyCompositionLogEntry,
    /// `true` when an entry for the same date was overwritten
    pub replaced: bool,
    pub history: Vec<BodyCompositionLogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<BodyCompositionTrend>,
}

// ============================================================================
// Export
// ============================================================================

/// Everything needed to build a progress report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub name: String,
    pub profile: BodyProfile,
    #[serde(default)]
    pub custom_goals: Option<MacroGoals>,
    pub selected_date: NaiveDate,
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
    #[serde(default)]
    pub history: Vec<BodyCompositionLogEntry>,
}

/// Body composition history export request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryExportRequest {
    pub history: Vec<BodyCompositionLogEntry>,
}

/// Chat request (the assistant ships disabled)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}
