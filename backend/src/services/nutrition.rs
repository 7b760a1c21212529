//! Nutrition service - portion sizing and daily totals

use crate::error::ApiError;
use macro_tracker_shared::types::{DailySummaryRequest, DailySummaryResponse, PortionRequest};
use macro_tracker_shared::{calculate_portion, DailyLog, FoodEntry, Portion};
use tracing::debug;

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Scale a database food to the requested quantity
    ///
    /// Returns the portion and, when `entry_id` was supplied, the log entry
    /// built from it.
    pub fn portion(req: PortionRequest) -> Result<(Portion, Option<FoodEntry>), ApiError> {
        if req.food.name.trim().is_empty() {
            return Err(ApiError::BadRequest("Food name cannot be empty".to_string()));
        }

        let portion = calculate_portion(&req.food, req.quantity, req.unit)?;
        debug!(
            food = %portion.food_name,
            grams = portion.grams,
            calories = portion.calories,
            "Calculated portion"
        );

        let entry = req
            .entry_id
            .map(|id| portion.clone().into_food_entry(id));
        Ok((portion, entry))
    }

    /// Totals for a day's foods and progress toward the goals
    pub fn daily_summary(req: DailySummaryRequest) -> DailySummaryResponse {
        let log = DailyLog::from_foods(req.foods);
        let progress = log.progress(&req.goals);
        DailySummaryResponse { log, progress }
    }
}
