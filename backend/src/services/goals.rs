//! Goals service for macro target resolution
//!
//! Provides business logic for:
//! - Choosing between a custom override and TDEE-derived goals
//! - Saving a percentage split as gram goals
//! - Redisplaying gram goals as a percentage split

use crate::error::ApiError;
use crate::services::profile::ProfileService;
use macro_tracker_shared::types::{PercentageGoalsRequest, ResolvedGoalsResponse};
use macro_tracker_shared::validation::validate_calories;
use macro_tracker_shared::{
    goals_from_percentages, percentages_from_goals, resolve_goals, BodyProfile, MacroGoals,
    MacroSplit,
};
use tracing::{debug, info};

/// Goals service
pub struct GoalsService;

impl GoalsService {
    /// Active goals for a profile
    ///
    /// The profile is only validated when goals are actually derived from
    /// it; a custom override needs nothing from the profile.
    pub fn resolve(
        profile: &BodyProfile,
        custom_goals: Option<&MacroGoals>,
        strict: bool,
    ) -> Result<ResolvedGoalsResponse, ApiError> {
        if custom_goals.is_none() {
            ProfileService::check(profile, strict)?;
        }

        let goals = resolve_goals(profile, custom_goals);
        debug!(
            calories = goals.calories,
            custom = custom_goals.is_some(),
            "Resolved macro goals"
        );

        Ok(ResolvedGoalsResponse {
            goals,
            custom: custom_goals.is_some(),
        })
    }

    /// Convert an edited split into the gram goals that get stored
    pub fn from_percentages(req: &PercentageGoalsRequest) -> Result<MacroGoals, ApiError> {
        validate_calories(req.calories)?;
        let goals =
            goals_from_percentages(req.calories, req.protein_pct, req.carbs_pct, req.fat_pct)?;

        info!(
            calories = goals.calories,
            protein_g = goals.protein_g,
            carbs_g = goals.carbs_g,
            fat_g = goals.fat_g,
            "Converted percentage split to macro goals"
        );
        Ok(goals)
    }

    /// Percentage split for showing existing goals in the editor
    pub fn percentages(goals: &MacroGoals) -> MacroSplit {
        percentages_from_goals(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_tracker_shared::{ActivityLevel, BiologicalSex, ValidationError, WeightGoal};

    fn degenerate_profile() -> BodyProfile {
        BodyProfile {
            weight_kg: 0.0,
            height_cm: 0.0,
            age_years: 0,
            sex: BiologicalSex::Female,
            activity_level: ActivityLevel::Sedentary,
            goal: WeightGoal::Lose,
            neck_cm: 0.0,
            waist_cm: 0.0,
            hip_cm: 0.0,
        }
    }

    #[test]
    fn test_custom_goals_skip_profile_check() {
        let custom = MacroGoals {
            calories: 1800.0,
            protein_g: 135.0,
            carbs_g: 180.0,
            fat_g: 60.0,
        };
        let resolved = GoalsService::resolve(&degenerate_profile(), Some(&custom), true).unwrap();
        assert!(resolved.custom);
        assert_eq!(resolved.goals, custom);
    }

    #[test]
    fn test_derived_goals_require_valid_profile_in_strict_mode() {
        assert!(GoalsService::resolve(&degenerate_profile(), None, true).is_err());
        assert!(GoalsService::resolve(&degenerate_profile(), None, false).is_ok());
    }

    #[test]
    fn test_from_percentages_surfaces_sum_error() {
        let req = PercentageGoalsRequest {
            calories: 2000.0,
            protein_pct: 30.0,
            carbs_pct: 40.0,
            fat_pct: 35.0,
        };
        match GoalsService::from_percentages(&req) {
            Err(ApiError::Validation(ValidationError::PercentageSum { sum })) => {
                assert_eq!(sum, 105.0)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_percentages_rejects_negative_calories() {
        let req = PercentageGoalsRequest {
            calories: -100.0,
            protein_pct: 30.0,
            carbs_pct: 40.0,
            fat_pct: 30.0,
        };
        assert!(GoalsService::from_percentages(&req).is_err());
    }
}
