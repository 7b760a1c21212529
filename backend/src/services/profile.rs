//! Profile service - energy and body composition estimates for a profile
//!
//! The engine accepts any profile. When strict validation is configured
//! this service refuses degenerate profiles before any formula runs.

use crate::error::ApiError;
use macro_tracker_shared::validation::validate_body_profile;
use macro_tracker_shared::{
    calculate_body_composition, calculate_energy_breakdown, BodyCompositionResult, BodyProfile,
    EnergyBreakdown,
};
use tracing::{debug, warn};

/// Profile service
pub struct ProfileService;

impl ProfileService {
    /// Gate a profile according to the configured validation mode
    pub fn check(profile: &BodyProfile, strict: bool) -> Result<(), ApiError> {
        if !strict {
            return Ok(());
        }
        validate_body_profile(profile).map_err(|err| {
            warn!(error = %err, "Rejected body profile");
            ApiError::Validation(err)
        })
    }

    /// BMR, activity multiplier, goal offset and TDEE
    pub fn energy(profile: &BodyProfile, strict: bool) -> Result<EnergyBreakdown, ApiError> {
        Self::check(profile, strict)?;
        let breakdown = calculate_energy_breakdown(profile);
        debug!(
            bmr = breakdown.bmr,
            tdee = breakdown.tdee,
            activity_level = ?profile.activity_level,
            goal = ?profile.goal,
            "Calculated energy expenditure"
        );
        Ok(breakdown)
    }

    /// Navy-method body fat and lean body mass
    pub fn body_composition(
        profile: &BodyProfile,
        strict: bool,
    ) -> Result<BodyCompositionResult, ApiError> {
        Self::check(profile, strict)?;
        let result = calculate_body_composition(profile);
        if result.fat_percentage == 0.0 {
            debug!(
                waist_cm = profile.waist_cm,
                neck_cm = profile.neck_cm,
                hip_cm = profile.hip_cm,
                "Body fat estimate floored at zero"
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_tracker_shared::{ActivityLevel, BiologicalSex, WeightGoal};
    use rstest::rstest;

    fn profile() -> BodyProfile {
        BodyProfile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            sex: BiologicalSex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: WeightGoal::Maintain,
            neck_cm: 38.0,
            waist_cm: 85.0,
            hip_cm: 0.0,
        }
    }

    #[test]
    fn test_permissive_mode_computes_degenerate_profile() {
        let mut degenerate = profile();
        degenerate.weight_kg = 0.0;
        assert!(ProfileService::energy(&degenerate, false).is_ok());
    }

    #[rstest]
    #[case::zero_weight(|p: &mut BodyProfile| p.weight_kg = 0.0, "weight_kg")]
    #[case::negative_height(|p: &mut BodyProfile| p.height_cm = -1.0, "height_cm")]
    #[case::zero_age(|p: &mut BodyProfile| p.age_years = 0, "age_years")]
    #[case::negative_waist(|p: &mut BodyProfile| p.waist_cm = -3.0, "waist_cm")]
    fn test_strict_mode_rejects_degenerate_profile(
        #[case] degrade: fn(&mut BodyProfile),
        #[case] field: &str,
    ) {
        let mut degenerate = profile();
        degrade(&mut degenerate);
        match ProfileService::energy(&degenerate, true) {
            Err(ApiError::Validation(err)) => assert_eq!(err.field_name(), Some(field)),
            other => panic!("expected validation error, got {:?}", other.map(|b| b.tdee)),
        }
    }

    #[test]
    fn test_body_composition_passes_through() {
        let result = ProfileService::body_composition(&profile(), true).unwrap();
        assert_eq!(result.fat_percentage, 23.47);
    }
}
