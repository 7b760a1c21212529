//! Energy expenditure calculations
//!
//! Basal Metabolic Rate uses the revised Harris-Benedict equation. Total Daily
//! Energy Expenditure scales BMR by the activity multiplier and then applies
//! the flat goal offset.
//!
//! None of these functions validate their input. Zero or negative body
//! measurements produce whatever the arithmetic yields, including negative
//! energy values; callers wanting a hard gate use
//! [`crate::validation::validate_body_profile`] first.

use crate::profile::{BiologicalSex, BodyProfile};
use serde::{Deserialize, Serialize};

/// Calculate Basal Metabolic Rate (kcal/day) using Harris-Benedict (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr(profile: &BodyProfile) -> f64 {
    let age = f64::from(profile.age_years);
    match profile.sex {
        BiologicalSex::Male => {
            88.362 + 13.397 * profile.weight_kg + 4.799 * profile.height_cm - 5.677 * age
        }
        BiologicalSex::Female => {
            447.593 + 9.247 * profile.weight_kg + 3.098 * profile.height_cm - 4.330 * age
        }
    }
}

/// Calculate Total Daily Energy Expenditure (kcal/day)
///
/// TDEE = BMR × activity multiplier, then -500 to lose, +500 to gain.
pub fn calculate_tdee(profile: &BodyProfile) -> f64 {
    calculate_energy_breakdown(profile).tdee
}

/// TDEE calculation with every intermediate step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// BMR × multiplier, before the goal offset
    pub maintenance_calories: f64,
    /// Offset applied for the goal (-500, 0 or +500)
    pub goal_adjustment: f64,
    /// Final daily target
    pub tdee: f64,
}

/// Calculate TDEE along with its components
pub fn calculate_energy_breakdown(profile: &BodyProfile) -> EnergyBreakdown {
    let bmr = calculate_bmr(profile);
    let activity_multiplier = profile.activity_level.multiplier();
    let maintenance_calories = bmr * activity_multiplier;
    let goal_adjustment = profile.goal.calorie_adjustment();

    EnergyBreakdown {
        bmr,
        activity_multiplier,
        maintenance_calories,
        goal_adjustment,
        tdee: maintenance_calories + goal_adjustment,
    }
}
