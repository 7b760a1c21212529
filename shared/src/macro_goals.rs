//! Macronutrient goal allocation
//!
//! Goals are always stored as grams. Percentage splits only exist while a
//! user edits their goals; they are converted to grams on save and derived
//! back from grams for redisplay.

use crate::energy::calculate_tdee;
use crate::errors::ValidationError;
use crate::profile::BodyProfile;
use serde::{Deserialize, Serialize};

/// Energy density of protein (kcal per gram)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Energy density of carbohydrate (kcal per gram)
pub const CARBS_KCAL_PER_G: f64 = 4.0;
/// Energy density of fat (kcal per gram)
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Accepted range for the sum of an edited split; covers integer rounding
pub const PERCENTAGE_SUM_RANGE: std::ops::RangeInclusive<f64> = 99.0..=101.0;

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGoals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroGoals {
    /// Calories implied by the gram targets (4/4/9 kcal per gram)
    pub fn energy_from_macros(&self) -> f64 {
        self.protein_g * PROTEIN_KCAL_PER_G
            + self.carbs_g * CARBS_KCAL_PER_G
            + self.fat_g * FAT_KCAL_PER_G
    }
}

/// Percentage allocation of calories among the three macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: i32,
    pub carbs_pct: i32,
    pub fat_pct: i32,
}

impl MacroSplit {
    /// Split used when the user has no custom goals: 30% protein, 40% carbs, 30% fat
    pub const DEFAULT: MacroSplit = MacroSplit {
        protein_pct: 30,
        carbs_pct: 40,
        fat_pct: 30,
    };

    pub fn total(&self) -> i32 {
        self.protein_pct + self.carbs_pct + self.fat_pct
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolve the active goals for a profile
///
/// A custom override is returned untouched. Otherwise calories are the
/// rounded TDEE, allocated with [`MacroSplit::DEFAULT`].
pub fn resolve_goals(profile: &BodyProfile, custom_goals: Option<&MacroGoals>) -> MacroGoals {
    if let Some(custom) = custom_goals {
        return *custom;
    }

    let calories = calculate_tdee(profile).round();
    let split = MacroSplit::DEFAULT;
    allocate(
        calories,
        f64::from(split.protein_pct),
        f64::from(split.carbs_pct),
        f64::from(split.fat_pct),
    )
}

/// Convert an edited percentage split into gram goals
///
/// The percentages must add up to 99-101; anything else is rejected rather
/// than normalized so the user can correct it.
pub fn goals_from_percentages(
    calories: f64,
    protein_pct: f64,
    carbs_pct: f64,
    fat_pct: f64,
) -> Result<MacroGoals, ValidationError> {
    let sum = protein_pct + carbs_pct + fat_pct;
    if !PERCENTAGE_SUM_RANGE.contains(&sum) {
        return Err(ValidationError::PercentageSum { sum });
    }

    Ok(allocate(calories, protein_pct, carbs_pct, fat_pct))
}

/// Derive the percentage split of existing gram goals
///
/// Fat is back-computed as `100 - protein - carbs` so the split always sums
/// to exactly 100. Protein and carbs are clamped to 0-100 first, so grams out
/// of proportion to the calories cannot overflow the split. Without a
/// positive calorie target there is nothing to divide by and the default
/// split is returned.
pub fn percentages_from_goals(goals: &MacroGoals) -> MacroSplit {
    if !(goals.calories > 0.0) {
        return MacroSplit::DEFAULT;
    }

    let protein_pct = percent_of(goals.protein_g * PROTEIN_KCAL_PER_G, goals.calories);
    let carbs_pct = percent_of(goals.carbs_g * CARBS_KCAL_PER_G, goals.calories);

    MacroSplit {
        protein_pct,
        carbs_pct,
        fat_pct: 100 - protein_pct - carbs_pct,
    }
}

fn percent_of(kcal: f64, calories: f64) -> i32 {
    // NaN clamps to NaN, which casts to 0
    (kcal / calories * 100.0).round().clamp(0.0, 100.0) as i32
}

fn allocate(calories: f64, protein_pct: f64, carbs_pct: f64, fat_pct: f64) -> MacroGoals {
    MacroGoals {
        calories,
        protein_g: (calories * protein_pct / 100.0 / PROTEIN_KCAL_PER_G).round(),
        carbs_g: (calories * carbs_pct / 100.0 / CARBS_KCAL_PER_G).round(),
        fat_g: (calories * fat_pct / 100.0 / FAT_KCAL_PER_G).round(),
    }
}
