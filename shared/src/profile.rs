//! Body profile types
//!
//! The profile is the single input of every estimator. It is owned by the
//! application layer and treated as immutable for the duration of a call.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

/// Body-mass direction the user is aiming for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl WeightGoal {
    pub const ALL: [WeightGoal; 3] = [WeightGoal::Lose, WeightGoal::Maintain, WeightGoal::Gain];

    /// Daily calorie offset applied on top of maintenance calories
    ///
    /// A flat 500 kcal/day, roughly 0.45 kg of body mass per week.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            WeightGoal::Lose => -500.0,
            WeightGoal::Maintain => 0.0,
            WeightGoal::Gain => 500.0,
        }
    }
}

/// Body profile used by every calculation
///
/// Linear measurements are in SI units (kg, cm). The estimators accept any
/// value; `validation::validate_body_profile` is the optional strict gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
    pub sex: BiologicalSex,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: WeightGoal,
    #[validate(range(min = 0.0, message = "Neck circumference cannot be negative"))]
    pub neck_cm: f64,
    #[validate(range(min = 0.0, message = "Waist circumference cannot be negative"))]
    pub waist_cm: f64,
    /// Only meaningful for female body-fat estimation
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Hip circumference cannot be negative"))]
    pub hip_cm: f64,
}

impl BodyProfile {
    /// Copy of this profile with a different goal
    pub fn with_goal(&self, goal: WeightGoal) -> Self {
        Self {
            goal,
            ..self.clone()
        }
    }

    /// Copy of this profile with a new body weight (e.g. a fresh weigh-in)
    pub fn with_weight(&self, weight_kg: f64) -> Self {
        Self {
            weight_kg,
            ..self.clone()
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// 25 y/o male, 70 kg, 175 cm, moderately active, maintaining
    pub fn male_profile() -> BodyProfile {
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

    /// 30 y/o female, 60 kg, 165 cm, lightly active, maintaining
    pub fn female_profile() -> BodyProfile {
        BodyProfile {
            weight_kg: 60.0,
            height_cm: 165.0,
            age_years: 30,
            sex: BiologicalSex::Female,
            activity_level: ActivityLevel::Light,
            goal: WeightGoal::Maintain,
            neck_cm: 32.0,
            waist_cm: 70.0,
            hip_cm: 95.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2)]
    #[case(ActivityLevel::Light, 1.375)]
    #[case(ActivityLevel::Moderate, 1.55)]
    #[case(ActivityLevel::Active, 1.725)]
    #[case(ActivityLevel::VeryActive, 1.9)]
    fn test_activity_multiplier(#[case] level: ActivityLevel, #[case] expected: f64) {
        assert_eq!(level.multiplier(), expected);
    }

    #[rstest]
    #[case(WeightGoal::Lose, -500.0)]
    #[case(WeightGoal::Maintain, 0.0)]
    #[case(WeightGoal::Gain, 500.0)]
    fn test_goal_adjustment(#[case] goal: WeightGoal, #[case] expected: f64) {
        assert_eq!(goal.calorie_adjustment(), expected);
    }

    #[test]
    fn test_profile_deserializes_wire_names() {
        let json = r#"{
            "weight_kg": 70.0,
            "height_cm": 175.0,
            "age_years": 25,
            "sex": "male",
            "activity_level": "very_active",
            "goal": "lose",
            "neck_cm": 38.0,
            "waist_cm": 85.0
        }"#;
        let profile: BodyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, WeightGoal::Lose);
        assert_eq!(profile.hip_cm, 0.0);
    }

    #[test]
    fn test_with_goal_keeps_other_fields() {
        let profile = fixtures::male_profile();
        let gaining = profile.with_goal(WeightGoal::Gain);
        assert_eq!(gaining.goal, WeightGoal::Gain);
        assert_eq!(gaining.weight_kg, profile.weight_kg);
        assert_eq!(gaining.activity_level, profile.activity_level);
    }
}
