//! Macro Tracker WASM Module
//!
//! Browser bindings for the calculation engine so the UI can preview
//! energy, body composition and goal changes without a server round trip.
//! Structured values cross the boundary as JSON strings using the same
//! shapes as the HTTP API.

use macro_tracker_shared::types::PercentageGoalsRequest;
use macro_tracker_shared::{
    calculate_body_composition, calculate_energy_breakdown, goals_from_percentages,
    percentages_from_goals, resolve_goals, ActivityLevel, BiologicalSex, BodyProfile,
    MacroGoals, WeightGoal,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Basal metabolic rate (Harris-Benedict) in kcal/day
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, is_male: bool) -> f64 {
    let profile = energy_profile(
        weight_kg,
        height_cm,
        age_years,
        is_male,
        ActivityLevel::default(),
        WeightGoal::default(),
    );
    macro_tracker_shared::calculate_bmr(&profile)
}

/// Goal-adjusted TDEE in kcal/day
///
/// `activity_level` and `goal` use the API spellings, e.g. `"very_active"`
/// and `"lose"`.
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: &str,
    goal: &str,
) -> Result<f64, JsValue> {
    tdee(weight_kg, height_cm, age_years, is_male, activity_level, goal).map_err(to_js)
}

/// Navy body composition estimate for a profile given as JSON
#[wasm_bindgen]
pub fn calculate_body_composition_json(profile_json: &str) -> Result<String, JsValue> {
    body_composition(profile_json).map_err(to_js)
}

/// Active goals for `{ "profile": ..., "custom_goals": ... }`
#[wasm_bindgen]
pub fn resolve_goals_json(request_json: &str) -> Result<String, JsValue> {
    goals(request_json).map_err(to_js)
}

/// Gram goals for `{ "calories", "protein_pct", "carbs_pct", "fat_pct" }`
#[wasm_bindgen]
pub fn goals_from_percentages_json(request_json: &str) -> Result<String, JsValue> {
    from_percentages(request_json).map_err(to_js)
}

/// Percentage split of gram goals
#[wasm_bindgen]
pub fn percentages_from_goals_json(goals_json: &str) -> Result<String, JsValue> {
    percentages(goals_json).map_err(to_js)
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid input: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn parse_label<T: DeserializeOwned>(kind: &str, label: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(label.to_string()))
        .map_err(|_| format!("Unknown {}: {}", kind, label))
}

fn energy_profile(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: ActivityLevel,
    goal: WeightGoal,
) -> BodyProfile {
    BodyProfile {
        weight_kg,
        height_cm,
        age_years,
        sex: if is_male { BiologicalSex::Male } else { BiologicalSex::Female },
        activity_level,
        goal,
        neck_cm: 0.0,
        waist_cm: 0.0,
        hip_cm: 0.0,
    }
}

fn tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: &str,
    goal: &str,
) -> Result<f64, String> {
    let activity_level = parse_label("activity level", activity_level)?;
    let goal = parse_label("goal", goal)?;
    let profile = energy_profile(weight_kg, height_cm, age_years, is_male, activity_level, goal);
    Ok(calculate_energy_breakdown(&profile).tdee)
}

fn body_composition(profile_json: &str) -> Result<String, String> {
    let profile: BodyProfile = parse(profile_json)?;
    to_json(&calculate_body_composition(&profile))
}

#[derive(serde::Deserialize)]
struct GoalsInput {
    profile: BodyProfile,
    #[serde(default)]
    custom_goals: Option<MacroGoals>,
}

fn goals(request_json: &str) -> Result<String, String> {
    let input: GoalsInput = parse(request_json)?;
    to_json(&resolve_goals(&input.profile, input.custom_goals.as_ref()))
}

fn percentages(goals_json: &str) -> Result<String, String> {
    let goals: MacroGoals = parse(goals_json)?;
    to_json(&percentages_from_goals(&goals))
}

fn from_percentages(request_json: &str) -> Result<String, String> {
    let req: PercentageGoalsRequest = parse(request_json)?;
    let goals = goals_from_percentages(req.calories, req.protein_pct, req.carbs_pct, req.fat_pct)
        .map_err(|e| e.to_string())?;
    to_json(&goals)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALE: &str = r#"{
        "weight_kg": 70.0, "height_cm": 175.0, "age_years": 25, "sex": "male",
        "activity_level": "moderate", "goal": "maintain", "neck_cm": 38.0, "waist_cm": 85.0
    }"#;

    #[test]
    fn test_bmr() {
        assert!((calculate_bmr(70.0, 175.0, 25, true) - 1724.052).abs() < 1e-6);
    }

    #[test]
    fn test_tdee_with_labels() {
        let value = tdee(70.0, 175.0, 25, true, "moderate", "gain").unwrap();
        assert!((value - 3172.2806).abs() < 1e-6);
    }

    #[test]
    fn test_tdee_rejects_unknown_label() {
        let err = tdee(70.0, 175.0, 25, true, "extreme", "gain").unwrap_err();
        assert_eq!(err, "Unknown activity level: extreme");
    }

    #[test]
    fn test_body_composition_json() {
        let json = body_composition(MALE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fat_percentage"], 23.47);
        assert_eq!(value["lean_body_mass_kg"], 53.57);
    }

    #[test]
    fn test_resolve_goals_json() {
        let json = goals(&format!(r#"{{ "profile": {} }}"#, MALE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["calories"], 2672.0);
        assert_eq!(value["protein_g"], 200.0);
    }

    #[test]
    fn test_goals_from_percentages_rejects_bad_sum() {
        let err = from_percentages(
            r#"{ "calories": 2000, "protein_pct": 50, "carbs_pct": 40, "fat_pct": 30 }"#,
        )
        .unwrap_err();
        assert!(err.contains("add up to 100%"));
    }

    #[test]
    fn test_percentages_of_zero_goals_use_default_split() {
        let json = percentages(r#"{ "calories": 0, "protein_g": 0, "carbs_g": 0, "fat_g": 0 }"#)
            .unwrap();
        assert_eq!(json, r#"{"protein_pct":30,"carbs_pct":40,"fat_pct":30}"#);
    }

    #[test]
    fn test_invalid_json() {
        assert!(body_composition("{").unwrap_err().starts_with("Invalid input"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_percentages_binding() {
        let json = percentages_from_goals_json(
            r#"{ "calories": 2000, "protein_g": 150, "carbs_g": 200, "fat_g": 67 }"#,
        )
        .unwrap();
        assert_eq!(json, r#"{"protein_pct":30,"carbs_pct":40,"fat_pct":30}"#);
    }

    #[wasm_bindgen_test]
    fn test_errors_surface_as_js_strings() {
        let err = calculate_body_composition_json("not json").unwrap_err();
        assert!(err.as_string().unwrap().starts_with("Invalid input"));
    }
}
