//! Input validation functions
//!
//! The estimators are permissive: they never reject a profile. These
//! validators are the opt-in gate for callers that want degenerate
//! profiles refused before any calculation runs. Uses both custom
//! validators and the `validator` crate for derive macros.

use crate::errors::ValidationError;
use crate::profile::BodyProfile;
use validator::Validate;

/// Validate that a measurement is a finite, strictly positive number
pub fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::field(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::field(field, "must be greater than zero"));
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), ValidationError> {
    if calories.is_nan() || calories.is_infinite() {
        return Err(ValidationError::field("calories", "must be a valid number"));
    }
    if calories < 0.0 {
        return Err(ValidationError::field("calories", "cannot be negative"));
    }
    if calories > 50000.0 {
        return Err(ValidationError::field("calories", "value unreasonably high"));
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::field(field, "must be a valid number"));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::field(field, "must be between 0 and 100"));
    }
    Ok(())
}

// ============================================================================
// Profile Validation
// ============================================================================

/// Reject profiles the energy and body-fat formulas cannot handle sensibly
///
/// Weight, height and age must be strictly positive; circumferences must
/// not be negative.
pub fn validate_body_profile(profile: &BodyProfile) -> Result<(), ValidationError> {
    validate_positive("weight_kg", profile.weight_kg)?;
    validate_positive("height_cm", profile.height_cm)?;
    if profile.age_years <= 0 {
        return Err(ValidationError::field("age_years", "must be greater than zero"));
    }

    if let Err(errors) = profile.validate() {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                (field.to_string(), message)
            })
            .collect();
        fields.sort();

        if let Some((field, message)) = fields.into_iter().next() {
            return Err(ValidationError::Field { field, message });
        }
    }

    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" => "Weight",
        "height_cm" => "Height",
        "age_years" => "Age",
        "sex" => "Biological Sex",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "neck_cm" => "Neck",
        "waist_cm" => "Waist",
        "hip_cm" => "Hip",
        "calories" => "Calories",
        "protein_pct" => "Protein (%)",
        "carbs_pct" => "Carbohydrates (%)",
        "fat_pct" => "Fat (%)",
        "quantity" => "Quantity",
        "unit" => "Unit",
        _ => field_name,
    }
}

/// Format a validation error for display next to a form
pub fn user_message(error: &ValidationError) -> String {
    match error {
        ValidationError::PercentageSum { .. } => error.to_string(),
        ValidationError::Field { field, message } => {
            format!("{}: {}", get_field_display_label(field), message)
        }
    }
}
