//! Food database items and portion calculation

use crate::daily_log::FoodEntry;
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Serving size assumed when an item carries no usable one
pub const FALLBACK_SERVING_SIZE_G: f64 = 100.0;

/// Food as stored in the food database; nutrients are per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDatabaseItem {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub serving_size_g: f64,
    /// Grams per millilitre, for liquids (e.g. ~1.03 for milk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml_to_g_ratio: Option<f64>,
    /// Name of a countable unit ("slice", "egg")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_to_g_ratio: Option<f64>,
}

impl FoodDatabaseItem {
    fn effective_serving_size(&self) -> f64 {
        if self.serving_size_g > 0.0 {
            self.serving_size_g
        } else {
            FALLBACK_SERVING_SIZE_G
        }
    }
}

/// Unit a portion quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PortionUnit {
    #[default]
    Grams,
    Milliliters,
    Unit,
}

/// Nutrients of a concrete portion of a database food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub food_name: String,
    pub quantity: f64,
    pub unit: PortionUnit,
    pub unit_label: String,
    pub grams: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Portion {
    /// Turn the portion into a log entry labelled "<food> (<qty><unit>)"
    pub fn into_food_entry(self, id: impl Into<String>) -> FoodEntry {
        let quantity = (self.quantity * 10.0).round() / 10.0;
        FoodEntry {
            id: id.into(),
            name: format!("{} ({}{})", self.food_name, quantity, self.unit_label),
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            base_food_name: Some(self.food_name),
            grams: Some(self.grams.round()),
        }
    }
}

/// Scale a database item to `quantity` of `unit`
///
/// Calories are rounded to whole kcal, macros to 0.1 g and the resolved
/// weight to whole grams.
pub fn calculate_portion(
    item: &FoodDatabaseItem,
    quantity: f64,
    unit: PortionUnit,
) -> Result<Portion, ValidationError> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(ValidationError::field(
            "quantity",
            "Quantity must be a positive number",
        ));
    }

    let serving_size = item.effective_serving_size();
    let (grams, unit_label) = match unit {
        PortionUnit::Grams => (quantity, "g".to_string()),
        PortionUnit::Milliliters => {
            let ratio = item.ml_to_g_ratio.ok_or_else(|| {
                ValidationError::field(
                    "unit",
                    format!("{} cannot be measured in millilitres", item.name),
                )
            })?;
            (quantity * ratio, "ml".to_string())
        }
        PortionUnit::Unit => {
            let ratio = item.unit_to_g_ratio.unwrap_or(serving_size);
            let label = item.unit_name.clone().unwrap_or_else(|| "un".to_string());
            (quantity * ratio, label)
        }
    };

    let factor = grams / serving_size;
    Ok(Portion {
        food_name: item.name.clone(),
        quantity,
        unit,
        unit_label,
        grams: grams.round(),
        calories: (item.calories * factor).round(),
        protein_g: round1(item.protein_g * factor),
        carbs_g: round1(item.carbs_g * factor),
        fat_g: round1(item.fat_g * factor),
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
