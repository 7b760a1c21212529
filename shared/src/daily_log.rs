//! Daily food log aggregation
//!
//! A day's totals are always recomputed from its food entries, never
//! patched incrementally.

use crate::macro_goals::MacroGoals;
use serde::{Deserialize, Serialize};

/// One food eaten on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    /// Database food the entry was portioned from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_food_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,
}

/// All foods logged on one day plus their totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub foods: Vec<FoodEntry>,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl DailyLog {
    /// Build a log from a list of foods
    pub fn from_foods(foods: Vec<FoodEntry>) -> Self {
        let mut log = Self {
            foods,
            ..Self::default()
        };
        log.recompute_totals();
        log
    }

    pub fn add_food(&mut self, food: FoodEntry) {
        self.foods.push(food);
        self.recompute_totals();
    }

    /// Replace the entry with the same id; returns `false` if none matched
    pub fn replace_food(&mut self, food: FoodEntry) -> bool {
        let Some(slot) = self.foods.iter_mut().find(|f| f.id == food.id) else {
            return false;
        };
        *slot = food;
        self.recompute_totals();
        true
    }

    /// Remove the entry with `id`; returns the removed entry
    pub fn remove_food(&mut self, id: &str) -> Option<FoodEntry> {
        let index = self.foods.iter().position(|f| f.id == id)?;
        let removed = self.foods.remove(index);
        self.recompute_totals();
        Some(removed)
    }

    fn recompute_totals(&mut self) {
        let (calories, protein, carbs, fat) = self.foods.iter().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(calories, protein, carbs, fat), food| {
                (
                    calories + food.calories,
                    protein + food.protein_g,
                    carbs + food.carbs_g,
                    fat + food.fat_g,
                )
            },
        );
        self.calories = calories;
        self.protein_g = protein;
        self.carbs_g = carbs;
        self.fat_g = fat;
    }

    /// Compare the day's totals against the active goals
    pub fn progress(&self, goals: &MacroGoals) -> DailyProgress {
        DailyProgress {
            calories: MacroProgress::new(self.calories, goals.calories),
            protein: MacroProgress::new(self.protein_g, goals.protein_g),
            carbs: MacroProgress::new(self.carbs_g, goals.carbs_g),
            fat: MacroProgress::new(self.fat_g, goals.fat_g),
        }
    }
}

/// Consumption versus goal for one quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub consumed: f64,
    pub goal: f64,
    /// Negative once the goal is exceeded
    pub remaining: f64,
    pub percent: f64,
}

impl MacroProgress {
    /// A zero goal divides by 1 instead
    pub fn new(consumed: f64, goal: f64) -> Self {
        let divisor = if goal == 0.0 { 1.0 } else { goal };
        Self {
            consumed,
            goal,
            remaining: goal - consumed,
            percent: consumed / divisor * 100.0,
        }
    }
}

/// Progress for calories and each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}
