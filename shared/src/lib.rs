//! Macro Tracker Shared Library
//!
//! The nutrition and body-composition calculation engine, plus the types
//! shared by the backend and the WASM bindings. Every calculation is a pure
//! function of its inputs.

pub mod body_composition;
pub mod daily_log;
pub mod energy;
pub mod errors;
pub mod food;
pub mod macro_goals;
pub mod profile;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use body_composition::{
    calculate_body_composition, compare_history, normalize_history, upsert_history_entry,
    BodyCompositionLogEntry, BodyCompositionResult, BodyCompositionTrend,
};
pub use daily_log::{DailyLog, DailyProgress, FoodEntry, MacroProgress};
pub use energy::{calculate_bmr, calculate_energy_breakdown, calculate_tdee, EnergyBreakdown};
pub use errors::*;
pub use food::{calculate_portion, FoodDatabaseItem, Portion, PortionUnit};
pub use macro_goals::{
    goals_from_percentages, percentages_from_goals, resolve_goals, MacroGoals, MacroSplit,
};
pub use profile::{ActivityLevel, BiologicalSex, BodyProfile, WeightGoal};
