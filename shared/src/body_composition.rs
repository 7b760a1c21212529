//! Body composition estimation and measurement history
//!
//! Body fat uses the U.S. Navy circumference method. The estimate is
//! approximate and is presented to users as such.

use crate::profile::{BiologicalSex, BodyProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Estimation
// ============================================================================

/// Output of the body composition estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionResult {
    pub lean_body_mass_kg: f64,
    pub fat_percentage: f64,
}

impl BodyCompositionResult {
    /// Estimated fat mass for the given body weight
    pub fn fat_mass_kg(&self, weight_kg: f64) -> f64 {
        weight_kg - self.lean_body_mass_kg
    }
}

/// Estimate body fat percentage and lean body mass (U.S. Navy method)
///
/// Men: BF% = 86.010 × log10(waist - neck) - 70.041 × log10(height) + 36.76
/// Women: BF% = 163.205 × log10(waist + hip - neck) - 97.684 × log10(height) - 78.387
///
/// Unless both the circumference and height logarithms are positive (each
/// input above 1 cm) the formula is skipped and yields 0%. The percentage is floored at 0 and both outputs are rounded to two
/// decimals.
pub fn calculate_body_composition(profile: &BodyProfile) -> BodyCompositionResult {
    let fat_percentage = navy_fat_percentage(profile).max(0.0);
    let fat_mass = profile.weight_kg * (fat_percentage / 100.0);
    let lean_body_mass = profile.weight_kg - fat_mass;

    BodyCompositionResult {
        lean_body_mass_kg: round2(lean_body_mass),
        fat_percentage: round2(fat_percentage),
    }
}

fn navy_fat_percentage(profile: &BodyProfile) -> f64 {
    let circumference = match profile.sex {
        BiologicalSex::Male => profile.waist_cm - profile.neck_cm,
        BiologicalSex::Female => profile.waist_cm + profile.hip_cm - profile.neck_cm,
    };
    let height_log = profile.height_cm.log10();
    let circumference_log = circumference.log10();

    // Both logs must be strictly positive (inputs above 1 cm); NaN and
    // -inf from non-positive inputs fail the comparison too.
    if !(height_log > 0.0 && circumference_log > 0.0) {
        return 0.0;
    }

    match profile.sex {
        BiologicalSex::Male => 86.010 * circumference_log - 70.041 * height_log + 36.76,
        BiologicalSex::Female => 163.205 * circumference_log - 97.684 * height_log - 78.387,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// History
// ============================================================================

/// One saved set of measurements and the estimate derived from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionLogEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: f64,
    pub lean_body_mass_kg: f64,
    pub fat_percentage: f64,
}

impl BodyCompositionLogEntry {
    /// Run the estimator on `profile` and capture the result for `date`
    pub fn record(date: NaiveDate, profile: &BodyProfile) -> Self {
        let result = calculate_body_composition(profile);
        Self {
            date,
            weight_kg: profile.weight_kg,
            neck_cm: profile.neck_cm,
            waist_cm: profile.waist_cm,
            hip_cm: profile.hip_cm,
            lean_body_mass_kg: result.lean_body_mass_kg,
            fat_percentage: result.fat_percentage,
        }
    }

    pub fn fat_mass_kg(&self) -> f64 {
        self.weight_kg - self.lean_body_mass_kg
    }
}

/// Insert or replace the entry for `entry.date`
///
/// At most one entry exists per date; a second save on the same day
/// overwrites the first. The history is kept sorted by date, oldest first.
/// Returns `true` when an existing entry was replaced.
pub fn upsert_history_entry(
    history: &mut Vec<BodyCompositionLogEntry>,
    entry: BodyCompositionLogEntry,
) -> bool {
    match history.binary_search_by(|existing| existing.date.cmp(&entry.date)) {
        Ok(index) => {
            history[index] = entry;
            true
        }
        Err(index) => {
            history.insert(index, entry);
            false
        }
    }
}

/// Sort a history by date and keep one entry per date
///
/// For duplicated dates the entry appearing last in the input wins, the same
/// rule a second save on one day follows.
pub fn normalize_history(
    mut history: Vec<BodyCompositionLogEntry>,
) -> Vec<BodyCompositionLogEntry> {
    // Stable sort keeps input order among equal dates
    history.sort_by(|a, b| a.date.cmp(&b.date));
    history.dedup_by(|later, earlier| {
        if later.date == earlier.date {
            std::mem::swap(later, earlier);
            true
        } else {
            false
        }
    });
    history
}

/// Snapshot of one end of a history comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSnapshot {
    pub date: NaiveDate,
    pub fat_percentage: f64,
    pub lean_body_mass_kg: f64,
    pub fat_mass_kg: f64,
}

impl From<&BodyCompositionLogEntry> for CompositionSnapshot {
    fn from(entry: &BodyCompositionLogEntry) -> Self {
        Self {
            date: entry.date,
            fat_percentage: entry.fat_percentage,
            lean_body_mass_kg: entry.lean_body_mass_kg,
            fat_mass_kg: entry.fat_mass_kg(),
        }
    }
}

/// Change between the first and the last entry of a history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionTrend {
    pub first: CompositionSnapshot,
    pub last: CompositionSnapshot,
    pub delta_fat_percentage: f64,
    pub delta_lean_body_mass_kg: f64,
    pub delta_fat_mass_kg: f64,
}

/// Compare the oldest and newest entries of a date-sorted history
///
/// Returns `None` when fewer than two entries exist.
pub fn compare_history(history: &[BodyCompositionLogEntry]) -> Option<BodyCompositionTrend> {
    if history.len() < 2 {
        return None;
    }
    let first = CompositionSnapshot::from(history.first()?);
    let last = CompositionSnapshot::from(history.last()?);

    Some(BodyCompositionTrend {
        delta_fat_percentage: last.fat_percentage - first.fat_percentage,
        delta_lean_body_mass_kg: last.lean_body_mass_kg - first.lean_body_mass_kg,
        delta_fat_mass_kg: last.fat_mass_kg - first.fat_mass_kg,
        first,
        last,
    })
}
