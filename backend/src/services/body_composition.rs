//! Body composition service - measurement history handling
//!
//! The caller owns the history; this service applies one save to it and
//! hands the result back for the persistence layer to store.

use crate::error::ApiError;
use crate::services::profile::ProfileService;
use macro_tracker_shared::types::{HistoryResponse, HistoryUpsertRequest};
use macro_tracker_shared::{
    compare_history, normalize_history, upsert_history_entry, BodyCompositionLogEntry,
};
use tracing::info;

/// Body composition service
pub struct BodyCompositionService;

impl BodyCompositionService {
    /// Record measurements for `req.date`, overwriting any entry for that day
    pub fn save_measurements(
        req: HistoryUpsertRequest,
        strict: bool,
    ) -> Result<HistoryResponse, ApiError> {
        ProfileService::check(&req.profile, strict)?;

        // Incoming history may come from storage in arbitrary order
        let mut history = normalize_history(req.history);

        let entry = BodyCompositionLogEntry::record(req.date, &req.profile);
        let replaced = upsert_history_entry(&mut history, entry.clone());
        let trend = compare_history(&history);

        info!(
            date = %entry.date,
            fat_percentage = entry.fat_percentage,
            lean_body_mass_kg = entry.lean_body_mass_kg,
            replaced,
            entries = history.len(),
            "Saved body composition measurements"
        );

        Ok(HistoryResponse {
            entry,
            replaced,
            history,
            trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use macro_tracker_shared::{ActivityLevel, BiologicalSex, BodyProfile, WeightGoal};

    fn profile(weight_kg: f64, waist_cm: f64) -> BodyProfile {
        BodyProfile {
            weight_kg,
            height_cm: 175.0,
            age_years: 25,
            sex: BiologicalSex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: WeightGoal::Lose,
            neck_cm: 38.0,
            waist_cm,
            hip_cm: 0.0,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_first_save_creates_entry() {
        let response = BodyCompositionService::save_measurements(
            HistoryUpsertRequest {
                date: day(1),
                profile: profile(70.0, 85.0),
                history: vec![],
            },
            false,
        )
        .unwrap();

        assert!(!response.replaced);
        assert_eq!(response.history.len(), 1);
        assert!(response.trend.is_none());
    }

    #[test]
    fn test_same_day_save_overwrites() {
        let existing = vec![
            BodyCompositionLogEntry::record(day(1), &profile(72.0, 88.0)),
            BodyCompositionLogEntry::record(day(3), &profile(71.0, 87.0)),
        ];
        let response = BodyCompositionService::save_measurements(
            HistoryUpsertRequest {
                date: day(3),
                profile: profile(70.5, 86.0),
                history: existing,
            },
            false,
        )
        .unwrap();

        assert!(response.replaced);
        assert_eq!(response.history.len(), 2);
        assert_eq!(response.history[1].weight_kg, 70.5);
        assert!(response.trend.is_some());
    }

    #[test]
    fn test_unsorted_duplicated_history_is_normalized() {
        let existing = vec![
            BodyCompositionLogEntry::record(day(9), &profile(70.0, 85.0)),
            BodyCompositionLogEntry::record(day(2), &profile(72.0, 88.0)),
            BodyCompositionLogEntry::record(day(2), &profile(71.5, 88.0)),
        ];
        let response = BodyCompositionService::save_measurements(
            HistoryUpsertRequest {
                date: day(5),
                profile: profile(71.0, 86.0),
                history: existing,
            },
            false,
        )
        .unwrap();

        let dates: Vec<_> = response.history.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(2), day(5), day(9)]);
        assert_eq!(response.history[0].weight_kg, 71.5);
    }
}
