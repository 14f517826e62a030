// ABOUTME: Persisted per-day biomarker entry model and its sparse sub-documents
// ABOUTME: Field-level merge semantics for non-destructive same-day upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Per-day biomarker entries
//!
//! A `BiomarkerDayEntry` is keyed by `(user, calendar date)` and holds a
//! sparse union of sub-documents. Imports patch individual sub-documents;
//! sibling sub-documents recorded by hand or by other imports on the same
//! day are never disturbed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sleep metrics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMetrics {
    /// Total hours asleep
    pub hours: f64,
    /// Estimated quality on a 1-10 scale
    pub quality: u8,
    /// Estimated deep sleep hours
    pub deep_sleep: f64,
    /// Free-form provenance or user notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Self-reported mood metrics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodMetrics {
    /// Overall mood rating, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Energy level, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<u8>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Vital sign metrics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsMetrics {
    /// Resting heart rate in beats per minute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<i32>,
    /// Systolic blood pressure in mmHg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<i32>,
    /// Diastolic blood pressure in mmHg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<i32>,
    /// Free-form provenance or user notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Strength benchmark metrics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthMetrics {
    /// Best squat of the day in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squat_lbs: Option<f64>,
    /// Best bench press of the day in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bench_lbs: Option<f64>,
    /// Best deadlift of the day in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadlift_lbs: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Bloodwork panel results recorded on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodworkMetrics {
    /// Total testosterone in ng/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testosterone: Option<f64>,
    /// Fasting glucose in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Recovery metrics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryMetrics {
    /// Perceived soreness, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soreness: Option<u8>,
    /// Readiness to train, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness: Option<u8>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Persisted per-day biomarker entry, keyed by `(user, calendar date)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerDayEntry {
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date this entry describes
    pub date: NaiveDate,
    /// Sleep sub-document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepMetrics>,
    /// Mood sub-document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodMetrics>,
    /// Vitals sub-document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitals: Option<VitalsMetrics>,
    /// Strength sub-document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthMetrics>,
    /// Bloodwork sub-document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloodwork: Option<BloodworkMetrics>,
    /// Recovery sub-document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoveryMetrics>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl BiomarkerDayEntry {
    /// Create an empty entry for a user and date
    #[must_use]
    pub fn new(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            sleep: None,
            mood: None,
            vitals: None,
            strength: None,
            bloodwork: None,
            recovery: None,
            updated_at: Utc::now(),
        }
    }

    /// Apply a patch at sub-document granularity.
    ///
    /// Each sub-document present in the patch replaces the entry's
    /// corresponding sub-document; absent sub-documents leave the existing
    /// values untouched. Applying the same patch twice is a no-op after the
    /// first application.
    pub fn apply(&mut self, patch: &BiomarkerPatch) {
        if let Some(sleep) = &patch.sleep {
            self.sleep = Some(sleep.clone());
        }
        if let Some(mood) = &patch.mood {
            self.mood = Some(mood.clone());
        }
        if let Some(vitals) = &patch.vitals {
            self.vitals = Some(vitals.clone());
        }
        if let Some(strength) = &patch.strength {
            self.strength = Some(strength.clone());
        }
        if let Some(bloodwork) = &patch.bloodwork {
            self.bloodwork = Some(bloodwork.clone());
        }
        if let Some(recovery) = &patch.recovery {
            self.recovery = Some(recovery.clone());
        }
        self.updated_at = Utc::now();
    }
}

/// Sparse update for a biomarker day entry.
///
/// Only the sub-documents the writer actually produced are populated; the
/// store merges a patch into any existing same-day entry without touching
/// sibling sub-documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerPatch {
    /// Sleep sub-document to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepMetrics>,
    /// Mood sub-document to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodMetrics>,
    /// Vitals sub-document to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitals: Option<VitalsMetrics>,
    /// Strength sub-document to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthMetrics>,
    /// Bloodwork sub-document to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloodwork: Option<BloodworkMetrics>,
    /// Recovery sub-document to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoveryMetrics>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_sleep() -> SleepMetrics {
        SleepMetrics {
            hours: 7.5,
            quality: 8,
            deep_sleep: 1.5,
            notes: Some("Imported from Apple Health (iPhone)".to_owned()),
        }
    }

    #[test]
    fn test_apply_preserves_sibling_subdocuments() {
        let user_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut entry = BiomarkerDayEntry::new(user_id, date);
        entry.mood = Some(MoodMetrics {
            rating: Some(7),
            energy: Some(6),
            notes: None,
        });

        let patch = BiomarkerPatch {
            sleep: Some(sample_sleep()),
            ..BiomarkerPatch::default()
        };
        entry.apply(&patch);

        assert_eq!(entry.sleep, Some(sample_sleep()));
        assert_eq!(entry.mood.as_ref().and_then(|m| m.rating), Some(7));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut entry = BiomarkerDayEntry::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        let patch = BiomarkerPatch {
            vitals: Some(VitalsMetrics {
                resting_heart_rate: Some(50),
                blood_pressure_systolic: None,
                blood_pressure_diastolic: None,
                notes: None,
            }),
            ..BiomarkerPatch::default()
        };

        entry.apply(&patch);
        let first = entry.vitals.clone();
        entry.apply(&patch);

        assert_eq!(entry.vitals, first);
    }
}
