// ABOUTME: Import reconciler writing daily summaries into the biomarker store
// ABOUTME: Per-day upserts with failure isolation, provenance notes, and cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Import reconciliation
//!
//! Sleep and heart-rate daily summaries are upserted into the per-day
//! biomarker store: created when the `(user, date)` entry is absent, merged
//! at sub-document granularity when present, so hand-entered mood, strength,
//! bloodwork, and recovery data on the same day survive an import.
//!
//! Step, workout, and weight summaries are computed and returned to the
//! caller but not persisted here: the biomarker store's write contract has
//! no sub-document for them; they belong to the activity and measurement
//! resources.
//!
//! Per-day upserts are independent. One day's write failure is recorded and
//! the remaining days still run. Cancellation stops new upserts from being
//! issued; the in-flight write completes so partial results stay consistent.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use superfit_core::models::{BiomarkerPatch, SleepMetrics, VitalsMetrics};

use super::service::ParsedHealthData;
use crate::database::BiomarkerStore;

/// Cooperative cancellation flag for a running import
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a flag in the not-cancelled state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation: no further upserts will be issued
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}

/// Per-domain counters of successfully reconciled records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCounts {
    /// Sleep days upserted
    pub sleep: u32,
    /// Heart-rate days upserted
    pub heart_rate: u32,
    /// Step days persisted (currently always 0, see module docs)
    pub steps: u32,
    /// Workout sessions persisted (currently always 0, see module docs)
    pub workouts: u32,
    /// Weight days persisted (currently always 0, see module docs)
    pub weight: u32,
}

/// Outcome of an import, returned to the caller for user-facing confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// True when every attempted day was written
    pub success: bool,
    /// Per-domain reconciled counts
    pub imported: ImportCounts,
    /// Days whose upsert failed; the rest of the import still ran
    pub failed_dates: Vec<NaiveDate>,
}

/// Reconciles aggregated daily summaries against the biomarker store
pub struct ImportReconciler {
    store: Arc<dyn BiomarkerStore>,
}

impl ImportReconciler {
    /// Create a reconciler over a biomarker store
    #[must_use]
    pub fn new(store: Arc<dyn BiomarkerStore>) -> Self {
        Self { store }
    }

    /// Upsert every sleep and heart-rate day summary for `user_id`.
    ///
    /// Never fails as a whole: individual day failures are collected in
    /// `failed_dates` and the remaining days still run.
    pub async fn reconcile(
        &self,
        user_id: Uuid,
        data: &ParsedHealthData,
        cancel: &CancelFlag,
    ) -> ImportResult {
        let mut counts = ImportCounts::default();
        let mut failed_dates = Vec::new();

        for day in &data.sleep {
            if cancel.is_cancelled() {
                break;
            }

            let patch = BiomarkerPatch {
                sleep: Some(SleepMetrics {
                    hours: day.total_hours,
                    quality: day.estimated_quality,
                    deep_sleep: day.estimated_deep_sleep_hours,
                    notes: Some(provenance_note(&day.contributing_sources)),
                }),
                ..BiomarkerPatch::default()
            };

            match self.store.upsert_day_entry(user_id, day.date, &patch).await {
                Ok(()) => counts.sleep += 1,
                Err(e) => {
                    warn!(user.id = %user_id, date = %day.date, error = %e,
                        "sleep reconciliation failed for day");
                    failed_dates.push(day.date);
                }
            }
        }

        for day in &data.heart_rate {
            if cancel.is_cancelled() {
                break;
            }

            let patch = BiomarkerPatch {
                vitals: Some(VitalsMetrics {
                    resting_heart_rate: Some(day.resting_hr),
                    blood_pressure_systolic: None,
                    blood_pressure_diastolic: None,
                    notes: Some(provenance_note(&day.contributing_sources)),
                }),
                ..BiomarkerPatch::default()
            };

            match self.store.upsert_day_entry(user_id, day.date, &patch).await {
                Ok(()) => counts.heart_rate += 1,
                Err(e) => {
                    warn!(user.id = %user_id, date = %day.date, error = %e,
                        "heart-rate reconciliation failed for day");
                    failed_dates.push(day.date);
                }
            }
        }

        if cancel.is_cancelled() {
            info!(user.id = %user_id, "import cancelled, no further upserts issued");
        }

        failed_dates.sort_unstable();
        failed_dates.dedup();

        ImportResult {
            success: failed_dates.is_empty(),
            imported: counts,
            failed_dates,
        }
    }
}

/// Human-readable provenance string for a sub-document's notes field
fn provenance_note(sources: &BTreeSet<String>) -> String {
    let joined = sources.iter().cloned().collect::<Vec<_>>().join(", ");
    format!("Imported from Apple Health ({joined})")
}
