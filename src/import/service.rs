// ABOUTME: Apple Health import service orchestrating the ingestion pipeline
// ABOUTME: Archive -> scan -> extract -> aggregate, then reconcile and report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Apple Health import service
//!
//! Two-phase API: [`AppleHealthImportService::parse_export`] is a pure
//! CPU-bound transform from archive bytes to aggregated daily summaries, and
//! [`AppleHealthImportService::import`] reconciles those summaries into the
//! biomarker store. Each import invocation is independent and holds no
//! shared state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use superfit_core::errors::AppError;
use superfit_core::models::{
    DailyHeartRateSummary, DailySleepSummary, DailyStepSummary, DailyWeightSummary, WorkoutRecord,
};

use super::archive;
use super::extract::{heart_rate, sleep, steps, weight, workouts};
use super::reconciler::{CancelFlag, ImportReconciler, ImportResult};
use super::scanner::HealthExport;
use crate::database::BiomarkerStore;

/// Aggregated output of the parse phase, all five domains
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedHealthData {
    /// One summary per day with qualifying sleep
    pub sleep: Vec<DailySleepSummary>,
    /// One statistics summary per day with heart-rate samples
    pub heart_rate: Vec<DailyHeartRateSummary>,
    /// One step total per day
    pub steps: Vec<DailyStepSummary>,
    /// Individual workout sessions
    pub workouts: Vec<WorkoutRecord>,
    /// Latest weight reading per day
    pub weight: Vec<DailyWeightSummary>,
    /// Elements dropped across all extractors for malformed attributes
    pub skipped_records: u32,
}

/// Service wiring the ingestion pipeline to a biomarker store
pub struct AppleHealthImportService {
    store: Arc<dyn BiomarkerStore>,
}

impl AppleHealthImportService {
    /// Create a service over a biomarker store
    #[must_use]
    pub fn new(store: Arc<dyn BiomarkerStore>) -> Self {
        Self { store }
    }

    /// Parse an uploaded export archive into aggregated daily summaries.
    ///
    /// Pure transform: decompression, XML scanning, extraction, and
    /// aggregation run to completion with no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `InvalidArchive` when the zip cannot be
    /// read, the export member is absent, or the XML is malformed. A single
    /// bad record is never fatal; it is skipped and counted.
    pub fn parse_export(archive_bytes: &[u8]) -> Result<ParsedHealthData, AppError> {
        let xml = archive::extract_export_xml(archive_bytes)?;
        let doc = HealthExport::parse(&xml)?;

        let sleep_raw = sleep::extract_sleep(&doc);
        let heart_raw = heart_rate::extract_heart_rate(&doc);
        let steps_raw = steps::extract_steps(&doc);
        let workouts_raw = workouts::extract_workouts(&doc);
        let weight_raw = weight::extract_weight(&doc);

        let skipped_records = sleep_raw.skipped
            + heart_raw.skipped
            + steps_raw.skipped
            + workouts_raw.skipped
            + weight_raw.skipped;

        let parsed = ParsedHealthData {
            sleep: sleep::aggregate_sleep_by_day(&sleep_raw.items),
            heart_rate: heart_rate::aggregate_heart_rate_by_day(&heart_raw.items),
            steps: steps::aggregate_steps_by_day(&steps_raw.items),
            workouts: workouts_raw.items,
            weight: weight::aggregate_weight_by_day(&weight_raw.items),
            skipped_records,
        };

        info!(
            records = doc.records.len(),
            workouts = doc.workouts.len(),
            sleep_days = parsed.sleep.len(),
            heart_rate_days = parsed.heart_rate.len(),
            step_days = parsed.steps.len(),
            workout_sessions = parsed.workouts.len(),
            weight_days = parsed.weight.len(),
            skipped = skipped_records,
            "parsed Apple Health export"
        );

        Ok(parsed)
    }

    /// Reconcile parsed summaries into the biomarker store for `user_id`
    pub async fn import(
        &self,
        user_id: Uuid,
        data: &ParsedHealthData,
        cancel: &CancelFlag,
    ) -> ImportResult {
        let reconciler = ImportReconciler::new(Arc::clone(&self.store));
        let result = reconciler.reconcile(user_id, data, cancel).await;

        info!(
            user.id = %user_id,
            sleep = result.imported.sleep,
            heart_rate = result.imported.heart_rate,
            failed_days = result.failed_dates.len(),
            success = result.success,
            "Apple Health import finished"
        );

        result
    }

    /// Parse and import in one call
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the archive cannot be parsed; reconciliation
    /// failures are reported per-day inside the result instead.
    pub async fn import_archive(
        &self,
        user_id: Uuid,
        archive_bytes: &[u8],
        cancel: &CancelFlag,
    ) -> Result<ImportResult, AppError> {
        let parsed = Self::parse_export(archive_bytes)?;
        Ok(self.import(user_id, &parsed, cancel).await)
    }
}
