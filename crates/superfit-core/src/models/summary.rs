// ABOUTME: Raw health records and daily summary types for the import pipeline
// ABOUTME: Transient per-sample shapes plus one-per-day aggregated summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Import pipeline data shapes
//!
//! Raw records are one-per-XML-element and live only for the duration of a
//! single import call. Daily summaries are the aggregated one-per-day output
//! handed to the reconciler and returned to the caller.
//!
//! Calendar days are bucketed in the source-device-local offset embedded in
//! each export timestamp, fixed at parse time. Users who cross midnight in a
//! different timezone than their device recorded are a known limitation.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One qualifying sleep interval ("asleep" state only)
#[derive(Debug, Clone, PartialEq)]
pub struct SleepInterval {
    /// Calendar day of the interval start, source-local
    pub date: NaiveDate,
    /// Interval start
    pub start: DateTime<FixedOffset>,
    /// Interval end
    pub end: DateTime<FixedOffset>,
    /// Interval duration in hours
    pub hours: f64,
    /// Recording device or app name
    pub source: String,
}

/// One heart-rate sample in beats per minute
#[derive(Debug, Clone, PartialEq)]
pub struct HeartRateSample {
    /// Calendar day of the sample, source-local
    pub date: NaiveDate,
    /// Sample timestamp
    pub timestamp: DateTime<FixedOffset>,
    /// Beats per minute
    pub bpm: f64,
    /// Recording device or app name
    pub source: String,
}

/// One step-count interval sample
#[derive(Debug, Clone, PartialEq)]
pub struct StepSample {
    /// Calendar day of the interval start, source-local
    pub date: NaiveDate,
    /// Steps counted over the interval
    pub steps: i64,
    /// Recording device or app name
    pub source: String,
}

/// One body-mass reading, already normalized to pounds
#[derive(Debug, Clone, PartialEq)]
pub struct WeightReading {
    /// Calendar day of the reading, source-local
    pub date: NaiveDate,
    /// Reading timestamp, used to pick the latest reading per day
    pub timestamp: DateTime<FixedOffset>,
    /// Weight in pounds, 1 decimal
    pub weight_lbs: f64,
    /// Unit the export carried before normalization
    pub original_unit: String,
    /// Recording device or app name
    pub source: String,
}

/// Aggregated sleep for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySleepSummary {
    /// Calendar day, source-local
    pub date: NaiveDate,
    /// Sum of qualifying interval hours
    pub total_hours: f64,
    /// Derived estimate: step function of total hours, 1-10
    pub estimated_quality: u8,
    /// Derived estimate: fixed 20% of total hours
    pub estimated_deep_sleep_hours: f64,
    /// Devices and apps that contributed intervals
    pub contributing_sources: BTreeSet<String>,
}

/// Aggregated heart-rate statistics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHeartRateSummary {
    /// Calendar day, source-local
    pub date: NaiveDate,
    /// Estimated resting rate: mean of the lowest decile of samples
    pub resting_hr: i32,
    /// Mean of all samples, rounded
    pub average_hr: i32,
    /// Lowest sample
    pub min_hr: i32,
    /// Highest sample
    pub max_hr: i32,
    /// Number of samples that day
    pub sample_count: usize,
    /// Devices and apps that contributed samples
    pub contributing_sources: BTreeSet<String>,
}

/// Aggregated steps for one calendar day.
///
/// Interval values are summed across sources without deduplication, so a
/// phone and a watch both counting the same walk double-count it. Documented
/// behavior, carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStepSummary {
    /// Calendar day, source-local
    pub date: NaiveDate,
    /// Sum of all interval values
    pub total_steps: i64,
    /// Devices and apps that contributed intervals
    pub contributing_sources: BTreeSet<String>,
}

/// One workout session, kept individual rather than aggregated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Calendar day of the session start, source-local
    pub date: NaiveDate,
    /// Session start
    pub start_time: DateTime<FixedOffset>,
    /// Session end
    pub end_time: DateTime<FixedOffset>,
    /// Humanized activity type, e.g. "Running"
    pub activity_type: String,
    /// Session length in minutes, 1 decimal
    pub duration_minutes: f64,
    /// Active energy burned in kilocalories
    pub calories_burned: f64,
    /// Recording device or app name
    pub source: String,
}

/// The surviving body-mass reading for one calendar day.
///
/// When a day has several readings only the chronologically last one is
/// kept, selected by full timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeightSummary {
    /// Calendar day, source-local
    pub date: NaiveDate,
    /// Weight in pounds, 1 decimal
    pub weight_lbs: f64,
    /// Unit the export carried before normalization
    pub original_unit: String,
    /// Recording device or app name
    pub source: String,
}
