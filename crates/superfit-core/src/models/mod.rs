// ABOUTME: Shared data models for the SuperFit health backend
// ABOUTME: Biomarker day entries and the daily summaries produced by health imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Shared data models
//!
//! The persisted per-day biomarker entry and the transient raw records and
//! daily summaries that flow through the Apple Health import pipeline.

pub mod biomarker;
pub mod summary;

pub use biomarker::{
    BiomarkerDayEntry, BiomarkerPatch, BloodworkMetrics, MoodMetrics, RecoveryMetrics,
    SleepMetrics, StrengthMetrics, VitalsMetrics,
};
pub use summary::{
    DailyHeartRateSummary, DailySleepSummary, DailyStepSummary, DailyWeightSummary,
    HeartRateSample, SleepInterval, StepSample, WeightReading, WorkoutRecord,
};
