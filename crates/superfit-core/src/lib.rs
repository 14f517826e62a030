// ABOUTME: Core types for the SuperFit health backend
// ABOUTME: Foundation crate with error handling and shared biomarker/summary models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! # SuperFit Core
//!
//! Foundation crate shared by the SuperFit server: the unified error type
//! with HTTP response mapping, the persisted per-day biomarker entry model,
//! and the daily summary types produced by the Apple Health import pipeline.

pub mod errors;
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
