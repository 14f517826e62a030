// ABOUTME: Main library entry point for the SuperFit health backend
// ABOUTME: Apple Health export ingestion, biomarker persistence, and REST surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! # SuperFit Server
//!
//! Backend for the SuperFit fitness tracker. The core subsystem is the Apple
//! Health export ingestion pipeline: it opens the uploaded zip archive, scans
//! the bundled `export.xml` record stream, extracts and aggregates sleep,
//! heart-rate, step, workout, and body-weight data into daily summaries, and
//! reconciles those summaries into the per-day biomarker store with
//! non-destructive field-level merges.

pub mod config;
pub mod database;
pub mod import;
pub mod logging;
pub mod resources;
pub mod routes;

pub use superfit_core::{errors, models};
