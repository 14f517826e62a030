// ABOUTME: Apple Health export ingestion pipeline
// ABOUTME: Archive loading, XML scanning, extraction, aggregation, reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Apple Health export ingestion
//!
//! Control flow: archive loader -> XML scanner -> per-domain extractors
//! (each with its daily aggregator) -> reconciler -> result report. The
//! pipeline is synchronous and in-memory up to reconciliation; only the
//! per-day upserts touch storage.

pub mod archive;
pub mod extract;
pub mod reconciler;
pub mod scanner;
pub mod service;
pub mod units;

pub use reconciler::{CancelFlag, ImportCounts, ImportReconciler, ImportResult};
pub use service::{AppleHealthImportService, ParsedHealthData};
