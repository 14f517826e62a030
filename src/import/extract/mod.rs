// ABOUTME: Domain extractors for the Apple Health record stream
// ABOUTME: Shared best-effort parsing helpers and the extraction result shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Domain extraction
//!
//! One extractor per health-data domain. Each scans the generic record
//! stream (or the workout stream), keeps elements matching its type
//! discriminator, and parses them into raw records. Extraction is
//! best-effort: a single element with a missing or unparseable attribute is
//! skipped and counted, never fatal to the import.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

pub mod heart_rate;
pub mod sleep;
pub mod steps;
pub mod weight;
pub mod workouts;

/// Result of one extractor pass: parsed items plus the skip count
#[derive(Debug)]
pub struct Extraction<T> {
    /// Successfully parsed raw records
    pub items: Vec<T>,
    /// Elements dropped for missing or unparseable attributes
    pub skipped: u32,
}

impl<T> Extraction<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }

    pub(crate) fn skip(&mut self, domain: &str, reason: &str) {
        self.skipped += 1;
        debug!(domain = %domain, reason = %reason, "skipping malformed export element");
    }
}

/// Parse an export timestamp, e.g. `2024-01-05 22:30:00 -0800`.
///
/// The embedded offset is the source device's local zone at recording time;
/// calendar-day bucketing uses the date in that offset, fixed here at parse
/// time.
#[must_use]
pub fn parse_export_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z").ok()
}
