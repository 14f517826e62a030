// ABOUTME: Step-count extractor and daily aggregator
// ABOUTME: Sums interval step values per calendar day across all sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Step extraction and aggregation
//!
//! Interval values are summed per day. Multiple sources covering the same
//! walk (phone and watch) are summed, not deduplicated; the double-count
//! risk is documented, carried behavior.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use superfit_core::models::{DailyStepSummary, StepSample};

use super::Extraction;
use crate::import::scanner::HealthExport;

/// Type discriminator for step-count records
pub const STEP_COUNT_TYPE: &str = "HKQuantityTypeIdentifierStepCount";

/// Extract raw step-count interval samples from the export
#[must_use]
pub fn extract_steps(doc: &HealthExport) -> Extraction<StepSample> {
    let mut out = Extraction::new();

    for element in doc.records_of_type(STEP_COUNT_TYPE) {
        let Some(timestamp) = element
            .attr("startDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("steps", "missing or unparseable startDate");
            continue;
        };
        let Some(steps) = element.attr("value").and_then(parse_step_value) else {
            out.skip("steps", "missing or non-numeric value");
            continue;
        };

        out.items.push(StepSample {
            date: timestamp.date_naive(),
            steps,
            source: element.attr("sourceName").unwrap_or_default().to_owned(),
        });
    }

    out
}

/// Step values are integers, but some exporters write them as decimals
fn parse_step_value(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|v| v.trunc() as i64))
}

/// Reduce raw interval samples into one total per calendar day
#[must_use]
pub fn aggregate_steps_by_day(samples: &[StepSample]) -> Vec<DailyStepSummary> {
    let mut days: BTreeMap<NaiveDate, DailyStepSummary> = BTreeMap::new();

    for sample in samples {
        let day = days.entry(sample.date).or_insert_with(|| DailyStepSummary {
            date: sample.date,
            total_steps: 0,
            contributing_sources: std::collections::BTreeSet::new(),
        });
        day.total_steps += sample.steps;
        day.contributing_sources.insert(sample.source.clone());
    }

    days.into_values().collect()
}
