// ABOUTME: Sleep extractor and daily aggregator
// ABOUTME: Keeps "asleep" intervals, sums hours per day, derives quality estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Sleep extraction and aggregation
//!
//! Sleep analysis records carry their state in the `value` attribute; only
//! "asleep" intervals count toward daily totals, "in bed" intervals are
//! discarded. The generic export has no sleep-stage detail, so deep sleep
//! and quality are derived estimates: deep sleep is a fixed 20% of total
//! hours, quality a step function of duration.

use std::collections::BTreeMap;

use superfit_core::models::{DailySleepSummary, SleepInterval};

use super::Extraction;
use crate::import::scanner::HealthExport;
use crate::import::units::{round_to_1, round_to_2};

/// Type discriminator for sleep analysis records
pub const SLEEP_TYPE: &str = "HKCategoryTypeIdentifierSleepAnalysis";
/// Value marking an interval actually asleep (vs. merely in bed)
const ASLEEP_VALUE: &str = "HKCategoryValueSleepAnalysisAsleep";

/// Extract qualifying sleep intervals from the export
#[must_use]
pub fn extract_sleep(doc: &HealthExport) -> Extraction<SleepInterval> {
    let mut out = Extraction::new();

    for element in doc.records_of_type(SLEEP_TYPE) {
        if element.attr("value") != Some(ASLEEP_VALUE) {
            continue;
        }

        let Some(start) = element
            .attr("startDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("sleep", "missing or unparseable startDate");
            continue;
        };
        let Some(end) = element
            .attr("endDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("sleep", "missing or unparseable endDate");
            continue;
        };

        let hours = (end - start).num_seconds() as f64 / 3600.0;
        if hours < 0.0 {
            out.skip("sleep", "interval ends before it starts");
            continue;
        }

        out.items.push(SleepInterval {
            date: start.date_naive(),
            start,
            end,
            hours: round_to_2(hours),
            source: element.attr("sourceName").unwrap_or_default().to_owned(),
        });
    }

    out
}

/// Reduce raw intervals into one summary per calendar day
#[must_use]
pub fn aggregate_sleep_by_day(intervals: &[SleepInterval]) -> Vec<DailySleepSummary> {
    let mut days: BTreeMap<chrono::NaiveDate, DailySleepSummary> = BTreeMap::new();

    for interval in intervals {
        let day = days
            .entry(interval.date)
            .or_insert_with(|| DailySleepSummary {
                date: interval.date,
                total_hours: 0.0,
                estimated_quality: 0,
                estimated_deep_sleep_hours: 0.0,
                contributing_sources: std::collections::BTreeSet::new(),
            });
        day.total_hours += interval.hours;
        day.contributing_sources.insert(interval.source.clone());
    }

    days.into_values()
        .map(|mut day| {
            day.estimated_quality = estimate_quality(day.total_hours);
            day.estimated_deep_sleep_hours = round_to_1(day.total_hours * 0.2);
            day
        })
        .collect()
}

/// Duration-only quality estimate on a 1-10 scale
const fn estimate_quality(total_hours: f64) -> u8 {
    if total_hours >= 7.0 {
        8
    } else if total_hours >= 6.0 {
        6
    } else if total_hours >= 5.0 {
        4
    } else {
        2
    }
}
