// ABOUTME: Body-mass extractor and daily aggregator
// ABOUTME: Normalizes readings to pounds and keeps the latest reading per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Body-mass extraction and aggregation
//!
//! Readings are normalized to pounds at extraction time. A day with several
//! readings keeps only the chronologically last one, selected by full
//! timestamp rather than by value.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use superfit_core::models::{DailyWeightSummary, WeightReading};

use super::Extraction;
use crate::import::scanner::HealthExport;
use crate::import::units::normalize_weight;

/// Type discriminator for body-mass records
pub const BODY_MASS_TYPE: &str = "HKQuantityTypeIdentifierBodyMass";

/// Extract raw body-mass readings, already converted to pounds
#[must_use]
pub fn extract_weight(doc: &HealthExport) -> Extraction<WeightReading> {
    let mut out = Extraction::new();

    for element in doc.records_of_type(BODY_MASS_TYPE) {
        let Some(timestamp) = element
            .attr("startDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("weight", "missing or unparseable startDate");
            continue;
        };
        let Some(value) = element.attr("value").and_then(|v| v.parse::<f64>().ok()) else {
            out.skip("weight", "missing or non-numeric value");
            continue;
        };

        let unit = element.attr("unit").unwrap_or("lb");

        out.items.push(WeightReading {
            date: timestamp.date_naive(),
            timestamp,
            weight_lbs: normalize_weight(value, unit),
            original_unit: unit.to_owned(),
            source: element.attr("sourceName").unwrap_or_default().to_owned(),
        });
    }

    out
}

/// Keep only the latest-timestamped reading per calendar day
#[must_use]
pub fn aggregate_weight_by_day(readings: &[WeightReading]) -> Vec<DailyWeightSummary> {
    let mut days: BTreeMap<NaiveDate, &WeightReading> = BTreeMap::new();

    for reading in readings {
        days.entry(reading.date)
            .and_modify(|kept| {
                if reading.timestamp > kept.timestamp {
                    *kept = reading;
                }
            })
            .or_insert(reading);
    }

    days.into_values()
        .map(|reading| DailyWeightSummary {
            date: reading.date,
            weight_lbs: reading.weight_lbs,
            original_unit: reading.original_unit.clone(),
            source: reading.source.clone(),
        })
        .collect()
}
