// ABOUTME: Heart-rate extractor and daily aggregator
// ABOUTME: Collects BPM samples and derives resting/average/min/max per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Heart-rate extraction and aggregation
//!
//! Resting heart rate is not a directly measured value in the export; it is
//! estimated as the mean of the lowest 10% of a day's samples (never fewer
//! than one), which biases toward readings taken at rest.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use superfit_core::models::{DailyHeartRateSummary, HeartRateSample};

use super::Extraction;
use crate::import::scanner::HealthExport;

/// Type discriminator for heart-rate records
pub const HEART_RATE_TYPE: &str = "HKQuantityTypeIdentifierHeartRate";

/// Extract raw BPM samples from the export
#[must_use]
pub fn extract_heart_rate(doc: &HealthExport) -> Extraction<HeartRateSample> {
    let mut out = Extraction::new();

    for element in doc.records_of_type(HEART_RATE_TYPE) {
        let Some(timestamp) = element
            .attr("startDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("heart_rate", "missing or unparseable startDate");
            continue;
        };
        let Some(bpm) = element.attr("value").and_then(|v| v.parse::<f64>().ok()) else {
            out.skip("heart_rate", "missing or non-numeric value");
            continue;
        };

        out.items.push(HeartRateSample {
            date: timestamp.date_naive(),
            timestamp,
            bpm,
            source: element.attr("sourceName").unwrap_or_default().to_owned(),
        });
    }

    out
}

/// Reduce raw samples into one statistics summary per calendar day
#[must_use]
pub fn aggregate_heart_rate_by_day(samples: &[HeartRateSample]) -> Vec<DailyHeartRateSummary> {
    let mut days: BTreeMap<NaiveDate, (Vec<f64>, BTreeSet<String>)> = BTreeMap::new();

    for sample in samples {
        let (values, sources) = days.entry(sample.date).or_default();
        values.push(sample.bpm);
        sources.insert(sample.source.clone());
    }

    days.into_iter()
        .map(|(date, (mut values, sources))| {
            values.sort_by(f64::total_cmp);

            let count = values.len();
            let sum: f64 = values.iter().sum();

            // Lowest decile, rounded up so at least one sample always counts
            let resting_count = ((count as f64 * 0.1).ceil() as usize).max(1);
            let resting_sum: f64 = values[..resting_count].iter().sum();

            DailyHeartRateSummary {
                date,
                resting_hr: (resting_sum / resting_count as f64).round() as i32,
                average_hr: (sum / count as f64).round() as i32,
                min_hr: values[0].round() as i32,
                max_hr: values[count - 1].round() as i32,
                sample_count: count,
                contributing_sources: sources,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn sample(date: NaiveDate, bpm: f64) -> HeartRateSample {
        let timestamp: DateTime<FixedOffset> =
            DateTime::parse_from_str("2024-01-05 08:00:00 -0800", "%Y-%m-%d %H:%M:%S %z").unwrap();
        HeartRateSample {
            date,
            timestamp,
            bpm,
            source: "Watch".to_owned(),
        }
    }

    #[test]
    fn test_ten_sample_day_matches_expected_statistics() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let samples: Vec<_> = [50.0, 52.0, 55.0, 58.0, 60.0, 62.0, 65.0, 68.0, 70.0, 72.0]
            .into_iter()
            .map(|bpm| sample(date, bpm))
            .collect();

        let days = aggregate_heart_rate_by_day(&samples);
        assert_eq!(days.len(), 1);
        let day = &days[0];

        // Lowest 10% of 10 samples is exactly one sample
        assert_eq!(day.resting_hr, 50);
        assert_eq!(day.average_hr, 61);
        assert_eq!(day.min_hr, 50);
        assert_eq!(day.max_hr, 72);
        assert_eq!(day.sample_count, 10);
    }

    #[test]
    fn test_resting_hr_bounds_hold() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let samples: Vec<_> = (0..37)
            .map(|i| sample(date, 48.0 + f64::from(i) * 1.7))
            .collect();

        let day = &aggregate_heart_rate_by_day(&samples)[0];
        assert!(day.min_hr <= day.resting_hr);
        assert!(day.resting_hr <= day.average_hr);
        assert!(day.average_hr <= day.max_hr);
    }

    #[test]
    fn test_single_sample_day_never_takes_zero_samples() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let day = &aggregate_heart_rate_by_day(&[sample(date, 55.0)])[0];
        assert_eq!(day.resting_hr, 55);
        assert_eq!(day.sample_count, 1);
    }
}
