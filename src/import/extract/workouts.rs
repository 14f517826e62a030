// ABOUTME: Workout session extractor
// ABOUTME: Parses Workout elements and humanizes vendor activity identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Workout extraction
//!
//! Workout sessions arrive as dedicated `<Workout>` elements rather than
//! generic records, and are kept as individual sessions instead of being
//! aggregated per day. Activity identifiers carry the fixed vendor prefix
//! `HKWorkoutActivityType` followed by a camel-case name, rendered as a
//! capitalized phrase for display.

use superfit_core::models::WorkoutRecord;

use super::Extraction;
use crate::import::scanner::HealthExport;
use crate::import::units::round_to_1;

/// Vendor prefix on every workout activity identifier
const ACTIVITY_TYPE_PREFIX: &str = "HKWorkoutActivityType";

/// Extract workout sessions from the export
#[must_use]
pub fn extract_workouts(doc: &HealthExport) -> Extraction<WorkoutRecord> {
    let mut out = Extraction::new();

    for element in &doc.workouts {
        let Some(start) = element
            .attr("startDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("workouts", "missing or unparseable startDate");
            continue;
        };
        let Some(end) = element
            .attr("endDate")
            .and_then(super::parse_export_timestamp)
        else {
            out.skip("workouts", "missing or unparseable endDate");
            continue;
        };
        let Some(activity) = element.attr("workoutActivityType") else {
            out.skip("workouts", "missing workoutActivityType");
            continue;
        };

        // Absent duration or energy means an untracked field, not a bad session
        let duration_seconds = element
            .attr("duration")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);
        let calories_burned = element
            .attr("totalEnergyBurned")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);

        out.items.push(WorkoutRecord {
            date: start.date_naive(),
            start_time: start,
            end_time: end,
            activity_type: humanize_activity_type(activity),
            duration_minutes: round_to_1(duration_seconds / 60.0),
            calories_burned,
            source: element.attr("sourceName").unwrap_or_default().to_owned(),
        });
    }

    out
}

/// Turn `HKWorkoutActivityTypeTraditionalStrengthTraining` into
/// `"Traditional Strength Training"`
#[must_use]
pub fn humanize_activity_type(raw: &str) -> String {
    let stripped = raw.strip_prefix(ACTIVITY_TYPE_PREFIX).unwrap_or(raw);

    let mut phrase = String::with_capacity(stripped.len() + 4);
    for (i, ch) in stripped.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            phrase.push(' ');
        }
        if i == 0 {
            phrase.extend(ch.to_uppercase());
        } else {
            phrase.push(ch);
        }
    }

    phrase
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::import::scanner::HealthExport;

    #[test]
    fn test_humanizes_vendor_identifiers() {
        assert_eq!(humanize_activity_type("HKWorkoutActivityTypeRunning"), "Running");
        assert_eq!(
            humanize_activity_type("HKWorkoutActivityTypeTraditionalStrengthTraining"),
            "Traditional Strength Training"
        );
        assert_eq!(
            humanize_activity_type("HKWorkoutActivityTypeHighIntensityIntervalTraining"),
            "High Intensity Interval Training"
        );
    }

    #[test]
    fn test_unprefixed_identifiers_still_capitalize() {
        assert_eq!(humanize_activity_type("yoga"), "Yoga");
    }

    #[test]
    fn test_extracts_session_with_minute_duration() {
        let xml = r#"<HealthData>
            <Workout workoutActivityType="HKWorkoutActivityTypeRunning" duration="1830"
                     totalEnergyBurned="250" sourceName="Watch"
                     startDate="2024-01-05 17:00:00 -0800" endDate="2024-01-05 17:30:30 -0800"/>
        </HealthData>"#;
        let doc = HealthExport::parse(xml.as_bytes()).unwrap();

        let extraction = extract_workouts(&doc);
        assert_eq!(extraction.items.len(), 1);
        let workout = &extraction.items[0];
        assert_eq!(workout.activity_type, "Running");
        assert!((workout.duration_minutes - 30.5).abs() < f64::EPSILON);
        assert!((workout.calories_burned - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_session_without_activity_type_is_skipped() {
        let xml = r#"<HealthData>
            <Workout duration="600" sourceName="Watch"
                     startDate="2024-01-05 17:00:00 -0800" endDate="2024-01-05 17:10:00 -0800"/>
        </HealthData>"#;
        let doc = HealthExport::parse(xml.as_bytes()).unwrap();

        let extraction = extract_workouts(&doc);
        assert!(extraction.items.is_empty());
        assert_eq!(extraction.skipped, 1);
    }
}
