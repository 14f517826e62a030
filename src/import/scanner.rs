// ABOUTME: XML record scanner for the Apple Health export document
// ABOUTME: Collects Record and Workout elements with attribute lookup by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! XML record scanning
//!
//! The export multiplexes every sample type into a flat stream of `<Record>`
//! elements discriminated by their `type` attribute, with workout sessions
//! as separate `<Workout>` elements. The scanner does a single streaming
//! pass and keeps only those two element kinds, exposing attribute lookup to
//! the extractors. No schema validation beyond well-formedness.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use superfit_core::errors::AppError;

/// Tag carrying generic per-sample records
pub const RECORD_TAG: &[u8] = b"Record";
/// Tag carrying workout sessions
pub const WORKOUT_TAG: &[u8] = b"Workout";

/// One scanned XML element with its attributes
#[derive(Debug, Clone)]
pub struct XmlElement {
    attrs: HashMap<String, String>,
}

impl XmlElement {
    /// Look up an attribute value by name
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, AppError> {
        let mut attrs = HashMap::new();
        for attr in start.attributes().with_checks(false) {
            let attr = attr
                .map_err(|e| AppError::invalid_archive(format!("malformed attribute: {e}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| AppError::invalid_archive(format!("malformed attribute: {e}")))?
                .into_owned();
            attrs.insert(key, value);
        }
        Ok(Self { attrs })
    }
}

/// Parsed export document: the two element streams the pipeline consumes
#[derive(Debug, Default)]
pub struct HealthExport {
    /// Generic `<Record>` samples, all types mixed
    pub records: Vec<XmlElement>,
    /// `<Workout>` session elements
    pub workouts: Vec<XmlElement>,
}

impl HealthExport {
    /// Parse the decompressed export XML.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `InvalidArchive` if the XML is not
    /// well-formed.
    pub fn parse(xml: &[u8]) -> Result<Self, AppError> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut export = Self::default();

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e) | Event::Start(ref e)) => {
                    match e.name().as_ref() {
                        RECORD_TAG => export.records.push(XmlElement::from_start(e)?),
                        WORKOUT_TAG => export.workouts.push(XmlElement::from_start(e)?),
                        // HealthData, Me, ExportDate, nested metadata: not consumed
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(AppError::invalid_archive(format!(
                        "malformed export XML at byte {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
        }

        Ok(export)
    }

    /// Iterate generic records whose `type` discriminator matches
    pub fn records_of_type<'a>(
        &'a self,
        type_identifier: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> {
        self.records
            .iter()
            .filter(move |e| e.attr("type") == Some(type_identifier))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<HealthData locale="en_US">
  <ExportDate value="2024-02-01 09:00:00 -0800"/>
  <Record type="HKQuantityTypeIdentifierHeartRate" sourceName="Watch"
          startDate="2024-01-05 08:00:00 -0800" endDate="2024-01-05 08:00:00 -0800"
          value="62" unit="count/min"/>
  <Record type="HKQuantityTypeIdentifierStepCount" sourceName="iPhone"
          startDate="2024-01-05 09:00:00 -0800" endDate="2024-01-05 09:10:00 -0800"
          value="512" unit="count">
    <MetadataEntry key="HKMetadataKeySyncVersion" value="1"/>
  </Record>
  <Workout workoutActivityType="HKWorkoutActivityTypeRunning" duration="1800"
           totalEnergyBurned="250" sourceName="Watch"
           startDate="2024-01-05 17:00:00 -0800" endDate="2024-01-05 17:30:00 -0800"/>
</HealthData>"#;

    #[test]
    fn test_collects_records_and_workouts() {
        let export = HealthExport::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(export.records.len(), 2);
        assert_eq!(export.workouts.len(), 1);
    }

    #[test]
    fn test_filters_by_type_discriminator() {
        let export = HealthExport::parse(SAMPLE.as_bytes()).unwrap();
        let steps: Vec<_> = export
            .records_of_type("HKQuantityTypeIdentifierStepCount")
            .collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].attr("value"), Some("512"));
        assert_eq!(steps[0].attr("sourceName"), Some("iPhone"));
    }

    #[test]
    fn test_malformed_xml_is_invalid_archive() {
        let err = HealthExport::parse(b"<HealthData><Record type=").unwrap_err();
        assert_eq!(err.http_status(), 400);
    }
}
