// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Archive builders, quiet logging setup, and store creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `superfit_server`

use std::io::{Cursor, Write};
use std::sync::{Arc, Once};

use superfit_server::database::{BiomarkerStore, SqliteBiomarkerStore};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory biomarker store, migrated and ready
pub async fn create_test_store() -> Arc<SqliteBiomarkerStore> {
    init_test_logging();
    let store = SqliteBiomarkerStore::in_memory()
        .await
        .expect("in-memory store");
    store.migrate().await.expect("migrate");
    Arc::new(store)
}

/// Wrap record markup in the export document envelope
pub fn health_data_document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<HealthData locale="en_US">
  <ExportDate value="2024-02-01 09:00:00 -0800"/>
{body}
</HealthData>"#
    )
}

/// Build a zip archive with `export.xml` at the vendor-fixed member path
pub fn build_export_archive(xml: &str) -> Vec<u8> {
    build_archive_with_member("apple_health_export/export.xml", xml)
}

/// Build a zip archive with an arbitrary single member
pub fn build_archive_with_member(path: &str, body: &str) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file(path, SimpleFileOptions::default())
            .expect("start zip member");
        writer.write_all(body.as_bytes()).expect("write zip member");
        writer.finish().expect("finish zip");
    }
    cursor.into_inner()
}

/// A generic `<Record>` element with the standard attribute set
pub fn record(
    record_type: &str,
    value: &str,
    unit: &str,
    source: &str,
    start: &str,
    end: &str,
) -> String {
    format!(
        r#"  <Record type="{record_type}" sourceName="{source}" unit="{unit}"
          startDate="{start}" endDate="{end}" value="{value}"/>"#
    )
}
