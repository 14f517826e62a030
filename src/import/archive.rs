// ABOUTME: Apple Health export archive loader
// ABOUTME: Opens the uploaded zip and extracts the bundled export.xml member
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Archive loading
//!
//! Apple Health exports are zip archives with a fixed internal layout. The
//! only member this pipeline reads is `apple_health_export/export.xml`.

use std::io::{Cursor, Read};
use superfit_core::errors::AppError;
use zip::ZipArchive;

/// Fixed path of the XML member inside every Apple Health export
pub const EXPORT_XML_PATH: &str = "apple_health_export/export.xml";

/// Decompress the archive and return the raw bytes of `export.xml`.
///
/// Pure transform: no persistence, no partial reads of other members.
///
/// # Errors
///
/// Returns [`AppError`] with `InvalidArchive` if the bytes are not a
/// readable zip archive or the expected member is absent.
pub fn extract_export_xml(archive_bytes: &[u8]) -> Result<Vec<u8>, AppError> {
    let cursor = Cursor::new(archive_bytes);
    let mut archive = ZipArchive::new(cursor)
        .map_err(|e| AppError::invalid_archive(format!("not a readable zip archive: {e}")))?;

    let mut member = archive.by_name(EXPORT_XML_PATH).map_err(|e| {
        AppError::invalid_archive(format!("missing {EXPORT_XML_PATH} member: {e}"))
    })?;

    let mut xml = Vec::with_capacity(member.size() as usize);
    member
        .read_to_end(&mut xml)
        .map_err(|e| AppError::invalid_archive(format!("failed to decompress export: {e}")))?;

    Ok(xml)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(path: &str, body: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = ZipWriter::new(&mut cursor);
            writer.start_file(path, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_extracts_export_member() {
        let bytes = archive_with(EXPORT_XML_PATH, "<HealthData/>");
        let xml = extract_export_xml(&bytes).unwrap();
        assert_eq!(xml, b"<HealthData/>");
    }

    #[test]
    fn test_rejects_non_zip_bytes() {
        let err = extract_export_xml(b"definitely not a zip").unwrap_err();
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_rejects_archive_without_export_member() {
        let bytes = archive_with("somewhere/else.xml", "<HealthData/>");
        let err = extract_export_xml(&bytes).unwrap_err();
        assert!(err.to_string().contains("export.xml"));
    }
}
