// ABOUTME: Environment-based server configuration
// ABOUTME: HTTP port, database URL, and upload limits loaded from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Server configuration
//!
//! Environment-only configuration: every knob is an environment variable
//! with a development-friendly default.

use anyhow::{Context, Result};
use std::env;

/// Default maximum accepted upload size. Real-world Apple Health exports run
/// to hundreds of megabytes of XML but compress well; the zip itself is
/// typically well under this cap.
const DEFAULT_MAX_UPLOAD_MB: usize = 256;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection URL
    pub database_url: String,
    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparseable
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {raw}"))?,
            Err(_) => 8081,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/superfit.db".into());

        let max_upload_mb = match env::var("MAX_UPLOAD_MB") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("invalid MAX_UPLOAD_MB value: {raw}"))?,
            Err(_) => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Self {
            http_port,
            database_url,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} max_upload={}MB",
            self.http_port,
            self.database_url,
            self.max_upload_bytes / (1024 * 1024)
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8081,
            database_url: "sqlite::memory:".into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}
