// ABOUTME: Storage abstraction for per-day biomarker entries
// ABOUTME: Provider trait with upsert-by-(user, date) merge semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Biomarker storage abstraction
//!
//! All storage backends implement [`BiomarkerStore`] so the import pipeline
//! and routes stay backend-agnostic. The one write operation is an upsert:
//! create the `(user, date)` entry if absent, otherwise merge the patch into
//! it at sub-document granularity, leaving sibling sub-documents untouched.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use superfit_core::models::{BiomarkerDayEntry, BiomarkerPatch};
use uuid::Uuid;

pub mod sqlite;

pub use sqlite::SqliteBiomarkerStore;

/// Core biomarker storage trait
#[async_trait]
pub trait BiomarkerStore: Send + Sync {
    /// Run migrations to set up the schema
    async fn migrate(&self) -> Result<()>;

    /// Fetch the entry for `(user, date)`, if any
    async fn get_day_entry(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<BiomarkerDayEntry>>;

    /// Create-or-merge the entry for `(user, date)`.
    ///
    /// Sub-documents present in `patch` replace the stored ones; everything
    /// else on the entry is preserved.
    async fn upsert_day_entry(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        patch: &BiomarkerPatch,
    ) -> Result<()>;
}
