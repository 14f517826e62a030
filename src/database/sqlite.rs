// ABOUTME: SQLite implementation of the biomarker store
// ABOUTME: Sub-documents persisted as JSON columns keyed by (user, date)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! SQLite biomarker store
//!
//! Each `(user, date)` row holds one JSON column per sub-document. Upserts
//! are read-merge-write: the stored entry is deserialized, the patch applied
//! at sub-document granularity, and the merged entry written back.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use superfit_core::models::{BiomarkerDayEntry, BiomarkerPatch};
use uuid::Uuid;

use super::BiomarkerStore;

/// SQLite-backed biomarker store
#[derive(Clone)]
pub struct SqliteBiomarkerStore {
    pool: SqlitePool,
}

impl SqliteBiomarkerStore {
    /// Connect to the database at `database_url`, creating the file if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the connection fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database URL: {database_url}"))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("failed to connect to SQLite database")?;

        Ok(Self { pool })
    }

    /// Create an in-memory store for tests.
    ///
    /// Limited to a single connection: every `:memory:` connection is its
    /// own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("failed to open in-memory SQLite database")?;

        Ok(Self { pool })
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_entry(row: &sqlx::sqlite::SqliteRow) -> Result<BiomarkerDayEntry> {
        let user_id: String = row.try_get("user_id")?;
        let date: String = row.try_get("date")?;
        let updated_at: String = row.try_get("updated_at")?;

        let mut entry = BiomarkerDayEntry::new(
            Uuid::parse_str(&user_id).context("malformed user_id in biomarker row")?,
            NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .context("malformed date in biomarker row")?,
        );
        entry.updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .context("malformed updated_at in biomarker row")?
            .with_timezone(&Utc);

        entry.sleep = Self::column_json(row, "sleep")?;
        entry.mood = Self::column_json(row, "mood")?;
        entry.vitals = Self::column_json(row, "vitals")?;
        entry.strength = Self::column_json(row, "strength")?;
        entry.bloodwork = Self::column_json(row, "bloodwork")?;
        entry.recovery = Self::column_json(row, "recovery")?;

        Ok(entry)
    }

    fn column_json<T: serde::de::DeserializeOwned>(
        row: &sqlx::sqlite::SqliteRow,
        column: &str,
    ) -> Result<Option<T>> {
        let raw: Option<String> = row.try_get(column)?;
        raw.map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| anyhow!("malformed {column} sub-document: {e}"))
        })
        .transpose()
    }

    fn to_json<T: serde::Serialize>(value: Option<&T>) -> Result<Option<String>> {
        value
            .map(|v| serde_json::to_string(v).context("failed to serialize sub-document"))
            .transpose()
    }

    async fn write_entry(&self, entry: &BiomarkerDayEntry) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO biomarker_entries
                (user_id, date, sleep, mood, vitals, strength, bloodwork, recovery, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT (user_id, date) DO UPDATE SET
                sleep = excluded.sleep,
                mood = excluded.mood,
                vitals = excluded.vitals,
                strength = excluded.strength,
                bloodwork = excluded.bloodwork,
                recovery = excluded.recovery,
                updated_at = excluded.updated_at
            ",
        )
        .bind(entry.user_id.to_string())
        .bind(entry.date.format("%Y-%m-%d").to_string())
        .bind(Self::to_json(entry.sleep.as_ref())?)
        .bind(Self::to_json(entry.mood.as_ref())?)
        .bind(Self::to_json(entry.vitals.as_ref())?)
        .bind(Self::to_json(entry.strength.as_ref())?)
        .bind(Self::to_json(entry.bloodwork.as_ref())?)
        .bind(Self::to_json(entry.recovery.as_ref())?)
        .bind(entry.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("failed to write biomarker entry")?;

        Ok(())
    }
}

#[async_trait]
impl BiomarkerStore for SqliteBiomarkerStore {
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS biomarker_entries (
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                sleep TEXT,
                mood TEXT,
                vitals TEXT,
                strength TEXT,
                bloodwork TEXT,
                recovery TEXT,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (user_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("failed to create biomarker_entries table")?;

        Ok(())
    }

    async fn get_day_entry(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<BiomarkerDayEntry>> {
        let row = sqlx::query(
            "SELECT user_id, date, sleep, mood, vitals, strength, bloodwork, recovery, updated_at
             FROM biomarker_entries WHERE user_id = ?1 AND date = ?2",
        )
        .bind(user_id.to_string())
        .bind(date.format("%Y-%m-%d").to_string())
        .fetch_optional(&self.pool)
        .await
        .context("failed to read biomarker entry")?;

        row.as_ref().map(Self::row_to_entry).transpose()
    }

    async fn upsert_day_entry(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        patch: &BiomarkerPatch,
    ) -> Result<()> {
        let mut entry = self
            .get_day_entry(user_id, date)
            .await?
            .unwrap_or_else(|| BiomarkerDayEntry::new(user_id, date));

        entry.apply(patch);
        self.write_entry(&entry).await
    }
}
