// ABOUTME: Apple Health import route handler
// ABOUTME: Accepts the uploaded export zip and returns per-domain import counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Apple Health import route
//!
//! `POST /api/import/apple-health` takes the raw export zip as the request
//! body, runs the ingestion pipeline, and returns the `ImportResult` with
//! per-domain counts. An invalid archive is a 400 before any extraction
//! begins; per-day write failures are reported inside the result rather
//! than failing the request.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use bytes::Bytes;

use superfit_core::errors::AppError;

use super::AuthedUser;
use crate::import::{AppleHealthImportService, CancelFlag};
use crate::resources::ServerResources;

/// Import routes implementation
pub struct ImportRoutes;

impl ImportRoutes {
    /// Create all import routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let body_limit = resources.config.max_upload_bytes;
        Router::new()
            .route("/api/import/apple-health", post(Self::handle_import))
            .layer(DefaultBodyLimit::max(body_limit))
            .with_state(resources)
    }

    /// Handle an Apple Health export upload
    async fn handle_import(
        State(resources): State<Arc<ServerResources>>,
        user: Option<Extension<AuthedUser>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let Some(Extension(AuthedUser(user_id))) = user else {
            return Err(AppError::auth_required());
        };

        if body.is_empty() {
            return Err(AppError::invalid_input("empty upload"));
        }

        let service = AppleHealthImportService::new(Arc::clone(&resources.store));
        let result = service
            .import_archive(user_id, &body, &CancelFlag::new())
            .await?;

        Ok((StatusCode::OK, Json(result)).into_response())
    }
}
