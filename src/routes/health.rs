// ABOUTME: Liveness and readiness route handlers for service monitoring
// ABOUTME: Readiness probes the biomarker store before reporting ready
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! Health check routes
//!
//! `/health` is pure liveness. `/ready` issues a cheap read against the
//! biomarker store so load balancers stop routing to an instance whose
//! database is unreachable or not yet migrated.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Readiness gated on a biomarker store round trip.
    ///
    /// The probe reads a key no import ever writes; an `Ok(None)` proves the
    /// connection and schema are usable.
    async fn ready_handler(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.store.get_day_entry(Uuid::nil(), NaiveDate::MIN).await {
            Ok(_) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(e) => {
                warn!(error = %e, "readiness probe failed against biomarker store");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({
                        "status": "unavailable",
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })),
                )
                    .into_response()
            }
        }
    }
}
