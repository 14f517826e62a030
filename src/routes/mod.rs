// ABOUTME: HTTP route assembly for the SuperFit server
// ABOUTME: Import and health endpoints composed into one axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! HTTP routes
//!
//! Authentication is handled by upstream middleware outside this crate; it
//! injects the authenticated user as a typed request extension, which
//! handlers require explicitly. No handler reads ambient auth state.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::resources::ServerResources;

pub mod health;
pub mod import;

/// Authenticated user identity injected by the upstream auth middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthedUser(pub Uuid);

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes(Arc::clone(&resources)))
        .merge(import::ImportRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
