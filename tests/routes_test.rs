// ABOUTME: Integration tests for the HTTP surface
// ABOUTME: Auth extension requirement, archive validation, upload cap, readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{build_export_archive, create_test_store, health_data_document, init_test_logging};
use tower::ServiceExt;
use uuid::Uuid;

use superfit_server::config::ServerConfig;
use superfit_server::database::SqliteBiomarkerStore;
use superfit_server::resources::ServerResources;
use superfit_server::routes::{self, AuthedUser};

const IMPORT_PATH: &str = "/api/import/apple-health";

async fn test_router() -> axum::Router {
    test_router_with_config(ServerConfig::default()).await
}

async fn test_router_with_config(config: ServerConfig) -> axum::Router {
    let store = create_test_store().await;
    routes::router(Arc::new(ServerResources::new(store, config)))
}

fn import_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(IMPORT_PATH)
        .extension(AuthedUser(Uuid::new_v4()))
        .body(body.into())
        .expect("request")
}

#[tokio::test]
async fn test_import_without_auth_extension_is_unauthorized() {
    let app = test_router().await;
    let request = Request::builder()
        .method("POST")
        .uri(IMPORT_PATH)
        .body(Body::from(build_export_archive(&health_data_document(""))))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_import_rejects_non_zip_upload() {
    let app = test_router().await;
    let response = app
        .oneshot(import_request("definitely not a zip"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_rejects_empty_upload() {
    let app = test_router().await;
    let response = app
        .oneshot(import_request(Body::empty()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_accepts_valid_archive() {
    let app = test_router().await;
    let archive = build_export_archive(&health_data_document(""));

    let response = app
        .oneshot(import_request(archive))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["success"], true);
    assert!(json.get("imported").is_some());
}

#[tokio::test]
async fn test_import_enforces_upload_cap() {
    let config = ServerConfig {
        max_upload_bytes: 1024,
        ..ServerConfig::default()
    };
    let app = test_router_with_config(config).await;

    let oversized = vec![0_u8; 4096];
    let response = app
        .oneshot(import_request(oversized))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_ready_reports_ready_with_migrated_store() {
    let app = test_router().await;
    let request = Request::builder()
        .uri("/ready")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_reports_unavailable_when_store_is_unusable() {
    init_test_logging();
    // Unmigrated store: the readiness probe's read has no table to hit
    let store = SqliteBiomarkerStore::in_memory().await.expect("store");
    let app = routes::router(Arc::new(ServerResources::new(
        Arc::new(store),
        ServerConfig::default(),
    )));

    let request = Request::builder()
        .uri("/ready")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_is_always_alive() {
    let app = test_router().await;
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
