// ABOUTME: Shared test utilities for router integration tests
// ABOUTME: Builds a server over a temp state file and drives it with oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Shared test utilities for `lifsy_server` integration tests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use lifsy_server::{config::ServerConfig, routes, state::ServerResources, storage::StateStore};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router over a fresh seeded state in a temp directory
pub struct TestServer {
    pub router: Router,
    pub resources: Arc<ServerResources>,
    _dir: TempDir,
}

/// Build a test server with the seeded demo state and no weight override
pub fn setup() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        state_file: dir.path().join("state.json"),
        ..ServerConfig::default()
    };
    let store = StateStore::new(config.state_file.clone());
    let dashboard = store.load_or_seed();
    let resources = Arc::new(ServerResources::new(config, store, dashboard, None));
    TestServer {
        router: routes::router(resources.clone()),
        resources,
        _dir: dir,
    }
}

/// Send a request with an optional JSON body, returning status and body
pub async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    send(router, request).await
}

/// Send a request with a raw (possibly invalid) body
pub async fn request_raw(
    router: &Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
