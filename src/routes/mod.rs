// ABOUTME: HTTP route assembly for the Lifsy server
// ABOUTME: Per-concern routers merged behind trace and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! HTTP routes.
//!
//! Each concern owns its own router; [`router`] merges them and applies
//! the shared tower layers.

use crate::state::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Deposit challenge endpoints
pub mod challenge;

/// Habit tracking endpoints
pub mod habits;

/// Liveness and readiness endpoints
pub mod health;

/// Lifestyle prediction endpoint
pub mod predict;

/// Profile endpoints
pub mod profile;

/// Weight override endpoints
pub mod weights;

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(predict::PredictRoutes::routes(resources.clone()))
        .merge(weights::WeightRoutes::routes(resources.clone()))
        .merge(profile::ProfileRoutes::routes(resources.clone()))
        .merge(habits::HabitRoutes::routes(resources.clone()))
        .merge(challenge::ChallengeRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
