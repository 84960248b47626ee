// ABOUTME: Lifestyle prediction route handler
// ABOUTME: Runs the scorer over inline or stored profile and habit data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Lifestyle prediction route.
//!
//! `POST /api/predict` runs the scorer. The request body may carry an
//! inline profile, habit list, and/or weight override; omitted parts fall
//! back to the stored dashboard data and the active uploaded override. An
//! empty body scores the stored dashboard as-is.

use crate::state::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use lifsy_core::errors::AppError;
use lifsy_core::models::{Habit, Profile};
use lifsy_intelligence::{LifestyleScorer, WeightSet};
use serde::Deserialize;
use std::sync::Arc;

/// Optional inline inputs for a prediction
#[derive(Deserialize, Default)]
pub struct PredictRequest {
    /// Profile to score instead of the stored one
    #[serde(default)]
    profile: Option<Profile>,
    /// Habits to score instead of the stored ones
    #[serde(default)]
    habits: Option<Vec<Habit>>,
    /// One-off weight override for this prediction
    #[serde(default)]
    weights: Option<WeightSet>,
}

/// Prediction routes
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create the prediction routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/predict", post(Self::handle_predict))
            .with_state(resources)
    }

    /// Handle a prediction request
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        request: Option<Json<PredictRequest>>,
    ) -> Result<Response, AppError> {
        let Json(request) = request.unwrap_or_default();
        let dashboard = resources.dashboard().await;

        let profile = request.profile.unwrap_or(dashboard.profile);
        let habits = request.habits.unwrap_or(dashboard.habits);
        let weights = match request.weights {
            Some(inline) => Some(inline),
            None => resources.weight_override().await,
        };

        let result = LifestyleScorer::predict(&profile, &habits, weights.as_ref());
        Ok((StatusCode::OK, Json(result)).into_response())
    }
}
