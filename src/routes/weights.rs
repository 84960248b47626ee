// ABOUTME: Weight override route handlers
// ABOUTME: Upload, inspect, and clear the user-supplied model weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Weight override routes.
//!
//! Users may upload a small JSON model to override the shipped weights.
//! The uploaded document is validated before it is accepted: it must be a
//! JSON object whose keys name known coefficients and whose values are
//! finite numbers. Invalid documents are rejected with a 400 and never
//! reach the scorer.

use crate::state::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use lifsy_core::errors::AppError;
use lifsy_intelligence::{WeightSet, Weights, WeightsError};
use serde::Serialize;
use std::sync::Arc;

/// Current override state returned by GET and PUT
#[derive(Serialize)]
struct WeightsResponse {
    /// The uploaded override, absent when the shipped model is active
    #[serde(skip_serializing_if = "Option::is_none")]
    r#override: Option<WeightSet>,
    /// Fully-resolved coefficients the scorer will use
    resolved: Weights,
}

impl WeightsResponse {
    fn new(r#override: Option<WeightSet>) -> Self {
        let resolved = r#override
            .as_ref()
            .map_or_else(Weights::default, WeightSet::resolve);
        Self { r#override, resolved }
    }
}

/// Weight override routes
pub struct WeightRoutes;

impl WeightRoutes {
    /// Create the weight override routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/weights", get(Self::handle_get))
            .route("/api/weights", put(Self::handle_upload))
            .route("/api/weights", delete(Self::handle_clear))
            .with_state(resources)
    }

    /// Report the active override and resolved coefficients
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = WeightsResponse::new(resources.weight_override().await);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Validate and store an uploaded weight document
    async fn handle_upload(
        State(resources): State<Arc<ServerResources>>,
        body: String,
    ) -> Result<Response, AppError> {
        let weights = WeightSet::parse_document(&body).map_err(weights_error)?;
        tracing::info!("weight override uploaded");
        resources.set_weight_override(Some(weights.clone())).await;
        Ok((StatusCode::OK, Json(WeightsResponse::new(Some(weights)))).into_response())
    }

    /// Clear the override, restoring the shipped model
    async fn handle_clear(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        resources.set_weight_override(None).await;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}

/// Map weight document failures onto API error codes
fn weights_error(err: WeightsError) -> AppError {
    match err {
        WeightsError::Parse(parse) => {
            AppError::invalid_format(format!("weight document is not valid JSON: {parse}"))
        }
        WeightsError::Validation(message) => AppError::invalid_input(message),
    }
}
