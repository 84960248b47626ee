// ABOUTME: Profile route handlers
// ABOUTME: Read and replace the stored health/lifestyle profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Profile routes.

use crate::state::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use lifsy_core::errors::AppError;
use lifsy_core::models::Profile;
use std::sync::Arc;

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create the profile routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::handle_get))
            .route("/api/profile", put(Self::handle_save))
            .with_state(resources)
    }

    /// Return the stored profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let dashboard = resources.dashboard().await;
        Ok((StatusCode::OK, Json(dashboard.profile)).into_response())
    }

    /// Replace the stored profile
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        Json(profile): Json<Profile>,
    ) -> Result<Response, AppError> {
        let saved = resources
            .update_dashboard(|dashboard| {
                dashboard.profile = profile;
                Ok(dashboard.profile.clone())
            })
            .await?;
        Ok((StatusCode::OK, Json(saved)).into_response())
    }
}
