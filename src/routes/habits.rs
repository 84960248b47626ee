// ABOUTME: Habit tracking route handlers
// ABOUTME: List, create, toggle, reset, and delete habits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Habit routes.
//!
//! Toggling flips today's completion and recomputes the streak. Resetting
//! marks a missed stake day: the habit's week is wiped and the challenge
//! stake unlocks.

use crate::state::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use lifsy_core::errors::AppError;
use lifsy_core::models::Habit;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Request body for creating a habit
#[derive(Deserialize)]
pub struct CreateHabitRequest {
    /// Display title of the new habit
    title: String,
}

/// Habit routes
pub struct HabitRoutes;

impl HabitRoutes {
    /// Create all habit routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/habits", get(Self::handle_list))
            .route("/api/habits", post(Self::handle_create))
            .route("/api/habits/:id/toggle", post(Self::handle_toggle))
            .route("/api/habits/:id/reset", post(Self::handle_reset))
            .route("/api/habits/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// List all habits
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let dashboard = resources.dashboard().await;
        Ok((StatusCode::OK, Json(dashboard.habits)).into_response())
    }

    /// Create a habit with a fresh all-incomplete week
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateHabitRequest>,
    ) -> Result<Response, AppError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(AppError::invalid_input("habit title must not be empty"));
        }

        let habit = Habit::new(title);
        let created = resources
            .update_dashboard(|dashboard| {
                dashboard.habits.push(habit.clone());
                Ok(habit.clone())
            })
            .await?;
        tracing::info!(habit = %created.title, "habit created");
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    /// Flip today's completion flag
    async fn handle_toggle(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let habit = resources
            .update_dashboard(|dashboard| {
                let habit = dashboard
                    .habit_mut(id)
                    .ok_or_else(|| habit_not_found(id))?;
                habit.toggle_today();
                Ok(habit.clone())
            })
            .await?;
        Ok((StatusCode::OK, Json(habit)).into_response())
    }

    /// Reset the habit after a missed day, releasing the challenge stake
    async fn handle_reset(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let habit = resources
            .update_dashboard(|dashboard| {
                if !dashboard.reset_habit(id) {
                    return Err(habit_not_found(id));
                }
                dashboard
                    .habit(id)
                    .cloned()
                    .ok_or_else(|| habit_not_found(id))
            })
            .await?;
        tracing::info!(habit = %habit.title, "habit reset, stake released");
        Ok((StatusCode::OK, Json(habit)).into_response())
    }

    /// Delete a habit
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        resources
            .update_dashboard(|dashboard| {
                if dashboard.remove_habit(id) {
                    Ok(())
                } else {
                    Err(habit_not_found(id))
                }
            })
            .await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}

fn habit_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("no habit with id {id}"))
}
