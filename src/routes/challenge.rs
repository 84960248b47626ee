// ABOUTME: Deposit challenge route handlers
// ABOUTME: Challenge status and pledge deposits with balance history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Deposit challenge routes.

use crate::state::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lifsy_core::errors::AppError;
use lifsy_core::models::Challenge;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for adding to the pledge
#[derive(Deserialize)]
pub struct DepositRequest {
    /// Amount to add, in whole rupees
    amount: i64,
}

/// Challenge status including derived fields
#[derive(Serialize)]
struct ChallengeResponse {
    /// The challenge record
    #[serde(flatten)]
    challenge: Challenge,
    /// Payout if the challenge completes
    potential_reward: i64,
    /// Recent pledge balance points, oldest first
    balance_history: Vec<i64>,
}

impl ChallengeResponse {
    fn new(challenge: Challenge, balance_history: Vec<i64>) -> Self {
        let potential_reward = challenge.potential_reward();
        Self {
            challenge,
            potential_reward,
            balance_history,
        }
    }
}

/// Challenge routes
pub struct ChallengeRoutes;

impl ChallengeRoutes {
    /// Create the challenge routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/challenge", get(Self::handle_get))
            .route("/api/challenge/deposit", post(Self::handle_deposit))
            .with_state(resources)
    }

    /// Return the challenge status
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let dashboard = resources.dashboard().await;
        let response = ChallengeResponse::new(dashboard.challenge, dashboard.balance_history);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Add to the pledge
    async fn handle_deposit(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<DepositRequest>,
    ) -> Result<Response, AppError> {
        if request.amount <= 0 {
            return Err(AppError::invalid_input("deposit amount must be positive"));
        }

        let response = resources
            .update_dashboard(|dashboard| {
                dashboard.record_deposit(request.amount);
                Ok(ChallengeResponse::new(
                    dashboard.challenge.clone(),
                    dashboard.balance_history.clone(),
                ))
            })
            .await?;
        tracing::info!(amount = request.amount, "deposit added to pledge");
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
