// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Dashboard state and weight override behind async locks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Shared server resources.
//!
//! A single [`ServerResources`] is built at startup and shared across all
//! handlers as `Arc` router state. Dashboard mutations go through
//! [`ServerResources::update_dashboard`], which persists the blob before
//! the mutation is observable to other requests.

use crate::config::ServerConfig;
use crate::storage::StateStore;
use lifsy_core::errors::AppResult;
use lifsy_core::models::DashboardState;
use lifsy_intelligence::WeightSet;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    store: StateStore,
    dashboard: RwLock<DashboardState>,
    weight_override: RwLock<Option<WeightSet>>,
}

impl ServerResources {
    /// Assemble the server resources
    #[must_use]
    pub fn new(
        config: ServerConfig,
        store: StateStore,
        dashboard: DashboardState,
        weight_override: Option<WeightSet>,
    ) -> Self {
        Self {
            config,
            store,
            dashboard: RwLock::new(dashboard),
            weight_override: RwLock::new(weight_override),
        }
    }

    /// Snapshot of the current dashboard state
    pub async fn dashboard(&self) -> DashboardState {
        self.dashboard.read().await.clone()
    }

    /// Mutate the dashboard state and persist the result
    ///
    /// The closure may fail, in which case nothing is persisted. The write
    /// lock is held across the save so concurrent requests always observe
    /// persisted state.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error or the storage error from the save.
    pub async fn update_dashboard<T>(
        &self,
        mutate: impl FnOnce(&mut DashboardState) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut dashboard = self.dashboard.write().await;
        let out = mutate(&mut dashboard)?;
        self.store.save(&dashboard)?;
        Ok(out)
    }

    /// The active uploaded weight override, if any
    pub async fn weight_override(&self) -> Option<WeightSet> {
        self.weight_override.read().await.clone()
    }

    /// Replace or clear the weight override
    pub async fn set_weight_override(&self, weights: Option<WeightSet>) {
        *self.weight_override.write().await = weights;
    }
}
