// ABOUTME: Dashboard state persistence as a single JSON blob on disk
// ABOUTME: Load-or-seed on startup, atomic write-through on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! State persistence.
//!
//! The entire dashboard state lives in one JSON document, the server-side
//! analog of the dashboard's single local-storage key. A missing or
//! unreadable blob seeds the demo state rather than failing startup. Saves
//! write to a sibling temp file and rename into place so a crash mid-write
//! never corrupts the blob.

use lifsy_core::errors::AppResult;
use lifsy_core::models::DashboardState;
use lifsy_core::AppError;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// JSON blob store for the dashboard state
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given file path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted state, seeding the demo state when the blob is
    /// missing or unreadable
    #[must_use]
    pub fn load_or_seed(&self) -> DashboardState {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(state) => {
                    info!(path = %self.path.display(), "loaded dashboard state");
                    state
                }
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        "state blob is corrupt ({err}), seeding demo state"
                    );
                    DashboardState::seeded()
                }
            },
            Err(_) => {
                info!(path = %self.path.display(), "no state blob, seeding demo state");
                DashboardState::seeded()
            }
        }
    }

    /// Persist the state atomically
    ///
    /// # Errors
    ///
    /// Returns a storage error when the blob cannot be serialized or
    /// written.
    pub fn save(&self, state: &DashboardState) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    AppError::storage(format!(
                        "cannot create state directory {}: {err}",
                        parent.display()
                    ))
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|err| {
            AppError::storage(format!("cannot write {}: {err}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            AppError::storage(format!("cannot replace {}: {err}", self.path.display()))
        })?;
        Ok(())
    }
}
