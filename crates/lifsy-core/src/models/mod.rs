// ABOUTME: Domain models for the Lifsy habit tracking platform
// ABOUTME: Profile, Habit, Challenge, and aggregate dashboard state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Core data models shared across the workspace.

/// User health/lifestyle profile and its categorical field enums
pub mod profile;

/// Tracked habits with rolling completion histories
pub mod habit;

/// The 21-day deposit challenge
pub mod challenge;

/// Aggregate dashboard state (the persisted blob)
pub mod state;

pub use challenge::Challenge;
pub use habit::Habit;
pub use profile::{ActivityLevel, BmiCategory, Profile, SleepDuration};
pub use state::DashboardState;
