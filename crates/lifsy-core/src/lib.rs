// ABOUTME: Core types for the Lifsy habit tracking platform
// ABOUTME: Foundation crate with domain models and the unified error system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

#![deny(unsafe_code)]

//! # Lifsy Core
//!
//! Foundation crate providing shared types for the Lifsy habit tracking
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain models (Profile, Habit, Challenge, `DashboardState`)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Profile, Habit, Challenge, dashboard state)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
