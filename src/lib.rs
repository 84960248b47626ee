// ABOUTME: Lifsy server library: HTTP API over the habit tracking store
// ABOUTME: Wires configuration, logging, persistence, and routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

#![deny(unsafe_code)]

//! # Lifsy Server
//!
//! HTTP API and CLI for the Lifsy habit tracking platform. The server
//! exposes the lifestyle scorer from `lifsy-intelligence` together with
//! the habit/challenge tracking store, persisting all dashboard state as
//! a single JSON blob on disk.
//!
//! ## Modules
//!
//! - **config**: environment-driven server configuration
//! - **logging**: structured logging setup
//! - **storage**: dashboard state persistence
//! - **state**: shared server resources handed to route handlers
//! - **routes**: axum route handlers per concern

/// Environment-driven server configuration
pub mod config;

/// Structured logging configuration and setup
pub mod logging;

/// HTTP route handlers
pub mod routes;

/// Shared server resources
pub mod state;

/// Dashboard state persistence
pub mod storage;
