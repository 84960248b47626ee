// ABOUTME: Configuration module for the Lifsy server
// ABOUTME: Environment-only configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Server configuration, loaded exclusively from environment variables.

/// Environment variable based configuration
pub mod environment;

pub use environment::ServerConfig;
