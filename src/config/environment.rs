// ABOUTME: Environment variable based server configuration
// ABOUTME: Host, port, state file location, and optional weight preload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Environment-based configuration.
//!
//! The server reads its entire configuration from environment variables;
//! there is no configuration file. Every variable has a sensible default
//! so `lifsy-server` starts with no setup at all.
//!
//! | Variable       | Default               | Meaning                         |
//! |----------------|-----------------------|---------------------------------|
//! | `HOST`         | `127.0.0.1`           | Bind address                    |
//! | `HTTP_PORT`    | `5001`                | HTTP API port                   |
//! | `STATE_FILE`   | `lifsy_state_v1.json` | Dashboard state blob location   |
//! | `WEIGHTS_FILE` | unset                 | Weight override loaded at start |

use lifsy_core::errors::AppResult;
use lifsy_core::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default HTTP API port
pub const DEFAULT_HTTP_PORT: u16 = 5001;

/// Default dashboard state blob location
pub const DEFAULT_STATE_FILE: &str = "lifsy_state_v1.json";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Location of the persisted dashboard state blob
    pub state_file: PathBuf,
    /// Optional weight document loaded as the override at startup
    pub weights_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a set variable fails to parse
    /// (e.g. a non-numeric `HTTP_PORT`).
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|err| AppError::config(format!("invalid HTTP_PORT '{raw}': {err}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned()),
            http_port,
            state_file: env::var("STATE_FILE")
                .map_or_else(|_| PathBuf::from(DEFAULT_STATE_FILE), PathBuf::from),
            weights_file: env::var("WEIGHTS_FILE").ok().map(PathBuf::from),
        })
    }

    /// Socket address string for the HTTP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Lifsy Server Configuration:\n\
             - HTTP: {}\n\
             - State file: {}\n\
             - Weight override: {}",
            self.bind_address(),
            self.state_file.display(),
            self.weights_file
                .as_ref()
                .map_or_else(|| "default model".to_owned(), |p| p.display().to_string()),
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            weights_file: None,
        }
    }
}
