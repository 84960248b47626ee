// ABOUTME: Lifsy command line tool
// ABOUTME: Run predictions and validate weight documents from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! # Lifsy CLI
//!
//! Run the lifestyle scorer over JSON documents without a server:
//!
//! ```text
//! lifsy-cli predict --profile profile.json --habits habits.json
//! lifsy-cli weights validate model.json
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use lifsy_core::models::{Habit, Profile};
use lifsy_intelligence::{LifestyleScorer, WeightSet};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lifsy-cli")]
#[command(about = "Lifsy command line tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a lifestyle prediction over JSON documents
    Predict {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Habit list JSON file (defaults to no habits)
        #[arg(long)]
        habits: Option<PathBuf>,

        /// Weight override JSON file (defaults to the shipped model)
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },

    /// Weight document tools
    Weights {
        #[command(subcommand)]
        command: WeightsCommand,
    },
}

#[derive(Subcommand)]
enum WeightsCommand {
    /// Validate a weight document and print the resolved coefficients
    Validate {
        /// Weight document JSON file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Predict {
            profile,
            habits,
            weights,
            pretty,
        } => predict(&profile, habits.as_deref(), weights.as_deref(), pretty),
        Command::Weights {
            command: WeightsCommand::Validate { file },
        } => validate_weights(&file),
    }
}

fn predict(
    profile_path: &Path,
    habits_path: Option<&Path>,
    weights_path: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let profile: Profile = read_json(profile_path)?;

    let habits: Vec<Habit> = match habits_path {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let weights = match weights_path {
        Some(path) => Some(load_weights(path)?),
        None => None,
    };

    let result = LifestyleScorer::predict(&profile, &habits, weights.as_ref());

    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");
    Ok(())
}

fn validate_weights(path: &Path) -> Result<()> {
    let weights = load_weights(path)?;
    let resolved = weights.resolve();
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn load_weights(path: &Path) -> Result<WeightSet> {
    let document = std::fs::read_to_string(path)
        .map_err(|err| anyhow!("cannot read {}: {err}", path.display()))?;
    WeightSet::parse_document(&document)
        .map_err(|err| anyhow!("{}: {err}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| anyhow!("cannot read {}: {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| anyhow!("{}: {err}", path.display()))
}
