// ABOUTME: Lifestyle prediction engine for the Lifsy platform
// ABOUTME: Feature extraction, weight resolution, scoring, and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

#![deny(unsafe_code)]

//! # Lifsy Intelligence
//!
//! The lifestyle scoring engine: a small logistic model over a handful of
//! profile features and recent habit completion. The whole pipeline is a
//! pure, synchronous computation with no retained state between calls.
//!
//! ## Pipeline
//!
//! 1. **features**: derive a fixed feature vector from the profile and
//!    habit histories
//! 2. **weights**: resolve the model coefficients (defaults, optionally
//!    overridden by an uploaded weight document)
//! 3. **scorer**: weighted sum, logistic squash, 0-100 score and a
//!    three-tier classification
//! 4. **suggestions**: ordered rule list over the extracted features

/// Feature extraction from profile and habit data
pub mod features;

/// Coaching suggestion rules
pub mod suggestions;

/// Scoring, classification, and the prediction result
pub mod scorer;

/// Model coefficients, defaults, and uploaded weight documents
pub mod weights;

pub use features::FeatureVector;
pub use scorer::{Classification, LifestyleScorer, PredictionResult};
pub use weights::{WeightSet, Weights, WeightsError};
