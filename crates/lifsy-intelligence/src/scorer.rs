// ABOUTME: Lifestyle scoring: weighted sum, logistic squash, classification
// ABOUTME: Pure function of profile, habits, and an optional weight override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Lifestyle scoring.
//!
//! The score is a logistic-regression style computation: a weighted sum
//! over the extracted features, squashed through the logistic function and
//! mapped to an integer 0-100 score. Age and heart rate enter the sum
//! scaled by 1/100; the step count enters raw, its default weight
//! pre-scaled to compensate. Classification thresholds are fixed
//! constants.

use crate::features::FeatureVector;
use crate::suggestions;
use crate::weights::{WeightSet, Weights};
use lifsy_core::models::{Habit, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are classified Good
const GOOD_THRESHOLD: u8 = 65;

/// Scores at or above this (and below Good) are classified Moderate
const MODERATE_THRESHOLD: u8 = 40;

/// Three-tier lifestyle classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Classification {
    /// Score 65 or above
    Good,
    /// Score 40 to 64
    Moderate,
    /// Score below 40
    #[serde(rename = "At-risk")]
    AtRisk,
}

impl Classification {
    /// Classify a 0-100 score against the fixed thresholds
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::AtRisk
        }
    }

    /// Display label (also the wire representation)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::AtRisk => "At-risk",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of a lifestyle prediction
///
/// Identical inputs always produce an identical result; the record carries
/// no timestamps or other call-dependent fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionResult {
    /// Integer lifestyle score, 0-100
    pub score: u8,
    /// Three-tier classification of the score
    pub classification: Classification,
    /// Coaching suggestions, at least two
    pub suggestions: Vec<String>,
}

/// The lifestyle scorer
///
/// Stateless; every prediction is an independent pure computation.
pub struct LifestyleScorer;

impl LifestyleScorer {
    /// Run a lifestyle prediction
    ///
    /// Missing or malformed profile fields degrade to defaults rather than
    /// failing; an `override_weights` of `None` uses the shipped model.
    #[must_use]
    pub fn predict(
        profile: &Profile,
        habits: &[Habit],
        override_weights: Option<&WeightSet>,
    ) -> PredictionResult {
        let features = FeatureVector::extract(profile, habits);
        let weights = override_weights.map_or_else(Weights::default, WeightSet::resolve);

        let sum = Self::weighted_sum(&features, &weights);
        let probability = sigmoid(sum);
        let score = (probability * 100.0).round().clamp(0.0, 100.0) as u8;
        let classification = Classification::from_score(score);
        let suggestions = suggestions::generate(&features);

        tracing::debug!(score, classification = %classification, "lifestyle prediction computed");

        PredictionResult {
            score,
            classification,
            suggestions,
        }
    }

    /// Linear combination of features and coefficients
    fn weighted_sum(features: &FeatureVector, weights: &Weights) -> f64 {
        let mut sum = weights.bias;
        sum += weights.age * (features.age_years / 100.0);
        sum += weights.sleep_6_to_8 * hot(features.sleep_6_to_8);
        sum += weights.sleep_less_6 * hot(features.sleep_less_6);
        sum += weights.activity_low * hot(features.activity_low);
        sum += weights.activity_moderate * hot(features.activity_moderate);
        sum += weights.activity_high * hot(features.activity_high);
        sum += weights.bmi_underweight * hot(features.bmi_underweight);
        sum += weights.bmi_normal * hot(features.bmi_normal);
        sum += weights.bmi_overweight * hot(features.bmi_overweight);
        sum += weights.bmi_obese * hot(features.bmi_obese);
        sum += weights.heart_rate * (features.heart_rate_bpm / 100.0);
        sum += weights.steps * features.daily_steps;
        sum += weights.habit_rate * features.habit_rate;
        sum
    }
}

/// Logistic squash to (0, 1)
fn sigmoid(value: f64) -> f64 {
    1.0 / (1.0 + (-value).exp())
}

/// One-hot encoding of a bucket flag
const fn hot(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::{
        FILLER_SUGGESTION, HABIT_SUGGESTION, SLEEP_SUGGESTION, STEPS_SUGGESTION,
    };
    use lifsy_core::models::{ActivityLevel, BmiCategory, SleepDuration};

    fn healthy_profile() -> Profile {
        Profile {
            age: Some("30".to_owned()),
            sleep_duration: SleepDuration::SixToEight,
            activity_level: ActivityLevel::High,
            bmi_category: BmiCategory::Normal,
            heart_rate: Some("60".to_owned()),
            daily_steps: Some("8000".to_owned()),
            ..Profile::default()
        }
    }

    fn full_week_habit() -> Habit {
        let mut habit = Habit::new("meditate");
        habit.history = vec![true; 7];
        habit
    }

    #[test]
    fn test_blank_profile_score_is_fixed() {
        // Default features: age 35, hr 70, steps 4000, no buckets, rate 0.
        // sum = -0.2 - 0.0035 - 0.007 + 0.8 = 0.5895 -> sigmoid -> 64
        let result = LifestyleScorer::predict(&Profile::default(), &[], None);
        assert_eq!(result.score, 64);
        assert_eq!(result.classification, Classification::Moderate);
        assert_eq!(
            result.suggestions,
            vec![SLEEP_SUGGESTION, HABIT_SUGGESTION, STEPS_SUGGESTION]
        );
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let habits = vec![full_week_habit()];
        let first = LifestyleScorer::predict(&healthy_profile(), &habits, None);
        let second = LifestyleScorer::predict(&healthy_profile(), &habits, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_override_matches_no_override() {
        let habits = vec![full_week_habit()];
        let explicit = WeightSet::from(Weights::default());
        let with_override =
            LifestyleScorer::predict(&healthy_profile(), &habits, Some(&explicit));
        let without = LifestyleScorer::predict(&healthy_profile(), &habits, None);
        assert_eq!(with_override, without);
    }

    #[test]
    fn test_habit_rate_never_decreases_score() {
        let no_habits = LifestyleScorer::predict(&Profile::default(), &[], None);
        let habits = vec![full_week_habit()];
        let full_rate = LifestyleScorer::predict(&Profile::default(), &habits, None);
        assert!(full_rate.score >= no_habits.score);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(Classification::from_score(65), Classification::Good);
        assert_eq!(Classification::from_score(64), Classification::Moderate);
        assert_eq!(Classification::from_score(40), Classification::Moderate);
        assert_eq!(Classification::from_score(39), Classification::AtRisk);
        assert_eq!(Classification::from_score(100), Classification::Good);
        assert_eq!(Classification::from_score(0), Classification::AtRisk);
    }

    #[test]
    fn test_healthy_profile_scores_good_with_filler_only() {
        let habits = vec![full_week_habit()];
        let result = LifestyleScorer::predict(&healthy_profile(), &habits, None);
        assert_eq!(result.classification, Classification::Good);
        assert!(result.score > 65);
        assert_eq!(
            result.suggestions,
            vec![FILLER_SUGGESTION, FILLER_SUGGESTION]
        );
    }

    #[test]
    fn test_override_shifts_the_score() {
        let heavy_bias = WeightSet::parse_document(r#"{"bias": -10.0}"#).unwrap();
        let result = LifestyleScorer::predict(&Profile::default(), &[], Some(&heavy_bias));
        assert_eq!(result.classification, Classification::AtRisk);
        assert!(result.score < 40);
    }

    #[test]
    fn test_score_stays_in_range_under_extreme_weights() {
        let extreme = WeightSet::parse_document(r#"{"bias": 1000.0}"#).unwrap();
        let high = LifestyleScorer::predict(&Profile::default(), &[], Some(&extreme));
        assert_eq!(high.score, 100);

        let extreme = WeightSet::parse_document(r#"{"bias": -1000.0}"#).unwrap();
        let low = LifestyleScorer::predict(&Profile::default(), &[], Some(&extreme));
        assert_eq!(low.score, 0);
    }

    #[test]
    fn test_classification_serializes_with_hyphenated_label() {
        let json = serde_json::to_string(&Classification::AtRisk).unwrap();
        assert_eq!(json, "\"At-risk\"");
        assert_eq!(Classification::AtRisk.to_string(), "At-risk");
    }
}
