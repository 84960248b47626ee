// ABOUTME: Coaching suggestion rules for the lifestyle scorer
// ABOUTME: Fixed ordered rule list with a two-entry minimum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Suggestion generation.
//!
//! A deterministic rule list evaluated in fixed order; every matching rule
//! fires and appends one suggestion. The list is padded with a filler line
//! until at least [`MIN_SUGGESTIONS`] are present.

use crate::features::FeatureVector;

/// Minimum number of suggestions returned
pub const MIN_SUGGESTIONS: usize = 2;

/// Suggested when sleep is outside the 6-8 hour bucket
pub const SLEEP_SUGGESTION: &str = "Aim for 6–8 hours of sleep nightly.";

/// Suggested for low physical activity
pub const ACTIVITY_SUGGESTION: &str =
    "Increase physical activity gradually (short walks or micro-workouts).";

/// Suggested for overweight or obese BMI categories
pub const NUTRITION_SUGGESTION: &str =
    "Consider a consult with a nutritionist and gradual activity increase.";

/// Suggested when weekly habit completion is under 50%
pub const HABIT_SUGGESTION: &str =
    "Focus on small daily wins — aim for 70% weekly completion.";

/// Suggested when resting heart rate exceeds 90 bpm
pub const HEART_RATE_SUGGESTION: &str =
    "Monitor resting heart rate; seek medical advice if persistently high.";

/// Suggested when daily steps are under 5000
pub const STEPS_SUGGESTION: &str = "Increase daily steps by 1k increments per week.";

/// Filler used to reach the minimum suggestion count
pub const FILLER_SUGGESTION: &str = "Keep consistent: small changes compound over time.";

/// Resting heart rate threshold (bpm) for the monitoring suggestion
const HIGH_HEART_RATE_BPM: f64 = 90.0;

/// Daily step threshold below which the step suggestion fires
const LOW_DAILY_STEPS: f64 = 5000.0;

/// Weekly completion rate threshold below which the habit suggestion fires
const LOW_HABIT_RATE: f64 = 0.5;

/// Generate the suggestion list for an extracted feature vector
#[must_use]
pub fn generate(features: &FeatureVector) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !features.sleep_6_to_8 {
        suggestions.push(SLEEP_SUGGESTION.to_owned());
    }
    if features.activity_low {
        suggestions.push(ACTIVITY_SUGGESTION.to_owned());
    }
    if features.bmi_overweight || features.bmi_obese {
        suggestions.push(NUTRITION_SUGGESTION.to_owned());
    }
    if features.habit_rate < LOW_HABIT_RATE {
        suggestions.push(HABIT_SUGGESTION.to_owned());
    }
    if features.heart_rate_bpm > HIGH_HEART_RATE_BPM {
        suggestions.push(HEART_RATE_SUGGESTION.to_owned());
    }
    if features.daily_steps < LOW_DAILY_STEPS {
        suggestions.push(STEPS_SUGGESTION.to_owned());
    }

    while suggestions.len() < MIN_SUGGESTIONS {
        suggestions.push(FILLER_SUGGESTION.to_owned());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifsy_core::models::{ActivityLevel, BmiCategory, Profile, SleepDuration};

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

    #[test]
    fn test_no_matching_rule_pads_with_filler() {
        let mut features = FeatureVector::extract(&healthy_profile(), &[]);
        features.habit_rate = 1.0;
        let suggestions = generate(&features);
        assert_eq!(suggestions, vec![FILLER_SUGGESTION, FILLER_SUGGESTION]);
    }

    #[test]
    fn test_rules_fire_in_fixed_order() {
        let profile = Profile {
            sleep_duration: SleepDuration::LessThanSix,
            activity_level: ActivityLevel::Low,
            bmi_category: BmiCategory::Obese,
            heart_rate: Some("95".to_owned()),
            daily_steps: Some("2000".to_owned()),
            ..Profile::default()
        };
        let features = FeatureVector::extract(&profile, &[]);
        let suggestions = generate(&features);
        assert_eq!(
            suggestions,
            vec![
                SLEEP_SUGGESTION,
                ACTIVITY_SUGGESTION,
                NUTRITION_SUGGESTION,
                HABIT_SUGGESTION,
                HEART_RATE_SUGGESTION,
                STEPS_SUGGESTION,
            ]
        );
    }

    #[test]
    fn test_heart_rate_rule_uses_raw_bpm() {
        let mut features = FeatureVector::extract(&healthy_profile(), &[]);
        features.habit_rate = 1.0;
        features.heart_rate_bpm = 90.0;
        assert!(!generate(&features).contains(&HEART_RATE_SUGGESTION.to_owned()));
        features.heart_rate_bpm = 90.5;
        assert!(generate(&features).contains(&HEART_RATE_SUGGESTION.to_owned()));
    }

    #[test]
    fn test_single_rule_still_pads_to_two() {
        let mut features = FeatureVector::extract(&healthy_profile(), &[]);
        features.habit_rate = 1.0;
        features.daily_steps = 3000.0;
        let suggestions = generate(&features);
        assert_eq!(suggestions, vec![STEPS_SUGGESTION, FILLER_SUGGESTION]);
    }
}
