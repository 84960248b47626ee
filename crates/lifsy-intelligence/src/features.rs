// ABOUTME: Feature extraction for the lifestyle scoring model
// ABOUTME: Maps profile fields and habit histories to a fixed feature vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Feature extraction.
//!
//! Profile fields become a fixed feature vector: numeric-like fields parse
//! with silent defaults, categorical fields become one-hot buckets, and
//! habit histories collapse into a single completion-rate scalar. Blank or
//! unrecognized categorical input sets no bucket at all; in particular a
//! "More than 8 hrs" sleep answer contributes to neither sleep bucket.

use lifsy_core::models::{ActivityLevel, BmiCategory, Habit, Profile, SleepDuration};

/// Fixed feature vector consumed by the scorer
///
/// Numeric fields hold raw (unscaled) values; any scaling belongs to the
/// weighted sum. Bucket flags are one-hot with at most one set per
/// categorical field.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Age in years (default-substituted)
    pub age_years: f64,
    /// Sleep duration is the 6-8 hour bucket
    pub sleep_6_to_8: bool,
    /// Sleep duration is the under-6-hour bucket
    pub sleep_less_6: bool,
    /// Low physical activity
    pub activity_low: bool,
    /// Moderate physical activity
    pub activity_moderate: bool,
    /// High physical activity
    pub activity_high: bool,
    /// Underweight BMI category
    pub bmi_underweight: bool,
    /// Normal BMI category
    pub bmi_normal: bool,
    /// Overweight BMI category
    pub bmi_overweight: bool,
    /// Obese BMI category
    pub bmi_obese: bool,
    /// Resting heart rate in bpm (default-substituted)
    pub heart_rate_bpm: f64,
    /// Daily step count (default-substituted)
    pub daily_steps: f64,
    /// Mean habit completion rate over the last week, in [0, 1]
    pub habit_rate: f64,
}

impl FeatureVector {
    /// Derive the feature vector for a profile and its habit histories
    #[must_use]
    pub fn extract(profile: &Profile, habits: &[Habit]) -> Self {
        Self {
            age_years: profile.age_years(),
            sleep_6_to_8: profile.sleep_duration == SleepDuration::SixToEight,
            sleep_less_6: profile.sleep_duration == SleepDuration::LessThanSix,
            activity_low: profile.activity_level == ActivityLevel::Low,
            activity_moderate: profile.activity_level == ActivityLevel::Moderate,
            activity_high: profile.activity_level == ActivityLevel::High,
            bmi_underweight: profile.bmi_category == BmiCategory::Underweight,
            bmi_normal: profile.bmi_category == BmiCategory::Normal,
            bmi_overweight: profile.bmi_category == BmiCategory::Overweight,
            bmi_obese: profile.bmi_category == BmiCategory::Obese,
            heart_rate_bpm: profile.heart_rate_bpm(),
            daily_steps: profile.daily_step_count(),
            habit_rate: mean_completion_rate(habits),
        }
    }
}

/// Average of per-habit last-week completion rates; 0 with no habits
fn mean_completion_rate(habits: &[Habit]) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }
    let total: f64 = habits.iter().map(Habit::completion_rate).sum();
    total / habits.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit_with_history(history: Vec<bool>) -> Habit {
        let mut habit = Habit::new("test habit");
        habit.history = history;
        habit
    }

    #[test]
    fn test_blank_profile_uses_defaults() {
        let features = FeatureVector::extract(&Profile::default(), &[]);
        assert!((features.age_years - 35.0).abs() < f64::EPSILON);
        assert!((features.heart_rate_bpm - 70.0).abs() < f64::EPSILON);
        assert!((features.daily_steps - 4000.0).abs() < f64::EPSILON);
        assert!(!features.sleep_6_to_8);
        assert!(!features.sleep_less_6);
        assert!(!features.activity_low && !features.activity_moderate && !features.activity_high);
        assert!(!features.bmi_underweight && !features.bmi_normal);
        assert!(!features.bmi_overweight && !features.bmi_obese);
        assert!((features.habit_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_long_sleep_sets_neither_bucket() {
        let profile = Profile {
            sleep_duration: SleepDuration::MoreThanEight,
            ..Profile::default()
        };
        let features = FeatureVector::extract(&profile, &[]);
        assert!(!features.sleep_6_to_8);
        assert!(!features.sleep_less_6);
    }

    #[test]
    fn test_one_hot_buckets_follow_categories() {
        let profile = Profile {
            sleep_duration: SleepDuration::SixToEight,
            activity_level: ActivityLevel::Moderate,
            bmi_category: BmiCategory::Overweight,
            ..Profile::default()
        };
        let features = FeatureVector::extract(&profile, &[]);
        assert!(features.sleep_6_to_8);
        assert!(!features.sleep_less_6);
        assert!(features.activity_moderate);
        assert!(!features.activity_low && !features.activity_high);
        assert!(features.bmi_overweight);
        assert!(!features.bmi_underweight && !features.bmi_normal && !features.bmi_obese);
    }

    #[test]
    fn test_habit_rate_averages_across_habits() {
        let habits = vec![
            habit_with_history(vec![true; 7]),
            habit_with_history(vec![false; 7]),
        ];
        let features = FeatureVector::extract(&Profile::default(), &habits);
        assert!((features.habit_rate - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_habit_rate_only_considers_last_week() {
        // Ten days of history, only the last seven count: 7/7 complete
        let mut history = vec![false, false, false];
        history.extend(vec![true; 7]);
        let habits = vec![habit_with_history(history)];
        let features = FeatureVector::extract(&Profile::default(), &habits);
        assert!((features.habit_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_history_counts_as_zero_rate() {
        let habits = vec![
            habit_with_history(Vec::new()),
            habit_with_history(vec![true; 7]),
        ];
        let features = FeatureVector::extract(&Profile::default(), &habits);
        assert!((features.habit_rate - 0.5).abs() < 1e-12);
    }
}
