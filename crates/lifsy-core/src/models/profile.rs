// ABOUTME: User health/lifestyle profile model with typed categorical fields
// ABOUTME: Raw numeric-like fields keep their entered text and parse with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! User profile model.
//!
//! The profile is entered through a form, so every field may be missing or
//! blank. Numeric-like fields (`age`, `heart_rate`, `daily_steps`) keep the
//! raw entered text and are resolved through explicit parse-with-default
//! accessors. Categorical fields are closed enumerations with an `Unknown`
//! variant for blank or unrecognized input; `Unknown` contributes nothing
//! to any scoring bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback age in years when the profile field is blank or non-numeric
pub const DEFAULT_AGE_YEARS: f64 = 35.0;

/// Fallback resting heart rate (bpm) when blank or non-numeric
pub const DEFAULT_HEART_RATE_BPM: f64 = 70.0;

/// Fallback daily step count when blank or non-numeric
pub const DEFAULT_DAILY_STEPS: f64 = 4000.0;

/// Self-reported sleep duration bucket
///
/// Matched against the exact form labels; anything else is `Unknown`.
/// `MoreThanEight` is a recognized answer but maps to no scoring bucket,
/// same as `Unknown`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum SleepDuration {
    /// "Less than 6 hrs"
    LessThanSix,
    /// "6–8 hrs"
    SixToEight,
    /// "More than 8 hrs"
    MoreThanEight,
    /// Blank or unrecognized input
    #[default]
    Unknown,
}

impl SleepDuration {
    /// Canonical form label for this bucket (empty for `Unknown`)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LessThanSix => "Less than 6 hrs",
            Self::SixToEight => "6–8 hrs",
            Self::MoreThanEight => "More than 8 hrs",
            Self::Unknown => "",
        }
    }
}

impl From<String> for SleepDuration {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Less than 6 hrs" => Self::LessThanSix,
            "6–8 hrs" => Self::SixToEight,
            "More than 8 hrs" => Self::MoreThanEight,
            _ => Self::Unknown,
        }
    }
}

impl From<SleepDuration> for String {
    fn from(value: SleepDuration) -> Self {
        value.label().to_owned()
    }
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported physical activity level, matched case-insensitively
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Sedentary lifestyle
    Low,
    /// Some regular activity
    Moderate,
    /// Frequent vigorous activity
    High,
    /// Blank or unrecognized input
    #[default]
    Unknown,
}

impl ActivityLevel {
    /// Canonical form label (empty for `Unknown`)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Unknown => "",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.label().to_owned()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported BMI category, matched case-insensitively
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BmiCategory {
    /// BMI below the normal range
    Underweight,
    /// BMI in the normal range
    Normal,
    /// BMI above the normal range
    Overweight,
    /// BMI in the obese range
    Obese,
    /// Blank or unrecognized input
    #[default]
    Unknown,
}

impl BmiCategory {
    /// Canonical form label (empty for `Unknown`)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::Unknown => "",
        }
    }
}

impl From<String> for BmiCategory {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "underweight" => Self::Underweight,
            "normal" => Self::Normal,
            "overweight" => Self::Overweight,
            "obese" => Self::Obese,
            _ => Self::Unknown,
        }
    }
}

impl From<BmiCategory> for String {
    fn from(value: BmiCategory) -> Self {
        value.label().to_owned()
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-entered health and lifestyle attributes
///
/// Only `age`, `sleep_duration`, `activity_level`, `bmi_category`,
/// `heart_rate`, and `daily_steps` feed the lifestyle scorer; the remaining
/// fields round-trip through the dashboard form untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Self-reported gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Age in years, as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Occupation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Sleep duration bucket
    #[serde(default)]
    pub sleep_duration: SleepDuration,
    /// Physical activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// BMI category
    #[serde(default)]
    pub bmi_category: BmiCategory,
    /// Resting heart rate (bpm), as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<String>,
    /// Daily step count, as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_steps: Option<String>,
    /// Systolic blood pressure, as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_systolic: Option<String>,
    /// Diastolic blood pressure, as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_diastolic: Option<String>,
    /// Diagnosed sleep disorder, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_disorder: Option<String>,
}

impl Profile {
    /// Age in years, falling back to [`DEFAULT_AGE_YEARS`]
    #[must_use]
    pub fn age_years(&self) -> f64 {
        parse_numeric_or(self.age.as_deref(), DEFAULT_AGE_YEARS)
    }

    /// Resting heart rate in bpm, falling back to [`DEFAULT_HEART_RATE_BPM`]
    #[must_use]
    pub fn heart_rate_bpm(&self) -> f64 {
        parse_numeric_or(self.heart_rate.as_deref(), DEFAULT_HEART_RATE_BPM)
    }

    /// Daily step count, falling back to [`DEFAULT_DAILY_STEPS`]
    #[must_use]
    pub fn daily_step_count(&self) -> f64 {
        parse_numeric_or(self.daily_steps.as_deref(), DEFAULT_DAILY_STEPS)
    }
}

/// Parse a numeric-like form field, falling back to `default` when the
/// field is missing, blank, or not a number.
fn parse_numeric_or(raw: Option<&str>, default: f64) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_duration_exact_label_match() {
        assert_eq!(
            SleepDuration::from("6–8 hrs".to_owned()),
            SleepDuration::SixToEight
        );
        assert_eq!(
            SleepDuration::from("Less than 6 hrs".to_owned()),
            SleepDuration::LessThanSix
        );
        // Hyphen instead of en dash does not match the form label
        assert_eq!(
            SleepDuration::from("6-8 hrs".to_owned()),
            SleepDuration::Unknown
        );
        assert_eq!(SleepDuration::from(String::new()), SleepDuration::Unknown);
    }

    #[test]
    fn test_activity_and_bmi_case_insensitive() {
        assert_eq!(ActivityLevel::from("HIGH".to_owned()), ActivityLevel::High);
        assert_eq!(
            ActivityLevel::from("moderate".to_owned()),
            ActivityLevel::Moderate
        );
        assert_eq!(
            ActivityLevel::from("extreme".to_owned()),
            ActivityLevel::Unknown
        );
        assert_eq!(BmiCategory::from("OBESE".to_owned()), BmiCategory::Obese);
        assert_eq!(BmiCategory::from("normal".to_owned()), BmiCategory::Normal);
    }

    #[test]
    fn test_enum_serde_round_trip() {
        let json = serde_json::to_string(&SleepDuration::SixToEight).unwrap();
        assert_eq!(json, "\"6–8 hrs\"");
        let back: SleepDuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SleepDuration::SixToEight);

        let unknown: ActivityLevel = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(unknown, ActivityLevel::Unknown);
    }

    #[test]
    fn test_numeric_fields_fall_back_to_defaults() {
        let profile = Profile::default();
        assert!((profile.age_years() - DEFAULT_AGE_YEARS).abs() < f64::EPSILON);
        assert!((profile.heart_rate_bpm() - DEFAULT_HEART_RATE_BPM).abs() < f64::EPSILON);
        assert!((profile.daily_step_count() - DEFAULT_DAILY_STEPS).abs() < f64::EPSILON);

        let profile = Profile {
            age: Some("not a number".to_owned()),
            heart_rate: Some("  ".to_owned()),
            daily_steps: Some("8000".to_owned()),
            ..Profile::default()
        };
        assert!((profile.age_years() - DEFAULT_AGE_YEARS).abs() < f64::EPSILON);
        assert!((profile.heart_rate_bpm() - DEFAULT_HEART_RATE_BPM).abs() < f64::EPSILON);
        assert!((profile.daily_step_count() - 8000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profile_deserializes_from_sparse_json() {
        let profile: Profile =
            serde_json::from_str(r#"{"age":"30","activity_level":"high"}"#).unwrap();
        assert!((profile.age_years() - 30.0).abs() < f64::EPSILON);
        assert_eq!(profile.activity_level, ActivityLevel::High);
        assert_eq!(profile.sleep_duration, SleepDuration::Unknown);
        assert_eq!(profile.bmi_category, BmiCategory::Unknown);
    }
}
