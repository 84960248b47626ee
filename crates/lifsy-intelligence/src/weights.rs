// ABOUTME: Model coefficients for the lifestyle scorer
// ABOUTME: Fixed defaults, partial overrides, and uploaded document validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! Model weights.
//!
//! The scoring model is a fixed-form linear model with fourteen named
//! coefficients. [`Weights`] is the fully-resolved form whose `Default`
//! impl carries the shipped model; [`WeightSet`] is a partial override in
//! which any subset of coefficients may be supplied, the rest falling back
//! to the defaults at resolution time.
//!
//! Users may upload a weight document as JSON. Uploads are validated up
//! front: the document must be an object, every key must name a known
//! coefficient, and every value must be a finite number. Rejecting bad
//! documents here keeps NaN and infinity out of the dot product entirely.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fourteen recognized coefficient names
pub const WEIGHT_FIELDS: [&str; 14] = [
    "bias",
    "age",
    "sleep6to8",
    "sleepLess6",
    "activityLow",
    "activityModerate",
    "activityHigh",
    "bmiUnderweight",
    "bmiNormal",
    "bmiOverweight",
    "bmiObese",
    "heartRate",
    "steps",
    "habitRate",
];

/// Failure modes for an uploaded weight document
#[derive(Debug, Error)]
pub enum WeightsError {
    /// The document is not well-formed JSON
    #[error("invalid weight document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document is well-formed but not an object of finite numbers
    #[error("invalid weight set: {0}")]
    Validation(String),
}

/// A partial weight override: any subset of coefficients may be present
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeightSet {
    /// Intercept term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
    /// Coefficient on age/100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Coefficient on the 6-8 hour sleep bucket
    #[serde(default, rename = "sleep6to8", skip_serializing_if = "Option::is_none")]
    pub sleep_6_to_8: Option<f64>,
    /// Coefficient on the under-6-hour sleep bucket
    #[serde(default, rename = "sleepLess6", skip_serializing_if = "Option::is_none")]
    pub sleep_less_6: Option<f64>,
    /// Coefficient on low activity
    #[serde(default, rename = "activityLow", skip_serializing_if = "Option::is_none")]
    pub activity_low: Option<f64>,
    /// Coefficient on moderate activity
    #[serde(
        default,
        rename = "activityModerate",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_moderate: Option<f64>,
    /// Coefficient on high activity
    #[serde(default, rename = "activityHigh", skip_serializing_if = "Option::is_none")]
    pub activity_high: Option<f64>,
    /// Coefficient on the underweight BMI bucket
    #[serde(
        default,
        rename = "bmiUnderweight",
        skip_serializing_if = "Option::is_none"
    )]
    pub bmi_underweight: Option<f64>,
    /// Coefficient on the normal BMI bucket
    #[serde(default, rename = "bmiNormal", skip_serializing_if = "Option::is_none")]
    pub bmi_normal: Option<f64>,
    /// Coefficient on the overweight BMI bucket
    #[serde(
        default,
        rename = "bmiOverweight",
        skip_serializing_if = "Option::is_none"
    )]
    pub bmi_overweight: Option<f64>,
    /// Coefficient on the obese BMI bucket
    #[serde(default, rename = "bmiObese", skip_serializing_if = "Option::is_none")]
    pub bmi_obese: Option<f64>,
    /// Coefficient on heart-rate/100
    #[serde(default, rename = "heartRate", skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Coefficient on the raw step count (pre-scaled to compensate)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    /// Coefficient on the habit completion rate
    #[serde(default, rename = "habitRate", skip_serializing_if = "Option::is_none")]
    pub habit_rate: Option<f64>,
}

impl WeightSet {
    /// Parse and validate a user-uploaded weight document
    ///
    /// # Errors
    ///
    /// [`WeightsError::Parse`] when the document is not well-formed JSON;
    /// [`WeightsError::Validation`] when it is well-formed but not an
    /// object, contains an unrecognized key, or carries a value that is
    /// not a finite number.
    pub fn parse_document(document: &str) -> Result<Self, WeightsError> {
        let value: serde_json::Value = serde_json::from_str(document)?;
        let object = value.as_object().ok_or_else(|| {
            WeightsError::Validation("weight document must be a JSON object".to_owned())
        })?;

        let mut set = Self::default();
        for (key, field_value) in object {
            let number = field_value.as_f64().ok_or_else(|| {
                WeightsError::Validation(format!("weight field '{key}' must be a number"))
            })?;
            if !number.is_finite() {
                return Err(WeightsError::Validation(format!(
                    "weight field '{key}' must be finite"
                )));
            }
            set.assign(key, number)?;
        }
        Ok(set)
    }

    /// Resolve this override against the default coefficients
    #[must_use]
    pub fn resolve(&self) -> Weights {
        let defaults = Weights::default();
        Weights {
            bias: self.bias.unwrap_or(defaults.bias),
            age: self.age.unwrap_or(defaults.age),
            sleep_6_to_8: self.sleep_6_to_8.unwrap_or(defaults.sleep_6_to_8),
            sleep_less_6: self.sleep_less_6.unwrap_or(defaults.sleep_less_6),
            activity_low: self.activity_low.unwrap_or(defaults.activity_low),
            activity_moderate: self
                .activity_moderate
                .unwrap_or(defaults.activity_moderate),
            activity_high: self.activity_high.unwrap_or(defaults.activity_high),
            bmi_underweight: self.bmi_underweight.unwrap_or(defaults.bmi_underweight),
            bmi_normal: self.bmi_normal.unwrap_or(defaults.bmi_normal),
            bmi_overweight: self.bmi_overweight.unwrap_or(defaults.bmi_overweight),
            bmi_obese: self.bmi_obese.unwrap_or(defaults.bmi_obese),
            heart_rate: self.heart_rate.unwrap_or(defaults.heart_rate),
            steps: self.steps.unwrap_or(defaults.steps),
            habit_rate: self.habit_rate.unwrap_or(defaults.habit_rate),
        }
    }

    fn assign(&mut self, key: &str, value: f64) -> Result<(), WeightsError> {
        match key {
            "bias" => self.bias = Some(value),
            "age" => self.age = Some(value),
            "sleep6to8" => self.sleep_6_to_8 = Some(value),
            "sleepLess6" => self.sleep_less_6 = Some(value),
            "activityLow" => self.activity_low = Some(value),
            "activityModerate" => self.activity_moderate = Some(value),
            "activityHigh" => self.activity_high = Some(value),
            "bmiUnderweight" => self.bmi_underweight = Some(value),
            "bmiNormal" => self.bmi_normal = Some(value),
            "bmiOverweight" => self.bmi_overweight = Some(value),
            "bmiObese" => self.bmi_obese = Some(value),
            "heartRate" => self.heart_rate = Some(value),
            "steps" => self.steps = Some(value),
            "habitRate" => self.habit_rate = Some(value),
            _ => {
                return Err(WeightsError::Validation(format!(
                    "unrecognized weight field '{key}'"
                )))
            }
        }
        Ok(())
    }
}

impl From<Weights> for WeightSet {
    fn from(weights: Weights) -> Self {
        Self {
            bias: Some(weights.bias),
            age: Some(weights.age),
            sleep_6_to_8: Some(weights.sleep_6_to_8),
            sleep_less_6: Some(weights.sleep_less_6),
            activity_low: Some(weights.activity_low),
            activity_moderate: Some(weights.activity_moderate),
            activity_high: Some(weights.activity_high),
            bmi_underweight: Some(weights.bmi_underweight),
            bmi_normal: Some(weights.bmi_normal),
            bmi_overweight: Some(weights.bmi_overweight),
            bmi_obese: Some(weights.bmi_obese),
            heart_rate: Some(weights.heart_rate),
            steps: Some(weights.steps),
            habit_rate: Some(weights.habit_rate),
        }
    }
}

/// Fully-resolved model coefficients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    /// Intercept term
    pub bias: f64,
    /// Coefficient on age/100
    pub age: f64,
    /// Coefficient on the 6-8 hour sleep bucket
    #[serde(rename = "sleep6to8")]
    pub sleep_6_to_8: f64,
    /// Coefficient on the under-6-hour sleep bucket
    #[serde(rename = "sleepLess6")]
    pub sleep_less_6: f64,
    /// Coefficient on low activity
    #[serde(rename = "activityLow")]
    pub activity_low: f64,
    /// Coefficient on moderate activity
    #[serde(rename = "activityModerate")]
    pub activity_moderate: f64,
    /// Coefficient on high activity
    #[serde(rename = "activityHigh")]
    pub activity_high: f64,
    /// Coefficient on the underweight BMI bucket
    #[serde(rename = "bmiUnderweight")]
    pub bmi_underweight: f64,
    /// Coefficient on the normal BMI bucket
    #[serde(rename = "bmiNormal")]
    pub bmi_normal: f64,
    /// Coefficient on the overweight BMI bucket
    #[serde(rename = "bmiOverweight")]
    pub bmi_overweight: f64,
    /// Coefficient on the obese BMI bucket
    #[serde(rename = "bmiObese")]
    pub bmi_obese: f64,
    /// Coefficient on heart-rate/100
    #[serde(rename = "heartRate")]
    pub heart_rate: f64,
    /// Coefficient on the raw step count (pre-scaled to compensate)
    pub steps: f64,
    /// Coefficient on the habit completion rate
    #[serde(rename = "habitRate")]
    pub habit_rate: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            bias: -0.2,
            age: -0.01,
            sleep_6_to_8: 0.6,
            sleep_less_6: -0.4,
            activity_low: -0.5,
            activity_moderate: 0.2,
            activity_high: 0.6,
            bmi_underweight: -0.2,
            bmi_normal: 0.4,
            bmi_overweight: -0.3,
            bmi_obese: -0.7,
            heart_rate: -0.01,
            steps: 0.0002,
            habit_rate: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let doc = r#"{
            "bias": -0.2, "age": -0.01, "sleep6to8": 0.6, "sleepLess6": -0.4,
            "activityLow": -0.5, "activityModerate": 0.2, "activityHigh": 0.6,
            "bmiUnderweight": -0.2, "bmiNormal": 0.4, "bmiOverweight": -0.3,
            "bmiObese": -0.7, "heartRate": -0.01, "steps": 0.0002, "habitRate": 1.2
        }"#;
        let set = WeightSet::parse_document(doc).unwrap();
        assert_eq!(set.resolve(), Weights::default());
    }

    #[test]
    fn test_partial_document_falls_back_to_defaults() {
        let set = WeightSet::parse_document(r#"{"habitRate": 2.0}"#).unwrap();
        assert_eq!(set.habit_rate, Some(2.0));
        assert_eq!(set.bias, None);

        let resolved = set.resolve();
        assert!((resolved.habit_rate - 2.0).abs() < f64::EPSILON);
        assert!((resolved.bias - Weights::default().bias).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_object_resolves_to_defaults() {
        let set = WeightSet::parse_document("{}").unwrap();
        assert_eq!(set, WeightSet::default());
        assert_eq!(set.resolve(), Weights::default());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = WeightSet::parse_document("{not json").unwrap_err();
        assert!(matches!(err, WeightsError::Parse(_)));
    }

    #[test]
    fn test_non_object_is_a_validation_error() {
        for doc in ["[1, 2, 3]", "42", "\"weights\"", "null"] {
            let err = WeightSet::parse_document(doc).unwrap_err();
            assert!(matches!(err, WeightsError::Validation(_)), "doc: {doc}");
        }
    }

    #[test]
    fn test_non_numeric_field_is_a_validation_error() {
        let err = WeightSet::parse_document(r#"{"bias": "heavy"}"#).unwrap_err();
        assert!(matches!(err, WeightsError::Validation(_)));
        assert!(err.to_string().contains("bias"));
    }

    #[test]
    fn test_unrecognized_field_is_a_validation_error() {
        let err = WeightSet::parse_document(r#"{"habitrate": 1.0}"#).unwrap_err();
        assert!(matches!(err, WeightsError::Validation(_)));
        assert!(err.to_string().contains("habitrate"));
    }

    #[test]
    fn test_overflowing_literal_is_rejected() {
        // Either the parser refuses the out-of-range literal or the
        // finiteness check does; it must never reach the dot product.
        assert!(WeightSet::parse_document(r#"{"bias": 1e400}"#).is_err());
    }

    #[test]
    fn test_document_round_trip_preserves_field_names() {
        let set = WeightSet::from(Weights::default());
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"sleep6to8\""));
        assert!(json.contains("\"habitRate\""));
        let back = WeightSet::parse_document(&json).unwrap();
        assert_eq!(back, set);
    }
}
