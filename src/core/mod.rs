//! Core domain types shared across the scoring engine, storage, and output layers.

pub mod errors;
pub mod validation;

pub use errors::{HeartcheckError, Result};
pub use validation::RawInput;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Composite scores are capped here; a profile maxing every factor would
/// otherwise exceed it.
pub const SCORE_CAP: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Waist circumference above this is a scored risk. Non-male profiles
    /// use the female threshold, as the source rule set did.
    pub fn waist_threshold_cm(self) -> f64 {
        match self {
            Gender::Male => 102.0,
            _ => 88.0,
        }
    }

    /// Weekly alcohol units above this are a scored risk.
    pub fn alcohol_threshold_units(self) -> u32 {
        match self {
            Gender::Male => 14,
            _ => 7,
        }
    }
}

/// A validated health profile, ready for scoring.
///
/// Constructed only through [`RawInput::validate`], which enforces the field
/// ranges and computes `bmi` exactly once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    pub name: Option<String>,
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub waist_cm: f64,
    /// weight / height², derived during validation and never recomputed.
    pub bmi: f64,
    pub steps_per_day: u32,
    pub junk_food_per_week: u32,
    pub exercise_hours_per_week: f64,
    pub alcohol_units_per_week: u32,
    pub smoker: bool,
    pub sleep_hours: f64,
    /// Ordinal 1 (low) to 3 (high).
    pub stress_level: u8,
    pub family_history: bool,
    pub high_blood_pressure: bool,
    pub diabetes: bool,
    pub cholesterol_mg_dl: Option<u32>,
    /// Collected and persisted but not scored.
    pub rbc_million_per_ul: Option<f64>,
    /// Collected and persisted but not scored.
    pub wbc_thousand_per_ul: Option<f64>,
}

/// A single scored risk dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    Age,
    Bmi,
    Waist,
    Smoking,
    Exercise,
    Steps,
    Diet,
    Alcohol,
    Sleep,
    Stress,
    FamilyHistory,
    BloodPressure,
    Diabetes,
    Cholesterol,
}

/// Output of one factor evaluator: a non-negative score contribution and,
/// when the factor is outside its safe band, an advisory message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactorResult {
    pub factor: RiskFactor,
    pub score: u32,
    pub message: Option<&'static str>,
}

impl FactorResult {
    /// A factor inside its safe band: zero contribution, no message.
    pub fn safe(factor: RiskFactor) -> Self {
        Self {
            factor,
            score: 0,
            message: None,
        }
    }

    /// A scored factor with an advisory message.
    pub fn flagged(factor: RiskFactor, score: u32, message: &'static str) -> Self {
        Self {
            factor,
            score,
            message: Some(message),
        }
    }

    /// A scored factor without a message (age 31-45 contributes silently).
    pub fn scored(factor: RiskFactor, score: u32) -> Self {
        Self {
            factor,
            score,
            message: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Classification is a step function of the clamped composite score.
    pub fn from_score(score: u32) -> Self {
        match score {
            40.. => RiskLevel::High,
            20..=39 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregated result of scoring one profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Sum of all factor contributions, clamped to `[0, SCORE_CAP]`.
    pub total_score: u32,
    pub level: RiskLevel,
    pub bmi: f64,
    /// Advisory messages in evaluator order; never empty, always ends with
    /// the fixed disclaimer.
    pub precautions: Vector<String>,
}

impl RiskAssessment {
    /// The one-line summary shown alongside the score.
    pub fn summary(&self) -> String {
        format!(
            "Your calculated BMI is {:.1}. Based on your inputs, your risk level is {}.",
            self.bmi, self.level
        )
    }
}

/// One persisted assessment. Immutable once saved; `id` is assigned by the
/// repository and stays `None` until then.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub waist_cm: f64,
    /// Rounded to two decimals at assembly time.
    pub bmi: f64,
    pub steps_per_day: u32,
    pub junk_food_per_week: u32,
    pub exercise_hours_per_week: f64,
    pub alcohol_units_per_week: u32,
    pub smoker: bool,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub family_history: bool,
    pub high_blood_pressure: bool,
    pub diabetes: bool,
    pub cholesterol_mg_dl: Option<u32>,
    pub rbc_million_per_ul: Option<f64>,
    pub wbc_thousand_per_ul: Option<f64>,
    pub score: u32,
    pub level: RiskLevel,
    /// Client-assigned at assembly; a remote backend may overwrite it with
    /// its own server time on save.
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries_are_exact() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(19), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(20), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::High);
    }

    #[test]
    fn non_male_genders_share_thresholds() {
        assert_eq!(Gender::Female.waist_threshold_cm(), 88.0);
        assert_eq!(Gender::Other.waist_threshold_cm(), 88.0);
        assert_eq!(Gender::Male.waist_threshold_cm(), 102.0);
        assert_eq!(Gender::Female.alcohol_threshold_units(), 7);
        assert_eq!(Gender::Other.alcohol_threshold_units(), 7);
        assert_eq!(Gender::Male.alcohol_threshold_units(), 14);
    }
}
