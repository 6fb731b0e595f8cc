//! The validation boundary: loose, form-shaped input is checked and coerced
//! here so the scoring engine only ever sees well-formed [`HealthInput`].

use serde::{Deserialize, Serialize};

use super::{Gender, HealthInput, HeartcheckError, Result};

/// An unvalidated health profile, shaped like the submitted form payload.
///
/// Field names follow the original form ids (camelCase), so a profile dumped
/// by the web front-end deserializes directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInput {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub waist: f64,
    pub steps: u32,
    pub junk_food: u32,
    pub exercise: f64,
    pub alcohol: u32,
    pub smoking: u8,
    pub sleep: f64,
    pub stress: u8,
    pub family_history: u8,
    pub high_bp: bool,
    pub diabetes: bool,
    pub cholesterol: Option<u32>,
    pub rbc: Option<f64>,
    pub wbc: Option<f64>,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            name: None,
            gender: None,
            age: 0,
            weight: 0.0,
            height: 0.0,
            waist: 0.0,
            steps: 0,
            junk_food: 0,
            exercise: 0.0,
            alcohol: 0,
            smoking: 0,
            sleep: 0.0,
            stress: 1,
            family_history: 0,
            high_bp: false,
            diabetes: false,
            cholesterol: None,
            rbc: None,
            wbc: None,
        }
    }
}

impl RawInput {
    /// Validate all fields and build a [`HealthInput`], computing BMI once.
    ///
    /// The first out-of-range field fails with an error naming the field and
    /// its expected range.
    pub fn validate(&self) -> Result<HealthInput> {
        check_range("age", self.age as f64, 1.0, 120.0)?;
        check_range("weight", self.weight, 1.0, 500.0)?;
        check_range("height", self.height, 100.0, 250.0)?;
        check_range("waist", self.waist, 1.0, 200.0)?;
        check_range("exercise", self.exercise, 0.0, 168.0)?;
        check_range("sleep", self.sleep, 0.0, 24.0)?;
        check_range("stress", self.stress as f64, 1.0, 3.0)?;
        check_range("smoking", self.smoking as f64, 0.0, 1.0)?;
        check_range("familyHistory", self.family_history as f64, 0.0, 1.0)?;
        if let Some(cholesterol) = self.cholesterol {
            check_range("cholesterol", cholesterol as f64, 50.0, 500.0)?;
        }

        // The height range check above guarantees a positive divisor.
        let height_m = self.height / 100.0;
        let bmi = self.weight / (height_m * height_m);

        Ok(HealthInput {
            name: normalize_name(self.name.as_deref()),
            gender: parse_gender(self.gender.as_deref()),
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            waist_cm: self.waist,
            bmi,
            steps_per_day: self.steps,
            junk_food_per_week: self.junk_food,
            exercise_hours_per_week: self.exercise,
            alcohol_units_per_week: self.alcohol,
            smoker: self.smoking == 1,
            sleep_hours: self.sleep,
            stress_level: self.stress,
            family_history: self.family_history == 1,
            high_blood_pressure: self.high_bp,
            diabetes: self.diabetes,
            cholesterol_mg_dl: self.cholesterol,
            rbc_million_per_ul: self.rbc,
            wbc_thousand_per_ul: self.wbc,
        })
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HeartcheckError::invalid_input(field, min, max, value))
    }
}

/// Anything that is not exactly "Male" or "Female" maps to [`Gender::Other`],
/// which shares the female thresholds.
fn parse_gender(raw: Option<&str>) -> Gender {
    match raw.map(str::trim) {
        Some(g) if g.eq_ignore_ascii_case("male") => Gender::Male,
        Some(g) if g.eq_ignore_ascii_case("female") => Gender::Female,
        _ => Gender::Other,
    }
}

fn normalize_name(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
}
