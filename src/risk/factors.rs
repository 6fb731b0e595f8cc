//! One pure evaluator per risk dimension.
//!
//! Each evaluator is a total function over validated inputs and returns a
//! non-negative score contribution plus an advisory message when the factor
//! is outside its safe band. Evaluation order never changes a score;
//! [`evaluate_all`] fixes the declaration order the precaution list is
//! assembled in.

use crate::core::{FactorResult, Gender, HealthInput, RiskFactor};

pub const MSG_AGE: &str = "Regular check-ups are crucial given your age.";
pub const MSG_BMI_UNDERWEIGHT: &str =
    "Your BMI is in the underweight range. Consult a doctor about healthy weight gain.";
pub const MSG_BMI_OVERWEIGHT: &str =
    "Your BMI is in the overweight range. Focus on portion control and moderate exercise.";
pub const MSG_BMI_OBESE: &str = "Your BMI is in the obese range. This is a significant risk factor. Please consult a doctor for a weight management plan.";
pub const MSG_WAIST: &str = "Your waist circumference is high, indicating increased risk. Focus on reducing abdominal fat through diet and exercise.";
pub const MSG_SMOKING: &str = "Smoking is a major risk factor. Quitting is the single best thing you can do for your heart health.";
pub const MSG_EXERCISE: &str =
    "Aim for at least 150 minutes of moderate exercise (like brisk walking) per week.";
pub const MSG_STEPS: &str =
    "Your daily step count is low. Try to gradually increase your daily walking.";
pub const MSG_DIET: &str =
    "High intake of junk food is detrimental. Focus on whole foods, fruits, and vegetables.";
pub const MSG_ALCOHOL: &str =
    "Your alcohol consumption is high. Please consider reducing it to recommended limits (or less).";
pub const MSG_SLEEP: &str =
    "Aim for 7-8 hours of quality sleep per night, as poor sleep affects heart health.";
pub const MSG_STRESS: &str = "High stress levels contribute to heart risk. Explore stress-management techniques like mindfulness, yoga, or hobbies.";
pub const MSG_FAMILY_HISTORY: &str =
    "You have a family history of heart disease, making proactive care very important.";
pub const MSG_BLOOD_PRESSURE: &str =
    "Managing your high blood pressure is critical. Follow your doctor's advice carefully.";
pub const MSG_DIABETES: &str =
    "Diabetes significantly increases heart risk. Diligent blood sugar control is essential.";
pub const MSG_CHOLESTEROL_VERY_HIGH: &str = "Your cholesterol is very high. Discuss dietary changes and potential treatment with your doctor immediately.";
pub const MSG_CHOLESTEROL_ELEVATED: &str =
    "Your cholesterol is elevated. Discuss dietary changes and potential treatment with your doctor.";

/// One point per five years past 30; the advisory only fires past 45.
pub fn age_risk(age: u32) -> FactorResult {
    if age <= 30 {
        return FactorResult::safe(RiskFactor::Age);
    }
    let score = (age - 30) / 5;
    if age > 45 {
        FactorResult::flagged(RiskFactor::Age, score, MSG_AGE)
    } else {
        FactorResult::scored(RiskFactor::Age, score)
    }
}

pub fn bmi_risk(bmi: f64) -> FactorResult {
    if bmi < 18.5 {
        FactorResult::flagged(RiskFactor::Bmi, 2, MSG_BMI_UNDERWEIGHT)
    } else if bmi >= 30.0 {
        FactorResult::flagged(RiskFactor::Bmi, 10, MSG_BMI_OBESE)
    } else if bmi >= 25.0 {
        FactorResult::flagged(RiskFactor::Bmi, 5, MSG_BMI_OVERWEIGHT)
    } else {
        FactorResult::safe(RiskFactor::Bmi)
    }
}

pub fn waist_risk(waist_cm: f64, gender: Gender) -> FactorResult {
    if waist_cm > gender.waist_threshold_cm() {
        FactorResult::flagged(RiskFactor::Waist, 7, MSG_WAIST)
    } else {
        FactorResult::safe(RiskFactor::Waist)
    }
}

pub fn smoking_risk(smoker: bool) -> FactorResult {
    if smoker {
        FactorResult::flagged(RiskFactor::Smoking, 10, MSG_SMOKING)
    } else {
        FactorResult::safe(RiskFactor::Smoking)
    }
}

pub fn exercise_risk(hours_per_week: f64) -> FactorResult {
    if hours_per_week < 2.5 {
        FactorResult::flagged(RiskFactor::Exercise, 5, MSG_EXERCISE)
    } else {
        FactorResult::safe(RiskFactor::Exercise)
    }
}

/// The steps message is suppressed downstream when the exercise advisory
/// already fired; the score contribution always counts.
pub fn steps_risk(steps_per_day: u32) -> FactorResult {
    if steps_per_day < 5000 {
        FactorResult::flagged(RiskFactor::Steps, 3, MSG_STEPS)
    } else {
        FactorResult::safe(RiskFactor::Steps)
    }
}

pub fn diet_risk(junk_food_per_week: u32) -> FactorResult {
    if junk_food_per_week > 3 {
        FactorResult::flagged(RiskFactor::Diet, 4, MSG_DIET)
    } else {
        FactorResult::safe(RiskFactor::Diet)
    }
}

pub fn alcohol_risk(units_per_week: u32, gender: Gender) -> FactorResult {
    if units_per_week > gender.alcohol_threshold_units() {
        FactorResult::flagged(RiskFactor::Alcohol, 3, MSG_ALCOHOL)
    } else {
        FactorResult::safe(RiskFactor::Alcohol)
    }
}

pub fn sleep_risk(hours_per_night: f64) -> FactorResult {
    if hours_per_night < 6.0 || hours_per_night > 9.0 {
        FactorResult::flagged(RiskFactor::Sleep, 2, MSG_SLEEP)
    } else {
        FactorResult::safe(RiskFactor::Sleep)
    }
}

pub fn stress_risk(level: u8) -> FactorResult {
    if level == 3 {
        FactorResult::flagged(RiskFactor::Stress, 3, MSG_STRESS)
    } else {
        FactorResult::safe(RiskFactor::Stress)
    }
}

pub fn family_history_risk(family_history: bool) -> FactorResult {
    if family_history {
        FactorResult::flagged(RiskFactor::FamilyHistory, 5, MSG_FAMILY_HISTORY)
    } else {
        FactorResult::safe(RiskFactor::FamilyHistory)
    }
}

pub fn blood_pressure_risk(high_blood_pressure: bool) -> FactorResult {
    if high_blood_pressure {
        FactorResult::flagged(RiskFactor::BloodPressure, 8, MSG_BLOOD_PRESSURE)
    } else {
        FactorResult::safe(RiskFactor::BloodPressure)
    }
}

pub fn diabetes_risk(diabetes: bool) -> FactorResult {
    if diabetes {
        FactorResult::flagged(RiskFactor::Diabetes, 8, MSG_DIABETES)
    } else {
        FactorResult::safe(RiskFactor::Diabetes)
    }
}

/// An absent lab value is a valid zero-contribution state, not an error.
pub fn cholesterol_risk(cholesterol_mg_dl: Option<u32>) -> FactorResult {
    match cholesterol_mg_dl {
        Some(c) if c > 240 => {
            FactorResult::flagged(RiskFactor::Cholesterol, 8, MSG_CHOLESTEROL_VERY_HIGH)
        }
        Some(c) if c > 200 => {
            FactorResult::flagged(RiskFactor::Cholesterol, 4, MSG_CHOLESTEROL_ELEVATED)
        }
        _ => FactorResult::safe(RiskFactor::Cholesterol),
    }
}

/// Run every evaluator against one profile, in the declaration order the
/// precaution list is built from.
pub fn evaluate_all(input: &HealthInput) -> Vec<FactorResult> {
    vec![
        age_risk(input.age),
        bmi_risk(input.bmi),
        waist_risk(input.waist_cm, input.gender),
        smoking_risk(input.smoker),
        exercise_risk(input.exercise_hours_per_week),
        steps_risk(input.steps_per_day),
        diet_risk(input.junk_food_per_week),
        alcohol_risk(input.alcohol_units_per_week, input.gender),
        sleep_risk(input.sleep_hours),
        stress_risk(input.stress_level),
        family_history_risk(input.family_history),
        blood_pressure_risk(input.high_blood_pressure),
        diabetes_risk(input.diabetes),
        cholesterol_risk(input.cholesterol_mg_dl),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_at_or_below_30_is_safe() {
        assert_eq!(age_risk(30), FactorResult::safe(RiskFactor::Age));
        assert_eq!(age_risk(1), FactorResult::safe(RiskFactor::Age));
    }

    #[test]
    fn age_scores_one_point_per_five_years_past_30() {
        assert_eq!(age_risk(31).score, 0);
        assert_eq!(age_risk(35).score, 1);
        assert_eq!(age_risk(50).score, 4);
        assert_eq!(age_risk(120).score, 18);
    }

    #[test]
    fn age_message_only_fires_past_45() {
        assert_eq!(age_risk(45).message, None);
        assert_eq!(age_risk(46).message, Some(MSG_AGE));
    }

    #[test]
    fn bmi_bands() {
        assert_eq!(bmi_risk(18.4).score, 2);
        assert_eq!(bmi_risk(18.5).score, 0);
        assert_eq!(bmi_risk(24.9).score, 0);
        assert_eq!(bmi_risk(25.0).score, 5);
        assert_eq!(bmi_risk(29.9).score, 5);
        assert_eq!(bmi_risk(30.0).score, 10);
    }

    #[test]
    fn waist_threshold_depends_on_gender() {
        assert_eq!(waist_risk(102.0, Gender::Male).score, 0);
        assert_eq!(waist_risk(102.5, Gender::Male).score, 7);
        assert_eq!(waist_risk(89.0, Gender::Female).score, 7);
        assert_eq!(waist_risk(89.0, Gender::Other).score, 7);
        assert_eq!(waist_risk(89.0, Gender::Male).score, 0);
    }

    #[test]
    fn exercise_and_steps_score_independently() {
        assert_eq!(exercise_risk(2.5).score, 0);
        assert_eq!(exercise_risk(2.4).score, 5);
        assert_eq!(steps_risk(5000).score, 0);
        assert_eq!(steps_risk(4999).score, 3);
    }

    #[test]
    fn sleep_is_risky_at_both_extremes() {
        assert_eq!(sleep_risk(5.9).score, 2);
        assert_eq!(sleep_risk(6.0).score, 0);
        assert_eq!(sleep_risk(9.0).score, 0);
        assert_eq!(sleep_risk(9.1).score, 2);
    }

    #[test]
    fn only_maximum_stress_scores() {
        assert_eq!(stress_risk(1).score, 0);
        assert_eq!(stress_risk(2).score, 0);
        assert_eq!(stress_risk(3).score, 3);
    }

    #[test]
    fn cholesterol_bands_and_absence() {
        assert_eq!(cholesterol_risk(None).score, 0);
        assert_eq!(cholesterol_risk(Some(200)).score, 0);
        assert_eq!(cholesterol_risk(Some(201)).score, 4);
        assert_eq!(cholesterol_risk(Some(240)).score, 4);
        assert_eq!(cholesterol_risk(Some(241)).score, 8);
        assert_eq!(
            cholesterol_risk(Some(260)).message,
            Some(MSG_CHOLESTEROL_VERY_HIGH)
        );
    }

    #[test]
    fn alcohol_threshold_depends_on_gender() {
        assert_eq!(alcohol_risk(14, Gender::Male).score, 0);
        assert_eq!(alcohol_risk(15, Gender::Male).score, 3);
        assert_eq!(alcohol_risk(8, Gender::Female).score, 3);
        assert_eq!(alcohol_risk(8, Gender::Other).score, 3);
    }

    #[test]
    fn boolean_factors() {
        assert_eq!(smoking_risk(true).score, 10);
        assert_eq!(smoking_risk(false).score, 0);
        assert_eq!(family_history_risk(true).score, 5);
        assert_eq!(blood_pressure_risk(true).score, 8);
        assert_eq!(diabetes_risk(true).score, 8);
        assert_eq!(diet_risk(4).score, 4);
        assert_eq!(diet_risk(3).score, 0);
    }
}
