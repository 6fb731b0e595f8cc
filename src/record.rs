//! Builds the immutable [`HealthRecord`] persisted after an assessment.

use chrono::{DateTime, Utc};

use crate::core::{HealthInput, HealthRecord, RiskAssessment};

/// Merge a validated profile and its assessment into a record, stamped with
/// the given client time. The simulated predictor value is display-only and
/// never persisted.
pub fn assemble_record_at(
    input: &HealthInput,
    assessment: &RiskAssessment,
    recorded_at: DateTime<Utc>,
) -> HealthRecord {
    HealthRecord {
        id: None,
        name: input.name.clone(),
        gender: input.gender,
        age: input.age,
        weight_kg: input.weight_kg,
        height_cm: input.height_cm,
        waist_cm: input.waist_cm,
        bmi: round2(input.bmi),
        steps_per_day: input.steps_per_day,
        junk_food_per_week: input.junk_food_per_week,
        exercise_hours_per_week: input.exercise_hours_per_week,
        alcohol_units_per_week: input.alcohol_units_per_week,
        smoker: input.smoker,
        sleep_hours: input.sleep_hours,
        stress_level: input.stress_level,
        family_history: input.family_history,
        high_blood_pressure: input.high_blood_pressure,
        diabetes: input.diabetes,
        cholesterol_mg_dl: input.cholesterol_mg_dl,
        rbc_million_per_ul: input.rbc_million_per_ul,
        wbc_thousand_per_ul: input.wbc_thousand_per_ul,
        score: assessment.total_score,
        level: assessment.level,
        recorded_at,
    }
}

/// [`assemble_record_at`] stamped with the current time. A repository backed
/// by a remote store may overwrite the timestamp with server time on save.
pub fn assemble_record(input: &HealthInput, assessment: &RiskAssessment) -> HealthRecord {
    assemble_record_at(input, assessment, Utc::now())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawInput;
    use crate::risk::evaluate_risk;
    use chrono::TimeZone;

    #[test]
    fn record_carries_inputs_score_and_rounded_bmi() {
        let input = RawInput {
            gender: Some("Male".to_string()),
            age: 50,
            weight: 90.0,
            height: 170.0,
            waist: 110.0,
            smoking: 1,
            ..RawInput::default()
        }
        .validate()
        .unwrap();
        let assessment = evaluate_risk(&input);
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();

        let record = assemble_record_at(&input, &assessment, at);
        assert_eq!(record.id, None);
        assert_eq!(record.score, assessment.total_score);
        assert_eq!(record.level, assessment.level);
        assert_eq!(record.recorded_at, at);
        // 90 / 1.7^2 = 31.1418..., persisted to two decimals.
        assert_eq!(record.bmi, 31.14);
        assert!(record.smoker);
    }

    #[test]
    fn unscored_labs_are_carried_through() {
        let input = RawInput {
            age: 30,
            weight: 70.0,
            height: 175.0,
            waist: 80.0,
            rbc: Some(4.9),
            wbc: Some(6.2),
            ..RawInput::default()
        }
        .validate()
        .unwrap();
        let assessment = evaluate_risk(&input);
        let record = assemble_record(&input, &assessment);
        assert_eq!(record.rbc_million_per_ul, Some(4.9));
        assert_eq!(record.wbc_thousand_per_ul, Some(6.2));
    }
}
