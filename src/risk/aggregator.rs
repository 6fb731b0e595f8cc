//! Combines factor results into a [`RiskAssessment`]: clamped composite
//! score, level classification, and the assembled precaution list.

use im::Vector;

use crate::core::{FactorResult, HealthInput, RiskAssessment, RiskFactor, RiskLevel, SCORE_CAP};

pub const MSG_POSITIVE: &str = "You're doing great! Keep up the healthy habits.";
pub const MSG_DISCLAIMER: &str = "Always consult a medical professional for personalized advice.";

/// Fold factor results into the final assessment.
///
/// The composite score is the plain sum of contributions clamped to
/// `[0, SCORE_CAP]`; the level is a step function of the clamped score.
pub fn aggregate(input: &HealthInput, results: &[FactorResult]) -> RiskAssessment {
    let raw_total: u32 = results.iter().map(|r| r.score).sum();
    let total_score = raw_total.min(SCORE_CAP);

    RiskAssessment {
        total_score,
        level: RiskLevel::from_score(total_score),
        bmi: input.bmi,
        precautions: collect_precautions(results),
    }
}

/// Assemble advisory messages in evaluator order.
///
/// One suppression rule applies: the steps advisory is dropped when the
/// exercise advisory already fired (first-writer-wins, as the original rule
/// set behaved). An all-safe profile gets a single positive message, and the
/// fixed disclaimer is always appended last.
fn collect_precautions(results: &[FactorResult]) -> Vector<String> {
    let exercise_flagged = results
        .iter()
        .any(|r| r.factor == RiskFactor::Exercise && r.message.is_some());

    let mut precautions: Vector<String> = results
        .iter()
        .filter(|r| !(r.factor == RiskFactor::Steps && exercise_flagged))
        .filter_map(|r| r.message)
        .map(String::from)
        .collect();

    if precautions.is_empty() {
        precautions.push_back(MSG_POSITIVE.to_string());
    }
    precautions.push_back(MSG_DISCLAIMER.to_string());
    precautions
}
