//! The risk-scoring engine: per-factor evaluators, aggregation, the
//! simulated display percentage, and history trend analysis.

pub mod aggregator;
pub mod factors;
pub mod predictor;
pub mod trend;

pub use aggregator::{aggregate, MSG_DISCLAIMER, MSG_POSITIVE};
pub use predictor::{simulated_percentage, simulated_percentage_with};
pub use trend::{analyze_trend, Trend, TrendDirection};

use crate::core::{HealthInput, RiskAssessment};

/// Score one validated profile: run every evaluator and aggregate.
///
/// Deterministic for a given input; the simulated predictor is a separate,
/// explicitly randomized call.
pub fn evaluate_risk(input: &HealthInput) -> RiskAssessment {
    let results = factors::evaluate_all(input);
    aggregator::aggregate(input, &results)
}
