//! Directional trend between the two most recent assessments.

use serde::{Deserialize, Serialize};

use crate::core::HealthRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "Risk increasing",
            TrendDirection::Decreasing => "Risk decreasing",
            TrendDirection::Stable => "Risk stable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Absolute point difference between the two newest scores.
    pub magnitude: u32,
}

/// Compare the two newest records of a history ordered newest-first.
///
/// Returns `None` when fewer than two records exist; insufficient history is
/// a defined unavailable state, not an error.
pub fn analyze_trend(records: &[HealthRecord]) -> Option<Trend> {
    let (latest, previous) = match records {
        [latest, previous, ..] => (latest, previous),
        _ => return None,
    };

    let delta = latest.score as i64 - previous.score as i64;
    let direction = match delta {
        d if d > 0 => TrendDirection::Increasing,
        d if d < 0 => TrendDirection::Decreasing,
        _ => TrendDirection::Stable,
    };

    Some(Trend {
        direction,
        magnitude: delta.unsigned_abs() as u32,
    })
}
