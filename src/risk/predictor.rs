//! Simulated "AI" risk percentage shown alongside the composite score.
//!
//! Display-only. The jitter term makes it non-deterministic by design, so it
//! must never feed back into scoring, storage, or trend analysis. The random
//! source is injectable so tests can pin it.

use rand::Rng;

use crate::core::SCORE_CAP;

pub const MIN_PERCENT: f64 = 1.0;
pub const MAX_PERCENT: f64 = 95.0;
const JITTER_SPAN: f64 = 2.5;

/// Derive the display percentage from the composite score and age, drawing
/// jitter from the given source. Always in `[MIN_PERCENT, MAX_PERCENT]`.
pub fn simulated_percentage_with<R: Rng>(total_score: u32, age: u32, rng: &mut R) -> f64 {
    let base = (total_score as f64 / SCORE_CAP as f64) * 50.0;
    let jitter = rng.gen_range(-JITTER_SPAN..=JITTER_SPAN);
    (base + jitter + age as f64 / 10.0).clamp(MIN_PERCENT, MAX_PERCENT)
}

/// [`simulated_percentage_with`] drawing from the thread-local generator.
pub fn simulated_percentage(total_score: u32, age: u32) -> f64 {
    simulated_percentage_with(total_score, age, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stays_in_bounds_at_the_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let low = simulated_percentage_with(0, 1, &mut rng);
            assert!((MIN_PERCENT..=MAX_PERCENT).contains(&low));
            let high = simulated_percentage_with(SCORE_CAP, 120, &mut rng);
            assert!((MIN_PERCENT..=MAX_PERCENT).contains(&high));
        }
    }

    #[test]
    fn floors_at_one_percent_for_young_low_risk() {
        // base 0 + age 0.1 + jitter <= 2.6 would otherwise dip below 1.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(simulated_percentage_with(0, 1, &mut rng) >= MIN_PERCENT);
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let a = simulated_percentage_with(30, 50, &mut StdRng::seed_from_u64(9));
        let b = simulated_percentage_with(30, 50, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_stays_within_the_span() {
        // base for score 30 is 25.0, plus age/10 = 5.0.
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let value = simulated_percentage_with(30, 50, &mut rng);
            assert!((30.0 - JITTER_SPAN..=30.0 + JITTER_SPAN).contains(&value));
        }
    }
}
