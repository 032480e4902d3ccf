//! Composite ATC score computation
//!
//! The composite score is the arithmetic mean of all trait values, rounded
//! to one decimal place with round-half-away-from-zero. The function is pure
//! and deterministic, which is what makes `AnimalRecord::score` a derivable
//! cache rather than independent state.

use crate::record::{Trait, TraitVector};

/// Compute the composite score for a trait vector.
///
/// The trait set is fixed and non-empty by construction (enforced by the
/// validator), so the mean is always defined. Result is in [1, 9] for any
/// well-formed vector.
#[must_use]
pub fn composite_score(traits: &TraitVector) -> f64 {
    let sum: u32 = traits.scores().iter().map(|&s| u32::from(s)).sum();
    let mean = f64::from(sum) / Trait::COUNT as f64;
    round_one_decimal(mean)
}

/// Round to one decimal place, half away from zero.
///
/// `f64::round` rounds halfway cases away from zero, which matches the
/// reporting convention (7.75 → 7.8).
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn vector_from(values: [u8; 8]) -> TraitVector {
        let map: BTreeMap<String, u8> = Trait::ALL
            .iter()
            .zip(values)
            .map(|(t, v)| (t.as_str().to_string(), v))
            .collect();
        TraitVector::from_map(&map).unwrap()
    }

    #[test]
    fn test_uniform_vector_scores_its_value() {
        for v in 1..=9u8 {
            let traits = vector_from([v; 8]);
            assert!((composite_score(&traits) - f64::from(v)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // Sum 62 over 8 traits = 7.75, reported as 7.8
        let traits = vector_from([8, 8, 8, 8, 8, 8, 8, 6]);
        assert!((composite_score(&traits) - 7.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_rounded_to_one_decimal() {
        // Sum 29 over 8 traits = 3.625, reported as 3.6
        let traits = vector_from([1, 2, 3, 4, 5, 6, 7, 1]);
        assert!((composite_score(&traits) - 3.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_deterministic() {
        let traits = vector_from([3, 9, 1, 7, 5, 2, 8, 4]);
        let first = composite_score(&traits);
        for _ in 0..100 {
            assert!((composite_score(&traits) - first).abs() < f64::EPSILON);
        }
    }
}
