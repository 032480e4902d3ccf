//! Property-based tests for herdscore
//!
//! Mathematical invariants of the scoring and aggregation engines:
//! - score range and rounding
//! - bucket count conservation and percentage tolerance
//! - leaderboard strict total order
//! - trend window shape
//!
//! Run with ProptestConfig::with_cases(100); must stay fast enough for a
//! pre-commit hook.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use herdscore::record::validator;
use herdscore::{scoring, trend, AnimalRecord, Breed, RecordDraft, Region, Trait, TraitVector};
use proptest::prelude::*;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Generate a full 8-trait map with values in [1, 9]
fn arb_trait_values() -> impl Strategy<Value = [u8; 8]> {
    proptest::array::uniform8(1u8..=9)
}

fn trait_map(values: [u8; 8]) -> BTreeMap<String, u8> {
    Trait::ALL
        .iter()
        .zip(values)
        .map(|(t, v)| (t.as_str().to_string(), v))
        .collect()
}

/// Generate a herd of validated records with varied breeds, regions,
/// timestamps, and trait vectors
fn arb_herd(max: usize) -> impl Strategy<Value = Vec<AnimalRecord>> {
    proptest::collection::vec(
        (arb_trait_values(), 0usize..8, 0usize..8, 0i64..30 * 24),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (values, breed_ix, region_ix, hours_back))| {
                let draft = RecordDraft {
                    id: format!("cattle_{i:04}"),
                    name: None,
                    breed: Breed::ALL[breed_ix].as_str().to_string(),
                    age: 4,
                    region: Region::ALL[region_ix].as_str().to_string(),
                    traits: trait_map(values),
                    created_at: Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
                        - Duration::hours(hours_back),
                    farmer_id: "farmer_1".to_string(),
                };
                validator::validate(draft).unwrap()
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========================================================================
    // Scoring Engine Properties
    // ========================================================================

    /// Property: composite score is in [1, 9] and equals the mean rounded
    /// to one decimal
    #[test]
    fn prop_score_in_range_and_rounded(values in arb_trait_values()) {
        let vector = TraitVector::from_map(&trait_map(values)).unwrap();
        let score = scoring::composite_score(&vector);

        prop_assert!(score >= 1.0 && score <= 9.0);

        let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
        let expected = (f64::from(sum) / 8.0 * 10.0).round() / 10.0;
        prop_assert!((score - expected).abs() < f64::EPSILON);
    }

    /// Property: scoring is a pure function of the vector
    #[test]
    fn prop_score_deterministic(values in arb_trait_values()) {
        let vector = TraitVector::from_map(&trait_map(values)).unwrap();
        prop_assert_eq!(
            scoring::composite_score(&vector).to_bits(),
            scoring::composite_score(&vector).to_bits()
        );
    }

    // ========================================================================
    // Aggregation Engine Properties
    // ========================================================================

    /// Property: bucket counts sum exactly to the dataset size
    #[test]
    fn prop_distribution_conserves_count(herd in arb_herd(40)) {
        let buckets =
            herdscore::aggregate::score_distribution(&herd, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0])
                .unwrap();
        let total: usize = buckets.iter().map(|b| b.count).sum();
        prop_assert_eq!(total, herd.len());
    }

    /// Property: percentages sum to 100 within ±(buckets × 0.5) for a
    /// non-empty dataset
    #[test]
    fn prop_distribution_percentage_tolerance(herd in arb_herd(40)) {
        prop_assume!(!herd.is_empty());
        let buckets =
            herdscore::aggregate::score_distribution(&herd, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0])
                .unwrap();
        let pct_sum: f64 = buckets.iter().map(|b| b.percentage).sum();
        prop_assert!((pct_sum - 100.0).abs() <= buckets.len() as f64 * 0.5);
    }

    /// Property: breed distribution never reports a zero-count breed, its
    /// counts conserve the dataset size, and ordering is stable
    #[test]
    fn prop_breed_distribution_no_zero_entries(herd in arb_herd(40)) {
        let shares = herdscore::aggregate::breed_distribution(&herd);
        let total: usize = shares.iter().map(|s| s.count).sum();
        prop_assert_eq!(total, herd.len());
        for share in &shares {
            prop_assert!(share.count > 0);
        }
        // Ordering: descending count, name ascending on ties
        for pair in shares.windows(2) {
            let ordered = pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count
                    && pair[0].breed.as_str() < pair[1].breed.as_str());
            prop_assert!(ordered);
        }
    }

    // ========================================================================
    // Leaderboard Properties
    // ========================================================================

    /// Property: ranking is a strict total order with dense 1-based ranks
    #[test]
    fn prop_leaderboard_strict_total_order(herd in arb_herd(40)) {
        let board = herdscore::leaderboard::rank(&herd, None, |_| None);
        prop_assert_eq!(board.len(), herd.len());

        for (i, entry) in board.iter().enumerate() {
            prop_assert_eq!(entry.rank, i + 1);
        }
        for pair in board.windows(2) {
            let a = &pair[0].record;
            let b = &pair[1].record;
            let strictly_above = a.score() > b.score()
                || (a.score() == b.score() && a.created_at() < b.created_at())
                || (a.score() == b.score()
                    && a.created_at() == b.created_at()
                    && a.id() < b.id());
            prop_assert!(strictly_above);
        }
    }

    /// Property: top-N is always the prefix of the full ranking
    #[test]
    fn prop_top_n_is_prefix(herd in arb_herd(40), n in 0usize..50) {
        let full = herdscore::leaderboard::rank(&herd, None, |_| None);
        let top = herdscore::leaderboard::rank(&herd, Some(n), |_| None);
        prop_assert_eq!(top.len(), n.min(herd.len()));
        prop_assert_eq!(top.as_slice(), &full[..top.len()]);
    }

    // ========================================================================
    // Trend Generator Properties
    // ========================================================================

    /// Property: a window of N days yields exactly N consecutive points
    /// ending at the clock date
    #[test]
    fn prop_trend_window_shape(herd in arb_herd(40), window in 1u32..120) {
        let as_of = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let points = trend::daily_trend(&herd, window, as_of).unwrap();

        prop_assert_eq!(points.len(), window as usize);
        prop_assert_eq!(points.last().unwrap().date, as_of);
        for pair in points.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    /// Property: trend evaluation counts never exceed the dataset size and
    /// empty days carry no average
    #[test]
    fn prop_trend_counts_bounded(herd in arb_herd(40), window in 1u32..120) {
        let as_of = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let points = trend::daily_trend(&herd, window, as_of).unwrap();

        let counted: usize = points.iter().map(|p| p.evaluations).sum();
        prop_assert!(counted <= herd.len());
        for point in &points {
            if point.evaluations == 0 {
                prop_assert_eq!(point.avg_score, None);
            } else {
                prop_assert!(point.avg_score.is_some());
            }
        }
    }
}
