//! Aggregation Engine - population-level distributions and summary stats
//!
//! All functions here are pure computations over a record snapshot. An empty
//! dataset is always a valid input: distributions come back with zero counts
//! and zero percentages, never an arithmetic error.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{AnimalRecord, Breed, Region};
use crate::scoring;

/// One histogram bucket over a half-open score range `[low, high)`.
///
/// The final bucket of a distribution is closed on both ends so the top of
/// the scale is not dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBucket {
    /// Inclusive lower edge.
    pub low: f64,
    /// Exclusive upper edge (inclusive for the final bucket).
    pub high: f64,
    /// Records falling in the range.
    pub count: usize,
    /// Integer-rounded share of the dataset, 0 for an empty dataset.
    pub percentage: f64,
}

/// Share of the dataset held by one breed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedShare {
    /// The breed.
    pub breed: Breed,
    /// Records of this breed (always > 0; zero-count breeds are omitted).
    pub count: usize,
    /// Integer-rounded share of the dataset.
    pub percentage: f64,
}

/// Share of the dataset held by one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    /// The region.
    pub region: Region,
    /// Records from this region (always > 0; zero-count regions are omitted).
    pub count: usize,
    /// Integer-rounded share of the dataset.
    pub percentage: f64,
}

/// Headline dataset statistics for reporting dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total records in the dataset.
    pub total_animals: usize,
    /// Records evaluated on the `as_of` date.
    pub today_evaluations: usize,
    /// Population average composite score, `None` for an empty dataset.
    pub average_score: Option<f64>,
}

fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64 * 100.0).round()
    }
}

/// Histogram of composite scores over caller-supplied bucket edges.
///
/// A record counts toward bucket `i` when its score is in
/// `[edges[i], edges[i + 1])`; the final bucket also accepts scores equal to
/// the last edge. Bucket ranges are therefore contiguous and non-overlapping,
/// and for a non-empty dataset the counts sum to the dataset size.
///
/// # Errors
///
/// [`Error::Configuration`] when fewer than two edges are given or the edges
/// are not strictly increasing.
pub fn score_distribution(records: &[AnimalRecord], edges: &[f64]) -> Result<Vec<ScoreBucket>> {
    if edges.len() < 2 {
        return Err(Error::Configuration(format!(
            "bucket edges need at least 2 values, got {}",
            edges.len()
        )));
    }
    for pair in edges.windows(2) {
        if !(pair[0] < pair[1]) {
            return Err(Error::Configuration(format!(
                "bucket edges must be strictly increasing: {} !< {}",
                pair[0], pair[1]
            )));
        }
    }

    let buckets = edges.len() - 1;
    let mut counts = vec![0usize; buckets];
    for record in records {
        let score = record.score();
        for i in 0..buckets {
            let last = i == buckets - 1;
            let in_range = score >= edges[i] && (score < edges[i + 1] || (last && score <= edges[i + 1]));
            if in_range {
                counts[i] += 1;
                break;
            }
        }
    }

    let total = records.len();
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| ScoreBucket {
            low: edges[i],
            high: edges[i + 1],
            count,
            percentage: share_percent(count, total),
        })
        .collect())
}

/// Per-breed share of the dataset.
///
/// One entry per breed actually present (no zero-count entries), ordered by
/// descending count and then breed name ascending so equal-count ties have a
/// stable output order.
#[must_use]
pub fn breed_distribution(records: &[AnimalRecord]) -> Vec<BreedShare> {
    let total = records.len();
    let mut counts: FxHashMap<Breed, usize> = FxHashMap::default();
    for record in records {
        *counts.entry(record.breed()).or_default() += 1;
    }

    let mut shares: Vec<BreedShare> = counts
        .into_iter()
        .map(|(breed, count)| BreedShare {
            breed,
            count,
            percentage: share_percent(count, total),
        })
        .collect();
    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.breed.as_str().cmp(b.breed.as_str()))
    });
    shares
}

/// Per-region share of the dataset, same contract as [`breed_distribution`].
#[must_use]
pub fn region_distribution(records: &[AnimalRecord]) -> Vec<RegionShare> {
    let total = records.len();
    let mut counts: FxHashMap<Region, usize> = FxHashMap::default();
    for record in records {
        *counts.entry(record.region()).or_default() += 1;
    }

    let mut shares: Vec<RegionShare> = counts
        .into_iter()
        .map(|(region, count)| RegionShare {
            region,
            count,
            percentage: share_percent(count, total),
        })
        .collect();
    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.region.as_str().cmp(b.region.as_str()))
    });
    shares
}

/// Headline statistics against an explicit `as_of` date.
///
/// The date is a parameter rather than an ambient clock read, so dashboard
/// figures are reproducible in tests.
#[must_use]
pub fn summary(records: &[AnimalRecord], as_of: NaiveDate) -> SummaryStats {
    let total = records.len();
    let today = records
        .iter()
        .filter(|r| r.created_at().date_naive() == as_of)
        .count();
    let average_score = if total == 0 {
        None
    } else {
        let sum: f64 = records.iter().map(AnimalRecord::score).sum();
        Some(scoring::round_one_decimal(sum / total as f64))
    };

    SummaryStats {
        total_animals: total,
        today_evaluations: today,
        average_score,
    }
}
