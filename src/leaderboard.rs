//! Leaderboard Ranker - deterministic ordering with dense 1-based ranks
//!
//! Sort key: composite score descending, then creation timestamp ascending
//! (the earlier evaluation ranks higher on a tie), then id ascending. The id
//! tie-break makes the order a strict total order, so no two entries ever
//! compare equal and ranks are simply 1..=n.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::AnimalRecord;

/// Fallback display name when a farmer id resolves to nobody.
pub const UNKNOWN_FARMER: &str = "Unknown Farmer";

/// One ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Dense 1-based rank.
    pub rank: usize,
    /// The underlying record.
    pub record: AnimalRecord,
    /// Attributed farmer display name.
    pub farmer_name: String,
}

fn ordering(a: &AnimalRecord, b: &AnimalRecord) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Rank the full population.
///
/// `top_n` truncates after the full sort; `None` keeps every record. The
/// `farmer_name` resolver attributes each entry, falling back to
/// [`UNKNOWN_FARMER`] when the reference is dangling.
#[must_use]
pub fn rank<F>(records: &[AnimalRecord], top_n: Option<usize>, farmer_name: F) -> Vec<LeaderboardEntry>
where
    F: Fn(&str) -> Option<String>,
{
    let mut sorted: Vec<&AnimalRecord> = records.iter().collect();
    sorted.sort_unstable_by(|a, b| ordering(a, b));

    let take = top_n.unwrap_or(sorted.len());
    sorted
        .into_iter()
        .take(take)
        .enumerate()
        .map(|(i, record)| LeaderboardEntry {
            rank: i + 1,
            record: record.clone(),
            farmer_name: farmer_name(record.farmer_id())
                .unwrap_or_else(|| UNKNOWN_FARMER.to_string()),
        })
        .collect()
}
