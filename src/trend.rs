//! Trend Generator - daily aggregate metrics over a bounded window
//!
//! The clock is an explicit argument, never an ambient `Utc::now()` read, so
//! trend output is deterministic and replayable in tests.

use chrono::{Days, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::AnimalRecord;
use crate::scoring;

/// Upper bound on the trend window (ten years of daily points).
pub const MAX_WINDOW_DAYS: u32 = 3650;

/// One day's aggregate evaluation metrics.
///
/// Generated fresh per query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar date of the point.
    pub date: NaiveDate,
    /// Evaluations recorded on that date.
    pub evaluations: usize,
    /// Average composite score for the date, `None` when no records fall on
    /// it (zero would bias downstream charts).
    pub avg_score: Option<f64>,
}

/// Produce exactly `window_days` daily points ending at `as_of` inclusive,
/// oldest first.
///
/// # Errors
///
/// [`Error::Configuration`] when `window_days` is zero, exceeds
/// [`MAX_WINDOW_DAYS`], or the window start falls outside the supported
/// calendar range.
pub fn daily_trend(
    records: &[AnimalRecord],
    window_days: u32,
    as_of: NaiveDate,
) -> Result<Vec<TrendPoint>> {
    if window_days == 0 {
        return Err(Error::Configuration(
            "trend window must cover at least 1 day".to_string(),
        ));
    }
    if window_days > MAX_WINDOW_DAYS {
        return Err(Error::Configuration(format!(
            "trend window of {window_days} days exceeds maximum of {MAX_WINDOW_DAYS}"
        )));
    }

    let start = as_of
        .checked_sub_days(Days::new(u64::from(window_days) - 1))
        .ok_or_else(|| {
            Error::Configuration(format!(
                "trend window of {window_days} days ending {as_of} underflows the calendar"
            ))
        })?;

    // Single pass over the snapshot, then one lookup per day.
    let mut per_day: FxHashMap<NaiveDate, (usize, f64)> = FxHashMap::default();
    for record in records {
        let day = record.created_at().date_naive();
        if day >= start && day <= as_of {
            let slot = per_day.entry(day).or_insert((0, 0.0));
            slot.0 += 1;
            slot.1 += record.score();
        }
    }

    let mut points = Vec::with_capacity(window_days as usize);
    let mut date = start;
    while date <= as_of {
        let point = match per_day.get(&date) {
            Some(&(count, sum)) => TrendPoint {
                date,
                evaluations: count,
                avg_score: Some(scoring::round_one_decimal(sum / count as f64)),
            },
            None => TrendPoint {
                date,
                evaluations: 0,
                avg_score: None,
            },
        };
        points.push(point);
        date = date.succ_opt().ok_or_else(|| {
            Error::Configuration(format!("trend window ending {as_of} overflows the calendar"))
        })?;
    }

    Ok(points)
}
