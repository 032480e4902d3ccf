//! Engine facade - the external interface of the scoring core
//!
//! [`Engine`] owns the record store and the farmer directory and wires the
//! pure computation modules (`scoring`, `aggregate`, `trend`, `leaderboard`,
//! `risk`) to them. Collaborators (UI, reporting API) call these methods and
//! render the returned payloads; no wire format is mandated here.

use chrono::NaiveDate;
use dashmap::DashMap;
use rand::Rng;
use tracing::trace;

use crate::aggregate::{self, BreedShare, RegionShare, ScoreBucket, SummaryStats};
use crate::error::{Error, Result};
use crate::leaderboard::{self, LeaderboardEntry};
use crate::record::{validator, AnimalRecord, RecordDraft, RecordStore};
use crate::risk::{self, RiskFlag};
use crate::trend::{self, TrendPoint};

/// Scoring and analytics engine over an in-memory herd dataset.
///
/// All query methods compute over a point-in-time snapshot of the store, so
/// they can run concurrently with writers without observing a partially
/// applied record.
#[derive(Debug, Default)]
pub struct Engine {
    store: RecordStore,
    farmers: DashMap<String, String>,
}

impl Engine {
    /// Create an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated record capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RecordStore::with_capacity(capacity),
            farmers: DashMap::new(),
        }
    }

    /// Number of records in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Register (or rename) a farmer for leaderboard attribution.
    pub fn register_farmer(&self, id: impl Into<String>, name: impl Into<String>) {
        self.farmers.insert(id.into(), name.into());
    }

    /// Validate a candidate and admit it to the dataset.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for malformed input or a duplicate id; the
    /// dataset is unchanged on failure.
    pub fn ingest(&self, candidate: RecordDraft) -> Result<AnimalRecord> {
        let record = validator::validate(candidate)?;
        self.store.insert(record.clone())?;
        Ok(record)
    }

    /// Replace a record's trait vector, revalidating and rescoring
    /// atomically. Returns the updated record.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an absent id, [`Error::Validation`] for a
    /// malformed trait map.
    pub fn update_traits(
        &self,
        id: &str,
        traits: &std::collections::BTreeMap<String, u8>,
    ) -> Result<AnimalRecord> {
        self.store.update_traits(id, traits)
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the id is absent.
    pub fn remove(&self, id: &str) -> Result<()> {
        self.store.remove(id)
    }

    /// Fetch a record by id.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the id is absent.
    pub fn get_record(&self, id: &str) -> Result<AnimalRecord> {
        self.store.get(id).ok_or_else(|| Error::NotFound {
            id: id.to_string(),
        })
    }

    /// Composite score for a record.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the id is absent.
    pub fn get_score(&self, id: &str) -> Result<f64> {
        self.get_record(id).map(|r| r.score())
    }

    /// Score histogram over caller-supplied bucket edges.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for malformed edges.
    pub fn score_distribution(&self, edges: &[f64]) -> Result<Vec<ScoreBucket>> {
        trace!(edges = edges.len(), "score distribution query");
        aggregate::score_distribution(&self.store.snapshot(), edges)
    }

    /// Per-breed share of the dataset.
    #[must_use]
    pub fn breed_distribution(&self) -> Vec<BreedShare> {
        aggregate::breed_distribution(&self.store.snapshot())
    }

    /// Per-region share of the dataset.
    #[must_use]
    pub fn region_distribution(&self) -> Vec<RegionShare> {
        aggregate::region_distribution(&self.store.snapshot())
    }

    /// Headline statistics against an explicit `as_of` date.
    #[must_use]
    pub fn summary(&self, as_of: NaiveDate) -> SummaryStats {
        aggregate::summary(&self.store.snapshot(), as_of)
    }

    /// Daily trend over a bounded window ending at `as_of` inclusive.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for a zero or oversized window.
    pub fn trend(&self, window_days: u32, as_of: NaiveDate) -> Result<Vec<TrendPoint>> {
        trace!(window_days, %as_of, "trend query");
        trend::daily_trend(&self.store.snapshot(), window_days, as_of)
    }

    /// Full or top-N leaderboard with farmer attribution.
    #[must_use]
    pub fn leaderboard(&self, top_n: Option<usize>) -> Vec<LeaderboardEntry> {
        leaderboard::rank(&self.store.snapshot(), top_n, |farmer_id| {
            self.farmers.get(farmer_id).map(|name| name.value().clone())
        })
    }

    /// Advisory risk assessment for one record, drawn from the injected RNG.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the id is absent.
    pub fn risk_assessment<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Result<Vec<RiskFlag>> {
        let record = self.get_record(id)?;
        Ok(risk::assess(&record, rng))
    }
}
