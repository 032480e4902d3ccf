//! Record Store - in-memory storage for validated animal records
//!
//! The store is the only mutable shared resource in the engine. It is
//! backed by `DashMap`, so concurrent readers run unsynchronized while each
//! write is isolated to its entry: an aggregation read can never observe a
//! partially-applied record. Aggregate queries work on a [`RecordStore::snapshot`]
//! rather than iterating live shards.

use std::collections::BTreeMap;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::AnimalRecord;

/// In-memory store of validated animal records, keyed by id.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: DashMap<String, AnimalRecord>,
}

impl RecordStore {
    /// Create a new empty record store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
        }
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.clear();
    }

    /// Insert a freshly validated record.
    ///
    /// # Errors
    ///
    /// Record ids are unique; inserting an id that already exists fails with
    /// [`Error::Validation`] on the `id` field.
    pub fn insert(&self, record: AnimalRecord) -> Result<()> {
        match self.records.entry(record.id().to_string()) {
            Entry::Occupied(_) => Err(Error::validation(
                "id",
                format!("record `{}` already exists", record.id()),
            )),
            Entry::Vacant(slot) => {
                debug!(id = record.id(), score = record.score(), "record ingested");
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<AnimalRecord> {
        self.records.get(id).map(|r| r.value().clone())
    }

    /// Check whether a record id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Replace a record's trait vector, revalidating and rescoring under the
    /// entry lock so readers see either the old record or the new one.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an absent id, [`Error::Validation`] if the
    /// candidate trait map is malformed (record left unchanged).
    pub fn update_traits(
        &self,
        id: &str,
        candidate: &BTreeMap<String, u8>,
    ) -> Result<AnimalRecord> {
        let mut entry = self.records.get_mut(id).ok_or_else(|| Error::NotFound {
            id: id.to_string(),
        })?;
        entry.value_mut().replace_traits(candidate)?;
        debug!(id, score = entry.score(), "traits replaced and rescored");
        Ok(entry.value().clone())
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the id is absent.
    pub fn remove(&self, id: &str) -> Result<()> {
        self.records
            .remove(id)
            .map(|_| debug!(id, "record removed"))
            .ok_or_else(|| Error::NotFound {
                id: id.to_string(),
            })
    }

    /// Copy out all records for aggregate computation.
    ///
    /// Aggregations run over this owned snapshot, so a long scan never holds
    /// shard locks against writers.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AnimalRecord> {
        self.records.iter().map(|r| r.value().clone()).collect()
    }
}
