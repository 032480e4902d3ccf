//! Record Validator - structural gate for candidate records
//!
//! A candidate enters the dataset only through [`validate`]. The validator
//! is a pure function: it either produces a fully-formed, scored
//! [`AnimalRecord`] or fails with a [`crate::Error::Validation`] naming the
//! offending field.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{AnimalRecord, Breed, Region, TraitVector};

/// Candidate record as submitted by a collaborator (UI, ingestion API).
///
/// Breed, region, and traits arrive as strings/maps because upstream
/// collaborators deal in report names; the validator maps them onto the
/// closed enums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Opaque unique id for the animal.
    pub id: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Breed display name, must parse into [`Breed`].
    pub breed: String,
    /// Age in years, must be positive.
    pub age: u32,
    /// Region display name, must parse into [`Region`].
    pub region: String,
    /// Trait name → score map, must cover exactly the closed trait set.
    pub traits: BTreeMap<String, u8>,
    /// Evaluation timestamp.
    pub created_at: DateTime<Utc>,
    /// Owning farmer reference.
    pub farmer_id: String,
}

/// Validate a candidate and produce a scored [`AnimalRecord`].
///
/// Checks, in order: non-empty id, breed in the closed enum, region in the
/// closed enum, age > 0, trait map covering exactly the recognized trait set
/// with every value in [1, 9]. No side effects.
///
/// # Errors
///
/// [`Error::Validation`] naming the first offending field.
pub fn validate(draft: RecordDraft) -> Result<AnimalRecord> {
    if draft.id.is_empty() {
        return Err(Error::validation("id", "must not be empty"));
    }

    let breed = Breed::parse(&draft.breed)
        .ok_or_else(|| Error::validation("breed", format!("unrecognized breed `{}`", draft.breed)))?;

    let region = Region::parse(&draft.region).ok_or_else(|| {
        Error::validation("region", format!("unrecognized region `{}`", draft.region))
    })?;

    if draft.age == 0 {
        return Err(Error::validation("age", "must be positive"));
    }

    let traits = TraitVector::from_map(&draft.traits)?;

    Ok(AnimalRecord::from_validated(
        draft.id,
        draft.name,
        breed,
        draft.age,
        region,
        traits,
        draft.created_at,
        draft.farmer_id,
    ))
}
