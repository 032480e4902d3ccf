//! Animal Record - one evaluated animal and its derived composite score

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::TraitVector;
use crate::scoring;

/// Closed set of recognized breeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Breed {
    Holstein,
    Jersey,
    Gir,
    Sahiwal,
    RedSindhi,
    Tharparkar,
    MurrahBuffalo,
    NiliRaviBuffalo,
}

impl Breed {
    /// All recognized breeds.
    pub const ALL: [Self; 8] = [
        Self::Holstein,
        Self::Jersey,
        Self::Gir,
        Self::Sahiwal,
        Self::RedSindhi,
        Self::Tharparkar,
        Self::MurrahBuffalo,
        Self::NiliRaviBuffalo,
    ];

    /// Display name of the breed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Holstein => "Holstein",
            Self::Jersey => "Jersey",
            Self::Gir => "Gir",
            Self::Sahiwal => "Sahiwal",
            Self::RedSindhi => "Red Sindhi",
            Self::Tharparkar => "Tharparkar",
            Self::MurrahBuffalo => "Murrah Buffalo",
            Self::NiliRaviBuffalo => "Nili Ravi Buffalo",
        }
    }

    /// Parse a breed from its display name. `None` outside the closed set.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.as_str() == name)
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of recognized regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Region {
    Punjab,
    Haryana,
    Gujarat,
    Maharashtra,
    Rajasthan,
    UttarPradesh,
    Karnataka,
    TamilNadu,
}

impl Region {
    /// All recognized regions.
    pub const ALL: [Self; 8] = [
        Self::Punjab,
        Self::Haryana,
        Self::Gujarat,
        Self::Maharashtra,
        Self::Rajasthan,
        Self::UttarPradesh,
        Self::Karnataka,
        Self::TamilNadu,
    ];

    /// Display name of the region.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Punjab => "Punjab",
            Self::Haryana => "Haryana",
            Self::Gujarat => "Gujarat",
            Self::Maharashtra => "Maharashtra",
            Self::Rajasthan => "Rajasthan",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Karnataka => "Karnataka",
            Self::TamilNadu => "Tamil Nadu",
        }
    }

    /// Parse a region from its display name. `None` outside the closed set.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated, scored animal record.
///
/// The composite score is derived data: it is always the value the scoring
/// engine produces from the current trait vector. The only birth path is the
/// record validator, and the only trait mutation path is
/// [`AnimalRecord::replace_traits`], which revalidates and rescores
/// atomically. The score field can never drift from the vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalRecord {
    id: String,
    name: Option<String>,
    breed: Breed,
    age: u32,
    region: Region,
    traits: TraitVector,
    score: f64,
    created_at: DateTime<Utc>,
    farmer_id: String,
}

impl AnimalRecord {
    /// Assemble a record from already-validated parts. Crate-internal: the
    /// validator is the only caller.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_validated(
        id: String,
        name: Option<String>,
        breed: Breed,
        age: u32,
        region: Region,
        traits: TraitVector,
        created_at: DateTime<Utc>,
        farmer_id: String,
    ) -> Self {
        let score = scoring::composite_score(&traits);
        Self {
            id,
            name,
            breed,
            age,
            region,
            traits,
            score,
            created_at,
            farmer_id,
        }
    }

    /// Opaque unique record id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Optional display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Breed.
    #[must_use]
    pub const fn breed(&self) -> Breed {
        self.breed
    }

    /// Age in years (always positive).
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Region the evaluation was captured in.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// The trait vector this record was scored from.
    #[must_use]
    pub const fn traits(&self) -> &TraitVector {
        &self.traits
    }

    /// Composite ATC score in [1, 9], derived from the trait vector.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Evaluation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Owning farmer reference (foreign key, not owned by this core).
    #[must_use]
    pub fn farmer_id(&self) -> &str {
        &self.farmer_id
    }

    /// Replace the trait vector, revalidating and rescoring in one step.
    ///
    /// This is the only way to change a record's traits, so the derived
    /// score can never be observed out of sync with the vector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if the candidate map does not
    /// cover the closed trait set with in-range values; on error the record
    /// is left unchanged.
    pub fn replace_traits(&mut self, candidate: &BTreeMap<String, u8>) -> Result<()> {
        let traits = TraitVector::from_map(candidate)?;
        self.traits = traits;
        self.score = scoring::composite_score(&traits);
        Ok(())
    }
}
