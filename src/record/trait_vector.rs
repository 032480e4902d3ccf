//! Trait Vector - the fixed-schema trait measurements for one animal

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest admissible trait score.
pub const TRAIT_MIN: u8 = 1;
/// Highest admissible trait score.
pub const TRAIT_MAX: u8 = 9;

/// The closed set of recognized evaluation traits.
///
/// This enum is the single source of truth for the trait schema: the
/// validator and the scoring engine both iterate [`Trait::ALL`] rather than
/// whatever keys a caller happens to send, so unexpected trait names are
/// rejected instead of silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trait {
    /// Body length conformation
    BodyLength,
    /// Height at withers
    Height,
    /// Chest girth
    ChestGirth,
    /// Milk yield potential
    MilkYield,
    /// Fertility index
    FertilityIndex,
    /// Overall health score
    HealthScore,
    /// Temperament
    Temperament,
    /// Feed efficiency
    FeedEfficiency,
}

impl Trait {
    /// Canonical ordered list of all recognized traits.
    pub const ALL: [Self; 8] = [
        Self::BodyLength,
        Self::Height,
        Self::ChestGirth,
        Self::MilkYield,
        Self::FertilityIndex,
        Self::HealthScore,
        Self::Temperament,
        Self::FeedEfficiency,
    ];

    /// Number of traits in the closed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable trait name as it appears in field reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BodyLength => "Body Length",
            Self::Height => "Height",
            Self::ChestGirth => "Chest Girth",
            Self::MilkYield => "Milk Yield",
            Self::FertilityIndex => "Fertility Index",
            Self::HealthScore => "Health Score",
            Self::Temperament => "Temperament",
            Self::FeedEfficiency => "Feed Efficiency",
        }
    }

    /// Parse a trait from its report name.
    ///
    /// Returns `None` for names outside the closed set.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Position of this trait in [`Trait::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, fixed-size vector of per-trait scores.
///
/// Invariant: one score per trait in [`Trait::ALL`], each in
/// `[TRAIT_MIN, TRAIT_MAX]`. The invariant is enforced at construction; a
/// `TraitVector` obtained from [`TraitVector::from_map`] is always well
/// formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitVector {
    scores: [u8; Trait::COUNT],
}

impl TraitVector {
    /// Build a trait vector from a candidate name→score map.
    ///
    /// The map must cover exactly the closed trait set: every recognized
    /// trait present once, no extraneous keys, every value in `[1, 9]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the `traits` field when a key is
    /// unrecognized, a trait is missing, or a value is out of range.
    pub fn from_map(candidate: &BTreeMap<String, u8>) -> Result<Self> {
        for key in candidate.keys() {
            if Trait::parse(key).is_none() {
                return Err(Error::validation(
                    "traits",
                    format!("unrecognized trait `{key}`"),
                ));
            }
        }

        let mut scores = [0u8; Trait::COUNT];
        for t in Trait::ALL {
            let value = candidate.get(t.as_str()).copied().ok_or_else(|| {
                Error::validation("traits", format!("missing trait `{t}`"))
            })?;
            if !(TRAIT_MIN..=TRAIT_MAX).contains(&value) {
                return Err(Error::validation(
                    "traits",
                    format!("trait `{t}` score {value} outside [{TRAIT_MIN}, {TRAIT_MAX}]"),
                ));
            }
            scores[t.index()] = value;
        }

        Ok(Self { scores })
    }

    /// Score for a single trait.
    #[must_use]
    pub fn get(&self, t: Trait) -> u8 {
        self.scores[t.index()]
    }

    /// All scores in [`Trait::ALL`] order.
    #[must_use]
    pub const fn scores(&self) -> &[u8; Trait::COUNT] {
        &self.scores
    }

    /// Iterate `(trait, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, u8)> + '_ {
        Trait::ALL.iter().map(move |t| (*t, self.scores[t.index()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map(value: u8) -> BTreeMap<String, u8> {
        Trait::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), value))
            .collect()
    }

    #[test]
    fn test_from_map_accepts_full_schema() {
        let vector = TraitVector::from_map(&full_map(7)).unwrap();
        assert_eq!(vector.get(Trait::MilkYield), 7);
        assert_eq!(vector.scores().len(), Trait::COUNT);
    }

    #[test]
    fn test_from_map_rejects_missing_trait() {
        let mut map = full_map(5);
        map.remove("Chest Girth");
        let err = TraitVector::from_map(&map).unwrap_err();
        assert!(err.to_string().contains("Chest Girth"));
    }

    #[test]
    fn test_from_map_rejects_unknown_key() {
        let mut map = full_map(5);
        map.insert("Horn Span".to_string(), 4);
        let err = TraitVector::from_map(&map).unwrap_err();
        assert!(err.to_string().contains("Horn Span"));
    }

    #[test]
    fn test_from_map_rejects_out_of_range() {
        let mut map = full_map(5);
        map.insert("Height".to_string(), 10);
        assert!(TraitVector::from_map(&map).is_err());

        map.insert("Height".to_string(), 0);
        assert!(TraitVector::from_map(&map).is_err());
    }

    #[test]
    fn test_trait_parse_round_trip() {
        for t in Trait::ALL {
            assert_eq!(Trait::parse(t.as_str()), Some(t));
        }
        assert_eq!(Trait::parse("Hoof Angle"), None);
    }
}
