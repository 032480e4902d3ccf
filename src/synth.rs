//! Seeded synthetic dataset generation
//!
//! Used by tests and benchmarks to build reproducible herds: every draw
//! comes from an injected RNG, so a `StdRng::seed_from_u64` seed pins the
//! exact dataset. There is no ambient randomness or clock read anywhere in
//! this module.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::{validator, AnimalRecord, Breed, RecordDraft, Region, Trait, TRAIT_MAX, TRAIT_MIN};

/// How far back a synthetic evaluation timestamp may fall.
const BACKDATE_DAYS: i64 = 30;

/// Farmer ids a synthetic record may reference.
const FARMER_IDS: [&str; 3] = ["farmer_1", "farmer_2", "farmer_3"];

/// Draw one candidate record. All fields are valid by construction, but the
/// output is a draft so tests can corrupt individual fields before
/// validation.
pub fn draft<R: Rng + ?Sized>(rng: &mut R, index: usize, as_of: DateTime<Utc>) -> RecordDraft {
    let breed = *Breed::ALL.choose(rng).unwrap_or(&Breed::Gir);
    let region = *Region::ALL.choose(rng).unwrap_or(&Region::Punjab);
    let backdate = Duration::minutes(rng.gen_range(0..BACKDATE_DAYS * 24 * 60));

    RecordDraft {
        id: format!("cattle_{index}"),
        name: Some(format!("{breed} {index}")),
        breed: breed.as_str().to_string(),
        age: rng.gen_range(2..=9),
        region: region.as_str().to_string(),
        traits: Trait::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), rng.gen_range(TRAIT_MIN..=TRAIT_MAX)))
            .collect(),
        created_at: as_of - backdate,
        farmer_id: (*FARMER_IDS.choose(rng).unwrap_or(&FARMER_IDS[0])).to_string(),
    }
}

/// Generate a herd of `n` validated records.
pub fn herd<R: Rng + ?Sized>(rng: &mut R, n: usize, as_of: DateTime<Utc>) -> Vec<AnimalRecord> {
    (1..=n)
        .map(|i| {
            let candidate = draft(rng, i, as_of);
            // Drafts above are structurally valid; validation cannot fail.
            validator::validate(candidate).unwrap_or_else(|e| {
                unreachable!("synthetic draft failed validation: {e}")
            })
        })
        .collect()
}
