//! Animal Record Schema
//!
//! This module provides the data structures and gates for the evaluated-
//! animal dataset.
//!
//! ## Schema Overview
//!
//! ```text
//! RecordDraft ──validate──> AnimalRecord (scored) ──> RecordStore
//!                                │
//!                                └── TraitVector [closed 8-trait schema]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use herdscore::record::{validator, RecordDraft, RecordStore, Trait};
//! use chrono::Utc;
//!
//! let draft = RecordDraft {
//!     id: "cattle_001".to_string(),
//!     name: Some("Gir 1".to_string()),
//!     breed: "Gir".to_string(),
//!     age: 4,
//!     region: "Gujarat".to_string(),
//!     traits: Trait::ALL.iter().map(|t| (t.as_str().to_string(), 7)).collect(),
//!     created_at: Utc::now(),
//!     farmer_id: "farmer_1".to_string(),
//! };
//!
//! let store = RecordStore::new();
//! let record = validator::validate(draft)?;
//! store.insert(record)?;
//! # Ok::<(), herdscore::Error>(())
//! ```

mod animal_record;
mod store;
mod trait_vector;
pub mod validator;

pub use animal_record::{AnimalRecord, Breed, Region};
pub use store::RecordStore;
pub use trait_vector::{Trait, TraitVector, TRAIT_MAX, TRAIT_MIN};
pub use validator::RecordDraft;
