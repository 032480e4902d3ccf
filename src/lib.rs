//! # herdscore: Embedded Livestock Scoring & Analytics Engine
//!
//! herdscore turns per-animal trait measurements into a composite ATC score
//! and derives the population-level summaries used for reporting: score
//! histograms, breed/region breakdowns, daily trend series, and a
//! deterministically tie-broken leaderboard. An advisory risk sampler flags
//! possible health conditions separately from the score.
//!
//! ## Design Principles
//!
//! - **Derived, not stored**: a record's composite score is always the value
//!   the scoring engine yields from its current trait vector; the only trait
//!   mutation path revalidates and rescores atomically.
//! - **Closed schemas**: traits, breeds, and regions are closed enums, so
//!   unexpected keys are rejected at the validation gate instead of silently
//!   accepted.
//! - **Explicit clocks and RNGs**: trend windows take an `as_of` date and
//!   the risk sampler takes an injected RNG, so every computation is
//!   replayable in tests.
//!
//! ## Example Usage
//!
//! ```rust
//! use herdscore::{Engine, RecordDraft, Trait};
//! use chrono::Utc;
//!
//! let engine = Engine::new();
//! engine.ingest(RecordDraft {
//!     id: "cattle_001".to_string(),
//!     name: Some("Gir 1".to_string()),
//!     breed: "Gir".to_string(),
//!     age: 4,
//!     region: "Gujarat".to_string(),
//!     traits: Trait::ALL.iter().map(|t| (t.as_str().to_string(), 7)).collect(),
//!     created_at: Utc::now(),
//!     farmer_id: "farmer_1".to_string(),
//! })?;
//!
//! assert_eq!(engine.get_score("cattle_001")?, 7.0);
//! let top = engine.leaderboard(Some(10));
//! assert_eq!(top[0].rank, 1);
//! # Ok::<(), herdscore::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::cast_precision_loss)]

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod record;
pub mod risk;
pub mod scoring;
pub mod synth;
pub mod trend;

pub use aggregate::{BreedShare, RegionShare, ScoreBucket, SummaryStats};
pub use engine::Engine;
pub use error::{Error, Result};
pub use leaderboard::LeaderboardEntry;
pub use record::{AnimalRecord, Breed, RecordDraft, Region, Trait, TraitVector};
pub use risk::{RiskFlag, RiskSeverity};
pub use trend::{TrendPoint, MAX_WINDOW_DAYS};
