//! Risk Sampler - advisory health-risk flags
//!
//! The sampler is explicitly probabilistic: it is not required to be
//! deterministic across calls, and an empty flag list is the common, valid
//! result. Flags are advisory only and never feed back into the composite
//! score. The RNG is injected so tests can pin a seed and replay a draw.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::record::AnimalRecord;

/// Severity band for a risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskSeverity {
    /// Watch item.
    Low,
    /// Needs attention soon.
    Medium,
    /// Needs immediate attention.
    High,
}

/// One advisory health-risk indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    /// Condition name.
    pub name: String,
    /// Severity band.
    pub severity: RiskSeverity,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
}

/// Known conditions with their severity band and base detection confidence.
const CONDITIONS: [(&str, RiskSeverity, f64); 3] = [
    ("Mastitis", RiskSeverity::Medium, 0.23),
    ("Lameness", RiskSeverity::High, 0.67),
    ("Respiratory Issues", RiskSeverity::Low, 0.12),
];

/// Probability that any single condition is flagged on one assessment.
const FLAG_RATE: f64 = 0.3;

/// Spread of the confidence jitter around a condition's base rate.
const CONFIDENCE_JITTER: f64 = 0.1;

/// Sample advisory risk flags for a record.
///
/// Each known condition is drawn independently; most assessments come back
/// empty. The record is read-only input and is never mutated.
pub fn assess<R: Rng + ?Sized>(record: &AnimalRecord, rng: &mut R) -> Vec<RiskFlag> {
    let mut flags = Vec::new();
    for &(name, severity, base) in &CONDITIONS {
        if rng.gen_bool(FLAG_RATE) {
            let jitter = rng.gen_range(-CONFIDENCE_JITTER..=CONFIDENCE_JITTER);
            flags.push(RiskFlag {
                name: name.to_string(),
                severity,
                confidence: (base + jitter).clamp(0.0, 1.0),
            });
        }
    }

    trace!(id = record.id(), flags = flags.len(), "risk assessment sampled");
    flags
}
