//! Error types for herdscore
//!
//! Every error names the offending field or id so callers can surface an
//! actionable message. The engine never silently clamps invalid input.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// herdscore error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Candidate record failed structural validation (recoverable: fix the
    /// named field and retry)
    #[error("validation failed on field `{field}`: {reason}")]
    Validation {
        /// The record field that failed validation
        field: &'static str,
        /// Human-readable description of the failure
        reason: String,
    },

    /// Referenced record id is absent from the store
    #[error("record not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// Invalid query parameters (bad trend window, malformed bucket edges);
    /// fatal to that call only
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
