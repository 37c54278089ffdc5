//! Error kinds surfaced by the analysis core.
//!
//! Only `ResourceUnavailable` can happen during an analysis, and the analyzer
//! turns it into a warning instead of failing the request. Window sizes are
//! validated at the config and request boundaries.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkshopError {
    /// Language data (sentence rules, valence lexicon) is not present.
    #[error("required resource `{resource}` is unavailable: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    /// Window size outside 10..=100 or not a multiple of 10.
    #[error("window size {0} must be between 10 and 100 in steps of 10")]
    InvalidWindowSize(usize),
}

impl WorkshopError {
    pub fn unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = WorkshopError> = std::result::Result<T, E>;
