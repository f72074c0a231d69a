//! Error types for extraction and ranking.

use thiserror::Error;

/// A track line matched a pattern but its fields could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// The declared order is not a valid non-negative integer.
    #[error("invalid track order: {0:?}")]
    InvalidOrder(String),

    /// Nothing is left of the track title after sanitization.
    #[error("track title is empty after sanitization")]
    EmptyTrack,
}

/// A ranking request that cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("ranking limit must be greater than zero, got {0}")]
    InvalidLimit(usize),

    #[error("unknown ranking field: {0:?} (expected \"band\" or \"track\")")]
    UnknownField(String),

    #[error("unknown ranking direction: {0:?} (expected \"most\" or \"least\")")]
    UnknownDirection(String),
}

/// The line patterns could not be compiled.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("header marker must not be empty")]
    EmptyMarker,

    #[error("invalid {name} pattern: {source}")]
    Regex {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}
