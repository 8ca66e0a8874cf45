//! Error types for u-antcolony.
//!
//! The solver itself cannot fail once its inputs are accepted; every
//! variant here describes input that was rejected before a solve started.

use thiserror::Error;

/// Result type alias for u-antcolony operations.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Errors surfaced to the caller before the colony is run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A configuration parameter is out of range.
    #[error("invalid AcoConfig: {0}")]
    InvalidConfig(String),

    /// A city has a NaN or infinite coordinate.
    #[error("city #{index} ({name:?}) has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending city in the input sequence.
        index: usize,
        /// Label of the offending city.
        name: String,
    },
}
