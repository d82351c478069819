//! Error types for vessel data structures.

use thiserror::Error;

/// Errors that can occur when constructing centerline data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CenterlineError {
    /// Per-sample attribute arrays do not match the number of positions.
    #[error("attribute length mismatch: {positions} positions, {attributes} {name} values")]
    LengthMismatch {
        /// Name of the mismatched attribute array.
        name: &'static str,
        /// Number of positions provided.
        positions: usize,
        /// Number of attribute values provided.
        attributes: usize,
    },

    /// Cross-sectional area must be positive.
    #[error("invalid cross-sectional area at sample {index}: {value} (must be positive)")]
    NonPositiveArea {
        /// Index of the offending sample.
        index: usize,
        /// The invalid area value.
        value: f64,
    },

    /// Inscribed sphere radius must be positive.
    #[error("invalid inscribed radius at sample {index}: {value} (must be positive)")]
    NonPositiveRadius {
        /// Index of the offending sample.
        index: usize,
        /// The invalid radius value.
        value: f64,
    },

    /// Arc length must be non-decreasing along the sample sequence.
    #[error("arc length decreases at sample {index}: {previous} -> {current}")]
    DecreasingArcLength {
        /// Index of the sample where the arc length decreases.
        index: usize,
        /// Arc length of the preceding sample.
        previous: f64,
        /// Arc length of the offending sample.
        current: f64,
    },
}

/// Result type for centerline construction.
pub type CenterlineResult<T> = Result<T, CenterlineError>;
