//! Error types for area manipulation.

use thiserror::Error;

/// Errors that can occur during area manipulation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AreaError {
    /// The centerline has no samples.
    #[error("centerline has no samples")]
    EmptyCenterline,

    /// The main-region point cloud has no points.
    #[error("main-region point cloud has no points")]
    EmptyCloud,

    /// The method selector does not name a known manipulation method.
    #[error("unknown manipulation method {0:?} (expected variation, stenosis, or area)")]
    UnknownMethod(String),

    /// The region-mode selector does not name a known region mode.
    #[error("unknown region mode {0:?} (expected manual, commandline, or first_line)")]
    UnknownRegionMode(String),

    /// Stenosis manipulation cannot target a first-line region.
    #[error("stenosis manipulation cannot be combined with the first_line region mode")]
    StenosisOnFirstLine,

    /// The number of region points is inconsistent with the method.
    #[error("stenosis requires {expected} region points, got {actual}")]
    RegionPointCount {
        /// The accepted region point counts.
        expected: &'static str,
        /// The number of region points provided.
        actual: usize,
    },

    /// The area ratio solve has no usable solution.
    #[error("degenerate area ratio: target {ratio}, current {current} (both must exceed 1)")]
    DegenerateAreaRatio {
        /// The requested max/min area ratio.
        ratio: f64,
        /// The ratio measured on the smoothed area array.
        current: f64,
    },

    /// The centerline covers no arc length, so no interpolation axis exists.
    #[error("centerline arc span is zero")]
    ZeroArcSpan,

    /// A computed factor is not a positive finite number.
    #[error("computed factor at sample {index} is {value} (must be positive and finite)")]
    NonPositiveFactor {
        /// Index of the offending factor.
        index: usize,
        /// The invalid factor value.
        value: f64,
    },

    /// The factor field does not align with the centerline samples.
    #[error("factor field has {factors} entries for {samples} centerline samples")]
    FactorLengthMismatch {
        /// Number of factor entries.
        factors: usize,
        /// Number of centerline samples.
        samples: usize,
    },
}

/// Result type for area manipulation operations.
pub type AreaResult<T> = Result<T, AreaError>;
