//! Error types for centerline sampling.

use thiserror::Error;

/// Errors raised while building or sampling a centerline.
#[derive(Debug, Error)]
pub enum PathError {
    /// A spline centerline needs enough control points to interpolate.
    #[error("spline needs at least {min} control points, got {actual}")]
    TooFewControlPoints {
        /// Minimum required control points.
        min: usize,
        /// Actual control point count.
        actual: usize,
    },

    /// Element count along must be at least one.
    #[error("element count along must be at least 1, got {actual}")]
    TooFewElementsAlong {
        /// Actual element count along.
        actual: usize,
    },

    /// The centerline has no usable direction (coincident endpoints).
    #[error("degenerate centerline span of length {length}")]
    DegenerateSpan {
        /// Span length found.
        length: f64,
    },
}
