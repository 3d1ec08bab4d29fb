//! Error types for cross-section template construction.

use thiserror::Error;

/// Result type for section template operations.
pub type SectionResult<T> = Result<T, SectionError>;

/// Errors raised while building a cross-section template.
#[derive(Debug, Error)]
pub enum SectionError {
    /// Around count below the supported minimum.
    #[error("elements around must be at least {min}, got {actual}")]
    AroundTooSmall {
        /// Minimum supported around count.
        min: usize,
        /// Actual around count.
        actual: usize,
    },

    /// Around count must be even so opposite boundary nodes pair up.
    #[error("elements around must be even, got {actual}")]
    AroundOdd {
        /// Actual around count.
        actual: usize,
    },

    /// With a core, the box-to-ring transition requires quadrant symmetry.
    #[error("elements around must be divisible by 4 with a core, got {actual}")]
    AroundNotQuadrantDivisible {
        /// Actual around count.
        actual: usize,
    },

    /// The core box minor count must be even so the box has a middle row.
    #[error("core box minor count must be even and at least 2, got {actual}")]
    BoxMinorInvalid {
        /// Actual box minor count.
        actual: usize,
    },

    /// Box perimeter must match the around count node for node.
    #[error(
        "core box {minor}x{major} has perimeter {perimeter}, which does not match \
         {around} elements around"
    )]
    BoxPerimeterMismatch {
        /// Elements around the section.
        around: usize,
        /// Box minor count.
        minor: usize,
        /// Box major count.
        major: usize,
        /// Resulting box perimeter node count.
        perimeter: usize,
    },

    /// At least one radial shell layer is required.
    #[error("elements through shell must be at least 1, got {actual}")]
    TooFewShellRings {
        /// Actual through-shell count.
        actual: usize,
    },

    /// At least one transition layer is required with a core.
    #[error("core transition count must be at least 1, got {actual}")]
    TooFewTransitionRings {
        /// Actual transition count.
        actual: usize,
    },
}
