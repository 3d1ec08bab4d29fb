//! Error types for option validation and preset lookup.

use thiserror::Error;

/// An unrecognized parameter set name.
#[derive(Debug, Error)]
#[error("unknown parameter set name: {0:?}")]
pub struct UnknownPresetError(pub String);

/// Errors raised by [`crate::BodyOptions::validate`]: an option value or
/// combination is outside its documented valid domain.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A per-segment along count must be at least one.
    #[error("{option} must be at least 1")]
    AlongTooSmall {
        /// Offending option name.
        option: &'static str,
    },

    /// An around count below the supported minimum.
    #[error("{option} must be at least 8, got {actual}")]
    AroundTooSmall {
        /// Offending option name.
        option: &'static str,
        /// Actual value.
        actual: usize,
    },

    /// An odd around count.
    #[error("{option} must be even, got {actual}")]
    AroundOdd {
        /// Offending option name.
        option: &'static str,
        /// Actual value.
        actual: usize,
    },

    /// With a core, around counts must keep quadrant symmetry.
    #[error("{option} must be divisible by 4 when the core is used, got {actual}")]
    AroundNotQuadrantDivisible {
        /// Offending option name.
        option: &'static str,
        /// Actual value.
        actual: usize,
    },

    /// A branch segment cannot carry more boundary nodes than its host.
    #[error("{child_option} ({child}) cannot exceed {host_option} ({host})")]
    ChildAroundExceedsHost {
        /// Child option name.
        child_option: &'static str,
        /// Child around count.
        child: usize,
        /// Host option name.
        host_option: &'static str,
        /// Host around count.
        host: usize,
    },

    /// Through-shell count must be at least one.
    #[error("elements through shell must be at least 1, got {actual}")]
    ThroughShellTooSmall {
        /// Actual value.
        actual: usize,
    },

    /// Core transition count must be at least one.
    #[error("core transition count must be at least 1, got {actual}")]
    TransitionTooSmall {
        /// Actual value.
        actual: usize,
    },

    /// Core box minor count must be even and at least two.
    #[error("core box minor count must be even and at least 2, got {actual}")]
    BoxMinorInvalid {
        /// Actual value.
        actual: usize,
    },

    /// Core box minor count leaves no room for box major cells.
    #[error("core box minor count {minor} leaves no major cells for {option} ({around} around)")]
    BoxMinorTooLarge {
        /// Box minor count.
        minor: usize,
        /// Around option the box must fit.
        option: &'static str,
        /// Around count of that option.
        around: usize,
    },

    /// Host and child core boxes cannot be aligned column for column.
    #[error(
        "core box major counts are incompatible: {host_option} gives {host_major}, \
         {child_option} gives {child_major} (host must be an integer multiple)"
    )]
    IncompatibleBoxMajors {
        /// Host around option name.
        host_option: &'static str,
        /// Host box major count.
        host_major: usize,
        /// Child around option name.
        child_option: &'static str,
        /// Child box major count.
        child_major: usize,
    },

    /// Refine factor must be at least one.
    #[error("refine factor must be at least 1, got {actual}")]
    RefineFactorInvalid {
        /// Actual value.
        actual: usize,
    },
}
