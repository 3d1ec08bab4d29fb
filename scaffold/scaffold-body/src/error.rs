//! The generation error taxonomy.
//!
//! Everything here is detected before any mesh state is committed to the
//! caller's region, so a failed generation has no visible side effect.

use thiserror::Error;

use scaffold_network::{ConfigError, UnknownPresetError};
use scaffold_path::PathError;
use scaffold_section::SectionError;
use scaffold_types::RegionError;

use crate::stitch::TopologyError;

/// Result type for whole-body generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors surfaced by [`crate::generate_mesh`].
///
/// Configuration-class errors (`Config`, `Section`, `Path`) mean an option
/// value or combination is outside its valid domain; `Topology` means
/// junction stitching could not find a consistent node correspondence.
/// None are transient and none are retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Unrecognized parameter set name.
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPresetError),

    /// An option value failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A cross-section template could not be built.
    #[error(transparent)]
    Section(#[from] SectionError),

    /// A centerline could not be sampled.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Junction stitching failed.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// The staged mesh violated a region invariant at commit.
    #[error(transparent)]
    Region(#[from] RegionError),
}
