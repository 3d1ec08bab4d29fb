//! Anatomical network topology for the whole-body scaffold.
//!
//! The branching anatomical graph is inherently a small acyclic graph, not
//! a list: the thorax splits into the neck and both arms at its upper
//! station, the abdomen splits into both legs at its lower station, and
//! chains continue into head, hands and feet. This crate represents that
//! graph explicitly so stitching order and bifurcation handling are
//! testable independent of traversal order:
//!
//! - [`BodyOptions`] - the validated, immutable generation options
//! - [`parameter_set_names`] / [`BodyOptions::for_parameter_set`] - presets
//! - [`SegmentKind`] - closed set of anatomical segment kinds
//! - [`BodyNetwork`] - segments plus junctions, pure data, no geometry
//!
//! The graph's shape never depends on options; only resolutions, scales
//! and core presence vary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools
)]

mod error;
mod human;
mod options;

pub use error::{ConfigError, UnknownPresetError};
pub use human::{BodyNetwork, Junction, JunctionChild, SegmentKind, SegmentSpec, Side};
pub use options::{parameter_set_names, BodyOptions};
