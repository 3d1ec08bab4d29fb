//! Parametric cross-section templates for swept anatomical segments.
//!
//! A [`SectionTemplate`] is a reusable planar node layout for one segment
//! resolution: an outer ring of `around` perimeter positions, radial shell
//! layers down to an inner boundary ring, and, when a core is enabled, an
//! interior rectangular box grid joined to the inner ring by a transition
//! band. Without a core the interior is void and the segment degenerates
//! to a hollow tube.
//!
//! Templates are parametrized by local 2D coordinates only; they carry no
//! absolute position. The segment sweep scales and places one instance per
//! axial station.
//!
//! # Example
//!
//! ```
//! use scaffold_section::{CoreSpec, SectionSpec, SectionTemplate};
//!
//! let template = SectionTemplate::new(SectionSpec {
//!     elements_around: 12,
//!     shell_rings: 1,
//!     core: Some(CoreSpec {
//!         box_minor: 2,
//!         box_major: 4,
//!         transition: 1,
//!     }),
//! })
//! .unwrap();
//!
//! // 3x5 box grid plus inner and outer rings
//! assert_eq!(template.node_count(), 39);
//! assert_eq!(template.cell_count(), 32);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod error;
mod template;

pub use error::{SectionError, SectionResult};
pub use template::{
    perimeter_index, perimeter_position, CoreSpec, RadialZone, SectionCell, SectionSpec,
    SectionTemplate,
};

// Re-export nalgebra types for convenience
pub use nalgebra::Point2;
