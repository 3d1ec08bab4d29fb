//! Whole-body anatomical scaffold generator.
//!
//! Generates a parametric three-dimensional finite-element mesh of a whole
//! human body - head, neck, thorax, abdomen, arms, hands, legs, feet -
//! from a branching network of tube segments, each optionally carrying a
//! solid interior core inside a thin shell, plus named anatomical
//! annotation groups over the mesh.
//!
//! # Pipeline
//!
//! Options are validated, the fixed anatomical network is instantiated,
//! each segment's cross-section template is swept along its sampled
//! centerline, junctions are stitched by aliasing shared boundary nodes,
//! the node arena is compacted, the mesh is committed in one batch, faces
//! and lines are derived, and annotation groups are assigned. Generation
//! either fully succeeds or leaves the target region untouched.
//!
//! # Quick Start
//!
//! ```
//! use scaffold_body::{generate_mesh, BodyOptions, Region};
//!
//! let options = BodyOptions::for_parameter_set("Human 1 Coarse").unwrap();
//! let mut region = Region::new();
//! let (groups, cursor) = generate_mesh(&mut region, &options).unwrap();
//!
//! assert_eq!(region.element_count(3), 704);
//! assert_eq!(groups.len(), 32);
//! assert_eq!(cursor.next_node_identifier, 912);
//! ```
//!
//! # Determinism
//!
//! Generation is a single sequential batch computation. Regenerating from
//! equal options yields identical node and element identifiers, counts and
//! measures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod annotate;
mod error;
mod generate;
mod stitch;
mod sweep;
mod terms;

pub use error::{GenerateError, GenerateResult};
pub use generate::{generate_mesh, generate_parameter_set, GenerationCursor};
pub use stitch::TopologyError;
pub use terms::body_term;

// Re-export the option and kernel-adapter surface callers interact with
pub use scaffold_network::{parameter_set_names, BodyOptions, SegmentKind, Side};
pub use scaffold_types::{
    find_group_by_name, find_group_by_term, mesh_area, mesh_length, mesh_volume, AnnotationGroup,
    Region,
};
