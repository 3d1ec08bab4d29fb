//! Core mesh types for the body scaffold generator.
//!
//! This crate provides the foundational types the generator builds on:
//!
//! - [`NodeArena`] - Node storage with stable ids and an alias table
//! - [`Region`] - The committed mesh container (nodes, volumes, derived
//!   faces and lines) playing the geometry-kernel adapter role
//! - [`Hex`], [`Quad`], [`Line`] - Element connectivity tuples
//! - [`AnnotationGroup`] - Named per-dimension element groupings
//! - Mesh integrals: [`mesh_volume`], [`mesh_area`], [`mesh_length`]
//!
//! # Determinism
//!
//! Everything here is order-stable: node compaction follows creation order,
//! face and line numbering follows first encounter over volume elements in
//! id order. Generating twice from the same input yields identical ids.
//!
//! # Coordinate System
//!
//! Right-handed, `f64` throughout. The anatomical convention used by the
//! generator is X from cranial to caudal, Y left/right, Z posterior/anterior.
//!
//! # Example
//!
//! ```
//! use scaffold_types::{Hex, Point3, Region};
//!
//! let nodes = (0..8)
//!     .map(|k| Point3::new(f64::from(k & 1), f64::from((k >> 1) & 1), f64::from(k >> 2)))
//!     .collect();
//! let mut region = Region::new();
//! region.commit(nodes, vec![Hex::new([0, 1, 2, 3, 4, 5, 6, 7])]).unwrap();
//! region.define_faces();
//!
//! assert_eq!(region.face_count(), 6);
//! assert_eq!(region.line_count(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod annotation;
mod element;
mod error;
mod integral;
mod node;
mod region;

pub use annotation::{find_group_by_name, find_group_by_term, AnnotationGroup};
pub use element::{Hex, Line, Quad, HEX_FACES, QUAD_EDGES};
pub use error::RegionError;
pub use integral::{mesh_area, mesh_length, mesh_volume};
pub use node::{CompactNodes, NodeArena};
pub use region::Region;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
