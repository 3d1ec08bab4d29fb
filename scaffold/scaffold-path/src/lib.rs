//! Centerline sampling for swept anatomical segments.
//!
//! A segment's centerline is discretized into an ordered sequence of axial
//! stations, each carrying a position, an orthonormal frame and a section
//! scale:
//!
//! - [`Centerline`] - straight spans and Catmull-Rom splines through
//!   control points
//! - [`Frame`] - tangent / normal / binormal triple
//! - [`parallel_transport_frames`] - rotation-minimizing frame propagation
//! - [`sample_stations`] - stations for an element-count-along
//!
//! Frames are seeded from a per-segment reference axis and propagated by
//! parallel transport, so the section orientation never twists
//! discontinuously along a segment.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector2, Vector3};
//! use scaffold_path::{sample_stations, Centerline};
//!
//! let line = Centerline::straight(Point3::origin(), Point3::new(4.0, 0.0, 0.0));
//! let stations = sample_stations(
//!     &line,
//!     Vector3::y(),
//!     Vector2::new(1.0, 1.0),
//!     Vector2::new(0.5, 0.5),
//!     4,
//! )
//! .unwrap();
//!
//! assert_eq!(stations.len(), 5);
//! assert_eq!(stations[2].centre.x, 2.0);
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
    clippy::must_use_candidate,
    clippy::similar_names
)]

mod curve;
mod error;
mod frame;
mod sample;

pub use curve::Centerline;
pub use error::PathError;
pub use frame::{parallel_transport_frames, Frame};
pub use sample::{sample_stations, Station};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3};
