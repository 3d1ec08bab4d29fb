//! Error types for region commit and node compaction.

use thiserror::Error;

/// Errors raised while committing mesh data into a [`crate::Region`].
#[derive(Debug, Error)]
pub enum RegionError {
    /// Two distinct canonical nodes occupy the same position after aliasing.
    #[error("coincident canonical nodes {first} and {second}")]
    CoincidentNodes {
        /// First (earlier) node id.
        first: u32,
        /// Second node id found at the same position.
        second: u32,
    },

    /// An element references a node id outside the committed node range.
    #[error("element references node {node} but only {count} nodes exist")]
    NodeOutOfBounds {
        /// Offending node id.
        node: u32,
        /// Number of committed nodes.
        count: usize,
    },

    /// Whole-mesh generation requires an empty target region.
    #[error("target region already holds {nodes} nodes and {volumes} volume elements")]
    Occupied {
        /// Nodes already present.
        nodes: usize,
        /// Volume elements already present.
        volumes: usize,
    },
}
