//! Element connectivity tuples.
//!
//! Node orderings follow a binary corner convention: for a [`Hex`], corner
//! `k` sits at local coordinates `(k & 1, (k >> 1) & 1, k >> 2)` in
//! `(xi1, xi2, xi3)`. A [`Quad`] stores `[n00, n10, n01, n11]` in its own
//! two local directions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-dimensional trilinear hexahedral element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hex {
    /// Corner node ids in binary corner order.
    pub nodes: [u32; 8],
}

impl Hex {
    /// Create a hex from corner node ids.
    #[inline]
    #[must_use]
    pub const fn new(nodes: [u32; 8]) -> Self {
        Self { nodes }
    }
}

/// A two-dimensional bilinear quadrilateral face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quad {
    /// Corner node ids as `[n00, n10, n01, n11]`.
    pub nodes: [u32; 4],
}

impl Quad {
    /// Create a quad from corner node ids.
    #[inline]
    #[must_use]
    pub const fn new(nodes: [u32; 4]) -> Self {
        Self { nodes }
    }
}

/// A one-dimensional linear line element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// End node ids.
    pub nodes: [u32; 2],
}

impl Line {
    /// Create a line from end node ids.
    #[inline]
    #[must_use]
    pub const fn new(nodes: [u32; 2]) -> Self {
        Self { nodes }
    }
}

/// The six faces of a hex, as corner indices in `[n00, n10, n01, n11]`
/// order of each face's own two local directions.
///
/// Order: xi3=0, xi3=1, xi2=0, xi2=1, xi1=0, xi1=1.
pub const HEX_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 4, 5],
    [2, 3, 6, 7],
    [0, 2, 4, 6],
    [1, 3, 5, 7],
];

/// The four perimeter edges of a quad stored as `[n00, n10, n01, n11]`.
pub const QUAD_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 3], [3, 2], [2, 0]];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_faces_cover_all_corners() {
        let mut seen = [0usize; 8];
        for face in &HEX_FACES {
            for &corner in face {
                seen[corner] += 1;
            }
        }
        // Each hex corner belongs to exactly three faces
        assert!(seen.iter().all(|&count| count == 3));
    }

    #[test]
    fn quad_edges_form_a_cycle() {
        let mut degree = [0usize; 4];
        for edge in &QUAD_EDGES {
            degree[edge[0]] += 1;
            degree[edge[1]] += 1;
        }
        assert!(degree.iter().all(|&d| d == 2));
    }
}
