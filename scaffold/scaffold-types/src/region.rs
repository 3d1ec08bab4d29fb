//! The committed mesh container.
//!
//! `Region` plays the geometry-kernel adapter role: the generator stages a
//! complete node/element set, commits it here in one batch, and everything
//! downstream (face derivation, annotation lookup, integral evaluation)
//! reads from this container. Nothing outside the generator mutates it.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::element::{Hex, Line, Quad, HEX_FACES, QUAD_EDGES};
use crate::error::RegionError;

/// A container of committed nodes and elements of dimensions 3, 2 and 1.
///
/// Two-dimensional faces and one-dimensional lines are not committed
/// directly; they are derived from the volume elements by
/// [`Region::define_faces`], with deterministic first-encounter numbering.
#[derive(Debug, Clone, Default)]
pub struct Region {
    nodes: Vec<Point3<f64>>,
    hexes: Vec<Hex>,
    faces: Vec<Quad>,
    lines: Vec<Line>,
    face_index: HashMap<[u32; 4], u32>,
    line_index: HashMap<[u32; 2], u32>,
    face_use: Vec<u8>,
}

impl Region {
    /// Create an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the region holds no nodes or elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.hexes.is_empty()
    }

    /// Number of committed nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of three-dimensional elements.
    #[must_use]
    pub fn volume_count(&self) -> usize {
        self.hexes.len()
    }

    /// Number of derived two-dimensional faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of derived one-dimensional lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Element count for a mesh dimension (3, 2 or 1).
    #[must_use]
    pub fn element_count(&self, dimension: usize) -> usize {
        match dimension {
            3 => self.volume_count(),
            2 => self.face_count(),
            1 => self.line_count(),
            _ => 0,
        }
    }

    /// Position of a committed node.
    #[must_use]
    pub fn node(&self, id: u32) -> Point3<f64> {
        self.nodes[id as usize]
    }

    /// A committed volume element.
    #[must_use]
    pub fn hex(&self, id: u32) -> &Hex {
        &self.hexes[id as usize]
    }

    /// A derived face.
    #[must_use]
    pub fn face(&self, id: u32) -> &Quad {
        &self.faces[id as usize]
    }

    /// A derived line.
    #[must_use]
    pub fn line(&self, id: u32) -> &Line {
        &self.lines[id as usize]
    }

    /// Commit a batch of nodes and volume elements.
    ///
    /// Element node ids are interpreted relative to the batch and shifted
    /// past any nodes already present, so independent batches never clash.
    /// Previously derived faces and lines are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NodeOutOfBounds`] if an element references a
    /// node id outside the batch. The region is left unchanged on error.
    pub fn commit(&mut self, nodes: Vec<Point3<f64>>, hexes: Vec<Hex>) -> Result<(), RegionError> {
        let batch = nodes.len();
        for hex in &hexes {
            for &node in &hex.nodes {
                if node as usize >= batch {
                    return Err(RegionError::NodeOutOfBounds { node, count: batch });
                }
            }
        }

        let base = self.nodes.len() as u32;
        self.nodes.extend(nodes);
        self.hexes.extend(hexes.into_iter().map(|hex| {
            let mut shifted = hex.nodes;
            for node in &mut shifted {
                *node += base;
            }
            Hex::new(shifted)
        }));

        self.faces.clear();
        self.lines.clear();
        self.face_index.clear();
        self.line_index.clear();
        self.face_use.clear();
        Ok(())
    }

    /// Derive the unique face and line sets from the committed volumes.
    ///
    /// Faces are numbered in first-encounter order over hexes in id order;
    /// lines likewise over faces. Calling this twice is idempotent.
    pub fn define_faces(&mut self) {
        self.faces.clear();
        self.lines.clear();
        self.face_index.clear();
        self.line_index.clear();
        self.face_use.clear();

        for hex in &self.hexes {
            for local in &HEX_FACES {
                let quad = [
                    hex.nodes[local[0]],
                    hex.nodes[local[1]],
                    hex.nodes[local[2]],
                    hex.nodes[local[3]],
                ];
                let key = sorted4(quad);
                if let Some(&id) = self.face_index.get(&key) {
                    self.face_use[id as usize] = self.face_use[id as usize].saturating_add(1);
                } else {
                    let id = self.faces.len() as u32;
                    self.face_index.insert(key, id);
                    self.faces.push(Quad::new(quad));
                    self.face_use.push(1);
                }
            }
        }

        for face_id in 0..self.faces.len() {
            let face = self.faces[face_id];
            for local in &QUAD_EDGES {
                let pair = [face.nodes[local[0]], face.nodes[local[1]]];
                let key = sorted2(pair);
                if !self.line_index.contains_key(&key) {
                    let id = self.lines.len() as u32;
                    self.line_index.insert(key, id);
                    self.lines.push(Line::new(pair));
                }
            }
        }
    }

    /// Look up a derived face by its node ids, in any order.
    #[must_use]
    pub fn find_face(&self, nodes: [u32; 4]) -> Option<u32> {
        self.face_index.get(&sorted4(nodes)).copied()
    }

    /// Look up a derived line by its node ids, in any order.
    #[must_use]
    pub fn find_line(&self, nodes: [u32; 2]) -> Option<u32> {
        self.line_index.get(&sorted2(nodes)).copied()
    }

    /// Whether a derived face belongs to exactly one volume element.
    #[must_use]
    pub fn is_exterior_face(&self, id: u32) -> bool {
        self.face_use.get(id as usize).is_some_and(|&uses| uses == 1)
    }

    /// Ids of all faces belonging to exactly one volume element.
    #[must_use]
    pub fn exterior_faces(&self) -> Vec<u32> {
        (0..self.faces.len() as u32)
            .filter(|&id| self.is_exterior_face(id))
            .collect()
    }

    /// Componentwise minimum and maximum over all node coordinates.
    ///
    /// Returns `None` for an empty region.
    #[must_use]
    pub fn coordinate_range(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.nodes.first()?;
        let mut min = first;
        let mut max = first;
        for node in &self.nodes {
            min.x = min.x.min(node.x);
            min.y = min.y.min(node.y);
            min.z = min.z.min(node.z);
            max.x = max.x.max(node.x);
            max.y = max.y.max(node.y);
            max.z = max.z.max(node.z);
        }
        Some((min, max))
    }
}

fn sorted4(mut nodes: [u32; 4]) -> [u32; 4] {
    nodes.sort_unstable();
    nodes
}

fn sorted2(nodes: [u32; 2]) -> [u32; 2] {
    if nodes[0] <= nodes[1] {
        nodes
    } else {
        [nodes[1], nodes[0]]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn grid_nodes(nx: usize) -> Vec<Point3<f64>> {
        // (nx+1) x 2 x 2 lattice of unit cells along x
        let mut nodes = Vec::new();
        for k in 0..2 {
            for j in 0..2 {
                for i in 0..=nx {
                    nodes.push(Point3::new(i as f64, j as f64, k as f64));
                }
            }
        }
        nodes
    }

    fn beam(nx: usize) -> Region {
        let stride_j = nx + 1;
        let stride_k = 2 * (nx + 1);
        let at = |i: usize, j: usize, k: usize| (i + j * stride_j + k * stride_k) as u32;
        let hexes = (0..nx)
            .map(|i| {
                Hex::new([
                    at(i, 0, 0),
                    at(i + 1, 0, 0),
                    at(i, 1, 0),
                    at(i + 1, 1, 0),
                    at(i, 0, 1),
                    at(i + 1, 0, 1),
                    at(i, 1, 1),
                    at(i + 1, 1, 1),
                ])
            })
            .collect();
        let mut region = Region::new();
        region.commit(grid_nodes(nx), hexes).unwrap();
        region.define_faces();
        region
    }

    #[test]
    fn single_cube_faces_and_lines() {
        let region = beam(1);
        assert_eq!(region.node_count(), 8);
        assert_eq!(region.volume_count(), 1);
        assert_eq!(region.face_count(), 6);
        assert_eq!(region.line_count(), 12);
        assert_eq!(region.exterior_faces().len(), 6);
    }

    #[test]
    fn two_cube_beam_shares_a_face() {
        let region = beam(2);
        assert_eq!(region.volume_count(), 2);
        // 6 + 6 - 1 shared
        assert_eq!(region.face_count(), 11);
        // 12 + 12 - 4 shared
        assert_eq!(region.line_count(), 20);
        assert_eq!(region.exterior_faces().len(), 10);
    }

    #[test]
    fn find_face_ignores_node_order() {
        let region = beam(1);
        let id = region.find_face([0, 1, 2, 3]).unwrap();
        assert_eq!(region.find_face([3, 1, 0, 2]), Some(id));
        assert_eq!(region.find_face([0, 1, 2, 7]), None);
    }

    #[test]
    fn commit_rejects_out_of_range_ids() {
        let mut region = Region::new();
        let result = region.commit(
            vec![Point3::origin()],
            vec![Hex::new([0, 1, 2, 3, 4, 5, 6, 7])],
        );
        assert!(matches!(result, Err(RegionError::NodeOutOfBounds { .. })));
        assert!(region.is_empty());
    }

    #[test]
    fn commit_batches_are_offset() {
        let mut region = Region::new();
        region.commit(grid_nodes(1), vec![]).unwrap();
        region
            .commit(
                grid_nodes(1),
                vec![Hex::new([0, 1, 2, 3, 4, 5, 6, 7])],
            )
            .unwrap();
        assert_eq!(region.node_count(), 16);
        assert_eq!(region.hex(0).nodes[0], 8);
    }

    #[test]
    fn coordinate_range_spans_all_nodes() {
        let region = beam(3);
        let (min, max) = region.coordinate_range().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn define_faces_is_idempotent() {
        let mut region = beam(2);
        let faces = region.face_count();
        let lines = region.line_count();
        region.define_faces();
        assert_eq!(region.face_count(), faces);
        assert_eq!(region.line_count(), lines);
    }
}
