//! Node arena with stable ids and a union-find alias table.
//!
//! Segment builders allocate nodes freely; the junction stitcher then
//! identifies boundary nodes across segments by aliasing rather than by
//! rewriting positions. Compaction resolves every alias to its canonical
//! node and renumbers the survivors in creation order, so the committed
//! mesh is independent of stitching order.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::error::RegionError;

/// Growable node storage with stable `u32` identities and aliasing.
///
/// # Example
///
/// ```
/// use scaffold_types::{NodeArena, Point3};
///
/// let mut arena = NodeArena::new();
/// let a = arena.push(Point3::new(0.0, 0.0, 0.0));
/// let b = arena.push(Point3::new(1.0, 0.0, 0.0));
/// arena.alias(b, a);
/// assert_eq!(arena.resolve(b), a);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    positions: Vec<Point3<f64>>,
    parent: Vec<u32>,
}

/// Result of [`NodeArena::compact`]: canonical positions plus a map from
/// every arena id to its final node id.
#[derive(Debug, Clone)]
pub struct CompactNodes {
    /// Canonical node positions in creation order.
    pub positions: Vec<Point3<f64>>,
    /// Final node id for each arena id (aliased ids map to their target).
    pub map: Vec<u32>,
}

impl NodeArena {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            parent: Vec::new(),
        }
    }

    /// Number of nodes ever allocated (including aliased ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check whether the arena has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Allocate a node and return its stable id.
    pub fn push(&mut self, position: Point3<f64>) -> u32 {
        let id = self.positions.len() as u32;
        self.positions.push(position);
        self.parent.push(id);
        id
    }

    /// Position recorded for an arena id (pre-alias).
    #[must_use]
    pub fn position(&self, id: u32) -> Point3<f64> {
        self.positions[id as usize]
    }

    /// Resolve an id to its canonical node.
    #[must_use]
    pub fn resolve(&self, id: u32) -> u32 {
        let mut current = id;
        while self.parent[current as usize] != current {
            current = self.parent[current as usize];
        }
        current
    }

    /// Alias `from` onto `to`: afterwards both resolve to `to`'s canonical
    /// node and `from`'s position is discarded at compaction.
    pub fn alias(&mut self, from: u32, to: u32) {
        let root_from = self.resolve(from);
        let root_to = self.resolve(to);
        if root_from != root_to {
            self.parent[root_from as usize] = root_to;
        }
    }

    /// Resolve all aliases and renumber canonical nodes in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::CoincidentNodes`] if two distinct canonical
    /// nodes share a bitwise-identical position; after stitching every
    /// physical point must have exactly one owner.
    pub fn compact(&self) -> Result<CompactNodes, RegionError> {
        let mut canonical_index = vec![u32::MAX; self.positions.len()];
        let mut positions = Vec::new();
        let mut occupied: HashMap<[u64; 3], u32> = HashMap::new();

        for (id, position) in self.positions.iter().enumerate() {
            if self.parent[id] != id as u32 {
                continue;
            }
            let key = [
                position.x.to_bits(),
                position.y.to_bits(),
                position.z.to_bits(),
            ];
            if let Some(&first) = occupied.get(&key) {
                return Err(RegionError::CoincidentNodes {
                    first,
                    second: id as u32,
                });
            }
            occupied.insert(key, id as u32);
            canonical_index[id] = positions.len() as u32;
            positions.push(*position);
        }

        let map = (0..self.positions.len() as u32)
            .map(|id| canonical_index[self.resolve(id) as usize])
            .collect();

        Ok(CompactNodes { positions, map })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn push_and_resolve() {
        let mut arena = NodeArena::new();
        let a = arena.push(Point3::origin());
        assert_eq!(arena.resolve(a), a);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn alias_chain_resolves_to_root() {
        let mut arena = NodeArena::new();
        let a = arena.push(Point3::new(0.0, 0.0, 0.0));
        let b = arena.push(Point3::new(1.0, 0.0, 0.0));
        let c = arena.push(Point3::new(2.0, 0.0, 0.0));
        arena.alias(c, b);
        arena.alias(b, a);
        assert_eq!(arena.resolve(c), a);
    }

    #[test]
    fn compact_drops_aliased_nodes() {
        let mut arena = NodeArena::new();
        let a = arena.push(Point3::new(0.0, 0.0, 0.0));
        let b = arena.push(Point3::new(5.0, 0.0, 0.0));
        let c = arena.push(Point3::new(1.0, 2.0, 3.0));
        arena.alias(b, a);

        let compact = arena.compact().unwrap();
        assert_eq!(compact.positions.len(), 2);
        assert_eq!(compact.map[a as usize], compact.map[b as usize]);
        assert_eq!(compact.positions[compact.map[c as usize] as usize].z, 3.0);
    }

    #[test]
    fn compact_rejects_coincident_canonicals() {
        let mut arena = NodeArena::new();
        arena.push(Point3::new(1.0, 1.0, 1.0));
        arena.push(Point3::new(1.0, 1.0, 1.0));
        assert!(matches!(
            arena.compact(),
            Err(RegionError::CoincidentNodes { first: 0, second: 1 })
        ));
    }

    #[test]
    fn compact_keeps_creation_order() {
        let mut arena = NodeArena::new();
        for k in 0..5 {
            arena.push(Point3::new(f64::from(k), 0.0, 0.0));
        }
        arena.alias(1, 3);
        let compact = arena.compact().unwrap();
        assert_eq!(compact.positions.len(), 4);
        // Canonical survivors keep their relative order
        assert_eq!(compact.positions[0].x, 0.0);
        assert_eq!(compact.positions[1].x, 2.0);
        assert_eq!(compact.positions[2].x, 3.0);
        assert_eq!(compact.positions[3].x, 4.0);
    }
}
