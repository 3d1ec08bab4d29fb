//! Segment mesh building.
//!
//! Sweeps a cross-section template through a segment's sampled stations:
//! one instance of the template's node layout per station, one layer of
//! hex elements per consecutive station pair. Every element keeps its
//! segment, axial layer and radial zone so the annotation assigner never
//! re-derives geometry.

use scaffold_path::Station;
use scaffold_section::{RadialZone, SectionTemplate};
use scaffold_types::{NodeArena, Point3};

/// A staged three-dimensional element with its structural metadata.
#[derive(Debug, Clone, Copy)]
pub struct HexSeed {
    /// Arena node ids in binary corner order (section cell at the lower
    /// station, then the same cell at the upper station).
    pub nodes: [u32; 8],
    /// Index of the owning segment in the network.
    pub segment: usize,
    /// Axial layer, 0 at the segment's first station.
    pub layer: usize,
    /// Radial zone inherited from the section cell.
    pub zone: RadialZone,
}

/// Per-segment sweep output: the full station-by-template node grid.
///
/// `grid[station][template_node]` is the arena id of that node. The first
/// station's row doubles as the boundary ring record handed to the
/// junction stitcher.
#[derive(Debug, Clone)]
pub struct SegmentMesh {
    /// Index of the segment in the network.
    pub segment: usize,
    /// Arena node ids per station and template node.
    pub grid: Vec<Vec<u32>>,
}

/// Sweep one segment, allocating nodes from the shared arena and pushing
/// its elements onto `seeds` in layer-major order.
pub fn sweep_segment(
    arena: &mut NodeArena,
    segment: usize,
    template: &SectionTemplate,
    stations: &[Station],
    seeds: &mut Vec<HexSeed>,
) -> SegmentMesh {
    let mut grid = Vec::with_capacity(stations.len());
    for station in stations {
        let mut row = Vec::with_capacity(template.node_count());
        for local in template.nodes() {
            let position: Point3<f64> = station.centre
                + station.frame.normal * (local.x * station.scale.x)
                + station.frame.binormal * (local.y * station.scale.y);
            row.push(arena.push(position));
        }
        grid.push(row);
    }

    for layer in 0..stations.len() - 1 {
        let (lower, upper) = (&grid[layer], &grid[layer + 1]);
        for cell in template.cells() {
            seeds.push(HexSeed {
                nodes: [
                    lower[cell.nodes[0]],
                    lower[cell.nodes[1]],
                    lower[cell.nodes[2]],
                    lower[cell.nodes[3]],
                    upper[cell.nodes[0]],
                    upper[cell.nodes[1]],
                    upper[cell.nodes[2]],
                    upper[cell.nodes[3]],
                ],
                segment,
                layer,
                zone: cell.zone,
            });
        }
    }

    SegmentMesh { segment, grid }
}
