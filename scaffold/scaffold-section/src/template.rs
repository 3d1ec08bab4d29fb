//! Parametric cross-section templates.
//!
//! A template is a reusable 2D node layout in local coordinates: an outer
//! ring of `around` perimeter positions, `shell` radial layers down to an
//! inner boundary ring, and, with a core, an interior box grid joined to
//! the inner ring by a transition band. It carries no absolute position;
//! the sweep scales and places one instance per axial station.
//!
//! Local axes: x is the section's major axis (frame normal), y the minor
//! axis (frame binormal). The outer ring has unit radius; ring node `j`
//! sits at angle `pi + 2*pi*j/around`, so node 0 faces the -x direction
//! and the layout is symmetric under y negation.

use nalgebra::Point2;

use crate::error::{SectionError, SectionResult};

/// Radius of the inner shell boundary relative to the unit outer ring.
const INNER_RADIUS: f64 = 0.72;

/// Core box half-extent relative to the inner radius.
const BOX_FRACTION: f64 = 0.55;

/// Resolution parameters of a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Element count around the perimeter (even, >= 8; divisible by 4 with
    /// a core).
    pub elements_around: usize,
    /// Radial element layers between the inner boundary and the outer
    /// surface.
    pub shell_rings: usize,
    /// Core layout, or `None` for a hollow tube.
    pub core: Option<CoreSpec>,
}

/// Core box resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreSpec {
    /// Box cells across the minor axis (even, >= 2).
    pub box_minor: usize,
    /// Box cells across the major axis; `2 * (minor + major)` must equal
    /// the around count.
    pub box_major: usize,
    /// Element layers between the box perimeter and the inner ring.
    pub transition: usize,
}

/// Radial zone of a section cell, carried onto every swept element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialZone {
    /// Interior box cell.
    Box,
    /// Box-to-ring transition cell.
    Transition,
    /// Shell cell between inner boundary and outer surface.
    Shell,
}

/// A planar cell of the template, `[n00, n10, n01, n11]` over the cell's
/// two local directions.
#[derive(Debug, Clone, Copy)]
pub struct SectionCell {
    /// Template node indices.
    pub nodes: [usize; 4],
    /// Radial zone tag.
    pub zone: RadialZone,
}

/// A parametric cross-section template, immutable once built.
#[derive(Debug, Clone)]
pub struct SectionTemplate {
    spec: SectionSpec,
    nodes: Vec<Point2<f64>>,
    cells: Vec<SectionCell>,
    transition_base: usize,
    ring_base: usize,
}

impl SectionTemplate {
    /// Build a template for a section spec.
    ///
    /// # Errors
    ///
    /// Rejects around counts below 8 or odd, non-quadrant-divisible around
    /// counts with a core, mismatched box perimeters, odd box minor counts
    /// and zero shell or transition layers.
    pub fn new(spec: SectionSpec) -> SectionResult<Self> {
        validate(&spec)?;

        let around = spec.elements_around;
        let mut nodes = Vec::new();
        let mut cells = Vec::new();

        if let Some(core) = spec.core {
            let (minor, major) = (core.box_minor, core.box_major);
            let max_dim = minor.max(major) as f64;
            let half_x = BOX_FRACTION * INNER_RADIUS * major as f64 / max_dim;
            let half_y = BOX_FRACTION * INNER_RADIUS * minor as f64 / max_dim;

            // Box grid, row major
            for r in 0..=minor {
                for c in 0..=major {
                    nodes.push(Point2::new(
                        -half_x + 2.0 * half_x * c as f64 / major as f64,
                        -half_y + 2.0 * half_y * r as f64 / minor as f64,
                    ));
                }
            }
            let grid = |r: usize, c: usize| r * (major + 1) + c;

            // Intermediate transition rings blend box perimeter into the
            // inner ring
            let transition_base = nodes.len();
            for layer in 1..core.transition {
                let blend = layer as f64 / core.transition as f64;
                for j in 0..around {
                    let (r, c) = perimeter_position(minor, major, j);
                    let from = nodes[grid(r, c)];
                    let to = ring_point(around, 0, spec.shell_rings, j);
                    nodes.push(Point2::from(from.coords.lerp(&to.coords, blend)));
                }
            }

            // Shell rings, inner boundary outward
            let ring_base = nodes.len();
            for ring in 0..=spec.shell_rings {
                for j in 0..around {
                    nodes.push(ring_point(around, ring, spec.shell_rings, j));
                }
            }

            // Box cells
            for r in 0..minor {
                for c in 0..major {
                    cells.push(SectionCell {
                        nodes: [
                            grid(r, c),
                            grid(r, c + 1),
                            grid(r + 1, c),
                            grid(r + 1, c + 1),
                        ],
                        zone: RadialZone::Box,
                    });
                }
            }

            // Transition cells, box perimeter outward to the inner ring
            let layer_node = |layer: usize, j: usize| -> usize {
                let j = j % around;
                if layer == 0 {
                    let (r, c) = perimeter_position(minor, major, j);
                    grid(r, c)
                } else if layer == core.transition {
                    ring_base + j
                } else {
                    transition_base + (layer - 1) * around + j
                }
            };
            for layer in 0..core.transition {
                for j in 0..around {
                    cells.push(SectionCell {
                        nodes: [
                            layer_node(layer, j),
                            layer_node(layer, j + 1),
                            layer_node(layer + 1, j),
                            layer_node(layer + 1, j + 1),
                        ],
                        zone: RadialZone::Transition,
                    });
                }
            }

            push_shell_cells(&mut cells, ring_base, around, spec.shell_rings);

            Ok(Self {
                spec,
                nodes,
                cells,
                transition_base,
                ring_base,
            })
        } else {
            for ring in 0..=spec.shell_rings {
                for j in 0..around {
                    nodes.push(ring_point(around, ring, spec.shell_rings, j));
                }
            }
            push_shell_cells(&mut cells, 0, around, spec.shell_rings);

            Ok(Self {
                spec,
                nodes,
                cells,
                transition_base: 0,
                ring_base: 0,
            })
        }
    }

    /// The spec this template was built for.
    #[must_use]
    pub const fn spec(&self) -> &SectionSpec {
        &self.spec
    }

    /// Local 2D node positions.
    #[must_use]
    pub fn nodes(&self) -> &[Point2<f64>] {
        &self.nodes
    }

    /// Planar cells with radial-zone tags.
    #[must_use]
    pub fn cells(&self) -> &[SectionCell] {
        &self.cells
    }

    /// Template node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Template cell count.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Node index on a shell ring (`ring` 0 = inner boundary, `shell_rings`
    /// = outer surface); `j` wraps around.
    #[must_use]
    pub fn ring_node(&self, ring: usize, j: usize) -> usize {
        self.ring_base + ring * self.spec.elements_around + j % self.spec.elements_around
    }

    /// Node index on the outer surface ring.
    #[must_use]
    pub fn outer_node(&self, j: usize) -> usize {
        self.ring_node(self.spec.shell_rings, j)
    }

    /// Node index on the inner boundary ring.
    #[must_use]
    pub fn inner_node(&self, j: usize) -> usize {
        self.ring_node(0, j)
    }

    /// Node index inside the core box grid; `None` without a core.
    #[must_use]
    pub fn box_node(&self, r: usize, c: usize) -> Option<usize> {
        let core = self.spec.core?;
        if r > core.box_minor || c > core.box_major {
            return None;
        }
        Some(r * (core.box_major + 1) + c)
    }

    /// Node index on an intermediate transition ring (`layer` in
    /// `1..transition`); `None` without a core or for boundary layers,
    /// which belong to the box grid and the inner ring.
    #[must_use]
    pub fn transition_node(&self, layer: usize, j: usize) -> Option<usize> {
        let core = self.spec.core?;
        if layer < 1 || layer >= core.transition {
            return None;
        }
        Some(self.transition_base + (layer - 1) * self.spec.elements_around
            + j % self.spec.elements_around)
    }
}

fn validate(spec: &SectionSpec) -> SectionResult<()> {
    let around = spec.elements_around;
    if around < 8 {
        return Err(SectionError::AroundTooSmall {
            min: 8,
            actual: around,
        });
    }
    if around % 2 != 0 {
        return Err(SectionError::AroundOdd { actual: around });
    }
    if spec.shell_rings < 1 {
        return Err(SectionError::TooFewShellRings {
            actual: spec.shell_rings,
        });
    }
    if let Some(core) = spec.core {
        if around % 4 != 0 {
            return Err(SectionError::AroundNotQuadrantDivisible { actual: around });
        }
        if core.transition < 1 {
            return Err(SectionError::TooFewTransitionRings {
                actual: core.transition,
            });
        }
        if core.box_minor < 2 || core.box_minor % 2 != 0 {
            return Err(SectionError::BoxMinorInvalid {
                actual: core.box_minor,
            });
        }
        let perimeter = 2 * (core.box_minor + core.box_major);
        if perimeter != around {
            return Err(SectionError::BoxPerimeterMismatch {
                around,
                minor: core.box_minor,
                major: core.box_major,
                perimeter,
            });
        }
    }
    Ok(())
}

fn ring_point(around: usize, ring: usize, shell_rings: usize, j: usize) -> Point2<f64> {
    let radius = INNER_RADIUS + (1.0 - INNER_RADIUS) * ring as f64 / shell_rings as f64;
    let angle = std::f64::consts::PI + 2.0 * std::f64::consts::PI * (j % around) as f64 / around as f64;
    Point2::new(radius * angle.cos(), radius * angle.sin())
}

fn push_shell_cells(
    cells: &mut Vec<SectionCell>,
    ring_base: usize,
    around: usize,
    shell_rings: usize,
) {
    let at = |ring: usize, j: usize| ring_base + ring * around + j % around;
    for ring in 0..shell_rings {
        for j in 0..around {
            cells.push(SectionCell {
                nodes: [
                    at(ring, j),
                    at(ring, j + 1),
                    at(ring + 1, j),
                    at(ring + 1, j + 1),
                ],
                zone: RadialZone::Shell,
            });
        }
    }
}

/// Grid position of box perimeter node `k`, counter-clockwise from the
/// middle of the box's -x edge (matching ring node 0 at angle pi).
///
/// The walk runs down the left edge, along the bottom row, up the right
/// edge, back along the top row and up to the start.
#[must_use]
pub fn perimeter_position(minor: usize, major: usize, k: usize) -> (usize, usize) {
    let around = 2 * (minor + major);
    let k = k % around;
    let half = minor / 2;

    if k <= half {
        // Left edge, middle downward
        (half - k, 0)
    } else if k <= half + major {
        // Bottom row, left to right
        (0, k - half)
    } else if k <= half + major + minor {
        // Right edge, bottom to top
        (k - half - major, major)
    } else if k <= half + 2 * major + minor {
        // Top row, right to left
        (minor, major - (k - half - major - minor))
    } else {
        // Left edge, top back down to the middle
        (minor - (k - half - 2 * major - minor), 0)
    }
}

/// Perimeter index of a box grid position, the inverse of
/// [`perimeter_position`]. Returns `None` for interior positions.
#[must_use]
pub fn perimeter_index(minor: usize, major: usize, r: usize, c: usize) -> Option<usize> {
    let around = 2 * (minor + major);
    let half = minor / 2;

    if c == 0 && r <= half {
        Some(half - r)
    } else if r == 0 {
        Some(half + c)
    } else if c == major {
        Some(half + major + r)
    } else if r == minor {
        Some(half + major + minor + (major - c))
    } else if c == 0 {
        Some((half + 2 * major + minor + (minor - r)) % around)
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn torso_spec() -> SectionSpec {
        SectionSpec {
            elements_around: 12,
            shell_rings: 1,
            core: Some(CoreSpec {
                box_minor: 2,
                box_major: 4,
                transition: 1,
            }),
        }
    }

    fn limb_spec() -> SectionSpec {
        SectionSpec {
            elements_around: 8,
            shell_rings: 1,
            core: Some(CoreSpec {
                box_minor: 2,
                box_major: 2,
                transition: 1,
            }),
        }
    }

    #[test]
    fn torso_template_counts() {
        let template = SectionTemplate::new(torso_spec()).unwrap();
        // 3x5 box grid + inner ring + outer ring
        assert_eq!(template.node_count(), 15 + 12 + 12);
        // 8 box + 12 transition + 12 shell
        assert_eq!(template.cell_count(), 32);
    }

    #[test]
    fn limb_template_counts() {
        let template = SectionTemplate::new(limb_spec()).unwrap();
        assert_eq!(template.node_count(), 9 + 8 + 8);
        assert_eq!(template.cell_count(), 20);
    }

    #[test]
    fn hollow_template_counts() {
        let template = SectionTemplate::new(SectionSpec {
            elements_around: 12,
            shell_rings: 1,
            core: None,
        })
        .unwrap();
        assert_eq!(template.node_count(), 24);
        assert_eq!(template.cell_count(), 12);
    }

    #[test]
    fn extra_transition_layers_add_rings() {
        let mut spec = torso_spec();
        spec.core = Some(CoreSpec {
            box_minor: 2,
            box_major: 4,
            transition: 2,
        });
        let template = SectionTemplate::new(spec).unwrap();
        assert_eq!(template.node_count(), 15 + 12 + 12 + 12);
        assert_eq!(template.cell_count(), 8 + 24 + 12);
    }

    #[test]
    fn zone_counts_partition_the_cells() {
        let template = SectionTemplate::new(torso_spec()).unwrap();
        let count = |zone: RadialZone| {
            template
                .cells()
                .iter()
                .filter(|cell| cell.zone == zone)
                .count()
        };
        assert_eq!(count(RadialZone::Box), 8);
        assert_eq!(count(RadialZone::Transition), 12);
        assert_eq!(count(RadialZone::Shell), 12);
    }

    #[test]
    fn outer_ring_has_unit_radius() {
        let template = SectionTemplate::new(limb_spec()).unwrap();
        for j in 0..8 {
            let node = template.nodes()[template.outer_node(j)];
            assert_relative_eq!(node.coords.norm(), 1.0, epsilon = 1e-12);
        }
        let inner = template.nodes()[template.inner_node(0)];
        assert!(inner.coords.norm() < 1.0);
    }

    #[test]
    fn ring_node_zero_faces_minus_x() {
        let template = SectionTemplate::new(torso_spec()).unwrap();
        let node = template.nodes()[template.outer_node(0)];
        assert_relative_eq!(node.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(node.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn perimeter_walk_round_trips() {
        for &(minor, major) in &[(2usize, 4usize), (2, 2), (4, 6)] {
            let around = 2 * (minor + major);
            for k in 0..around {
                let (r, c) = perimeter_position(minor, major, k);
                assert_eq!(
                    perimeter_index(minor, major, r, c),
                    Some(k),
                    "minor {minor} major {major} k {k}"
                );
            }
        }
    }

    #[test]
    fn perimeter_starts_at_left_middle() {
        assert_eq!(perimeter_position(2, 4, 0), (1, 0));
        assert_eq!(perimeter_position(2, 4, 1), (0, 0));
        assert_eq!(perimeter_position(2, 4, 5), (0, 4));
        assert_eq!(perimeter_position(2, 4, 11), (2, 0));
    }

    #[test]
    fn interior_positions_have_no_perimeter_index() {
        assert_eq!(perimeter_index(2, 4, 1, 2), None);
    }

    #[test]
    fn rejects_small_odd_and_unquartered_around() {
        let hollow = |around| SectionSpec {
            elements_around: around,
            shell_rings: 1,
            core: None,
        };
        assert!(matches!(
            SectionTemplate::new(hollow(6)),
            Err(SectionError::AroundTooSmall { .. })
        ));
        assert!(matches!(
            SectionTemplate::new(hollow(9)),
            Err(SectionError::AroundOdd { .. })
        ));
        // 10 around is fine without a core
        assert!(SectionTemplate::new(hollow(10)).is_ok());
        // but not with one
        let mut with_core = torso_spec();
        with_core.elements_around = 10;
        assert!(matches!(
            SectionTemplate::new(with_core),
            Err(SectionError::AroundNotQuadrantDivisible { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_box_perimeter() {
        let spec = SectionSpec {
            elements_around: 12,
            shell_rings: 1,
            core: Some(CoreSpec {
                box_minor: 2,
                box_major: 3,
                transition: 1,
            }),
        };
        assert!(matches!(
            SectionTemplate::new(spec),
            Err(SectionError::BoxPerimeterMismatch { perimeter: 10, .. })
        ));
    }

    #[test]
    fn rejects_odd_box_minor() {
        let spec = SectionSpec {
            elements_around: 12,
            shell_rings: 1,
            core: Some(CoreSpec {
                box_minor: 3,
                box_major: 3,
                transition: 1,
            }),
        };
        assert!(matches!(
            SectionTemplate::new(spec),
            Err(SectionError::BoxMinorInvalid { actual: 3 })
        ));
    }
}
