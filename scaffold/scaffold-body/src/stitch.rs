//! Junction stitching.
//!
//! At every junction each child segment's first-station nodes are aliased
//! onto the host station's nodes, so shared boundaries are identified
//! rather than duplicated. Matching templates alias one to one; differing
//! resolutions use an injective section correspondence, and the child's
//! first element layer becomes the transition layer between the two
//! resolutions. No new elements are created here.

use hashbrown::HashSet;
use thiserror::Error;

use scaffold_network::Junction;
use scaffold_section::{perimeter_index, perimeter_position, SectionTemplate};
use scaffold_types::NodeArena;

use crate::sweep::SegmentMesh;

/// Junction stitching failures: no consistent node correspondence exists
/// between the incident sections.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// One section has a core and the other does not.
    #[error("junction {junction:?}: core presence differs between host and child")]
    CorePresenceMismatch {
        /// Junction name.
        junction: &'static str,
    },

    /// Through-shell layer counts differ.
    #[error("junction {junction:?}: shell layers differ (host {host}, child {child})")]
    ShellMismatch {
        /// Junction name.
        junction: &'static str,
        /// Host shell layer count.
        host: usize,
        /// Child shell layer count.
        child: usize,
    },

    /// Transition layer counts differ.
    #[error("junction {junction:?}: transition layers differ (host {host}, child {child})")]
    TransitionMismatch {
        /// Junction name.
        junction: &'static str,
        /// Host transition layer count.
        host: usize,
        /// Child transition layer count.
        child: usize,
    },

    /// Core box minor counts differ.
    #[error("junction {junction:?}: box minor counts differ (host {host}, child {child})")]
    BoxMinorMismatch {
        /// Junction name.
        junction: &'static str,
        /// Host box minor count.
        host: usize,
        /// Child box minor count.
        child: usize,
    },

    /// Host box major count is not an integer multiple of the child's.
    #[error(
        "junction {junction:?}: host box major {host_major} is not a multiple of \
         child box major {child_major}"
    )]
    BoxMajorNotMultiple {
        /// Junction name.
        junction: &'static str,
        /// Host box major count.
        host_major: usize,
        /// Child box major count.
        child_major: usize,
    },

    /// The child section carries more boundary nodes than the host.
    #[error(
        "junction {junction:?}: child section with {child_around} around exceeds \
         host with {host_around}"
    )]
    ChildExceedsHost {
        /// Junction name.
        junction: &'static str,
        /// Host around count.
        host_around: usize,
        /// Child around count.
        child_around: usize,
    },

    /// Ring alignment offsets other than 0 and host-around/2 cannot keep
    /// the core box aligned.
    #[error("junction {junction:?}: unsupported ring alignment offset {offset}")]
    UnsupportedAlignment {
        /// Junction name.
        junction: &'static str,
        /// Requested offset.
        offset: usize,
    },

    /// Residual child boundary nodes without a unique host partner.
    #[error("junction {junction:?}: {count} child boundary nodes left unmatched")]
    UnmatchedBoundaryNodes {
        /// Junction name.
        junction: &'static str,
        /// Number of unmatched or doubly-matched child nodes.
        count: usize,
    },

    /// A derived face or line expected from the stitched mesh is missing.
    #[error("derived {entity} missing for {context}")]
    MissingDerivedEntity {
        /// Kind of entity ("face" or "line").
        entity: &'static str,
        /// Where it was expected.
        context: &'static str,
    },
}

/// Compute the child-to-host template node correspondence for a junction.
///
/// Every child template node index maps to a host template node index.
/// With a core the correspondence is derived from the box grids, so box
/// columns, perimeter spokes and ring nodes stay mutually aligned; without
/// a core, rings map by angular scaling. `align_offset` rotates the child
/// section by half a turn for the second child of a bifurcation.
pub fn section_correspondence(
    host: &SectionTemplate,
    child: &SectionTemplate,
    align_offset: usize,
    junction: &'static str,
) -> Result<Vec<usize>, TopologyError> {
    let hs = *host.spec();
    let cs = *child.spec();

    if hs.shell_rings != cs.shell_rings {
        return Err(TopologyError::ShellMismatch {
            junction,
            host: hs.shell_rings,
            child: cs.shell_rings,
        });
    }
    if cs.elements_around > hs.elements_around {
        return Err(TopologyError::ChildExceedsHost {
            junction,
            host_around: hs.elements_around,
            child_around: cs.elements_around,
        });
    }
    let rotate = align_offset == hs.elements_around / 2 && align_offset != 0;
    if align_offset != 0 && !rotate {
        return Err(TopologyError::UnsupportedAlignment {
            junction,
            offset: align_offset,
        });
    }

    let mut map = vec![usize::MAX; child.node_count()];

    match (hs.core, cs.core) {
        (None, None) => {
            // Angular scaling ring by ring
            let ring_map = |j: usize| -> usize {
                (j * hs.elements_around / cs.elements_around + align_offset) % hs.elements_around
            };
            for ring in 0..=cs.shell_rings {
                for j in 0..cs.elements_around {
                    map[child.ring_node(ring, j)] = host.ring_node(ring, ring_map(j));
                }
            }
        }
        (Some(host_core), Some(child_core)) => {
            if host_core.transition != child_core.transition {
                return Err(TopologyError::TransitionMismatch {
                    junction,
                    host: host_core.transition,
                    child: child_core.transition,
                });
            }
            if host_core.box_minor != child_core.box_minor {
                return Err(TopologyError::BoxMinorMismatch {
                    junction,
                    host: host_core.box_minor,
                    child: child_core.box_minor,
                });
            }
            if host_core.box_major % child_core.box_major != 0 {
                return Err(TopologyError::BoxMajorNotMultiple {
                    junction,
                    host_major: host_core.box_major,
                    child_major: child_core.box_major,
                });
            }

            let minor = host_core.box_minor;
            let ratio = host_core.box_major / child_core.box_major;
            let to_host = |r: usize, c: usize| -> (usize, usize) {
                if rotate {
                    (minor - r, host_core.box_major - c * ratio)
                } else {
                    (r, c * ratio)
                }
            };

            // Box grid, column for column
            for r in 0..=minor {
                for c in 0..=child_core.box_major {
                    let (hr, hc) = to_host(r, c);
                    if let (Some(from), Some(to)) = (child.box_node(r, c), host.box_node(hr, hc)) {
                        map[from] = to;
                    }
                }
            }

            // Ring indices follow the mapped box perimeter, so spokes map
            // to spokes
            let mut ring_map = vec![0usize; cs.elements_around];
            for (j, target) in ring_map.iter_mut().enumerate() {
                let (r, c) = perimeter_position(minor, child_core.box_major, j);
                let (hr, hc) = to_host(r, c);
                *target = perimeter_index(minor, host_core.box_major, hr, hc).ok_or(
                    TopologyError::UnmatchedBoundaryNodes { junction, count: 1 },
                )?;
            }

            for layer in 1..child_core.transition {
                for j in 0..cs.elements_around {
                    if let (Some(from), Some(to)) = (
                        child.transition_node(layer, j),
                        host.transition_node(layer, ring_map[j]),
                    ) {
                        map[from] = to;
                    }
                }
            }
            for ring in 0..=cs.shell_rings {
                for j in 0..cs.elements_around {
                    map[child.ring_node(ring, j)] = host.ring_node(ring, ring_map[j]);
                }
            }
        }
        _ => return Err(TopologyError::CorePresenceMismatch { junction }),
    }

    // Every child node must have exactly one host partner
    let mut targets: HashSet<usize> = HashSet::with_capacity(map.len());
    let unmatched = map
        .iter()
        .filter(|&&target| target == usize::MAX || !targets.insert(target))
        .count();
    if unmatched > 0 {
        return Err(TopologyError::UnmatchedBoundaryNodes {
            junction,
            count: unmatched,
        });
    }

    Ok(map)
}

/// Stitch one junction: alias every child's first-station nodes onto the
/// host station's nodes.
pub fn stitch_junction(
    arena: &mut NodeArena,
    meshes: &[SegmentMesh],
    templates: &[SectionTemplate],
    junction: &Junction,
) -> Result<(), TopologyError> {
    let host_grid = &meshes[junction.host].grid[junction.host_station];
    for child in &junction.children {
        let map = section_correspondence(
            &templates[junction.host],
            &templates[child.segment],
            child.align_offset,
            junction.name,
        )?;
        let child_grid = &meshes[child.segment].grid[0];
        for (from, &to) in map.iter().enumerate() {
            arena.alias(child_grid[from], host_grid[to]);
        }
    }
    Ok(())
}
