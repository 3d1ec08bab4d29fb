//! Annotation group assignment.
//!
//! Walks the committed mesh once and assigns elements to named anatomical
//! groups using purely structural predicates: segment identity and radial
//! zone carried by each element since creation, plus canonical node-key
//! lookups into the derived face and line tables. No geometry is
//! re-derived here.

use scaffold_network::{BodyNetwork, SegmentKind, Side};
use scaffold_section::{RadialZone, SectionTemplate};
use scaffold_types::{AnnotationGroup, Region};

use crate::stitch::TopologyError;
use crate::sweep::{HexSeed, SegmentMesh};
use crate::terms::body_term;

/// Offsets locating this generation's batch inside the region.
#[derive(Debug, Clone, Copy)]
pub struct BatchOffsets {
    /// First node id of the batch.
    pub node_base: u32,
    /// First volume element id of the batch.
    pub volume_base: u32,
}

/// Assign every annotation group over the committed mesh.
///
/// Returns 24 groups for a hollow body and 32 with a core, in name order.
///
/// # Errors
///
/// Returns [`TopologyError::MissingDerivedEntity`] if an expected face or
/// line is absent from the derived tables, which indicates an
/// inconsistently stitched mesh.
#[allow(clippy::too_many_lines, clippy::too_many_arguments)]
pub fn assign_groups(
    region: &Region,
    network: &BodyNetwork,
    templates: &[SectionTemplate],
    meshes: &[SegmentMesh],
    seeds: &[HexSeed],
    node_map: &[u32],
    offsets: BatchOffsets,
    use_core: bool,
) -> Result<Vec<AnnotationGroup>, TopologyError> {
    let resolve = |arena_id: u32| offsets.node_base + node_map[arena_id as usize];

    // Three-dimensional membership from element metadata
    let mut by_segment: Vec<Vec<u32>> = vec![Vec::new(); network.segments().len()];
    let mut core_volumes = Vec::new();
    let mut shell_volumes = Vec::new();
    for (index, seed) in seeds.iter().enumerate() {
        let id = offsets.volume_base + index as u32;
        by_segment[seed.segment].push(id);
        match seed.zone {
            RadialZone::Box | RadialZone::Transition => core_volumes.push(id),
            RadialZone::Shell => shell_volumes.push(id),
        }
    }

    let of_kind = |kind: SegmentKind| -> Vec<u32> {
        network
            .segment_index(kind)
            .map(|segment| by_segment[segment].clone())
            .unwrap_or_default()
    };
    let merged = |kinds: &[SegmentKind]| -> Vec<u32> {
        kinds.iter().flat_map(|&kind| of_kind(kind)).collect()
    };
    let core_of = |kind: SegmentKind| -> Vec<u32> {
        let members = of_kind(kind);
        members
            .into_iter()
            .filter(|id| core_volumes.binary_search(id).is_ok())
            .collect()
    };

    // Two-dimensional membership by node-key lookup
    let mut skin = Vec::new();
    let mut skin_by_segment: Vec<Vec<u32>> = vec![Vec::new(); network.segments().len()];
    for (segment, mesh) in meshes.iter().enumerate() {
        let template = &templates[segment];
        let mut faces = outer_faces(region, template, mesh, &resolve)?;
        if is_terminal(network.segments()[segment].kind) {
            faces.extend(cap_faces(region, template, mesh, &resolve)?);
        }
        skin.extend_from_slice(&faces);
        skin_by_segment[segment] = faces;
    }

    let limb_skin = |arm: SegmentKind, hand: SegmentKind| -> Vec<u32> {
        let mut faces = Vec::new();
        for kind in [arm, hand] {
            if let Some(segment) = network.segment_index(kind) {
                faces.extend_from_slice(&skin_by_segment[segment]);
            }
        }
        faces
    };

    let make = |name: &str| AnnotationGroup::new(name, body_term(name));
    let mut groups = Vec::with_capacity(if use_core { 32 } else { 24 });

    groups.push(make("abdomen").with_volumes(of_kind(SegmentKind::Abdomen)));
    if use_core {
        groups.push(make("abdominal cavity").with_volumes(core_of(SegmentKind::Abdomen)));
        groups.push(
            make("abdominal cavity boundary")
                .with_faces(cavity_boundary(region, network, templates, meshes, &resolve, SegmentKind::Abdomen)?),
        );
    }
    groups.push(make("arm").with_volumes(merged(&[
        SegmentKind::Arm(Side::Left),
        SegmentKind::Arm(Side::Right),
        SegmentKind::Hand(Side::Left),
        SegmentKind::Hand(Side::Right),
    ])));
    groups.push(make("body").with_volumes((0..seeds.len() as u32).map(|i| offsets.volume_base + i).collect()));
    if use_core {
        groups.push(make("core").with_volumes(core_volumes.clone()));
        groups.push(make("diaphragm").with_faces(core_section_faces(
            region,
            network,
            templates,
            meshes,
            &resolve,
            SegmentKind::Thorax,
            SectionEnd::Last,
        )?));
    }
    groups.push(make("foot").with_volumes(merged(&[
        SegmentKind::Foot(Side::Left),
        SegmentKind::Foot(Side::Right),
    ])));
    groups.push(make("hand").with_volumes(merged(&[
        SegmentKind::Hand(Side::Left),
        SegmentKind::Hand(Side::Right),
    ])));
    groups.push(make("head").with_volumes(of_kind(SegmentKind::Head)));
    groups.push(make("head skin epidermis").with_faces(
        network
            .segment_index(SegmentKind::Head)
            .map(|segment| skin_by_segment[segment].clone())
            .unwrap_or_default(),
    ));
    groups.push(make("left arm").with_volumes(merged(&[
        SegmentKind::Arm(Side::Left),
        SegmentKind::Hand(Side::Left),
    ])));
    groups.push(make("left arm skin epidermis").with_faces(limb_skin(
        SegmentKind::Arm(Side::Left),
        SegmentKind::Hand(Side::Left),
    )));
    groups.push(make("left foot").with_volumes(of_kind(SegmentKind::Foot(Side::Left))));
    groups.push(make("left hand").with_volumes(of_kind(SegmentKind::Hand(Side::Left))));
    groups.push(make("left leg").with_volumes(merged(&[
        SegmentKind::Leg(Side::Left),
        SegmentKind::Foot(Side::Left),
    ])));
    groups.push(make("left leg skin epidermis").with_faces(limb_skin(
        SegmentKind::Leg(Side::Left),
        SegmentKind::Foot(Side::Left),
    )));
    groups.push(make("leg").with_volumes(merged(&[
        SegmentKind::Leg(Side::Left),
        SegmentKind::Leg(Side::Right),
        SegmentKind::Foot(Side::Left),
        SegmentKind::Foot(Side::Right),
    ])));
    groups.push(make("neck").with_volumes(of_kind(SegmentKind::Neck)));
    groups.push(make("right arm").with_volumes(merged(&[
        SegmentKind::Arm(Side::Right),
        SegmentKind::Hand(Side::Right),
    ])));
    groups.push(make("right arm skin epidermis").with_faces(limb_skin(
        SegmentKind::Arm(Side::Right),
        SegmentKind::Hand(Side::Right),
    )));
    groups.push(make("right foot").with_volumes(of_kind(SegmentKind::Foot(Side::Right))));
    groups.push(make("right hand").with_volumes(of_kind(SegmentKind::Hand(Side::Right))));
    groups.push(make("right leg").with_volumes(merged(&[
        SegmentKind::Leg(Side::Right),
        SegmentKind::Foot(Side::Right),
    ])));
    groups.push(make("right leg skin epidermis").with_faces(limb_skin(
        SegmentKind::Leg(Side::Right),
        SegmentKind::Foot(Side::Right),
    )));
    if use_core {
        groups.push(make("shell").with_volumes(shell_volumes));
    }
    groups.push(make("skin epidermis").with_faces(skin));
    if use_core {
        groups.push(make("spinal cord").with_lines(spinal_lines(
            region, network, templates, meshes, &resolve,
        )?));
        groups.push(make("thoracic cavity").with_volumes(core_of(SegmentKind::Thorax)));
        groups.push(
            make("thoracic cavity boundary")
                .with_faces(cavity_boundary(region, network, templates, meshes, &resolve, SegmentKind::Thorax)?),
        );
    }
    groups.push(make("thorax").with_volumes(of_kind(SegmentKind::Thorax)));
    groups.push(make("torso").with_volumes(merged(&[
        SegmentKind::Thorax,
        SegmentKind::Abdomen,
    ])));

    Ok(groups)
}

/// Whether a segment ends the network (its last station carries a cap).
const fn is_terminal(kind: SegmentKind) -> bool {
    matches!(
        kind,
        SegmentKind::Head | SegmentKind::Hand(_) | SegmentKind::Foot(_)
    )
}

#[derive(Debug, Clone, Copy)]
enum SectionEnd {
    First,
    Last,
}

fn find_face(
    region: &Region,
    nodes: [u32; 4],
    context: &'static str,
) -> Result<u32, TopologyError> {
    region.find_face(nodes).ok_or(TopologyError::MissingDerivedEntity {
        entity: "face",
        context,
    })
}

/// Outer-surface faces of one segment, layer by layer around the ring.
fn outer_faces(
    region: &Region,
    template: &SectionTemplate,
    mesh: &SegmentMesh,
    resolve: &impl Fn(u32) -> u32,
) -> Result<Vec<u32>, TopologyError> {
    let around = template.spec().elements_around;
    let mut faces = Vec::new();
    for layer in 0..mesh.grid.len() - 1 {
        let (lower, upper) = (&mesh.grid[layer], &mesh.grid[layer + 1]);
        for j in 0..around {
            let quad = [
                resolve(lower[template.outer_node(j)]),
                resolve(lower[template.outer_node(j + 1)]),
                resolve(upper[template.outer_node(j)]),
                resolve(upper[template.outer_node(j + 1)]),
            ];
            faces.push(find_face(region, quad, "outer surface")?);
        }
    }
    Ok(faces)
}

/// End-cap faces at a terminal segment's last station.
fn cap_faces(
    region: &Region,
    template: &SectionTemplate,
    mesh: &SegmentMesh,
    resolve: &impl Fn(u32) -> u32,
) -> Result<Vec<u32>, TopologyError> {
    let last = &mesh.grid[mesh.grid.len() - 1];
    let mut faces = Vec::with_capacity(template.cell_count());
    for cell in template.cells() {
        let quad = [
            resolve(last[cell.nodes[0]]),
            resolve(last[cell.nodes[1]]),
            resolve(last[cell.nodes[2]]),
            resolve(last[cell.nodes[3]]),
        ];
        faces.push(find_face(region, quad, "end cap")?);
    }
    Ok(faces)
}

/// Core (box plus transition) faces of one section of a segment.
fn core_section_faces(
    region: &Region,
    network: &BodyNetwork,
    templates: &[SectionTemplate],
    meshes: &[SegmentMesh],
    resolve: &impl Fn(u32) -> u32,
    kind: SegmentKind,
    end: SectionEnd,
) -> Result<Vec<u32>, TopologyError> {
    let Some(segment) = network.segment_index(kind) else {
        return Ok(Vec::new());
    };
    let template = &templates[segment];
    let mesh = &meshes[segment];
    let station = match end {
        SectionEnd::First => &mesh.grid[0],
        SectionEnd::Last => &mesh.grid[mesh.grid.len() - 1],
    };
    let mut faces = Vec::new();
    for cell in template.cells() {
        if cell.zone == RadialZone::Shell {
            continue;
        }
        let quad = [
            resolve(station[cell.nodes[0]]),
            resolve(station[cell.nodes[1]]),
            resolve(station[cell.nodes[2]]),
            resolve(station[cell.nodes[3]]),
        ];
        faces.push(find_face(region, quad, "core section")?);
    }
    Ok(faces)
}

/// Boundary of a segment's core region: both end sections plus the
/// core-to-shell interface swept along the segment.
fn cavity_boundary(
    region: &Region,
    network: &BodyNetwork,
    templates: &[SectionTemplate],
    meshes: &[SegmentMesh],
    resolve: &impl Fn(u32) -> u32,
    kind: SegmentKind,
) -> Result<Vec<u32>, TopologyError> {
    let Some(segment) = network.segment_index(kind) else {
        return Ok(Vec::new());
    };
    let template = &templates[segment];
    let mesh = &meshes[segment];
    let around = template.spec().elements_around;

    let mut faces =
        core_section_faces(region, network, templates, meshes, resolve, kind, SectionEnd::First)?;
    faces.extend(core_section_faces(
        region,
        network,
        templates,
        meshes,
        resolve,
        kind,
        SectionEnd::Last,
    )?);
    for layer in 0..mesh.grid.len() - 1 {
        let (lower, upper) = (&mesh.grid[layer], &mesh.grid[layer + 1]);
        for j in 0..around {
            let quad = [
                resolve(lower[template.inner_node(j)]),
                resolve(lower[template.inner_node(j + 1)]),
                resolve(upper[template.inner_node(j)]),
                resolve(upper[template.inner_node(j + 1)]),
            ];
            faces.push(find_face(region, quad, "cavity boundary")?);
        }
    }
    Ok(faces)
}

/// The dorsal core-box line through neck, thorax and abdomen.
fn spinal_lines(
    region: &Region,
    network: &BodyNetwork,
    templates: &[SectionTemplate],
    meshes: &[SegmentMesh],
    resolve: &impl Fn(u32) -> u32,
) -> Result<Vec<u32>, TopologyError> {
    let mut lines = Vec::new();
    for kind in [SegmentKind::Neck, SegmentKind::Thorax, SegmentKind::Abdomen] {
        let Some(segment) = network.segment_index(kind) else {
            continue;
        };
        let template = &templates[segment];
        let Some(core) = template.spec().core else {
            continue;
        };
        let Some(dorsal) = template.box_node(0, core.box_major / 2) else {
            continue;
        };
        let mesh = &meshes[segment];
        for layer in 0..mesh.grid.len() - 1 {
            let pair = [
                resolve(mesh.grid[layer][dorsal]),
                resolve(mesh.grid[layer + 1][dorsal]),
            ];
            let line = region
                .find_line(pair)
                .ok_or(TopologyError::MissingDerivedEntity {
                    entity: "line",
                    context: "spinal cord",
                })?;
            lines.push(line);
        }
    }
    Ok(lines)
}
