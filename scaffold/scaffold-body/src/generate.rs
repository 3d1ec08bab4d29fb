//! The generation pipeline.
//!
//! One call transforms one options value into one complete mesh plus
//! annotation groups. Everything is staged in a local region first; the
//! caller's region is touched only after validation, stitching, face
//! derivation and annotation have all succeeded, so a failed generation
//! leaves no visible side effect.

use tracing::{debug, info};

use scaffold_network::{BodyNetwork, BodyOptions};
use scaffold_path::sample_stations;
use scaffold_section::SectionTemplate;
use scaffold_types::{AnnotationGroup, Hex, NodeArena, Region, RegionError};

use crate::annotate::{assign_groups, BatchOffsets};
use crate::error::GenerateResult;
use crate::stitch::stitch_junction;
use crate::sweep::sweep_segment;

/// Identifier state after a generation, for callers that append further
/// content to the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCursor {
    /// Next free node identifier.
    pub next_node_identifier: u32,
    /// Next free three-dimensional element identifier.
    pub next_volume_identifier: u32,
    /// Next free two-dimensional element identifier.
    pub next_face_identifier: u32,
    /// Next free one-dimensional element identifier.
    pub next_line_identifier: u32,
}

/// Generate the whole-body scaffold mesh into `region`.
///
/// Runs the full pipeline: option validation, network instantiation,
/// per-segment template and station sampling, segment sweeps, junction
/// stitching, node compaction, commit, face derivation and annotation
/// assignment. Returns the annotation groups (24 hollow, 32 with core)
/// and the identifier cursor.
///
/// # Errors
///
/// Any [`crate::GenerateError`]; the region is untouched on error.
pub fn generate_mesh(
    region: &mut Region,
    options: &BodyOptions,
) -> GenerateResult<(Vec<AnnotationGroup>, GenerationCursor)> {
    if !region.is_empty() {
        return Err(RegionError::Occupied {
            nodes: region.node_count(),
            volumes: region.volume_count(),
        }
        .into());
    }

    options.validate()?;
    let options = options.refined();
    if options.show_trim_surfaces {
        debug!("show trim surfaces set; diagnostic flag with no geometric effect");
    }

    let network = BodyNetwork::human(&options);
    let mut templates = Vec::with_capacity(network.segments().len());
    for spec in network.segments() {
        templates.push(SectionTemplate::new(spec.section)?);
    }

    let mut arena = NodeArena::new();
    let mut seeds = Vec::new();
    let mut meshes = Vec::with_capacity(network.segments().len());
    for (segment, spec) in network.segments().iter().enumerate() {
        let stations = sample_stations(
            &spec.centerline,
            spec.reference,
            spec.scale_start,
            spec.scale_end,
            spec.elements_along,
        )?;
        debug!(
            segment = spec.kind.name(),
            stations = stations.len(),
            nodes_per_station = templates[segment].node_count(),
            "sweeping segment"
        );
        meshes.push(sweep_segment(
            &mut arena,
            segment,
            &templates[segment],
            &stations,
            &mut seeds,
        ));
    }

    for junction in network.junctions() {
        stitch_junction(&mut arena, &meshes, &templates, junction)?;
        debug!(
            junction = junction.name,
            children = junction.children.len(),
            "stitched junction"
        );
    }

    let compact = arena.compact()?;
    let hexes: Vec<Hex> = seeds
        .iter()
        .map(|seed| Hex::new(seed.nodes.map(|node| compact.map[node as usize])))
        .collect();

    let mut staged = Region::new();
    staged.commit(compact.positions, hexes)?;
    staged.define_faces();

    let groups = assign_groups(
        &staged,
        &network,
        &templates,
        &meshes,
        &seeds,
        &compact.map,
        BatchOffsets {
            node_base: 0,
            volume_base: 0,
        },
        options.use_core,
    )?;

    info!(
        nodes = staged.node_count(),
        volumes = staged.volume_count(),
        faces = staged.face_count(),
        lines = staged.line_count(),
        groups = groups.len(),
        "generated whole-body scaffold"
    );

    let cursor = GenerationCursor {
        next_node_identifier: staged.node_count() as u32,
        next_volume_identifier: staged.volume_count() as u32,
        next_face_identifier: staged.face_count() as u32,
        next_line_identifier: staged.line_count() as u32,
    };
    *region = staged;
    Ok((groups, cursor))
}

/// Generate directly from a parameter set name.
///
/// # Errors
///
/// [`crate::GenerateError::UnknownPreset`] for an unrecognized name, in
/// which case no mesh state is committed, plus anything
/// [`generate_mesh`] raises.
pub fn generate_parameter_set(
    region: &mut Region,
    name: &str,
) -> GenerateResult<(Vec<AnnotationGroup>, GenerationCursor)> {
    let options = BodyOptions::for_parameter_set(name)?;
    generate_mesh(region, &options)
}
