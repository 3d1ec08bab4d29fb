//! The fixed human body network.
//!
//! Building the graph is pure data assembly; no geometry is evaluated
//! here. Coordinates follow the anatomical convention: x runs cranial to
//! caudal (crown of the head at x = 0), y left/right, z posterior to
//! anterior. One coordinate unit is roughly a decimeter of a standing
//! adult.

use nalgebra::{Point3, Vector2, Vector3};
use scaffold_path::Centerline;
use scaffold_section::SectionSpec;

use crate::options::BodyOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Body side of a paired segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Left (positive y).
    Left,
    /// Right (negative y).
    Right,
}

impl Side {
    /// Sign of the side's y direction.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Lowercase side name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Closed set of anatomical segment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentKind {
    /// Head, swept from the neck junction to the crown.
    Head,
    /// Neck, swept upward from the upper torso junction.
    Neck,
    /// Thorax, the network root, swept caudally from the shoulders.
    Thorax,
    /// Abdomen, continuing the torso chain.
    Abdomen,
    /// Arm from shoulder to wrist.
    Arm(Side),
    /// Hand from wrist to fingertips.
    Hand(Side),
    /// Leg from hip to ankle.
    Leg(Side),
    /// Foot from ankle to toes.
    Foot(Side),
}

impl SegmentKind {
    /// Anatomical segment name, e.g. `"left arm"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Thorax => "thorax",
            Self::Abdomen => "abdomen",
            Self::Arm(Side::Left) => "left arm",
            Self::Arm(Side::Right) => "right arm",
            Self::Hand(Side::Left) => "left hand",
            Self::Hand(Side::Right) => "right hand",
            Self::Leg(Side::Left) => "left leg",
            Self::Leg(Side::Right) => "right leg",
            Self::Foot(Side::Left) => "left foot",
            Self::Foot(Side::Right) => "right foot",
        }
    }

    /// The side of a paired segment, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Arm(side) | Self::Hand(side) | Self::Leg(side) | Self::Foot(side) => Some(side),
            _ => None,
        }
    }
}

/// One anatomical segment of the network, immutable once constructed.
#[derive(Debug, Clone)]
pub struct SegmentSpec {
    /// Segment kind.
    pub kind: SegmentKind,
    /// Element count along the sweep.
    pub elements_along: usize,
    /// Cross-section resolution this segment must honor.
    pub section: SectionSpec,
    /// Centerline from first to last station.
    pub centerline: Centerline,
    /// Reference axis seeding the station frames.
    pub reference: Vector3<f64>,
    /// Section scale at the first station (major, minor axes).
    pub scale_start: Vector2<f64>,
    /// Section scale at the last station.
    pub scale_end: Vector2<f64>,
}

/// A child segment incident to a junction.
#[derive(Debug, Clone, Copy)]
pub struct JunctionChild {
    /// Index of the child segment in the network.
    pub segment: usize,
    /// Ring alignment offset (0 or host-around/2), pre-resolving the
    /// signed-angle correspondence tie-break in declaration order.
    pub align_offset: usize,
}

/// A named connection point between a host station and child segments.
#[derive(Debug, Clone)]
pub struct Junction {
    /// Junction name, for diagnostics.
    pub name: &'static str,
    /// Index of the host segment.
    pub host: usize,
    /// Station index on the host whose section the children share.
    pub host_station: usize,
    /// Children in stitching order.
    pub children: Vec<JunctionChild>,
}

/// The whole-body network: segments plus junctions.
#[derive(Debug, Clone)]
pub struct BodyNetwork {
    segments: Vec<SegmentSpec>,
    junctions: Vec<Junction>,
}

/// Segment indices in declaration order.
pub(crate) const THORAX: usize = 0;
pub(crate) const NECK: usize = 1;
pub(crate) const HEAD: usize = 2;
pub(crate) const ARM_LEFT: usize = 3;
pub(crate) const ARM_RIGHT: usize = 4;
pub(crate) const HAND_LEFT: usize = 5;
pub(crate) const HAND_RIGHT: usize = 6;
pub(crate) const ABDOMEN: usize = 7;
pub(crate) const LEG_LEFT: usize = 8;
pub(crate) const LEG_RIGHT: usize = 9;
pub(crate) const FOOT_LEFT: usize = 10;
pub(crate) const FOOT_RIGHT: usize = 11;

// Landmark stations of the body chain (x cranial to caudal)
const CROWN: f64 = 0.0;
const NECK_TOP: f64 = 2.0;
const SHOULDER: f64 = 3.0;
const THORAX_BOTTOM: f64 = 6.5;
const HIP: f64 = 10.0;
const ANKLE_X: f64 = 17.2;

// Torso section scales (half-width, half-depth)
const TORSO_SCALE: Vector2<f64> = Vector2::new(1.4, 1.0);
const PELVIS_SCALE: Vector2<f64> = Vector2::new(1.3, 0.95);

impl BodyNetwork {
    /// Build the human network for validated options.
    ///
    /// The graph shape is fixed; options only set resolutions and core
    /// presence.
    #[must_use]
    pub fn human(options: &BodyOptions) -> Self {
        let torso_section = options.section_spec(options.elements_around_torso);
        let head_section = options.section_spec(options.elements_around_head);
        let arm_section = options.section_spec(options.elements_around_arm);
        let leg_section = options.section_spec(options.elements_around_leg);

        let mut segments = Vec::with_capacity(12);

        segments.push(SegmentSpec {
            kind: SegmentKind::Thorax,
            elements_along: options.elements_along_thorax,
            section: torso_section,
            centerline: spine_curve(SHOULDER, THORAX_BOTTOM, 0.0, -0.12, 0.02),
            reference: Vector3::y(),
            scale_start: TORSO_SCALE,
            scale_end: TORSO_SCALE,
        });

        segments.push(SegmentSpec {
            kind: SegmentKind::Neck,
            elements_along: options.elements_along_neck,
            section: torso_section,
            centerline: Centerline::straight(
                Point3::new(SHOULDER, 0.0, 0.0),
                Point3::new(NECK_TOP, 0.0, 0.0),
            ),
            reference: Vector3::y(),
            scale_start: Vector2::new(0.5, 0.45),
            scale_end: Vector2::new(0.35, 0.35),
        });

        segments.push(SegmentSpec {
            kind: SegmentKind::Head,
            elements_along: options.elements_along_head,
            section: head_section,
            centerline: Centerline::straight(
                Point3::new(NECK_TOP, 0.0, 0.0),
                Point3::new(CROWN, 0.0, 0.0),
            ),
            reference: Vector3::y(),
            scale_start: Vector2::new(0.5, 0.45),
            scale_end: Vector2::new(0.72, 0.68),
        });

        for (index, side) in [(ARM_LEFT, Side::Left), (ARM_RIGHT, Side::Right)] {
            debug_assert_eq!(segments.len(), index);
            let s = side.sign();
            segments.push(SegmentSpec {
                kind: SegmentKind::Arm(side),
                elements_along: options.elements_along_arm_to_hand,
                section: arm_section,
                centerline: Centerline::straight(
                    Point3::new(3.2, s * 1.5, 0.0),
                    Point3::new(6.8, s * 3.4, 0.0),
                ),
                reference: Vector3::x(),
                scale_start: Vector2::new(0.42, 0.38),
                scale_end: Vector2::new(0.3, 0.28),
            });
        }

        for (index, side) in [(HAND_LEFT, Side::Left), (HAND_RIGHT, Side::Right)] {
            debug_assert_eq!(segments.len(), index);
            let s = side.sign();
            segments.push(SegmentSpec {
                kind: SegmentKind::Hand(side),
                elements_along: options.elements_along_hand,
                section: arm_section,
                centerline: Centerline::straight(
                    Point3::new(6.8, s * 3.4, 0.0),
                    Point3::new(7.6, s * 3.8, 0.0),
                ),
                reference: Vector3::x(),
                scale_start: Vector2::new(0.32, 0.26),
                scale_end: Vector2::new(0.36, 0.14),
            });
        }

        segments.push(SegmentSpec {
            kind: SegmentKind::Abdomen,
            elements_along: options.elements_along_abdomen,
            section: torso_section,
            centerline: spine_curve(THORAX_BOTTOM, HIP, 0.02, 0.15, 0.0),
            reference: Vector3::y(),
            scale_start: TORSO_SCALE,
            scale_end: PELVIS_SCALE,
        });

        for (index, side) in [(LEG_LEFT, Side::Left), (LEG_RIGHT, Side::Right)] {
            debug_assert_eq!(segments.len(), index);
            let s = side.sign();
            segments.push(SegmentSpec {
                kind: SegmentKind::Leg(side),
                elements_along: options.elements_along_leg_to_foot,
                section: leg_section,
                centerline: Centerline::straight(
                    Point3::new(HIP, s * 0.7, 0.0),
                    Point3::new(ANKLE_X, s * 1.0, 0.0),
                ),
                reference: Vector3::y(),
                scale_start: Vector2::new(0.62, 0.6),
                scale_end: Vector2::new(0.45, 0.42),
            });
        }

        for (index, side) in [(FOOT_LEFT, Side::Left), (FOOT_RIGHT, Side::Right)] {
            debug_assert_eq!(segments.len(), index);
            let s = side.sign();
            segments.push(SegmentSpec {
                kind: SegmentKind::Foot(side),
                elements_along: options.elements_along_foot,
                section: leg_section,
                centerline: Centerline::straight(
                    Point3::new(ANKLE_X, s * 1.0, 0.0),
                    Point3::new(17.7, s * 1.05, 1.45),
                ),
                reference: Vector3::y(),
                scale_start: Vector2::new(0.48, 0.3),
                scale_end: Vector2::new(0.5, 0.22),
            });
        }

        let half_torso = options.elements_around_torso / 2;
        let junctions = vec![
            Junction {
                name: "upper torso",
                host: THORAX,
                host_station: 0,
                children: vec![
                    JunctionChild {
                        segment: NECK,
                        align_offset: 0,
                    },
                    JunctionChild {
                        segment: ARM_LEFT,
                        align_offset: 0,
                    },
                    JunctionChild {
                        segment: ARM_RIGHT,
                        align_offset: half_torso,
                    },
                ],
            },
            Junction {
                name: "neck to head",
                host: NECK,
                host_station: options.elements_along_neck,
                children: vec![JunctionChild {
                    segment: HEAD,
                    align_offset: 0,
                }],
            },
            Junction {
                name: "thorax to abdomen",
                host: THORAX,
                host_station: options.elements_along_thorax,
                children: vec![JunctionChild {
                    segment: ABDOMEN,
                    align_offset: 0,
                }],
            },
            Junction {
                name: "lower torso",
                host: ABDOMEN,
                host_station: options.elements_along_abdomen,
                children: vec![
                    JunctionChild {
                        segment: LEG_LEFT,
                        align_offset: 0,
                    },
                    JunctionChild {
                        segment: LEG_RIGHT,
                        align_offset: half_torso,
                    },
                ],
            },
            Junction {
                name: "left wrist",
                host: ARM_LEFT,
                host_station: options.elements_along_arm_to_hand,
                children: vec![JunctionChild {
                    segment: HAND_LEFT,
                    align_offset: 0,
                }],
            },
            Junction {
                name: "right wrist",
                host: ARM_RIGHT,
                host_station: options.elements_along_arm_to_hand,
                children: vec![JunctionChild {
                    segment: HAND_RIGHT,
                    align_offset: 0,
                }],
            },
            Junction {
                name: "left ankle",
                host: LEG_LEFT,
                host_station: options.elements_along_leg_to_foot,
                children: vec![JunctionChild {
                    segment: FOOT_LEFT,
                    align_offset: 0,
                }],
            },
            Junction {
                name: "right ankle",
                host: LEG_RIGHT,
                host_station: options.elements_along_leg_to_foot,
                children: vec![JunctionChild {
                    segment: FOOT_RIGHT,
                    align_offset: 0,
                }],
            },
        ];

        Self {
            segments,
            junctions,
        }
    }

    /// Segments in declaration order.
    #[must_use]
    pub fn segments(&self) -> &[SegmentSpec] {
        &self.segments
    }

    /// Junctions in stitching order.
    #[must_use]
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Index of the segment with a kind.
    #[must_use]
    pub fn segment_index(&self, kind: SegmentKind) -> Option<usize> {
        self.segments.iter().position(|spec| spec.kind == kind)
    }
}

/// The torso spine curve: a spline with a gentle anterior-posterior bow.
fn spine_curve(x0: f64, x1: f64, z0: f64, z_mid: f64, z1: f64) -> Centerline {
    let controls = vec![
        Point3::new(x0, 0.0, z0),
        Point3::new((x0 + x1) * 0.5, 0.0, z_mid),
        Point3::new(x1, 0.0, z1),
    ];
    // Three controls always satisfy the spline minimum
    Centerline::spline(controls).unwrap_or(Centerline::Straight {
        start: Point3::new(x0, 0.0, z0),
        end: Point3::new(x1, 0.0, z1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> BodyNetwork {
        BodyNetwork::human(&BodyOptions::human_1_coarse())
    }

    #[test]
    fn twelve_segments_eight_junctions() {
        let network = network();
        assert_eq!(network.segments().len(), 12);
        assert_eq!(network.junctions().len(), 8);
    }

    #[test]
    fn every_non_root_segment_is_someones_child() {
        let network = network();
        let mut child_of = vec![0usize; network.segments().len()];
        for junction in network.junctions() {
            for child in &junction.children {
                child_of[child.segment] += 1;
            }
        }
        assert_eq!(child_of[THORAX], 0);
        for (index, &count) in child_of.iter().enumerate() {
            if index != THORAX {
                assert_eq!(count, 1, "segment {index} must have exactly one parent");
            }
        }
    }

    #[test]
    fn graph_is_acyclic_from_the_root() {
        let network = network();
        // Children always appear as hosts only after being stitched
        let mut reached = vec![false; network.segments().len()];
        reached[THORAX] = true;
        for junction in network.junctions() {
            assert!(
                reached[junction.host],
                "junction {} hosted by unreached segment",
                junction.name
            );
            for child in &junction.children {
                assert!(!reached[child.segment]);
                reached[child.segment] = true;
            }
        }
        assert!(reached.iter().all(|&r| r));
    }

    #[test]
    fn bifurcation_offsets_follow_declaration_order() {
        let network = network();
        let upper = &network.junctions()[0];
        assert_eq!(upper.children.len(), 3);
        assert_eq!(upper.children[0].align_offset, 0);
        assert_eq!(upper.children[1].align_offset, 0);
        assert_eq!(upper.children[2].align_offset, 6);
    }

    #[test]
    fn torso_chain_shares_one_section_spec() {
        let network = network();
        let thorax = &network.segments()[THORAX];
        let neck = &network.segments()[NECK];
        let abdomen = &network.segments()[ABDOMEN];
        assert_eq!(thorax.section, neck.section);
        assert_eq!(thorax.section, abdomen.section);
    }

    #[test]
    fn limbs_mirror_left_to_right() {
        let network = network();
        let left = &network.segments()[ARM_LEFT];
        let right = &network.segments()[ARM_RIGHT];
        let (Centerline::Straight { start: ls, end: le }, Centerline::Straight { start: rs, end: re }) =
            (&left.centerline, &right.centerline)
        else {
            panic!("arm centerlines must be straight");
        };
        assert_eq!(ls.y, -rs.y);
        assert_eq!(le.y, -re.y);
        assert_eq!(ls.x, rs.x);
    }

    #[test]
    fn head_ends_at_the_crown() {
        let network = network();
        let head = &network.segments()[HEAD];
        let crown = head.centerline.point_at(1.0);
        assert_eq!(crown.x, 0.0);
    }

    #[test]
    fn kind_names() {
        assert_eq!(SegmentKind::Arm(Side::Left).name(), "left arm");
        assert_eq!(SegmentKind::Foot(Side::Right).name(), "right foot");
        assert_eq!(SegmentKind::Thorax.side(), None);
        assert_eq!(SegmentKind::Hand(Side::Left).side(), Some(Side::Left));
    }
}
