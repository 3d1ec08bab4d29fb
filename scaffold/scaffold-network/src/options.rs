//! Generation options and parameter presets.
//!
//! A [`BodyOptions`] value is created once per generation call, validated,
//! and never mutated afterwards; every component receives it (or values
//! derived from it) explicitly.

use scaffold_section::{CoreSpec, SectionSpec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, UnknownPresetError};

/// Names of the available parameter presets, in presentation order.
const PARAMETER_SET_NAMES: [&str; 4] = [
    "Default",
    "Human 1 Coarse",
    "Human 1 Medium",
    "Human 1 Fine",
];

/// Enumerate the available parameter set names.
#[must_use]
pub fn parameter_set_names() -> &'static [&'static str] {
    &PARAMETER_SET_NAMES
}

/// The recognized whole-body generation options.
///
/// # Example
///
/// ```
/// use scaffold_network::BodyOptions;
///
/// let options = BodyOptions::for_parameter_set("Human 1 Coarse").unwrap();
/// assert_eq!(options.elements_around_torso, 12);
/// assert!(options.use_core);
/// options.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyOptions {
    /// Number of elements along the head.
    pub elements_along_head: usize,
    /// Number of elements along the neck.
    pub elements_along_neck: usize,
    /// Number of elements along the thorax.
    pub elements_along_thorax: usize,
    /// Number of elements along the abdomen.
    pub elements_along_abdomen: usize,
    /// Number of elements along each arm to the hand.
    pub elements_along_arm_to_hand: usize,
    /// Number of elements along each hand.
    pub elements_along_hand: usize,
    /// Number of elements along each leg to the foot.
    pub elements_along_leg_to_foot: usize,
    /// Number of elements along each foot.
    pub elements_along_foot: usize,
    /// Number of elements around the head.
    pub elements_around_head: usize,
    /// Number of elements around the torso (neck, thorax and abdomen).
    pub elements_around_torso: usize,
    /// Number of elements around each arm and hand.
    pub elements_around_arm: usize,
    /// Number of elements around each leg and foot.
    pub elements_around_leg: usize,
    /// Number of element layers through the shell.
    pub elements_through_shell: usize,
    /// Diagnostic visualization flag; no geometric effect.
    pub show_trim_surfaces: bool,
    /// Whether segments carry a solid interior core.
    pub use_core: bool,
    /// Number of elements across the core box minor axis.
    pub elements_across_core_box_minor: usize,
    /// Number of element layers across the core transition.
    pub elements_across_core_transition: usize,
    /// Whether to refine the mesh uniformly before generation.
    pub refine: bool,
    /// Uniform refinement factor applied to every element count.
    pub refine_number_of_elements: usize,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self::human_1_medium()
    }
}

impl BodyOptions {
    /// Options for a named parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPresetError`] for an unrecognized name.
    pub fn for_parameter_set(name: &str) -> Result<Self, UnknownPresetError> {
        match name {
            "Default" | "Human 1 Medium" => Ok(Self::human_1_medium()),
            "Human 1 Coarse" => Ok(Self::human_1_coarse()),
            "Human 1 Fine" => Ok(Self::human_1_fine()),
            other => Err(UnknownPresetError(other.to_string())),
        }
    }

    /// The coarse human preset.
    #[must_use]
    pub const fn human_1_coarse() -> Self {
        Self {
            elements_along_head: 2,
            elements_along_neck: 1,
            elements_along_thorax: 2,
            elements_along_abdomen: 2,
            elements_along_arm_to_hand: 5,
            elements_along_hand: 1,
            elements_along_leg_to_foot: 4,
            elements_along_foot: 2,
            elements_around_head: 12,
            elements_around_torso: 12,
            elements_around_arm: 8,
            elements_around_leg: 8,
            elements_through_shell: 1,
            show_trim_surfaces: false,
            use_core: true,
            elements_across_core_box_minor: 2,
            elements_across_core_transition: 1,
            refine: false,
            refine_number_of_elements: 1,
        }
    }

    /// The medium human preset (also "Default").
    #[must_use]
    pub const fn human_1_medium() -> Self {
        Self {
            elements_along_head: 4,
            elements_along_neck: 2,
            elements_along_thorax: 4,
            elements_along_abdomen: 4,
            elements_along_arm_to_hand: 10,
            elements_along_hand: 2,
            elements_along_leg_to_foot: 8,
            elements_along_foot: 4,
            elements_around_head: 20,
            elements_around_torso: 20,
            elements_around_arm: 12,
            elements_around_leg: 12,
            elements_through_shell: 1,
            show_trim_surfaces: false,
            use_core: true,
            elements_across_core_box_minor: 4,
            elements_across_core_transition: 1,
            refine: false,
            refine_number_of_elements: 1,
        }
    }

    /// The fine human preset.
    #[must_use]
    pub const fn human_1_fine() -> Self {
        Self {
            elements_along_head: 8,
            elements_along_neck: 4,
            elements_along_thorax: 8,
            elements_along_abdomen: 8,
            elements_along_arm_to_hand: 20,
            elements_along_hand: 4,
            elements_along_leg_to_foot: 16,
            elements_along_foot: 8,
            elements_around_head: 32,
            elements_around_torso: 32,
            elements_around_arm: 16,
            elements_around_leg: 16,
            elements_through_shell: 2,
            show_trim_surfaces: false,
            use_core: true,
            elements_across_core_box_minor: 4,
            elements_across_core_transition: 1,
            refine: false,
            refine_number_of_elements: 1,
        }
    }

    /// Disable or enable the solid core.
    #[must_use]
    pub const fn with_use_core(mut self, use_core: bool) -> Self {
        self.use_core = use_core;
        self
    }

    /// Request uniform refinement by a factor.
    #[must_use]
    pub const fn with_refine(mut self, factor: usize) -> Self {
        self.refine = true;
        self.refine_number_of_elements = factor;
        self
    }

    /// Check every option value and combination against its valid domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alongs = [
            ("number of elements along head", self.elements_along_head),
            ("number of elements along neck", self.elements_along_neck),
            ("number of elements along thorax", self.elements_along_thorax),
            (
                "number of elements along abdomen",
                self.elements_along_abdomen,
            ),
            (
                "number of elements along arm to hand",
                self.elements_along_arm_to_hand,
            ),
            ("number of elements along hand", self.elements_along_hand),
            (
                "number of elements along leg to foot",
                self.elements_along_leg_to_foot,
            ),
            ("number of elements along foot", self.elements_along_foot),
        ];
        for (option, value) in alongs {
            if value < 1 {
                return Err(ConfigError::AlongTooSmall { option });
            }
        }

        for (option, value) in self.around_options() {
            if value < 8 {
                return Err(ConfigError::AroundTooSmall {
                    option,
                    actual: value,
                });
            }
            if value % 2 != 0 {
                return Err(ConfigError::AroundOdd {
                    option,
                    actual: value,
                });
            }
            if self.use_core && value % 4 != 0 {
                return Err(ConfigError::AroundNotQuadrantDivisible {
                    option,
                    actual: value,
                });
            }
        }

        if self.elements_through_shell < 1 {
            return Err(ConfigError::ThroughShellTooSmall {
                actual: self.elements_through_shell,
            });
        }

        // Branch segments alias their first section onto the torso; they
        // cannot carry more boundary nodes than the host section
        let host = ("number of elements around torso", self.elements_around_torso);
        let children = [
            ("number of elements around head", self.elements_around_head),
            ("number of elements around arm", self.elements_around_arm),
            ("number of elements around leg", self.elements_around_leg),
        ];
        for (child_option, child) in children {
            if child > host.1 {
                return Err(ConfigError::ChildAroundExceedsHost {
                    child_option,
                    child,
                    host_option: host.0,
                    host: host.1,
                });
            }
        }

        if self.use_core {
            if self.elements_across_core_transition < 1 {
                return Err(ConfigError::TransitionTooSmall {
                    actual: self.elements_across_core_transition,
                });
            }
            let minor = self.elements_across_core_box_minor;
            if minor < 2 || minor % 2 != 0 {
                return Err(ConfigError::BoxMinorInvalid { actual: minor });
            }
            for (option, around) in self.around_options() {
                if around / 2 <= minor {
                    return Err(ConfigError::BoxMinorTooLarge {
                        minor,
                        option,
                        around,
                    });
                }
            }
            let host_major = self.elements_around_torso / 2 - minor;
            for (child_option, child_around) in children {
                let child_major = child_around / 2 - minor;
                if host_major % child_major != 0 {
                    return Err(ConfigError::IncompatibleBoxMajors {
                        host_option: host.0,
                        host_major,
                        child_option,
                        child_major,
                    });
                }
            }
        }

        if self.refine_number_of_elements < 1 {
            return Err(ConfigError::RefineFactorInvalid {
                actual: self.refine_number_of_elements,
            });
        }

        Ok(())
    }

    /// A copy with the refine factor folded into every element count.
    ///
    /// Refinement multiplies along, around, shell, box minor and transition
    /// counts uniformly, which preserves validity of valid options.
    #[must_use]
    pub fn refined(&self) -> Self {
        if !self.refine || self.refine_number_of_elements <= 1 {
            let mut plain = self.clone();
            plain.refine = false;
            plain.refine_number_of_elements = 1;
            return plain;
        }
        let f = self.refine_number_of_elements;
        Self {
            elements_along_head: self.elements_along_head * f,
            elements_along_neck: self.elements_along_neck * f,
            elements_along_thorax: self.elements_along_thorax * f,
            elements_along_abdomen: self.elements_along_abdomen * f,
            elements_along_arm_to_hand: self.elements_along_arm_to_hand * f,
            elements_along_hand: self.elements_along_hand * f,
            elements_along_leg_to_foot: self.elements_along_leg_to_foot * f,
            elements_along_foot: self.elements_along_foot * f,
            elements_around_head: self.elements_around_head * f,
            elements_around_torso: self.elements_around_torso * f,
            elements_around_arm: self.elements_around_arm * f,
            elements_around_leg: self.elements_around_leg * f,
            elements_through_shell: self.elements_through_shell * f,
            show_trim_surfaces: self.show_trim_surfaces,
            use_core: self.use_core,
            elements_across_core_box_minor: self.elements_across_core_box_minor * f,
            elements_across_core_transition: self.elements_across_core_transition * f,
            refine: false,
            refine_number_of_elements: 1,
        }
    }

    /// The section spec for a segment with the given around count.
    #[must_use]
    pub fn section_spec(&self, elements_around: usize) -> SectionSpec {
        SectionSpec {
            elements_around,
            shell_rings: self.elements_through_shell,
            core: self.use_core.then(|| CoreSpec {
                box_minor: self.elements_across_core_box_minor,
                box_major: elements_around / 2 - self.elements_across_core_box_minor,
                transition: self.elements_across_core_transition,
            }),
        }
    }

    fn around_options(&self) -> [(&'static str, usize); 4] {
        [
            ("number of elements around head", self.elements_around_head),
            (
                "number of elements around torso",
                self.elements_around_torso,
            ),
            ("number of elements around arm", self.elements_around_arm),
            ("number of elements around leg", self.elements_around_leg),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parameter_sets_are_enumerated_in_order() {
        assert_eq!(
            parameter_set_names(),
            ["Default", "Human 1 Coarse", "Human 1 Medium", "Human 1 Fine"]
        );
    }

    #[test]
    fn coarse_preset_values() {
        let options = BodyOptions::for_parameter_set("Human 1 Coarse").unwrap();
        assert_eq!(options.elements_along_head, 2);
        assert_eq!(options.elements_along_neck, 1);
        assert_eq!(options.elements_along_thorax, 2);
        assert_eq!(options.elements_along_abdomen, 2);
        assert_eq!(options.elements_along_arm_to_hand, 5);
        assert_eq!(options.elements_along_hand, 1);
        assert_eq!(options.elements_along_leg_to_foot, 4);
        assert_eq!(options.elements_along_foot, 2);
        assert_eq!(options.elements_around_head, 12);
        assert_eq!(options.elements_around_torso, 12);
        assert_eq!(options.elements_around_arm, 8);
        assert_eq!(options.elements_around_leg, 8);
        assert_eq!(options.elements_through_shell, 1);
        assert!(!options.show_trim_surfaces);
        assert!(options.use_core);
        assert_eq!(options.elements_across_core_box_minor, 2);
        assert_eq!(options.elements_across_core_transition, 1);
        assert!(!options.refine);
        assert_eq!(options.refine_number_of_elements, 1);
    }

    #[test]
    fn default_matches_medium() {
        assert_eq!(BodyOptions::default(), BodyOptions::human_1_medium());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let result = BodyOptions::for_parameter_set("Human 9 Heroic");
        assert!(result.is_err());
    }

    #[test]
    fn all_presets_validate() {
        for name in parameter_set_names() {
            let options = BodyOptions::for_parameter_set(name).unwrap();
            options.validate().unwrap();
            options.with_use_core(false).validate().unwrap();
        }
    }

    #[test]
    fn odd_around_is_rejected() {
        let mut options = BodyOptions::human_1_coarse();
        options.elements_around_arm = 9;
        assert!(matches!(
            options.validate(),
            Err(ConfigError::AroundOdd { actual: 9, .. })
        ));
    }

    #[test]
    fn unquartered_around_is_rejected_only_with_core() {
        let mut options = BodyOptions::human_1_coarse();
        options.elements_around_torso = 14;
        options.elements_around_head = 14;
        assert!(matches!(
            options.validate(),
            Err(ConfigError::AroundNotQuadrantDivisible { .. })
        ));
        let hollow = options.with_use_core(false);
        hollow.validate().unwrap();
    }

    #[test]
    fn child_around_cannot_exceed_torso() {
        let mut options = BodyOptions::human_1_coarse();
        options.elements_around_arm = 16;
        assert!(matches!(
            options.validate(),
            Err(ConfigError::ChildAroundExceedsHost { .. })
        ));
    }

    #[test]
    fn incompatible_box_majors_are_rejected() {
        let mut options = BodyOptions::human_1_coarse();
        // torso major 4, arm major 3: not an integer multiple
        options.elements_around_arm = 10;
        // 10 is not divisible by 4, so relax to a hollow check first
        assert!(options.validate().is_err());
        options.elements_around_torso = 16;
        options.elements_around_head = 16;
        options.elements_around_arm = 12;
        // torso major 6, arm major 4
        assert!(matches!(
            options.validate(),
            Err(ConfigError::IncompatibleBoxMajors { .. })
        ));
    }

    #[test]
    fn refined_multiplies_counts() {
        let options = BodyOptions::human_1_coarse().with_refine(2);
        options.validate().unwrap();
        let refined = options.refined();
        assert_eq!(refined.elements_along_thorax, 4);
        assert_eq!(refined.elements_around_torso, 24);
        assert_eq!(refined.elements_across_core_box_minor, 4);
        assert!(!refined.refine);
        refined.validate().unwrap();
    }

    #[test]
    fn section_spec_derives_box_major() {
        let options = BodyOptions::human_1_coarse();
        let spec = options.section_spec(12);
        let core = spec.core.unwrap();
        assert_eq!(core.box_major, 4);
        let spec = options.section_spec(8);
        assert_eq!(spec.core.unwrap().box_major, 2);
        let hollow = options.with_use_core(false).section_spec(12);
        assert!(hollow.core.is_none());
    }
}
