//! Named anatomical element groupings.
//!
//! An annotation group binds a name and an ontology term to per-dimension
//! element id sets. Groups may overlap freely; they are populated once by
//! the annotation assigner and read-only afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named subset of mesh elements at each dimension.
///
/// # Example
///
/// ```
/// use scaffold_types::AnnotationGroup;
///
/// let group = AnnotationGroup::new("thoracic cavity", "UBERON:0002224")
///     .with_volumes(vec![4, 2, 2, 3]);
/// assert_eq!(group.volume_elements(), &[2, 3, 4]);
/// assert!(!group.is_empty());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotationGroup {
    name: String,
    term: String,
    volumes: Vec<u32>,
    faces: Vec<u32>,
    lines: Vec<u32>,
}

impl AnnotationGroup {
    /// Create an empty group with a name and an ontology term.
    #[must_use]
    pub fn new(name: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            term: term.into(),
            volumes: Vec::new(),
            faces: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Set the three-dimensional element ids (sorted and deduplicated).
    #[must_use]
    pub fn with_volumes(mut self, mut ids: Vec<u32>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        self.volumes = ids;
        self
    }

    /// Set the two-dimensional element ids (sorted and deduplicated).
    #[must_use]
    pub fn with_faces(mut self, mut ids: Vec<u32>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        self.faces = ids;
        self
    }

    /// Set the one-dimensional element ids (sorted and deduplicated).
    #[must_use]
    pub fn with_lines(mut self, mut ids: Vec<u32>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        self.lines = ids;
        self
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ontology term identifier (lookup only, carries no semantics here).
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Sorted three-dimensional element ids.
    #[must_use]
    pub fn volume_elements(&self) -> &[u32] {
        &self.volumes
    }

    /// Sorted two-dimensional element ids.
    #[must_use]
    pub fn face_elements(&self) -> &[u32] {
        &self.faces
    }

    /// Sorted one-dimensional element ids.
    #[must_use]
    pub fn line_elements(&self) -> &[u32] {
        &self.lines
    }

    /// Element count at a mesh dimension (3, 2 or 1).
    #[must_use]
    pub fn size(&self, dimension: usize) -> usize {
        match dimension {
            3 => self.volumes.len(),
            2 => self.faces.len(),
            1 => self.lines.len(),
            _ => 0,
        }
    }

    /// Whether the group is empty at every dimension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty() && self.faces.is_empty() && self.lines.is_empty()
    }
}

/// Find a group by name.
#[must_use]
pub fn find_group_by_name<'a>(
    groups: &'a [AnnotationGroup],
    name: &str,
) -> Option<&'a AnnotationGroup> {
    groups.iter().find(|group| group.name() == name)
}

/// Find a group by ontology term.
#[must_use]
pub fn find_group_by_term<'a>(
    groups: &'a [AnnotationGroup],
    term: &str,
) -> Option<&'a AnnotationGroup> {
    groups.iter().find(|group| group.term() == term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volumes_are_sorted_and_deduplicated() {
        let group = AnnotationGroup::new("core", "ILX:0745532").with_volumes(vec![7, 1, 7, 3]);
        assert_eq!(group.volume_elements(), &[1, 3, 7]);
        assert_eq!(group.size(3), 3);
        assert_eq!(group.size(2), 0);
    }

    #[test]
    fn lookup_by_name_and_term() {
        let groups = vec![
            AnnotationGroup::new("head", "UBERON:0000033"),
            AnnotationGroup::new("neck", "UBERON:0000974"),
        ];
        assert!(find_group_by_name(&groups, "neck").is_some());
        assert!(find_group_by_name(&groups, "tail").is_none());
        assert_eq!(
            find_group_by_term(&groups, "UBERON:0000033").map(AnnotationGroup::name),
            Some("head")
        );
    }

    #[test]
    fn empty_group() {
        let group = AnnotationGroup::new("skin epidermis", "UBERON:0001003");
        assert!(group.is_empty());
        let group = group.with_lines(vec![0]);
        assert!(!group.is_empty());
    }
}
