//! Anatomical ontology terms.
//!
//! Term identifiers are carried on annotation groups for lookup purposes
//! only; nothing here interprets them.

/// Group name to ontology term, sorted by name.
const BODY_TERMS: &[(&str, &str)] = &[
    ("abdomen", "UBERON:0000916"),
    ("abdominal cavity", "UBERON:0003684"),
    ("abdominal cavity boundary", "ILX:0796509"),
    ("arm", "UBERON:0001460"),
    ("body", "UBERON:0000468"),
    ("core", "ILX:0793677"),
    ("diaphragm", "UBERON:0001103"),
    ("foot", "UBERON:0002387"),
    ("hand", "UBERON:0002398"),
    ("head", "UBERON:0000033"),
    ("head skin epidermis", "ILX:0796703"),
    ("left arm", "FMA:24896"),
    ("left arm skin epidermis", "ILX:0796701"),
    ("left foot", "FMA:24497"),
    ("left hand", "FMA:25763"),
    ("left leg", "FMA:24981"),
    ("left leg skin epidermis", "ILX:0796704"),
    ("leg", "UBERON:0000978"),
    ("neck", "UBERON:0000974"),
    ("right arm", "FMA:24895"),
    ("right arm skin epidermis", "ILX:0796702"),
    ("right foot", "FMA:24496"),
    ("right hand", "FMA:25762"),
    ("right leg", "FMA:24980"),
    ("right leg skin epidermis", "ILX:0796705"),
    ("shell", "ILX:0793678"),
    ("skin epidermis", "UBERON:0001003"),
    ("spinal cord", "UBERON:0002240"),
    ("thoracic cavity", "UBERON:0002224"),
    ("thoracic cavity boundary", "ILX:0796508"),
    ("thorax", "ILX:0742178"),
    ("torso", "UBERON:0000915"),
];

/// Ontology term for a body annotation name; empty for unknown names.
#[must_use]
pub fn body_term(name: &str) -> &'static str {
    BODY_TERMS
        .binary_search_by_key(&name, |&(group, _)| group)
        .map_or("", |index| BODY_TERMS[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        for pair in BODY_TERMS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn known_terms_resolve() {
        assert_eq!(body_term("spinal cord"), "UBERON:0002240");
        assert_eq!(body_term("left arm"), "FMA:24896");
        assert_eq!(body_term("gills"), "");
    }

    #[test]
    fn every_entry_has_a_term() {
        for (name, term) in BODY_TERMS {
            assert!(!term.is_empty(), "{name} lacks a term");
        }
    }
}
