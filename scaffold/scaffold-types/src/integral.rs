//! Mesh integral evaluation by Gaussian quadrature.
//!
//! Evaluates the integral of the constant field 1 over element groups:
//! volume over trilinear hexes (2x2x2 points), area over bilinear quads
//! (2x2 points), length over linear lines (exact).

use nalgebra::{Matrix3, Point3, Vector3};

use crate::region::Region;

/// The two Gauss points of order-2 quadrature on [0, 1].
const GAUSS2: [(f64, f64); 2] = [
    (0.211_324_865_405_187_1, 0.5),
    (0.788_675_134_594_812_9, 0.5),
];

/// Integrate unit volume over a set of three-dimensional elements.
///
/// Uses the absolute Jacobian determinant, so the result is a measure even
/// for strongly sheared transition elements.
#[must_use]
pub fn mesh_volume(region: &Region, elements: &[u32]) -> f64 {
    let mut total = 0.0;
    for &id in elements {
        let hex = region.hex(id);
        let corners: [Point3<f64>; 8] = std::array::from_fn(|c| region.node(hex.nodes[c]));
        for &(u, wu) in &GAUSS2 {
            for &(v, wv) in &GAUSS2 {
                for &(w, ww) in &GAUSS2 {
                    total += wu * wv * ww * hex_jacobian(&corners, u, v, w).abs();
                }
            }
        }
    }
    total
}

/// Integrate unit area over a set of two-dimensional elements.
#[must_use]
pub fn mesh_area(region: &Region, faces: &[u32]) -> f64 {
    let mut total = 0.0;
    for &id in faces {
        let face = region.face(id);
        let corners: [Point3<f64>; 4] = std::array::from_fn(|c| region.node(face.nodes[c]));
        for &(u, wu) in &GAUSS2 {
            for &(v, wv) in &GAUSS2 {
                // d r / du and d r / dv of the bilinear patch
                let du = (corners[1] - corners[0]) * (1.0 - v) + (corners[3] - corners[2]) * v;
                let dv = (corners[2] - corners[0]) * (1.0 - u) + (corners[3] - corners[1]) * u;
                total += wu * wv * du.cross(&dv).norm();
            }
        }
    }
    total
}

/// Integrate unit length over a set of one-dimensional elements.
#[must_use]
pub fn mesh_length(region: &Region, lines: &[u32]) -> f64 {
    lines
        .iter()
        .map(|&id| {
            let line = region.line(id);
            (region.node(line.nodes[1]) - region.node(line.nodes[0])).norm()
        })
        .sum()
}

/// Jacobian determinant of the trilinear map at local `(u, v, w)`.
fn hex_jacobian(corners: &[Point3<f64>; 8], u: f64, v: f64, w: f64) -> f64 {
    let mut du = Vector3::zeros();
    let mut dv = Vector3::zeros();
    let mut dw = Vector3::zeros();
    for (c, corner) in corners.iter().enumerate() {
        let pu = if c & 1 == 0 { 1.0 - u } else { u };
        let pv = if c & 2 == 0 { 1.0 - v } else { v };
        let pw = if c & 4 == 0 { 1.0 - w } else { w };
        let su = if c & 1 == 0 { -1.0 } else { 1.0 };
        let sv = if c & 2 == 0 { -1.0 } else { 1.0 };
        let sw = if c & 4 == 0 { -1.0 } else { 1.0 };
        du += corner.coords * (su * pv * pw);
        dv += corner.coords * (pu * sv * pw);
        dw += corner.coords * (pu * pv * sw);
    }
    Matrix3::from_columns(&[du, dv, dw]).determinant()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::element::Hex;
    use approx::assert_relative_eq;

    fn unit_cube() -> Region {
        let nodes = (0..8)
            .map(|k| {
                Point3::new(
                    f64::from(k & 1),
                    f64::from((k >> 1) & 1),
                    f64::from(k >> 2),
                )
            })
            .collect();
        let mut region = Region::new();
        region
            .commit(nodes, vec![Hex::new([0, 1, 2, 3, 4, 5, 6, 7])])
            .unwrap();
        region.define_faces();
        region
    }

    #[test]
    fn cube_volume_is_one() {
        let region = unit_cube();
        assert_relative_eq!(mesh_volume(&region, &[0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn scaled_cube_volume() {
        let nodes = (0..8)
            .map(|k| {
                Point3::new(
                    2.0 * f64::from(k & 1),
                    3.0 * f64::from((k >> 1) & 1),
                    0.5 * f64::from(k >> 2),
                )
            })
            .collect();
        let mut region = Region::new();
        region
            .commit(nodes, vec![Hex::new([0, 1, 2, 3, 4, 5, 6, 7])])
            .unwrap();
        assert_relative_eq!(mesh_volume(&region, &[0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn cube_surface_area_is_six() {
        let region = unit_cube();
        let exterior = region.exterior_faces();
        assert_relative_eq!(mesh_area(&region, &exterior), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn cube_edge_length_is_twelve() {
        let region = unit_cube();
        let lines: Vec<u32> = (0..region.line_count() as u32).collect();
        assert_relative_eq!(mesh_length(&region, &lines), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn inverted_element_still_measures_positive() {
        // Mirror the cube through x = 0; the Jacobian flips sign
        let nodes = (0..8)
            .map(|k| {
                Point3::new(
                    -f64::from(k & 1),
                    f64::from((k >> 1) & 1),
                    f64::from(k >> 2),
                )
            })
            .collect();
        let mut region = Region::new();
        region
            .commit(nodes, vec![Hex::new([0, 1, 2, 3, 4, 5, 6, 7])])
            .unwrap();
        assert_relative_eq!(mesh_volume(&region, &[0]), 1.0, epsilon = 1e-12);
    }
}
