//! Orientation frames and parallel transport.

use nalgebra::{Point3, UnitVector3, Vector3};

/// An orthonormal frame at a point on a centerline.
///
/// The tangent points forward along the sweep; normal and binormal span the
/// cross-section plane (normal carries the section's first local axis,
/// binormal the second).
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Forward direction along the centerline.
    pub tangent: Vector3<f64>,
    /// First cross-section axis.
    pub normal: Vector3<f64>,
    /// Second cross-section axis, `tangent x normal`.
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Build a frame from a tangent and a reference axis.
    ///
    /// The normal is the reference axis projected off the tangent; when the
    /// reference is (nearly) parallel to the tangent an arbitrary stable
    /// perpendicular is used instead.
    #[must_use]
    pub fn from_tangent_and_reference(tangent: Vector3<f64>, reference: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::x());
        let projected = reference - tangent * reference.dot(&tangent);
        let normal = projected
            .try_normalize(1e-10)
            .unwrap_or_else(|| stable_perpendicular(tangent));
        let binormal = tangent.cross(&normal);
        Self {
            tangent,
            normal,
            binormal,
        }
    }
}

/// A perpendicular of `v` chosen from the coordinate axis least aligned
/// with it.
fn stable_perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    let axis = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector3::y()
    } else {
        Vector3::z()
    };
    v.cross(&axis)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::y())
}

/// Compute rotation-minimizing frames at each point of a polyline.
///
/// The first frame is seeded from `reference`; every following frame is the
/// previous one rotated by the minimal rotation taking its tangent to the
/// new tangent, so the section orientation never twists discontinuously.
///
/// Returns one frame per point; empty for fewer than two points.
#[must_use]
pub fn parallel_transport_frames(points: &[Point3<f64>], reference: Vector3<f64>) -> Vec<Frame> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut frames = Vec::with_capacity(points.len());
    let first_tangent = points[1] - points[0];
    frames.push(Frame::from_tangent_and_reference(first_tangent, reference));

    for i in 1..points.len() {
        let prev = frames[i - 1];
        let tangent = if i + 1 < points.len() {
            // Interior station: average incoming and outgoing directions
            (points[i] - points[i - 1]) + (points[i + 1] - points[i])
        } else {
            points[i] - points[i - 1]
        };
        frames.push(transport(&prev, tangent));
    }

    frames
}

/// Rotate a frame so its tangent becomes `new_tangent`, carrying normal and
/// binormal along by the same minimal rotation.
fn transport(prev: &Frame, new_tangent: Vector3<f64>) -> Frame {
    let new_tangent = new_tangent
        .try_normalize(f64::EPSILON)
        .unwrap_or(prev.tangent);

    let axis = prev.tangent.cross(&new_tangent);
    let axis_len = axis.norm();
    if axis_len < 1e-14 {
        if prev.tangent.dot(&new_tangent) >= 0.0 {
            return Frame {
                tangent: new_tangent,
                ..*prev
            };
        }
        return Frame {
            tangent: new_tangent,
            normal: -prev.normal,
            binormal: prev.binormal,
        };
    }

    let axis = UnitVector3::new_normalize(axis);
    let angle = prev.tangent.dot(&new_tangent).clamp(-1.0, 1.0).acos();
    let rotate = |v: Vector3<f64>| {
        // Rodrigues rotation
        let k = axis.into_inner();
        v * angle.cos() + k.cross(&v) * angle.sin() + k * k.dot(&v) * (1.0 - angle.cos())
    };

    Frame {
        tangent: new_tangent,
        normal: rotate(prev.normal),
        binormal: rotate(prev.binormal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn frame_honours_reference_axis() {
        let frame = Frame::from_tangent_and_reference(Vector3::x(), Vector3::y());
        assert_relative_eq!(frame.normal.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.binormal.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn frame_with_parallel_reference_falls_back() {
        let frame = Frame::from_tangent_and_reference(Vector3::z(), Vector3::z());
        assert_relative_eq!(frame.tangent.dot(&frame.normal), 0.0, epsilon = 1e-10);
        assert_relative_eq!(frame.normal.norm(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn straight_line_frames_do_not_twist() {
        let points: Vec<Point3<f64>> = (0..5)
            .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
            .collect();
        let frames = parallel_transport_frames(&points, Vector3::y());
        assert_eq!(frames.len(), 5);
        for frame in &frames {
            assert_relative_eq!(frame.normal.y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn quarter_turn_keeps_frames_orthonormal() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let frames = parallel_transport_frames(&points, Vector3::z());
        for frame in &frames {
            assert_relative_eq!(frame.tangent.norm(), 1.0, epsilon = 1e-10);
            assert_relative_eq!(frame.tangent.dot(&frame.normal), 0.0, epsilon = 1e-10);
            assert_relative_eq!(frame.tangent.dot(&frame.binormal), 0.0, epsilon = 1e-10);
            assert_relative_eq!(frame.normal.dot(&frame.binormal), 0.0, epsilon = 1e-10);
        }
        assert!(frames[2].tangent.y > 0.5);
    }

    #[test]
    fn too_few_points_yield_no_frames() {
        assert!(parallel_transport_frames(&[Point3::origin()], Vector3::y()).is_empty());
    }
}
