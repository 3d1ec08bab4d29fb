//! Centerline curves.

use nalgebra::Point3;

use crate::error::PathError;

/// A segment centerline, evaluated over `t` in `[0, 1]`.
///
/// Straight segments interpolate their endpoints linearly. Curved segments
/// (the torso) interpolate a uniform Catmull-Rom spline through control
/// points, with phantom endpoints so the curve passes through the first and
/// last control point.
#[derive(Debug, Clone)]
pub enum Centerline {
    /// A straight span between two points.
    Straight {
        /// Start point (station 0).
        start: Point3<f64>,
        /// End point (last station).
        end: Point3<f64>,
    },
    /// A Catmull-Rom spline through control points.
    Spline {
        /// Interpolated control points, at least three.
        controls: Vec<Point3<f64>>,
    },
}

impl Centerline {
    /// Create a straight centerline.
    #[must_use]
    pub const fn straight(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self::Straight { start, end }
    }

    /// Create a spline centerline through control points.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooFewControlPoints`] for fewer than three
    /// controls; a two-point curve is a [`Centerline::straight`] span.
    pub fn spline(controls: Vec<Point3<f64>>) -> Result<Self, PathError> {
        if controls.len() < 3 {
            return Err(PathError::TooFewControlPoints {
                min: 3,
                actual: controls.len(),
            });
        }
        Ok(Self::Spline { controls })
    }

    /// Evaluate the centerline position at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        match self {
            Self::Straight { start, end } => Point3::from(start.coords.lerp(&end.coords, t)),
            Self::Spline { controls } => catmull_rom(controls, t),
        }
    }

    /// Total chord length through the defining points.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        match self {
            Self::Straight { start, end } => (end - start).norm(),
            Self::Spline { controls } => controls
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).norm())
                .sum(),
        }
    }
}

/// Uniform Catmull-Rom evaluation over `controls` at global `t` in `[0, 1]`.
fn catmull_rom(controls: &[Point3<f64>], t: f64) -> Point3<f64> {
    let spans = controls.len() - 1;
    let scaled = t.clamp(0.0, 1.0) * spans as f64;
    let span = (scaled.floor() as usize).min(spans - 1);
    let s = scaled - span as f64;

    let at = |index: isize| -> Point3<f64> {
        // Phantom endpoints mirror the boundary control points
        if index < 0 {
            let p0 = controls[0].coords;
            let p1 = controls[1].coords;
            Point3::from(p0 * 2.0 - p1)
        } else if index as usize >= controls.len() {
            let pn = controls[controls.len() - 1].coords;
            let pm = controls[controls.len() - 2].coords;
            Point3::from(pn * 2.0 - pm)
        } else {
            controls[index as usize]
        }
    };

    let span = span as isize;
    let p0 = at(span - 1).coords;
    let p1 = at(span).coords;
    let p2 = at(span + 1).coords;
    let p3 = at(span + 2).coords;

    let s2 = s * s;
    let s3 = s2 * s;
    Point3::from(
        (p1 * 2.0
            + (p2 - p0) * s
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * s2
            + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * s3)
            * 0.5,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn straight_interpolates_linearly() {
        let line = Centerline::straight(Point3::new(2.0, 0.0, 0.0), Point3::origin());
        assert_relative_eq!(line.point_at(0.0).x, 2.0, epsilon = 1e-15);
        assert_relative_eq!(line.point_at(0.5).x, 1.0, epsilon = 1e-15);
        assert_eq!(line.point_at(1.0).x, 0.0);
    }

    #[test]
    fn spline_passes_through_controls() {
        let controls = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.3),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let spline = Centerline::spline(controls.clone()).unwrap();
        for (i, control) in controls.iter().enumerate() {
            let t = i as f64 / 2.0;
            let point = spline.point_at(t);
            assert_relative_eq!(point.x, control.x, epsilon = 1e-12);
            assert_relative_eq!(point.z, control.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn spline_needs_three_controls() {
        let result = Centerline::spline(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(PathError::TooFewControlPoints { min: 3, actual: 2 })
        ));
    }

    #[test]
    fn chord_length_sums_spans() {
        let spline = Centerline::spline(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(spline.chord_length(), 3.0, epsilon = 1e-12);
    }
}
