//! Axial station sampling.

use nalgebra::{Point3, Vector2, Vector3};

use crate::curve::Centerline;
use crate::error::PathError;
use crate::frame::{parallel_transport_frames, Frame};

/// One axial station of a swept segment: a centerline position, a local
/// orientation frame and the 2D section scale to apply there.
#[derive(Debug, Clone, Copy)]
pub struct Station {
    /// Centerline position.
    pub centre: Point3<f64>,
    /// Local orientation frame.
    pub frame: Frame,
    /// Section scale along the frame's normal and binormal axes.
    pub scale: Vector2<f64>,
}

/// Sample `elements_along + 1` stations over a centerline.
///
/// Stations are uniform in curve parameter. Frames are seeded from
/// `reference` and propagated by parallel transport; section scales
/// interpolate linearly from `scale_start` to `scale_end`.
///
/// # Errors
///
/// Returns [`PathError::TooFewElementsAlong`] for a zero element count and
/// [`PathError::DegenerateSpan`] when the sampled centerline has no extent.
pub fn sample_stations(
    centerline: &Centerline,
    reference: Vector3<f64>,
    scale_start: Vector2<f64>,
    scale_end: Vector2<f64>,
    elements_along: usize,
) -> Result<Vec<Station>, PathError> {
    if elements_along < 1 {
        return Err(PathError::TooFewElementsAlong { actual: 0 });
    }

    let count = elements_along + 1;
    let points: Vec<Point3<f64>> = (0..count)
        .map(|i| centerline.point_at(i as f64 / elements_along as f64))
        .collect();

    let span = (points[count - 1] - points[0]).norm();
    if span < 1e-12 {
        return Err(PathError::DegenerateSpan { length: span });
    }

    let frames = parallel_transport_frames(&points, reference);
    Ok(points
        .into_iter()
        .zip(frames)
        .enumerate()
        .map(|(i, (centre, frame))| {
            let t = i as f64 / elements_along as f64;
            Station {
                centre,
                frame,
                scale: scale_start.lerp(&scale_end, t),
            }
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn station_count_is_elements_plus_one() {
        let line = Centerline::straight(Point3::origin(), Point3::new(3.0, 0.0, 0.0));
        let stations = sample_stations(
            &line,
            Vector3::y(),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
            3,
        )
        .unwrap();
        assert_eq!(stations.len(), 4);
        assert_relative_eq!(stations[1].centre.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn scales_interpolate_linearly() {
        let line = Centerline::straight(Point3::origin(), Point3::new(2.0, 0.0, 0.0));
        let stations = sample_stations(
            &line,
            Vector3::y(),
            Vector2::new(1.0, 0.8),
            Vector2::new(0.5, 0.4),
            2,
        )
        .unwrap();
        assert_relative_eq!(stations[1].scale.x, 0.75, epsilon = 1e-12);
        assert_relative_eq!(stations[1].scale.y, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn zero_elements_along_is_rejected() {
        let line = Centerline::straight(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        let result = sample_stations(
            &line,
            Vector3::y(),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
            0,
        );
        assert!(matches!(
            result,
            Err(PathError::TooFewElementsAlong { actual: 0 })
        ));
    }

    #[test]
    fn degenerate_span_is_rejected() {
        let line = Centerline::straight(Point3::origin(), Point3::origin());
        let result = sample_stations(
            &line,
            Vector3::y(),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
            2,
        );
        assert!(matches!(result, Err(PathError::DegenerateSpan { .. })));
    }

    #[test]
    fn frames_follow_the_sweep_direction() {
        let line = Centerline::straight(Point3::new(2.0, 0.0, 0.0), Point3::origin());
        let stations = sample_stations(
            &line,
            Vector3::y(),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
            2,
        )
        .unwrap();
        for station in &stations {
            assert_relative_eq!(station.frame.tangent.x, -1.0, epsilon = 1e-12);
        }
    }
}
