use crate::analytics::geo_distance;
use crate::geometry::{GeoCoord, GeoShape};

use super::GreatCircle;

/// Inserts great-circle points so that no two consecutive positions are more
/// than `max_deg_distance` degrees apart.
///
/// A gap of `s` degrees receives `ceil(s / max_deg_distance) - 1` evenly
/// spaced points. Original positions are kept in order. A non-positive or
/// non-finite threshold leaves the path untouched.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn subdivide(path: &[GeoCoord], max_deg_distance: f64) -> GeoShape {
    if !(max_deg_distance.is_finite() && max_deg_distance > 0.0) {
        return path.to_vec();
    }

    let mut result = Vec::with_capacity(path.len());
    let mut prev: Option<&GeoCoord> = None;

    for point in path {
        if let Some(prev) = prev {
            let dist = geo_distance(prev, point).to_degrees();
            if dist > max_deg_distance {
                let steps = (dist / max_deg_distance).ceil() as usize;
                let arc = GreatCircle::new(prev, point);
                result.extend((1..steps).map(|i| arc.at(i as f64 / steps as f64)));
            }
        }
        result.push(*point);
        prev = Some(point);
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path() -> GeoShape {
        vec![
            GeoCoord::new(0.0, 0.0),
            GeoCoord::new(10.0, 0.0),
            GeoCoord::new(10.0, 25.0),
            GeoCoord::new(-40.0, 50.0),
        ]
    }

    #[test]
    fn coarse_threshold_is_identity() {
        let p = path();
        assert_eq!(subdivide(&p, 90.0), p);
    }

    #[test]
    fn fine_threshold_bounds_spacing() {
        let p = path();
        let out = subdivide(&p, 1.5);
        assert!(out.len() > p.len());
        for w in out.windows(2) {
            let d = geo_distance(&w[0], &w[1]).to_degrees();
            assert!(d <= 1.5 + 1e-9, "gap {d}");
        }
    }

    #[test]
    fn original_points_kept_in_order() {
        let p = path();
        let out = subdivide(&p, 3.0);
        let mut it = out.iter();
        for orig in &p {
            assert!(it.any(|c| c == orig), "missing {orig:?}");
        }
    }

    #[test]
    fn exact_insert_count() {
        // 10° along the equator at 3° spacing: ceil(10/3) - 1 = 3 inserted points.
        let out = subdivide(&[GeoCoord::new(0.0, 0.0), GeoCoord::new(10.0, 0.0)], 3.0);
        assert_eq!(out.len(), 5);
        assert!((out[1].lon - 2.5).abs() < 1e-9);
    }

    #[test]
    fn altitude_interpolated_when_present() {
        let out = subdivide(
            &[GeoCoord::with_alt(0.0, 0.0, 0.0), GeoCoord::with_alt(4.0, 0.0, 0.4)],
            1.1,
        );
        assert_eq!(out.len(), 5);
        assert!((out[2].altitude() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn invalid_threshold_is_identity() {
        let p = path();
        assert_eq!(subdivide(&p, 0.0), p);
        assert_eq!(subdivide(&p, f64::NAN), p);
    }

    #[test]
    fn empty_and_single() {
        assert!(subdivide(&[], 1.0).is_empty());
        assert_eq!(subdivide(&[GeoCoord::new(1.0, 1.0)], 1.0).len(), 1);
    }

    #[test]
    fn antipodal_segments_bound_spacing() {
        let segments = [
            (GeoCoord::new(0.0, 0.0), GeoCoord::new(180.0, 0.0)),
            (GeoCoord::new(0.0, 90.0), GeoCoord::new(0.0, -90.0)),
            (GeoCoord::new(0.0, 0.0), GeoCoord::new(179.999_999, 0.0)),
        ];
        for (a, b) in segments {
            let out = subdivide(&[a, b], 2.0);
            assert_eq!(out.len(), 91, "{a:?} -> {b:?}");
            for w in out.windows(2) {
                let d = geo_distance(&w[0], &w[1]).to_degrees();
                assert!(d <= 2.0 + 1e-9, "gap {d} on {a:?} -> {b:?}");
            }
        }
    }
}
