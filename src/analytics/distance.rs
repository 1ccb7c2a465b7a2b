use crate::geometry::GeoCoord;
use crate::math::{angle_between, Vec3, EARTH_RADIUS_KM};

/// Closest pair found between two vertex sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinDistanceResult {
    /// Surface distance in kilometers.
    pub distance: f64,
    /// The point taken from the first set.
    pub point_a: Vec3,
    /// The point taken from the second set.
    pub point_b: Vec3,
}

/// Great-circle angle in radians between two geographic positions.
///
/// `atan2` form of the spherical law of cosines, well conditioned for both
/// coincident and antipodal points.
#[must_use]
pub fn geo_distance(a: &GeoCoord, b: &GeoCoord) -> f64 {
    let (sin_phi0, cos_phi0) = a.lat.to_radians().sin_cos();
    let (sin_phi, cos_phi) = b.lat.to_radians().sin_cos();
    let delta = (b.lon - a.lon).to_radians().abs();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let x = cos_phi * sin_delta;
    let y = cos_phi0 * sin_phi - sin_phi0 * cos_phi * cos_delta;
    let z = sin_phi0 * sin_phi + cos_phi0 * cos_phi * cos_delta;
    x.hypot(y).atan2(z)
}

/// Surface distance in kilometers between two Cartesian points, measured on
/// an Earth-sized sphere along their directions.
#[must_use]
pub fn earth_distance(a: &Vec3, b: &Vec3) -> f64 {
    angle_between(a, b) * EARTH_RADIUS_KM
}

/// Approximate closest pair between two point sets in `O(|A| + |B|)`.
///
/// Takes the point of `set_a` nearest to `set_b[0]`, then the point of
/// `set_b` nearest to that one. This is not the global nearest pair for
/// arbitrary sets, but it is close for two boundary polylines lying side by
/// side. Use [`min_distance_exhaustive`] for the exact pair.
///
/// Returns `None` if either set is empty.
#[must_use]
pub fn min_distance(set_a: &[Vec3], set_b: &[Vec3]) -> Option<MinDistanceResult> {
    let anchor = set_b.first()?;
    let (point_a, _) = nearest(set_a, anchor)?;
    let (point_b, distance) = nearest(set_b, &point_a)?;
    Some(MinDistanceResult {
        distance,
        point_a,
        point_b,
    })
}

/// Exact closest pair between two point sets in `O(|A| * |B|)`.
///
/// Returns `None` if either set is empty.
#[must_use]
pub fn min_distance_exhaustive(set_a: &[Vec3], set_b: &[Vec3]) -> Option<MinDistanceResult> {
    set_a
        .iter()
        .filter_map(|a| {
            nearest(set_b, a).map(|(b, distance)| MinDistanceResult {
                distance,
                point_a: *a,
                point_b: b,
            })
        })
        .min_by(|x, y| x.distance.total_cmp(&y.distance))
}

/// Point of `set` closest to `target`, with its distance in kilometers.
fn nearest(set: &[Vec3], target: &Vec3) -> Option<(Vec3, f64)> {
    set.iter()
        .map(|p| (*p, earth_distance(p, target)))
        .min_by(|x, y| x.1.total_cmp(&y.1))
}
