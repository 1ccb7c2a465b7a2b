use std::f64::consts::PI;

use super::{Vec3, TOLERANCE};

/// Returns the unit vector along `v`, or the zero vector when `v` has no length.
#[must_use]
pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vec3::zeros)
}

/// Angle in radians between the directions of `u` and `v`.
///
/// Half-angle formulation on the unit directions: `acos(dot)` loses precision
/// near 0 and `PI`, the chord length does not.
#[must_use]
pub fn angle_between(u: &Vec3, v: &Vec3) -> f64 {
    let u = normalize_or_zero(u);
    let v = normalize_or_zero(v);
    if u.dot(&v) < 0.0 {
        PI - 2.0 * clamped_asin((u + v).norm() / 2.0)
    } else {
        2.0 * clamped_asin((v - u).norm() / 2.0)
    }
}

/// Iterates a flat `x, y, z, x, y, z, ...` buffer as vectors. A trailing
/// partial triple is ignored.
pub fn positions(buffer: &[f64]) -> impl Iterator<Item = Vec3> + '_ {
    buffer
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
}

fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}
