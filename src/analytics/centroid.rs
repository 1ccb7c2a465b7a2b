use std::f64::consts::FRAC_PI_2;

use crate::math::{angle_between, normalize_or_zero, Vec3};

/// Consecutive ring vertices closer than this are treated as one.
pub const DUPLICATE_VERTEX_EPSILON: f64 = 1e-6;

/// Spherical centroid moment of a closed ring.
///
/// Each edge `(a, b)`, including the wrap-around edge, adds the unit normal of
/// its great circle scaled by half the angle it subtends. The sum points at
/// the centroid of the enclosed area but is not normalized; normalize it to
/// get a point on the sphere.
///
/// The integral has two antipodal solutions. The one within 90° of the first
/// vertex is returned. An empty ring yields the zero vector.
#[must_use]
pub fn centroid(ring: &[Vec3]) -> Vec3 {
    let Some(first) = ring.first() else {
        return Vec3::zeros();
    };

    let mut moment = Vec3::zeros();
    for (i, a) in ring.iter().enumerate() {
        let b = &ring[(i + 1) % ring.len()];
        if (a - b).norm() < DUPLICATE_VERTEX_EPSILON {
            continue;
        }
        moment += normalize_or_zero(&a.cross(b)) * (angle_between(a, b) / 2.0);
    }

    if angle_between(&moment, first) > FRAC_PI_2 {
        -moment
    } else {
        moment
    }
}
