use super::{Vec3, TOLERANCE};

/// Geographic position recovered from a Cartesian vector.
///
/// Angles are in degrees; `radius` is the vector length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in `(-180, 180]`.
    pub lon: f64,
    /// Distance from the origin.
    pub radius: f64,
}

/// Converts latitude/longitude (degrees) at radius `r` to a Cartesian vector.
///
/// Uses colatitude `phi = 90 - lat` measured from +Y and azimuth
/// `theta = 90 - lon`, so `(0, 0)` maps to +Z and the north pole to +Y.
#[must_use]
pub fn polar_to_cartesian(lat: f64, lon: f64, r: f64) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (90.0 - lon).to_radians();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

/// Inverse of [`polar_to_cartesian`].
///
/// A zero-length vector has no direction and maps to `(0, 0, 0)`. At the
/// poles the longitude is undefined; whatever `atan2` yields is returned.
#[must_use]
pub fn cartesian_to_polar(v: &Vec3) -> Polar {
    let radius = v.norm();
    if radius < TOLERANCE {
        return Polar {
            lat: 0.0,
            lon: 0.0,
            radius: 0.0,
        };
    }

    let lat = v.y.atan2(v.x.hypot(v.z)).to_degrees();
    let theta = v.z.atan2(v.x).to_degrees();
    let mut lon = 90.0 - theta;
    if lon > 180.0 {
        lon -= 360.0;
    }

    Polar { lat, lon, radius }
}
