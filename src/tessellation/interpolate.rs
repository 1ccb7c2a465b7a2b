use crate::analytics::geo_distance;
use crate::geometry::GeoCoord;
use crate::math::{Vec3, TOLERANCE};

/// Precomputed spherical interpolation between two geographic positions.
///
/// The path follows the shorter great-circle arc. Altitude, when either
/// endpoint carries one, is interpolated linearly and independently.
///
/// Positions are taken in an orthonormal frame of the arc plane: the start
/// direction and the unit tangent towards the end. This is the two-weight
/// form `A·p0 + B·p1` with `p1` expanded in that frame, which keeps the
/// spacing exact as the endpoints approach each other's antipode.
#[derive(Debug, Clone, Copy)]
pub struct GreatCircle {
    start: GeoCoord,
    origin: Vec3,
    tangent: Vec3,
    /// Angular separation in radians.
    d: f64,
    altitude: Option<(f64, f64)>,
}

impl GreatCircle {
    /// Precomputes the arc from `a` to `b`.
    ///
    /// Antipodal endpoints have no unique great circle. The arc then heads
    /// north from `a`, or along the meridian of `a` when `a` is a pole.
    #[must_use]
    pub fn new(a: &GeoCoord, b: &GeoCoord) -> Self {
        let origin = unit(a);
        let end = unit(b);
        let d = geo_distance(a, b);

        let tangent = (end - origin * origin.dot(&end))
            .try_normalize(TOLERANCE)
            .unwrap_or_else(|| antipodal_tangent(&origin, a.lon.to_radians()));

        let altitude = (a.alt.is_some() || b.alt.is_some()).then(|| (a.altitude(), b.altitude()));

        Self {
            start: *a,
            origin,
            tangent,
            d,
            altitude,
        }
    }

    /// Angular separation of the endpoints in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.d
    }

    /// Position at fraction `t` of the arc; `0` is the start, `1` the end.
    ///
    /// Coincident endpoints have no arc to follow and return the start position.
    #[must_use]
    pub fn at(&self, t: f64) -> GeoCoord {
        let alt = self.altitude.map(|(a0, a1)| a0 * (1.0 - t) + a1 * t);

        if self.d < TOLERANCE {
            return GeoCoord { alt, ..self.start };
        }

        let (s, c) = (t * self.d).sin_cos();
        let p = self.origin * c + self.tangent * s;

        GeoCoord {
            lon: p.y.atan2(p.x).to_degrees(),
            lat: p.z.atan2(p.x.hypot(p.y)).to_degrees(),
            alt,
        }
    }
}

/// Returns a function mapping `t` in `[0, 1]` to a position on the arc from `a` to `b`.
pub fn interpolate(a: &GeoCoord, b: &GeoCoord) -> impl Fn(f64) -> GeoCoord {
    let arc = GreatCircle::new(a, b);
    move |t| arc.at(t)
}

/// Unit vector with `z` towards the north pole and `x` towards (0°, 0°).
fn unit(c: &GeoCoord) -> Vec3 {
    let (sx, cx) = c.lon.to_radians().sin_cos();
    let (sy, cy) = c.lat.to_radians().sin_cos();
    Vec3::new(cy * cx, cy * sx, sy)
}

fn antipodal_tangent(origin: &Vec3, lon: f64) -> Vec3 {
    let north = Vec3::z();
    (north - origin * origin.z)
        .try_normalize(TOLERANCE)
        .or_else(|| {
            let meridian = Vec3::new(lon.cos(), lon.sin(), 0.0);
            (meridian - origin * origin.dot(&meridian)).try_normalize(TOLERANCE)
        })
        .unwrap_or_else(Vec3::x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_coord(c: &GeoCoord, lon: f64, lat: f64) {
        assert!((c.lon - lon).abs() < 1e-9, "lon {} != {lon}", c.lon);
        assert!((c.lat - lat).abs() < 1e-9, "lat {} != {lat}", c.lat);
    }

    #[test]
    fn endpoints_are_preserved() {
        let a = GeoCoord::new(-73.9, 40.7);
        let b = GeoCoord::new(2.35, 48.85);
        let f = interpolate(&a, &b);
        assert_coord(&f(0.0), a.lon, a.lat);
        assert_coord(&f(1.0), b.lon, b.lat);
    }

    #[test]
    fn equator_midpoint() {
        let f = interpolate(&GeoCoord::new(0.0, 0.0), &GeoCoord::new(90.0, 0.0));
        assert_coord(&f(0.5), 45.0, 0.0);
    }

    #[test]
    fn meridian_passes_through_pole() {
        let arc = GreatCircle::new(&GeoCoord::new(0.0, 60.0), &GeoCoord::new(180.0, 60.0));
        assert_abs_diff_eq!(arc.angle(), 60f64.to_radians(), epsilon = 1e-12);
        assert!((arc.at(0.5).lat - 90.0).abs() < 1e-6);
    }

    #[test]
    fn angle_matches_geo_distance() {
        let a = GeoCoord::new(10.0, -20.0);
        let b = GeoCoord::new(-130.0, 35.0);
        let arc = GreatCircle::new(&a, &b);
        assert_abs_diff_eq!(arc.angle(), geo_distance(&a, &b), epsilon = 1e-9);
    }

    #[test]
    fn quarter_circle_angle() {
        let arc = GreatCircle::new(&GeoCoord::new(0.0, 0.0), &GeoCoord::new(0.0, 90.0));
        assert_abs_diff_eq!(arc.angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn points_stay_on_the_arc() {
        let a = GeoCoord::new(5.0, 5.0);
        let b = GeoCoord::new(40.0, 30.0);
        let arc = GreatCircle::new(&a, &b);
        let p = arc.at(0.3);
        assert_abs_diff_eq!(geo_distance(&a, &p), 0.3 * arc.angle(), epsilon = 1e-9);
        assert_abs_diff_eq!(geo_distance(&p, &b), 0.7 * arc.angle(), epsilon = 1e-9);
    }

    #[test]
    fn altitude_is_linear() {
        let f = interpolate(&GeoCoord::with_alt(0.0, 0.0, 0.0), &GeoCoord::new(20.0, 0.0));
        assert_eq!(f(0.25).alt, Some(0.0));
        let f = interpolate(
            &GeoCoord::with_alt(0.0, 0.0, 1.0),
            &GeoCoord::with_alt(20.0, 0.0, 3.0),
        );
        assert_abs_diff_eq!(f(0.25).altitude(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn no_altitude_stays_two_dimensional() {
        let f = interpolate(&GeoCoord::new(0.0, 0.0), &GeoCoord::new(20.0, 0.0));
        assert_eq!(f(0.5).alt, None);
    }

    #[test]
    fn coincident_points_return_start() {
        let a = GeoCoord::new(12.0, 34.0);
        let f = interpolate(&a, &a);
        let p = f(0.5);
        assert!(!p.lon.is_nan() && !p.lat.is_nan());
        assert_coord(&p, 12.0, 34.0);
    }

    // ── antipodes ──

    #[test]
    fn antipodal_equator_goes_over_the_pole() {
        let arc = GreatCircle::new(&GeoCoord::new(0.0, 0.0), &GeoCoord::new(180.0, 0.0));
        assert_abs_diff_eq!(arc.angle(), PI, epsilon = 1e-12);
        assert!((arc.at(0.5).lat - 90.0).abs() < 1e-9);
        assert_coord(&arc.at(1.0), 180.0, 0.0);
    }

    #[test]
    fn pole_to_pole_follows_start_meridian() {
        let arc = GreatCircle::new(&GeoCoord::new(0.0, 90.0), &GeoCoord::new(0.0, -90.0));
        assert_abs_diff_eq!(arc.angle(), PI, epsilon = 1e-12);
        assert_coord(&arc.at(0.5), 0.0, 0.0);
        assert!((arc.at(1.0).lat + 90.0).abs() < 1e-9);
    }

    #[test]
    fn near_antipodal_spacing_is_even() {
        let a = GeoCoord::new(0.0, 0.0);
        let b = GeoCoord::new(179.999_999, 0.0);
        let arc = GreatCircle::new(&a, &b);
        assert_abs_diff_eq!(arc.angle(), 179.999_999f64.to_radians(), epsilon = 1e-12);
        let p = arc.at(0.25);
        let q = arc.at(0.5);
        assert_abs_diff_eq!(geo_distance(&a, &p), 0.25 * arc.angle(), epsilon = 1e-9);
        assert_abs_diff_eq!(geo_distance(&p, &q), 0.25 * arc.angle(), epsilon = 1e-9);
        assert_coord(&arc.at(1.0), b.lon, b.lat);
    }
}
