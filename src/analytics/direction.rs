use crate::math::{cartesian_to_polar, Vec3};

/// Half-width in degrees of the band treated as "level" on each axis.
pub const DIRECTION_WINDOW_DEG: f64 = 5.0;

/// Coarse 8-way compass heading.
///
/// `dx` is `-1` west, `1` east; `dy` is `-1` south, `1` north; `0` means level
/// on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompassDirection {
    pub dx: i8,
    pub dy: i8,
}

impl CompassDirection {
    /// Compass abbreviation, or `None` for `(0, 0)`.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match (self.dx, self.dy) {
            (0, 1) => Some("N"),
            (1, 1) => Some("NE"),
            (1, 0) => Some("E"),
            (1, -1) => Some("SE"),
            (0, -1) => Some("S"),
            (-1, -1) => Some("SW"),
            (-1, 0) => Some("W"),
            (-1, 1) => Some("NW"),
            _ => None,
        }
    }
}

/// Heading from `from` to `to`, bucketed per axis.
///
/// Each axis is level when the offset is within [`DIRECTION_WINDOW_DEG`].
/// When both are level the axis with the larger offset still gets its sign,
/// so only identical positions give `(0, 0)`. Longitude offsets are taken the
/// short way around the antimeridian.
#[must_use]
pub fn direction(from: &Vec3, to: &Vec3) -> CompassDirection {
    let a = cartesian_to_polar(from);
    let b = cartesian_to_polar(to);

    let d_lat = b.lat - a.lat;
    let mut d_lon = b.lon - a.lon;
    if d_lon > 180.0 {
        d_lon -= 360.0;
    } else if d_lon <= -180.0 {
        d_lon += 360.0;
    }

    let mut dir = CompassDirection {
        dx: bucket(d_lon),
        dy: bucket(d_lat),
    };

    if dir.dx == 0 && dir.dy == 0 {
        if d_lat.abs() >= d_lon.abs() {
            dir.dy = sign(d_lat);
        } else {
            dir.dx = sign(d_lon);
        }
    }
    dir
}

fn bucket(offset: f64) -> i8 {
    if offset > DIRECTION_WINDOW_DEG {
        1
    } else if offset < -DIRECTION_WINDOW_DEG {
        -1
    } else {
        0
    }
}

fn sign(offset: f64) -> i8 {
    if offset > 0.0 {
        1
    } else if offset < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polar_to_cartesian;

    fn at(lat: f64, lon: f64) -> Vec3 {
        polar_to_cartesian(lat, lon, 1.0)
    }

    fn dir(from: (f64, f64), to: (f64, f64)) -> (i8, i8) {
        let d = direction(&at(from.0, from.1), &at(to.0, to.1));
        (d.dx, d.dy)
    }

    #[test]
    fn due_north() {
        assert_eq!(dir((0.0, 0.0), (10.0, 0.0)), (0, 1));
    }

    #[test]
    fn due_south_west() {
        assert_eq!(dir((20.0, 30.0), (5.0, 10.0)), (-1, -1));
    }

    #[test]
    fn east_within_latitude_band() {
        assert_eq!(dir((10.0, 10.0), (13.0, 40.0)), (1, 0));
    }

    #[test]
    fn close_points_pick_dominant_axis() {
        assert_eq!(dir((0.0, 0.0), (1.0, 3.0)), (1, 0));
        assert_eq!(dir((0.0, 0.0), (-4.0, 2.0)), (0, -1));
    }

    #[test]
    fn never_level_unless_identical() {
        assert_ne!(dir((0.0, 0.0), (0.1, 0.0)), (0, 0));
        assert_eq!(dir((12.0, 34.0), (12.0, 34.0)), (0, 0));
    }

    #[test]
    fn wraps_around_antimeridian() {
        assert_eq!(dir((0.0, 170.0), (0.0, -160.0)), (1, 0));
        assert_eq!(dir((0.0, -170.0), (0.0, 160.0)), (-1, 0));
    }

    #[test]
    fn names() {
        assert_eq!(CompassDirection { dx: 0, dy: 1 }.name(), Some("N"));
        assert_eq!(CompassDirection { dx: -1, dy: 1 }.name(), Some("NW"));
        assert_eq!(CompassDirection::default().name(), None);
    }
}
