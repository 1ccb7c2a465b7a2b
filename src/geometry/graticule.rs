use super::{GeoCoord, GeoGeometry, GeoShape};

/// Slack used to keep the major lines off the poles and to nudge range ends.
const EPSILON: f64 = 1e-6;

/// Generator for a grid of meridians and parallels.
///
/// Major lines are drawn across the major extent every `step_major` degrees;
/// minor lines across the minor extent every `step_minor` degrees, skipping
/// those that coincide with a major line. Every line is sampled each
/// `precision` degrees so that it follows the sphere once tessellated.
#[derive(Debug, Clone, Copy)]
pub struct Graticule {
    extent_major: [[f64; 2]; 2],
    extent_minor: [[f64; 2]; 2],
    step_major: [f64; 2],
    step_minor: [f64; 2],
    precision: f64,
}

impl Default for Graticule {
    fn default() -> Self {
        Self {
            extent_major: [[-180.0, -90.0 + EPSILON], [180.0, 90.0 - EPSILON]],
            extent_minor: [[-180.0, -90.0 - EPSILON], [180.0, 90.0 + EPSILON]],
            step_major: [90.0, 360.0],
            step_minor: [10.0, 10.0],
            precision: 2.5,
        }
    }
}

impl Graticule {
    /// Creates a graticule with 10° minor and 90°/360° major steps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both the major and minor extents.
    #[must_use]
    pub fn extent(self, extent: [[f64; 2]; 2]) -> Self {
        self.extent_major(extent).extent_minor(extent)
    }

    /// Sets the major extent as `[[x0, y0], [x1, y1]]`; corners may be given in any order.
    #[must_use]
    pub fn extent_major(mut self, extent: [[f64; 2]; 2]) -> Self {
        self.extent_major = ordered(extent);
        self
    }

    /// Sets the minor extent as `[[x0, y0], [x1, y1]]`; corners may be given in any order.
    #[must_use]
    pub fn extent_minor(mut self, extent: [[f64; 2]; 2]) -> Self {
        self.extent_minor = ordered(extent);
        self
    }

    /// Sets both the major and minor steps.
    #[must_use]
    pub fn step(self, step: [f64; 2]) -> Self {
        self.step_major(step).step_minor(step)
    }

    /// Sets the major `[dx, dy]` step in degrees.
    #[must_use]
    pub fn step_major(mut self, step: [f64; 2]) -> Self {
        self.step_major = step;
        self
    }

    /// Sets the minor `[dx, dy]` step in degrees.
    #[must_use]
    pub fn step_minor(mut self, step: [f64; 2]) -> Self {
        self.step_minor = step;
        self
    }

    /// Sets the sampling interval along each line in degrees.
    #[must_use]
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// All grid lines: major meridians, major parallels, minor meridians, minor parallels.
    #[must_use]
    pub fn lines(&self) -> Vec<GeoShape> {
        let [[big_x0, big_y0], [big_x1, big_y1]] = self.extent_major;
        let [[x0, y0], [x1, y1]] = self.extent_minor;
        let [big_dx, big_dy] = self.step_major;
        let [dx, dy] = self.step_minor;
        let p = self.precision;

        let major_meridians = range((big_x0 / big_dx).ceil() * big_dx, big_x1, big_dx)
            .into_iter()
            .map(|x| meridian(x, big_y0, big_y1, p));
        let major_parallels = range((big_y0 / big_dy).ceil() * big_dy, big_y1, big_dy)
            .into_iter()
            .map(|y| parallel(y, big_x0, big_x1, p));
        let minor_meridians = range((x0 / dx).ceil() * dx, x1, dx)
            .into_iter()
            .filter(|x| (x % big_dx).abs() > EPSILON)
            .map(|x| meridian(x, y0, y1, p));
        let minor_parallels = range((y0 / dy).ceil() * dy, y1, dy)
            .into_iter()
            .filter(|y| (y % big_dy).abs() > EPSILON)
            .map(|y| parallel(y, x0, x1, p));

        major_meridians
            .chain(major_parallels)
            .chain(minor_meridians)
            .chain(minor_parallels)
            .collect()
    }

    /// The grid as a single `MultiLineString`.
    #[must_use]
    pub fn geometry(&self) -> GeoGeometry {
        GeoGeometry::MultiLineString(self.lines())
    }

    /// One `LineString` per grid line.
    #[must_use]
    pub fn line_geometries(&self) -> Vec<GeoGeometry> {
        self.lines().into_iter().map(GeoGeometry::LineString).collect()
    }

    /// Closed polygon tracing the major extent.
    #[must_use]
    pub fn outline(&self) -> GeoGeometry {
        let [[big_x0, big_y0], [big_x1, big_y1]] = self.extent_major;
        let p = self.precision;

        let mut ring = meridian(big_x0, big_y0, big_y1, p);
        ring.extend(parallel(big_y1, big_x0, big_x1, p).into_iter().skip(1));
        ring.extend(meridian(big_x1, big_y0, big_y1, p).into_iter().rev().skip(1));
        ring.extend(parallel(big_y0, big_x0, big_x1, p).into_iter().rev().skip(1));

        GeoGeometry::Polygon(vec![ring])
    }
}

/// The default 10° graticule as a `MultiLineString`.
#[must_use]
pub fn graticule10() -> GeoGeometry {
    Graticule::new().geometry()
}

fn ordered([[ax, ay], [bx, by]]: [[f64; 2]; 2]) -> [[f64; 2]; 2] {
    [[ax.min(bx), ay.min(by)], [ax.max(bx), ay.max(by)]]
}

/// `start, start + step, ...` up to but excluding `stop`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Line of constant longitude from `y0` to `y1`, ending exactly at `y1`.
fn meridian(x: f64, y0: f64, y1: f64, precision: f64) -> GeoShape {
    let mut ys = range(y0, y1 - EPSILON, precision);
    ys.push(y1);
    ys.into_iter().map(|y| GeoCoord::new(x, y)).collect()
}

/// Line of constant latitude from `x0` to `x1`, ending exactly at `x1`.
fn parallel(y: f64, x0: f64, x1: f64, precision: f64) -> GeoShape {
    let mut xs = range(x0, x1 - EPSILON, precision);
    xs.push(x1);
    xs.into_iter().map(|x| GeoCoord::new(x, y)).collect()
}
