use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::math::{polar_to_cartesian, Vec3};

/// A geographic position `(longitude, latitude[, altitude])` in degrees.
///
/// Altitude is a unitless radial offset added to the sphere radius when the
/// position is converted to Cartesian space. On the wire it is a GeoJSON
/// position array of 2 or 3 numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct GeoCoord {
    /// Longitude in `[-180, 180]`.
    pub lon: f64,
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Optional radial offset.
    pub alt: Option<f64>,
}

/// An ordered path of positions; a ring when closed and used as a polygon boundary.
pub type GeoShape = Vec<GeoCoord>;

impl GeoCoord {
    /// Creates a 2-component position.
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, alt: None }
    }

    /// Creates a 3-component position.
    #[must_use]
    pub fn with_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    /// Altitude offset, `0` when absent.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.alt.unwrap_or(0.0)
    }

    /// Number of components (2 or 3).
    #[must_use]
    pub fn dim(&self) -> usize {
        if self.alt.is_some() {
            3
        } else {
            2
        }
    }

    /// Component `d` in `[lon, lat, alt]` order. Missing altitude reads as `0`.
    #[must_use]
    pub fn component(&self, d: usize) -> f64 {
        match d {
            0 => self.lon,
            1 => self.lat,
            _ => self.altitude(),
        }
    }

    /// Cartesian position at `radius + altitude`.
    #[must_use]
    pub fn to_cartesian(&self, radius: f64) -> Vec3 {
        polar_to_cartesian(self.lat, self.lon, radius + self.altitude())
    }
}

impl TryFrom<Vec<f64>> for GeoCoord {
    type Error = GeometryError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values[..] {
            [lon, lat] => Ok(Self::new(lon, lat)),
            [lon, lat, alt] => Ok(Self::with_alt(lon, lat, alt)),
            _ => Err(GeometryError::InvalidCoordinate { len: values.len() }),
        }
    }
}

impl From<GeoCoord> for Vec<f64> {
    fn from(c: GeoCoord) -> Self {
        match c.alt {
            Some(alt) => vec![c.lon, c.lat, alt],
            None => vec![c.lon, c.lat],
        }
    }
}
