//! Geodesic queries between points and regions on the sphere.

mod centroid;
mod direction;
mod distance;

pub use centroid::{centroid, DUPLICATE_VERTEX_EPSILON};
pub use direction::{direction, CompassDirection, DIRECTION_WINDOW_DEG};
pub use distance::{
    earth_distance, geo_distance, min_distance, min_distance_exhaustive, MinDistanceResult,
};
