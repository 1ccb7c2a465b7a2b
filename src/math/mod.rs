//! Coordinate conversion and vector helpers on (or near) a sphere.

pub mod polar;
pub mod vector;

pub use polar::{cartesian_to_polar, polar_to_cartesian, Polar};
pub use vector::{angle_between, normalize_or_zero, positions};

/// Cartesian 3-vector. Points produced from geographic coordinates lie on a
/// sphere centered at the origin with Y pointing to the north pole.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Largest possible great-circle separation on Earth (half the circumference).
pub const MAX_EARTH_DISTANCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;
