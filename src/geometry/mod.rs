//! Geographic input types: positions, paths and GeoJSON-style geometries.

pub mod coord;
pub mod geo_geometry;
pub mod graticule;

pub use coord::{GeoCoord, GeoShape};
pub use geo_geometry::{GeoGeometry, GeometryKind};
pub use graticule::{graticule10, Graticule};
