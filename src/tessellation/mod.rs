//! Turning geographic geometries into edge buffers on a sphere.

mod build_groups;
mod flatten;
mod interpolate;
mod mesh;
mod subdivide;

pub use build_groups::BuildGroups;
pub use flatten::{flatten, FlattenedRings, Position};
pub use interpolate::{interpolate, GreatCircle};
pub use mesh::{DrawRange, GeoMesh};
pub use subdivide::subdivide;

use serde::Serialize;

use crate::error::{Result, TessellationError};
use crate::math::{positions, Vec3};

/// Parameters controlling tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Sphere radius the geometry is laid on. Each position adds its own altitude.
    pub radius: f64,
    /// Maximum angular spacing in degrees between consecutive vertices of a line or ring.
    pub resolution: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            resolution: 2.0,
        }
    }
}

impl TessellationParams {
    /// Creates validated tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` or `resolution` is not a positive finite number.
    pub fn new(radius: f64, resolution: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "radius must be positive, got {radius}"
            ))
            .into());
        }
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "resolution must be positive, got {resolution}"
            ))
            .into());
        }
        Ok(Self { radius, resolution })
    }
}

/// Styling tag of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum GroupTag {
    /// Points, lines and polygon outer rings.
    #[default]
    Outline,
    /// Polygon holes.
    Hole,
}

impl GroupTag {
    /// Material slot used by the renderer for this tag.
    #[must_use]
    pub fn material_index(self) -> u32 {
        match self {
            Self::Outline => 0,
            Self::Hole => 1,
        }
    }
}

/// A tessellated vertex/edge buffer for one geometry component.
///
/// Every index in `indices` is less than [`Group::vertex_count`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    /// Cartesian positions flattened as `x, y, z, x, y, z, ...`.
    pub vertices: Vec<f64>,
    /// Line segments as vertex index pairs.
    pub indices: Vec<[u32; 2]>,
    /// Outline or hole.
    pub tag: GroupTag,
}

impl Group {
    /// Number of vertices in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Iterates the vertices as vectors.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        positions(&self.vertices)
    }

    /// Returns `true` when the group carries no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
