use serde::Serialize;

use crate::geometry::GeoGeometry;

use super::{BuildGroups, Group, TessellationParams};

/// A slice of the merged index buffer drawn with one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawRange {
    /// First index-buffer scalar of the range.
    pub start: usize,
    /// Number of index-buffer scalars in the range.
    pub count: usize,
    /// Material slot, from the group tag.
    pub material_index: u32,
}

/// Groups merged into a single line-segment buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoMesh {
    /// Cartesian positions flattened as `x, y, z, ...`.
    pub vertices: Vec<f64>,
    /// Segment endpoints, two scalars per segment.
    pub indices: Vec<u32>,
    /// One range per source group, in order.
    pub ranges: Vec<DrawRange>,
    /// The source groups.
    #[serde(skip)]
    pub groups: Vec<Group>,
}

impl GeoMesh {
    /// Tessellates `geometry` and merges the result.
    #[must_use]
    pub fn build(geometry: &GeoGeometry, params: TessellationParams) -> Self {
        Self::from_groups(BuildGroups::new(geometry, params).execute())
    }

    /// Concatenates groups, offsetting each group's indices past the vertices
    /// already in the buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_groups(groups: Vec<Group>) -> Self {
        let mut vertices = Vec::with_capacity(groups.iter().map(|g| g.vertices.len()).sum());
        let mut indices = Vec::with_capacity(groups.iter().map(|g| g.indices.len() * 2).sum());
        let mut ranges = Vec::with_capacity(groups.len());

        for group in &groups {
            let start = indices.len();
            let offset = (vertices.len() / 3) as u32;
            indices.extend(group.indices.iter().flat_map(|[a, b]| [a + offset, b + offset]));
            vertices.extend_from_slice(&group.vertices);
            ranges.push(DrawRange {
                start,
                count: indices.len() - start,
                material_index: group.tag.material_index(),
            });
        }

        Self {
            vertices,
            indices,
            ranges,
            groups,
        }
    }

    /// Number of vertices in the merged buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
