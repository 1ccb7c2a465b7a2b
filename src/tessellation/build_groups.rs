use std::collections::HashSet;

use serde_json::Value;

use crate::error::Result;
use crate::geometry::{GeoCoord, GeoGeometry, GeoShape};
use crate::math::Vec3;

use super::{flatten, subdivide, FlattenedRings, Group, GroupTag, TessellationParams};

/// Builds the vertex/edge groups for one geometry.
///
/// - `Point` / `MultiPoint`: one single-vertex group per point, no edges.
/// - `LineString` / `MultiLineString`: one open polyline group per line.
/// - `Polygon` / `MultiPolygon`: per polygon, one outer-ring group and, when
///   the polygon has holes, one group holding every hole.
///
/// Lines and rings are subdivided to `params.resolution` degrees first.
/// Nesting that does not match the declared kind is a caller error and is not
/// checked; the result is best-effort and never fails.
#[derive(Debug)]
pub struct BuildGroups<'a> {
    geometry: &'a GeoGeometry,
    params: TessellationParams,
}

impl<'a> BuildGroups<'a> {
    /// Creates a new `BuildGroups` operation.
    #[must_use]
    pub fn new(geometry: &'a GeoGeometry, params: TessellationParams) -> Self {
        Self { geometry, params }
    }

    /// Executes the tessellation, returning the groups in input order.
    #[must_use]
    pub fn execute(&self) -> Vec<Group> {
        let TessellationParams { radius, resolution } = self.params;
        let groups = match self.geometry {
            GeoGeometry::Point(c) => vec![point_group(c, radius)],
            GeoGeometry::MultiPoint(cs) => cs.iter().map(|c| point_group(c, radius)).collect(),
            GeoGeometry::LineString(line) => vec![line_group(line, radius, resolution)],
            GeoGeometry::MultiLineString(lines) => lines
                .iter()
                .map(|line| line_group(line, radius, resolution))
                .collect(),
            GeoGeometry::Polygon(rings) => polygon_groups(rings, radius, resolution),
            GeoGeometry::MultiPolygon(polygons) => polygons
                .iter()
                .flat_map(|rings| polygon_groups(rings, radius, resolution))
                .collect(),
        };

        tracing::trace!(
            kind = self.geometry.kind().as_str(),
            groups = groups.len(),
            "built geometry groups"
        );
        groups
    }

    /// Builds groups straight from a GeoJSON geometry object.
    ///
    /// Unsupported geometry types produce no groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the object has no `type` or its coordinates do not
    /// match the nesting of its type.
    pub fn from_json(value: &Value, params: TessellationParams) -> Result<Vec<Group>> {
        Ok(GeoGeometry::from_json(value)?
            .map(|geometry| BuildGroups::new(&geometry, params).execute())
            .unwrap_or_default())
    }
}

fn point_group(c: &GeoCoord, radius: f64) -> Group {
    let v = c.to_cartesian(radius);
    Group {
        vertices: vec![v.x, v.y, v.z],
        indices: Vec::new(),
        tag: GroupTag::Outline,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn line_group(line: &[GeoCoord], radius: f64, resolution: f64) -> Group {
    let vertices: Vec<f64> = subdivide(line, resolution)
        .iter()
        .flat_map(|c| {
            let v = c.to_cartesian(radius);
            [v.x, v.y, v.z]
        })
        .collect();
    let n = vertices.len() / 3;
    let indices = (1..n).map(|i| [(i - 1) as u32, i as u32]).collect();

    Group {
        vertices,
        indices,
        tag: GroupTag::Outline,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn polygon_groups(rings: &[GeoShape], radius: f64, resolution: f64) -> Vec<Group> {
    if rings.is_empty() {
        return Vec::new();
    }

    let rings_3d: Vec<Vec<Vec3>> = rings
        .iter()
        .map(|ring| {
            subdivide(ring, resolution)
                .iter()
                .map(|c| c.to_cartesian(radius))
                .collect()
        })
        .collect();
    let FlattenedRings {
        mut vertices,
        holes,
        ..
    } = flatten(&rings_3d);

    let n = vertices.len() / 3;
    let first_hole = holes.first().copied().unwrap_or(n);
    let ring_starts: HashSet<usize> = holes.iter().copied().collect();

    let mut outer_indices = Vec::new();
    let mut hole_indices = Vec::new();
    for i in 1..n {
        // The first vertex of a hole closes no edge with the ring before it.
        if ring_starts.contains(&i) {
            continue;
        }
        if i < first_hole {
            outer_indices.push([(i - 1) as u32, i as u32]);
        } else {
            hole_indices.push([(i - 1 - first_hole) as u32, (i - first_hole) as u32]);
        }
    }

    let hole_vertices = vertices.split_off(first_hole * 3);
    let mut groups = vec![Group {
        vertices,
        indices: outer_indices,
        tag: GroupTag::Outline,
    }];
    if !holes.is_empty() {
        groups.push(Group {
            vertices: hole_vertices,
            indices: hole_indices,
            tag: GroupTag::Hole,
        });
    }
    groups
}
