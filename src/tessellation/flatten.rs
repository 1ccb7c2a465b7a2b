use crate::geometry::GeoCoord;
use crate::math::Vec3;

/// A position with a fixed number of scalar components.
pub trait Position {
    /// Number of components.
    fn dim(&self) -> usize;

    /// Component `d`, for `d < dim()`.
    fn component(&self, d: usize) -> f64;
}

impl Position for GeoCoord {
    fn dim(&self) -> usize {
        GeoCoord::dim(self)
    }

    fn component(&self, d: usize) -> f64 {
        GeoCoord::component(self, d)
    }
}

impl Position for Vec3 {
    fn dim(&self) -> usize {
        3
    }

    fn component(&self, d: usize) -> f64 {
        self[d]
    }
}

/// Rings concatenated into one scalar buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedRings {
    /// All components of all rings, `dim` scalars per vertex.
    pub vertices: Vec<f64>,
    /// Vertex index (not scalar offset) at which each ring after the first starts.
    pub holes: Vec<usize>,
    /// Components per vertex, taken from the first position.
    pub dim: usize,
}

impl FlattenedRings {
    /// Number of vertices in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.vertices.len() / self.dim
        }
    }
}

/// Flattens a polygon's rings: ring 0 is the outer boundary, the rest are holes.
///
/// Input is expected to be homogeneous in dimension; the first position
/// decides it. A ring with no positions still records a hole start.
#[must_use]
pub fn flatten<P: Position>(rings: &[Vec<P>]) -> FlattenedRings {
    let dim = rings
        .iter()
        .flatten()
        .next()
        .map_or(0, Position::dim);

    let mut vertices = Vec::with_capacity(rings.iter().map(Vec::len).sum::<usize>() * dim);
    let mut holes = Vec::with_capacity(rings.len().saturating_sub(1));
    let mut count = 0;

    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            holes.push(count);
        }
        for p in ring {
            vertices.extend((0..dim).map(|d| p.component(d)));
        }
        count += ring.len();
    }

    FlattenedRings {
        vertices,
        holes,
        dim,
    }
}
