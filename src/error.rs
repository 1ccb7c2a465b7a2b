use thiserror::Error;

/// Top-level error type for the geosphere crate.
#[derive(Debug, Error)]
pub enum GeosphereError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors raised while reading geographic geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a position must have 2 or 3 components, got {len}")]
    InvalidCoordinate { len: usize },

    #[error("malformed geometry: {0}")]
    Malformed(String),
}

/// Errors related to tessellation settings.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised by the region store and region comparison.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("region not found: {0}")]
    NotFound(String),

    #[error("region has no vertices: {0}")]
    Empty(String),
}

/// Errors raised while loading a feature collection.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document is not a FeatureCollection")]
    NotFeatureCollection,
}

/// Convenience type alias for results using [`GeosphereError`].
pub type Result<T> = std::result::Result<T, GeosphereError>;
