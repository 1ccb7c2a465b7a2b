use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GeometryError, Result};

use super::{GeoCoord, GeoShape};

/// Geometry type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    /// GeoJSON name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
        }
    }

    /// Looks up a kind by its GeoJSON name. Unknown names return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Point" => Some(Self::Point),
            "MultiPoint" => Some(Self::MultiPoint),
            "LineString" => Some(Self::LineString),
            "MultiLineString" => Some(Self::MultiLineString),
            "Polygon" => Some(Self::Polygon),
            "MultiPolygon" => Some(Self::MultiPolygon),
            _ => None,
        }
    }
}

/// A GeoJSON-style geometry with coordinates nested to the depth of its kind.
///
/// For polygons the first ring is the outer boundary and the remaining rings
/// are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeoGeometry {
    Point(GeoCoord),
    MultiPoint(Vec<GeoCoord>),
    LineString(GeoShape),
    MultiLineString(Vec<GeoShape>),
    Polygon(Vec<GeoShape>),
    MultiPolygon(Vec<Vec<GeoShape>>),
}

impl GeoGeometry {
    /// Returns the kind tag.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::LineString(_) => GeometryKind::LineString,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Reads a `{ "type": ..., "coordinates": ... }` object.
    ///
    /// A `type` outside the six supported kinds (for example
    /// `GeometryCollection`) yields `Ok(None)`; callers treat it as a geometry
    /// with nothing to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if `type` is missing or the coordinates do not match
    /// the nesting of a supported kind.
    pub fn from_json(value: &Value) -> Result<Option<Self>> {
        let name = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| GeometryError::Malformed("missing geometry type".into()))?;

        if GeometryKind::from_name(name).is_none() {
            return Ok(None);
        }

        Self::deserialize(value)
            .map(Some)
            .map_err(|e| GeometryError::Malformed(format!("{name}: {e}")).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_point() {
        let g = GeoGeometry::from_json(&json!({"type": "Point", "coordinates": [10, 20]}))
            .unwrap()
            .unwrap();
        assert_eq!(g, GeoGeometry::Point(GeoCoord::new(10.0, 20.0)));
        assert_eq!(g.kind(), GeometryKind::Point);
    }

    #[test]
    fn parse_polygon_with_hole() {
        let g = GeoGeometry::from_json(&json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                [[2, 2], [4, 2], [4, 4], [2, 2]]
            ]
        }))
        .unwrap()
        .unwrap();
        let GeoGeometry::Polygon(rings) = g else {
            panic!("expected polygon");
        };
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[1].len(), 4);
    }

    #[test]
    fn parse_multipolygon_with_altitude() {
        let g = GeoGeometry::from_json(&json!({
            "type": "MultiPolygon",
            "coordinates": [[[[0, 0, 0.1], [1, 0, 0.1], [1, 1, 0.1], [0, 0, 0.1]]]]
        }))
        .unwrap()
        .unwrap();
        assert_eq!(g.kind(), GeometryKind::MultiPolygon);
    }

    #[test]
    fn unknown_type_is_none() {
        let g = GeoGeometry::from_json(&json!({"type": "GeometryCollection", "geometries": []}))
            .unwrap();
        assert!(g.is_none());
    }

    #[test]
    fn missing_type_is_error() {
        assert!(GeoGeometry::from_json(&json!({"coordinates": [0, 0]})).is_err());
    }

    #[test]
    fn wrong_nesting_is_error() {
        let r = GeoGeometry::from_json(&json!({
            "type": "Polygon",
            "coordinates": [[0, 0], [1, 1]]
        }));
        assert!(r.is_err());
    }

    #[test]
    fn kind_names_roundtrip() {
        for kind in [
            GeometryKind::Point,
            GeometryKind::MultiPoint,
            GeometryKind::LineString,
            GeometryKind::MultiLineString,
            GeometryKind::Polygon,
            GeometryKind::MultiPolygon,
        ] {
            assert_eq!(GeometryKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn serialize_uses_geojson_shape() {
        let json = serde_json::to_value(GeoGeometry::LineString(vec![
            GeoCoord::new(0.0, 0.0),
            GeoCoord::new(1.0, 1.0),
        ]))
        .unwrap();
        assert_eq!(json["type"], "LineString");
        assert_eq!(json["coordinates"][1][0], 1.0);
    }
}
