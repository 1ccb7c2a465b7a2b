use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{DatasetError, Result};
use crate::geometry::GeoGeometry;
use crate::tessellation::{BuildGroups, TessellationParams};

use super::RegionStore;

/// One feature of a GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature properties; empty when absent.
    pub properties: Map<String, Value>,
    /// Parsed geometry; `None` for null, unsupported or malformed geometry.
    pub geometry: Option<GeoGeometry>,
}

impl Feature {
    /// Returns a string property.
    #[must_use]
    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Value>,
}

/// Parses a GeoJSON `FeatureCollection`.
///
/// A feature whose geometry cannot be read is kept with `geometry: None` and
/// logged; the rest of the collection still loads.
///
/// # Errors
///
/// Returns an error if `json` is not valid JSON or not a feature collection.
pub fn parse_feature_collection(json: &str) -> Result<Vec<Feature>> {
    let raw: RawCollection = serde_json::from_str(json).map_err(DatasetError::from)?;
    if raw.kind != "FeatureCollection" {
        return Err(DatasetError::NotFeatureCollection.into());
    }

    let features = raw
        .features
        .into_iter()
        .enumerate()
        .map(|(index, f)| {
            let geometry = f.geometry.and_then(|value| {
                GeoGeometry::from_json(&value).unwrap_or_else(|e| {
                    tracing::warn!(index, error = %e, "ignoring unreadable feature geometry");
                    None
                })
            });
            Feature {
                properties: f.properties.unwrap_or_default(),
                geometry,
            }
        })
        .collect();

    Ok(features)
}

impl RegionStore {
    /// Builds a store from parsed features, keyed by the string property
    /// `key_property` (e.g. `iso_a3`).
    ///
    /// Features without a key or without a drawable geometry are skipped.
    #[must_use]
    pub fn from_features(
        features: &[Feature],
        params: TessellationParams,
        key_property: &str,
    ) -> Self {
        let mut store = Self::new();
        let mut skipped = 0usize;

        for (index, feature) in features.iter().enumerate() {
            let Some(key) = feature.property_str(key_property) else {
                tracing::warn!(index, key_property, "skipping feature without region key");
                skipped += 1;
                continue;
            };
            let Some(geometry) = &feature.geometry else {
                tracing::warn!(index, key, "skipping feature without geometry");
                skipped += 1;
                continue;
            };

            let groups = BuildGroups::new(geometry, params).execute();
            tracing::trace!(key, groups = groups.len(), "tessellated region");
            store.insert(key, &groups);
        }

        tracing::debug!(regions = store.len(), skipped, "built region store");
        store
    }

    /// Parses a GeoJSON `FeatureCollection` and builds a store from it.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid feature collection.
    pub fn from_geojson(
        json: &str,
        params: TessellationParams,
        key_property: &str,
    ) -> Result<Self> {
        let features = parse_feature_collection(json)?;
        Ok(Self::from_features(&features, params, key_property))
    }
}
