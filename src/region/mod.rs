//! Caller-side registry of built regions.
//!
//! Nothing in the tessellation or analytics modules reads from here; the
//! store only keeps what an application built so it can answer comparison
//! queries later.

mod compare;
mod dataset;

pub use compare::{CompareRegions, RegionComparison};
pub use dataset::{parse_feature_collection, Feature};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::RegionError;
use crate::math::Vec3;
use crate::tessellation::Group;

slotmap::new_key_type! {
    /// Unique identifier for a region in the store.
    pub struct RegionId;
}

/// The vertices built for one region, one ring per tessellated group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    /// Caller-supplied key, e.g. an ISO country code.
    pub key: String,
    /// Cartesian vertices, one list per group.
    pub rings: Vec<Vec<Vec3>>,
}

impl Region {
    /// Creates a region from tessellated groups.
    #[must_use]
    pub fn from_groups(key: impl Into<String>, groups: &[Group]) -> Self {
        Self {
            key: key.into(),
            rings: groups.iter().map(|g| g.positions().collect()).collect(),
        }
    }

    /// Total number of vertices across all rings.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }
}

/// Arena of regions addressable by key.
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: SlotMap<RegionId, Region>,
    by_key: HashMap<String, RegionId>,
}

impl RegionStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a region built from `groups`, replacing any region with the same key.
    pub fn insert(&mut self, key: impl Into<String>, groups: &[Group]) -> RegionId {
        self.insert_region(Region::from_groups(key, groups))
    }

    /// Inserts a region, replacing any region with the same key.
    pub fn insert_region(&mut self, region: Region) -> RegionId {
        if let Some(&id) = self.by_key.get(&region.key) {
            if let Some(slot) = self.regions.get_mut(id) {
                *slot = region;
                return id;
            }
        }
        let key = region.key.clone();
        let id = self.regions.insert(region);
        self.by_key.insert(key, id);
        id
    }

    /// Returns the region with `key`, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if no region has this key.
    pub fn get(&self, key: &str) -> Result<&Region, RegionError> {
        self.by_key
            .get(key)
            .and_then(|&id| self.regions.get(id))
            .ok_or_else(|| RegionError::NotFound(key.to_owned()))
    }

    /// Returns the region with `id`, if present.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Removes and returns the region with `key`.
    pub fn remove(&mut self, key: &str) -> Option<Region> {
        let id = self.by_key.remove(key)?;
        self.regions.remove(id)
    }

    /// Returns `true` if a region has this key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the store holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterates the region keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_key.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{GeoCoord, GeoGeometry};
    use crate::tessellation::{BuildGroups, TessellationParams};

    fn groups(lon: f64) -> Vec<Group> {
        let g = GeoGeometry::Polygon(vec![vec![
            GeoCoord::new(lon, 0.0),
            GeoCoord::new(lon + 1.0, 0.0),
            GeoCoord::new(lon + 1.0, 1.0),
            GeoCoord::new(lon, 0.0),
        ]]);
        BuildGroups::new(&g, TessellationParams::default()).execute()
    }

    #[test]
    fn insert_and_get() {
        let mut store = RegionStore::new();
        store.insert("AAA", &groups(0.0));
        let r = store.get("AAA").unwrap();
        assert_eq!(r.rings.len(), 1);
        assert_eq!(r.vertex_count(), 4);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_key_replaces() {
        let mut store = RegionStore::new();
        let id1 = store.insert("AAA", &groups(0.0));
        let id2 = store.insert("AAA", &groups(50.0));
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
        let first = store.get("AAA").unwrap().rings[0][0];
        assert!((first - GeoCoord::new(50.0, 0.0).to_cartesian(1.0)).norm() < 1e-12);
    }

    #[test]
    fn missing_key() {
        let store = RegionStore::new();
        assert!(matches!(store.get("ZZZ"), Err(RegionError::NotFound(k)) if k == "ZZZ"));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_region() {
        let mut store = RegionStore::new();
        let id = store.insert("AAA", &groups(0.0));
        assert!(store.remove("AAA").is_some());
        assert!(!store.contains("AAA"));
        assert!(store.region(id).is_none());
        assert!(store.remove("AAA").is_none());
    }

    #[test]
    fn keys_listed() {
        let mut store = RegionStore::new();
        store.insert("AAA", &groups(0.0));
        store.insert("BBB", &groups(10.0));
        let mut keys: Vec<&str> = store.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["AAA", "BBB"]);
    }
}
