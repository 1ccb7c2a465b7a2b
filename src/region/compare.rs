use crate::analytics::{centroid, direction, min_distance, CompassDirection, MinDistanceResult};
use crate::error::{RegionError, Result};
use crate::math::{normalize_or_zero, Vec3, MAX_EARTH_DISTANCE_KM, TOLERANCE};

use super::{Region, RegionStore};

/// Outcome of comparing a guessed region against a target region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionComparison {
    /// The two keys are the same region.
    pub is_match: bool,
    /// Smallest boundary-to-boundary distance in kilometers.
    pub distance_km: f64,
    /// `distance_km` relative to the largest possible distance, in `[0, 1]`.
    pub closeness: f64,
    /// Heading from the guess's centroid to the target's centroid.
    pub direction: CompassDirection,
    /// The boundary points that produced `distance_km`.
    pub nearest: MinDistanceResult,
}

/// Compares two regions held in a [`RegionStore`].
#[derive(Debug, Clone)]
pub struct CompareRegions {
    guess: String,
    target: String,
}

impl CompareRegions {
    /// Creates a new `CompareRegions` query.
    #[must_use]
    pub fn new(guess: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            target: target.into(),
        }
    }

    /// Executes the comparison.
    ///
    /// The distance is the smallest [`min_distance`] over every pair of
    /// target and guess rings. The direction uses the centroids of each
    /// region's first ring.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is not in the store or either region
    /// has no vertices.
    pub fn execute(&self, store: &RegionStore) -> Result<RegionComparison> {
        let guess = store.get(&self.guess)?;
        let target = store.get(&self.target)?;
        let guess_center = region_center(guess)?;
        let target_center = region_center(target)?;

        let nearest = target
            .rings
            .iter()
            .flat_map(|t| guess.rings.iter().filter_map(move |g| min_distance(t, g)))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
            .ok_or_else(|| RegionError::Empty(self.guess.clone()))?;

        let comparison = RegionComparison {
            is_match: self.guess == self.target,
            distance_km: nearest.distance,
            closeness: (nearest.distance / MAX_EARTH_DISTANCE_KM).clamp(0.0, 1.0),
            direction: direction(&guess_center, &target_center),
            nearest,
        };

        tracing::debug!(
            guess = %self.guess,
            target = %self.target,
            distance_km = comparison.distance_km,
            "compared regions"
        );
        Ok(comparison)
    }
}

/// Unit direction of the first ring's centroid. Rings too small to enclose
/// anything (single points) fall back to their first vertex.
fn region_center(region: &Region) -> Result<Vec3> {
    let ring = region
        .rings
        .first()
        .filter(|r| !r.is_empty())
        .ok_or_else(|| RegionError::Empty(region.key.clone()))?;

    let moment = centroid(ring);
    if moment.norm() < TOLERANCE {
        Ok(normalize_or_zero(&ring[0]))
    } else {
        Ok(moment.normalize())
    }
}
