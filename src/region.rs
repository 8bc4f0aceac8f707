use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::cartesian::{BoundingBox, Ring};

/// The stable identifier of a [`Region`].
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RegionId(u64);

impl From<u64> for RegionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl RegionId {
    /// Returns the inner value of self.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

/// One editable shape: an outer ring followed by any amount of holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    rings: Vec<Ring>,
}

impl Region {
    /// Returns a region with the given ring as its only boundary.
    pub fn new(id: RegionId, outer: Ring) -> Self {
        Self {
            id,
            rings: vec![outer],
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Returns all the rings of the region, the outer one first.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Returns the outer ring of the region.
    pub fn outer(&self) -> &Ring {
        &self.rings[0]
    }

    /// Returns the rings following the outer one.
    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }

    /// Returns the area of the outer ring minus the area of every ring following it, or zero if
    /// they add up to more than the outer one.
    ///
    /// Rings appended by a lossy merge count as holes too, even when they lie outside the outer
    /// ring.
    pub fn area(&self) -> f64 {
        self.holes()
            .iter()
            .fold(self.outer().area(), |area, hole| area - hole.area())
            .max(0.)
    }

    /// Returns the bounding box of the outer ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.outer().bounding_box()
    }

    /// Replaces the outer ring of the region, keeping its holes.
    pub(crate) fn set_outer(&mut self, ring: Ring) {
        self.rings[0] = ring;
    }

    /// Appends the given ring after the existing ones.
    pub(crate) fn push_ring(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Replaces all the rings of the region.
    ///
    /// The list of rings must not be empty.
    pub(crate) fn set_rings(&mut self, rings: Vec<Ring>) {
        debug_assert!(!rings.is_empty());
        self.rings = rings;
    }
}

/// The authoritative mapping from identifier to region.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegionSet {
    regions: BTreeMap<RegionId, Region>,
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().map(|region| (region.id, region)).collect(),
        }
    }
}

impl RegionSet {
    /// Inserts the given region, returning the one it replaces, if any.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        self.regions.insert(region.id, region)
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(&id)
    }

    /// Removes the region with the given identifier, returning it.
    pub fn remove(&mut self, id: RegionId) -> Option<Region> {
        self.regions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns an iterator over all the regions, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// Returns an iterator over all the identifiers, in order.
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    /// Returns the identifier of every region whose outer bounding box intersects the bounding
    /// box of the given ring.
    ///
    /// Only bounding boxes are compared, hence regions that do not actually overlap the ring may
    /// be included.
    pub fn find_intersecting(&self, candidate: &Ring) -> Vec<RegionId> {
        let Some(bbox) = candidate.bounding_box() else {
            return Vec::new();
        };

        self.regions
            .values()
            .filter(|region| {
                region
                    .bounding_box()
                    .is_some_and(|region| region.intersects(&bbox))
            })
            .map(Region::id)
            .collect()
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::collections::btree_map::Values<'a, RegionId, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.values()
    }
}
