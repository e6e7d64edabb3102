//! Named axis-aligned zones

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::position::Position3;
use crate::models::region::Region;

/// Regions keyed by id. Region counts are small, so lookups by position are
/// a linear scan.
#[derive(Debug, Clone, Default)]
pub struct RegionManager {
    regions: BTreeMap<String, Region>,
}

impl RegionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `region`, replacing any region already registered under its id.
    pub fn add_region(&mut self, region: Region) {
        if let Some(previous) = self.regions.insert(region.id.clone(), region) {
            debug!(id = %previous.id, "region replaced");
        }
    }

    pub fn remove_region(&mut self, id: &str) -> Option<Region> {
        self.regions.remove(id)
    }

    pub fn get_region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Whether `pos` lies inside region `id`. Unknown ids contain nothing.
    pub fn is_in_region(&self, pos: Position3, id: &str) -> bool {
        self.regions.get(id).is_some_and(|region| region.contains(pos))
    }

    /// All regions containing `pos`, in id order.
    pub fn get_regions_at(&self, pos: Position3) -> Vec<&Region> {
        self.regions
            .values()
            .filter(|region| region.contains(pos))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
