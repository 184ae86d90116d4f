//! Cache of the merged waypoint sequence for one buffer

use crate::position::{RowRange, Waypoint};

#[derive(Debug)]
struct CacheEntry {
    version: u64,
    range: RowRange,
    waypoints: Vec<Waypoint>,
}

/// Last merged sequence, keyed by change version and scanned range
#[derive(Debug, Default)]
pub struct WaypointCache {
    entry: Option<CacheEntry>,
}

impl WaypointCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the entry was built at `version` for exactly `range`
    pub fn is_fresh(&self, version: u64, range: RowRange) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.version == version && e.range == range)
    }

    /// Replace the entry wholesale
    pub fn store(&mut self, version: u64, range: RowRange, waypoints: Vec<Waypoint>) {
        self.entry = Some(CacheEntry {
            version,
            range,
            waypoints,
        });
    }

    /// Cached waypoints, empty if nothing is cached
    pub fn waypoints(&self) -> &[Waypoint] {
        self.entry
            .as_ref()
            .map(|e| e.waypoints.as_slice())
            .unwrap_or_default()
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
