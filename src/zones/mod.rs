//! Zone system: sorting targets and the drop-zone resolver.
//!
//! Zones are **scene-configured**, not hardcoded: which kind each zone
//! accepts comes from the `SceneConfig` zone table, and the number of
//! zones determines the horizontal banding used for hit-testing.
//!
//! ## Key Types
//!
//! - `ZoneIndex`: Opaque zone identifier (position left-to-right)
//! - `Zone`: Per-zone state (expected kind, accept count)
//! - `resolver::resolve`: Pure pointer-to-zone hit-test

pub mod resolver;

use serde::{Deserialize, Serialize};

use crate::core::item::CandyKind;

/// Zone identifier: the zone's position among all zones, left to right.
///
/// The index doubles as the key into the scene's zone table, which is
/// where the accepted kind comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneIndex(pub u16);

impl ZoneIndex {
    /// Create a new zone index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the index as a usize, for slice lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ZoneIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// A sorting target.
///
/// `accept_count` is monotonic: it goes up by exactly one per matched
/// drop and never comes back down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Position among zones, fixed for the scene.
    pub index: ZoneIndex,

    /// The one kind this zone accepts.
    pub expected: CandyKind,

    /// Number of items sorted into this zone so far.
    pub accept_count: u32,
}

impl Zone {
    /// Create an empty zone accepting the given kind.
    #[must_use]
    pub const fn new(index: ZoneIndex, expected: CandyKind) -> Self {
        Self {
            index,
            expected,
            accept_count: 0,
        }
    }

    /// Record one matched drop.
    pub fn record_accept(&mut self) {
        self.accept_count += 1;
    }
}
