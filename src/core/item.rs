//! Item identification and the draggable item entity.
//!
//! Every candy in a scene has a unique [`ItemId`], assigned at scene
//! creation and never reused for the lifetime of that scene.
//!
//! ## Usage
//!
//! ```
//! use candy_sort::core::{CandyKind, Item, ItemId, Point};
//!
//! let item = Item::new(ItemId(0), CandyKind::Gummy, Point::new(0.0, 120.0));
//!
//! assert!(!item.dropped);
//! assert_eq!(item.position, item.origin);
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Unique identifier for a draggable item.
///
/// Stable for the lifetime of a scene; a fresh scene starts numbering
/// from zero again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create an item ID from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// The fixed set of candy categories.
///
/// A zone accepts exactly one kind, but which zone accepts which kind is
/// configured via the scene's zone table, never derived from this enum's
/// declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandyKind {
    Chocolate,
    Gummy,
    CandyCorn,
}

impl CandyKind {
    /// All kinds, for scene seeding and zone-table construction.
    pub const ALL: [CandyKind; 3] = [
        CandyKind::Chocolate,
        CandyKind::Gummy,
        CandyKind::CandyCorn,
    ];
}

impl std::fmt::Display for CandyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CandyKind::Chocolate => "chocolate",
            CandyKind::Gummy => "gummy",
            CandyKind::CandyCorn => "candy corn",
        };
        write!(f, "{name}")
    }
}

/// A draggable item in a scene.
///
/// `position` is the only field that changes during a drag; it is written
/// through the state manager so snapshot readers never race a move.
/// `dropped` is monotonic: once true it never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique entity ID for this item.
    pub id: ItemId,

    /// Candy category. Immutable after creation.
    pub kind: CandyKind,

    /// Current position, updated continuously during an active drag.
    pub position: Point,

    /// Spring-back target after any non-matching release. Fixed at
    /// creation; in this scene it is also the spawn position.
    pub origin: Point,

    /// Whether this item has been successfully sorted. Terminal.
    pub dropped: bool,
}

impl Item {
    /// Create an item at its spawn position.
    ///
    /// `origin` is set to the spawn position and `dropped` starts false.
    #[must_use]
    pub const fn new(id: ItemId, kind: CandyKind, spawn: Point) -> Self {
        Self {
            id,
            kind,
            position: spawn,
            origin: spawn,
            dropped: false,
        }
    }
}
