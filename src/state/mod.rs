//! Authoritative game state: items, zones, and the commit rule.
//!
//! ## Ownership
//!
//! `GameState` exclusively owns the item and zone collections. The
//! session controller only ever writes visual positions through
//! [`GameState::set_position`]; `dropped` and `accept_count` are
//! written in exactly one place, [`GameState::attempt_drop`].
//!
//! ## Atomicity
//!
//! Collections are `im` persistent structures. A snapshot is a cheap
//! structural-sharing copy taken between `&mut self` calls, so readers
//! see either all of a commit (`dropped` set AND `accept_count`
//! incremented) or none of it, never a half-applied state.

use im::{HashMap as ImHashMap, Vector};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::config::SceneConfig;
use crate::core::geometry::Point;
use crate::core::item::{CandyKind, Item, ItemId};
use crate::zones::{Zone, ZoneIndex};

/// Outcome of a drop attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Kind matched the zone: the item is now dropped and counted.
    Matched,
    /// Released over a zone of the wrong kind. No state change.
    Rejected,
    /// Not a drop at all: released outside the band, unknown item or
    /// zone, or the item was already dropped. No state change.
    NotDropped,
}

impl DropOutcome {
    /// Check whether the attempt committed state.
    #[must_use]
    pub const fn is_matched(self) -> bool {
        matches!(self, DropOutcome::Matched)
    }
}

/// Render view of one item.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub x: f32,
    pub y: f32,
    pub kind: CandyKind,
    /// Render layers stop drawing an item once this is true.
    pub dropped: bool,
}

/// Render view of one zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneView {
    pub index: ZoneIndex,
    pub accept_count: u32,
    pub is_hovered: bool,
}

/// Immutable scene view for the render layer.
///
/// Owned data throughout: holding a snapshot gives no way to mutate
/// the authoritative state it was taken from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Items in ascending id order.
    pub items: Vec<ItemView>,
    /// Zones in index order.
    pub zones: Vec<ZoneView>,
}

/// Authoritative item and zone state for one scene.
///
/// ## Usage
///
/// ```
/// use candy_sort::core::{CandyKind, Item, ItemId, Point, SceneConfig};
/// use candy_sort::state::{DropOutcome, GameState};
/// use candy_sort::zones::ZoneIndex;
///
/// let config = SceneConfig::new(900.0, 600.0);
/// let mut state = GameState::new(&config);
/// state.add_item(Item::new(ItemId(0), CandyKind::Gummy, Point::new(0.0, 50.0)));
///
/// // Zone 1 accepts Gummy under the default table
/// let outcome = state.attempt_drop(ItemId(0), Some(ZoneIndex(1)));
/// assert_eq!(outcome, DropOutcome::Matched);
/// assert_eq!(state.zone(ZoneIndex(1)).unwrap().accept_count, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    /// Items keyed by id. Persistent map: snapshots share structure.
    items: ImHashMap<ItemId, Item>,

    /// Zones in index order, built from the scene's zone table.
    zones: Vector<Zone>,

    /// Advisory hover mirror for rendering. Never consulted by
    /// `attempt_drop`.
    hovered: Option<ZoneIndex>,
}

impl GameState {
    /// Create a state with empty zones built from the config's zone
    /// table, and no items.
    #[must_use]
    pub fn new(config: &SceneConfig) -> Self {
        let zones = config
            .zone_table()
            .iter()
            .enumerate()
            .map(|(i, &kind)| Zone::new(ZoneIndex(i as u16), kind))
            .collect();

        Self {
            items: ImHashMap::new(),
            zones,
            hovered: None,
        }
    }

    // === Items ===

    /// Add an item to the scene.
    ///
    /// Panics if the id is already present: ids are unique for the
    /// lifetime of a scene.
    pub fn add_item(&mut self, item: Item) {
        assert!(
            !self.items.contains_key(&item.id),
            "Item {} already exists in scene",
            item.id
        );
        self.items.insert(item.id, item);
    }

    /// Get an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Number of items in the scene, dropped or not.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Write an item's visual position during a drag.
    ///
    /// Refused (returns false) for unknown items and for dropped items:
    /// `dropped` is terminal, so a stale move event for a sorted item
    /// must not resurrect it on screen.
    pub fn set_position(&mut self, id: ItemId, position: Point) -> bool {
        match self.items.get_mut(&id) {
            Some(item) if !item.dropped => {
                item.position = position;
                true
            }
            _ => false,
        }
    }

    /// Revert an item's position to its origin (the spring-back target).
    ///
    /// Returns false for unknown items.
    pub fn reset_position(&mut self, id: ItemId) -> bool {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.position = item.origin;
                true
            }
            None => false,
        }
    }

    // === Zones ===

    /// Get a zone by index.
    #[must_use]
    pub fn zone(&self, index: ZoneIndex) -> Option<&Zone> {
        self.zones.get(index.index())
    }

    /// Number of zones.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    // === Hover ===

    /// Mirror the controller's live hover for rendering.
    pub fn set_hover(&mut self, zone: Option<ZoneIndex>) {
        self.hovered = zone;
    }

    /// The currently highlighted zone, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ZoneIndex> {
        self.hovered
    }

    // === Commit ===

    /// Apply the match/reject rule for a release.
    ///
    /// Rejections and non-drops leave state untouched. A match sets the
    /// item's `dropped` flag and increments the zone's accept count in
    /// the same call, so no observer can see one without the other.
    pub fn attempt_drop(&mut self, id: ItemId, zone: Option<ZoneIndex>) -> DropOutcome {
        let Some(zone_index) = zone else {
            return DropOutcome::NotDropped;
        };
        let Some(item) = self.items.get(&id) else {
            debug!("drop attempt for unknown {id}");
            return DropOutcome::NotDropped;
        };
        if item.dropped {
            // Stale commit: already terminal, nothing to surface
            return DropOutcome::NotDropped;
        }
        let Some(expected) = self.zones.get(zone_index.index()).map(|z| z.expected) else {
            debug!("drop attempt for unknown {zone_index}");
            return DropOutcome::NotDropped;
        };

        if item.kind != expected {
            debug!("{id} ({}) rejected by {zone_index} ({expected})", item.kind);
            return DropOutcome::Rejected;
        }

        // Commit: both writes inside this one &mut self call
        if let Some(item) = self.items.get_mut(&id) {
            item.dropped = true;
        }
        if let Some(zone) = self.zones.get_mut(zone_index.index()) {
            zone.record_accept();
        }
        debug!("{id} matched into {zone_index}");
        DropOutcome::Matched
    }

    // === Views ===

    /// Take an immutable snapshot for the render layer.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        let mut items: Vec<ItemView> = self
            .items
            .values()
            .map(|item| ItemView {
                id: item.id,
                x: item.position.x,
                y: item.position.y,
                kind: item.kind,
                dropped: item.dropped,
            })
            .collect();
        items.sort_by_key(|view| view.id.raw());

        let zones = self
            .zones
            .iter()
            .map(|zone| ZoneView {
                index: zone.index,
                accept_count: zone.accept_count,
                is_hovered: self.hovered == Some(zone.index),
            })
            .collect();

        SceneSnapshot { items, zones }
    }

    /// Check whether every sortable item has been dropped.
    ///
    /// Items whose kind no zone accepts can never be dropped and are
    /// not counted against completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.items
            .values()
            .filter(|item| self.zones.iter().any(|z| z.expected == item.kind))
            .all(|item| item.dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SceneConfig;

    fn state_with_item(kind: CandyKind) -> GameState {
        let config = SceneConfig::new(900.0, 600.0);
        let mut state = GameState::new(&config);
        state.add_item(Item::new(ItemId(5), kind, Point::new(10.0, 20.0)));
        state
    }

    #[test]
    fn test_zones_built_from_table() {
        let config = SceneConfig::new(900.0, 600.0)
            .with_zone_table([CandyKind::CandyCorn, CandyKind::Gummy]);
        let state = GameState::new(&config);

        assert_eq!(state.zone_count(), 2);
        assert_eq!(state.zone(ZoneIndex(0)).unwrap().expected, CandyKind::CandyCorn);
        assert_eq!(state.zone(ZoneIndex(1)).unwrap().expected, CandyKind::Gummy);
        assert_eq!(state.zone(ZoneIndex(2)), None);
    }

    #[test]
    fn test_match_commits_both_writes() {
        let mut state = state_with_item(CandyKind::Gummy);

        let outcome = state.attempt_drop(ItemId(5), Some(ZoneIndex(1)));

        assert_eq!(outcome, DropOutcome::Matched);
        assert!(state.item(ItemId(5)).unwrap().dropped);
        assert_eq!(state.zone(ZoneIndex(1)).unwrap().accept_count, 1);
        assert_eq!(state.zone(ZoneIndex(0)).unwrap().accept_count, 0);
        assert_eq!(state.zone(ZoneIndex(2)).unwrap().accept_count, 0);
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut state = state_with_item(CandyKind::Gummy);

        let outcome = state.attempt_drop(ItemId(5), Some(ZoneIndex(2)));

        assert_eq!(outcome, DropOutcome::Rejected);
        assert!(!state.item(ItemId(5)).unwrap().dropped);
        assert_eq!(state.zone(ZoneIndex(2)).unwrap().accept_count, 0);
    }

    #[test]
    fn test_no_zone_not_dropped() {
        let mut state = state_with_item(CandyKind::Gummy);

        assert_eq!(state.attempt_drop(ItemId(5), None), DropOutcome::NotDropped);
        assert!(!state.item(ItemId(5)).unwrap().dropped);
    }

    #[test]
    fn test_unknown_item_and_zone() {
        let mut state = state_with_item(CandyKind::Gummy);

        assert_eq!(
            state.attempt_drop(ItemId(99), Some(ZoneIndex(1))),
            DropOutcome::NotDropped
        );
        assert_eq!(
            state.attempt_drop(ItemId(5), Some(ZoneIndex(7))),
            DropOutcome::NotDropped
        );
    }

    #[test]
    fn test_stale_commit_rejected_silently() {
        let mut state = state_with_item(CandyKind::Gummy);

        assert_eq!(state.attempt_drop(ItemId(5), Some(ZoneIndex(1))), DropOutcome::Matched);
        // Same release delivered twice: terminal state, count unchanged
        assert_eq!(
            state.attempt_drop(ItemId(5), Some(ZoneIndex(1))),
            DropOutcome::NotDropped
        );
        assert_eq!(state.zone(ZoneIndex(1)).unwrap().accept_count, 1);
    }

    #[test]
    fn test_set_position_refused_for_dropped() {
        let mut state = state_with_item(CandyKind::Gummy);

        assert!(state.set_position(ItemId(5), Point::new(50.0, 60.0)));
        assert_eq!(state.item(ItemId(5)).unwrap().position, Point::new(50.0, 60.0));

        state.attempt_drop(ItemId(5), Some(ZoneIndex(1)));
        assert!(!state.set_position(ItemId(5), Point::new(1.0, 1.0)));
        assert!(!state.set_position(ItemId(42), Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_reset_position_returns_to_origin() {
        let mut state = state_with_item(CandyKind::Gummy);

        state.set_position(ItemId(5), Point::new(400.0, 500.0));
        assert!(state.reset_position(ItemId(5)));
        assert_eq!(state.item(ItemId(5)).unwrap().position, Point::new(10.0, 20.0));

        assert!(!state.reset_position(ItemId(42)));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_item_panics() {
        let mut state = state_with_item(CandyKind::Gummy);
        state.add_item(Item::new(ItemId(5), CandyKind::Chocolate, Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_snapshot_views() {
        let mut state = state_with_item(CandyKind::Gummy);
        state.add_item(Item::new(ItemId(2), CandyKind::Chocolate, Point::new(1.0, 2.0)));
        state.set_hover(Some(ZoneIndex(1)));

        let snapshot = state.snapshot();

        assert_eq!(snapshot.items.len(), 2);
        // Ascending id order regardless of insertion order
        assert_eq!(snapshot.items[0].id, ItemId(2));
        assert_eq!(snapshot.items[1].id, ItemId(5));

        assert_eq!(snapshot.zones.len(), 3);
        assert!(!snapshot.zones[0].is_hovered);
        assert!(snapshot.zones[1].is_hovered);
    }

    #[test]
    fn test_snapshot_isolated_from_later_mutation() {
        let mut state = state_with_item(CandyKind::Gummy);

        let before = state.snapshot();
        state.attempt_drop(ItemId(5), Some(ZoneIndex(1)));
        let after = state.snapshot();

        // The earlier snapshot still shows the un-dropped world
        assert!(!before.items[0].dropped);
        assert_eq!(before.zones[1].accept_count, 0);
        // And the later one shows the full commit, never half of it
        assert!(after.items[0].dropped);
        assert_eq!(after.zones[1].accept_count, 1);
    }

    #[test]
    fn test_is_complete() {
        let config = SceneConfig::new(900.0, 600.0);
        let mut state = GameState::new(&config);
        assert!(state.is_complete()); // vacuously, no items

        state.add_item(Item::new(ItemId(0), CandyKind::Gummy, Point::new(0.0, 0.0)));
        assert!(!state.is_complete());

        state.attempt_drop(ItemId(0), Some(ZoneIndex(1)));
        assert!(state.is_complete());
    }

    #[test]
    fn test_is_complete_ignores_unsortable_kinds() {
        let config = SceneConfig::new(900.0, 600.0).with_zone_table([CandyKind::Gummy]);
        let mut state = GameState::new(&config);

        // No zone accepts chocolate; it cannot block completion
        state.add_item(Item::new(ItemId(0), CandyKind::Chocolate, Point::new(0.0, 0.0)));
        state.add_item(Item::new(ItemId(1), CandyKind::Gummy, Point::new(0.0, 0.0)));
        assert!(!state.is_complete());

        state.attempt_drop(ItemId(1), Some(ZoneIndex(0)));
        assert!(state.is_complete());
    }
}
