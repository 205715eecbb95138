//! Drag session lifecycle.
//!
//! A session is the bounded interval of tracked movement for one item,
//! opened by a pointer-down on the item and closed by the matching
//! pointer-up. The controller tracks any number of simultaneous
//! sessions, one per item, fully independent of each other.
//!
//! The controller produces only advisory output: offset-corrected
//! visual positions and a live hover zone for highlight feedback. The
//! authoritative commit happens in [`crate::state::GameState`] when the
//! closing session's final zone is handed to `attempt_drop`.
//!
//! Gesture adapters cannot guarantee exactly-once delivery, so every
//! operation on a nonexistent session is a silent no-op.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::core::config::SceneConfig;
use crate::core::geometry::{Point, Vec2};
use crate::core::item::ItemId;
use crate::zones::{resolver, ZoneIndex};

/// Tracking state for one in-flight drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// The item being manipulated.
    pub item_id: ItemId,

    /// Grab-point offset between pointer and item position, held
    /// constant for the whole session so the item never jumps under
    /// the pointer.
    pub pointer_offset: Vec2,

    /// Zone currently under the pointer. Advisory only: it drives
    /// highlight feedback and has no authority over the commit.
    pub live_hover: Option<ZoneIndex>,
}

/// Result of a move event: where to draw the item, and what to highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionUpdate {
    /// Offset-corrected position the item should be drawn at.
    pub visual_position: Point,

    /// Zone under the raw pointer position, if any.
    pub hover: Option<ZoneIndex>,
}

/// Result of a release event.
///
/// The session is closed by the time this is returned. Whatever the
/// commit decides, the item's position should revert to its origin;
/// matched items are hidden downstream rather than animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionEnd {
    /// The item whose session just closed.
    pub item_id: ItemId,

    /// Final hit-test result at the release position.
    pub zone: Option<ZoneIndex>,
}

/// Tracks all in-flight drag sessions, keyed by item.
///
/// ## Usage
///
/// ```
/// use candy_sort::core::{ItemId, Point, SceneConfig};
/// use candy_sort::session::SessionController;
///
/// let config = SceneConfig::new(900.0, 600.0).with_drop_band_y(425.0);
/// let mut sessions = SessionController::new();
///
/// let item = ItemId(0);
/// assert!(sessions.begin_session(item, Point::new(15.0, 110.0), Point::new(10.0, 100.0)));
///
/// let update = sessions.update_session(item, Point::new(305.0, 510.0), &config).unwrap();
/// assert_eq!(update.visual_position, Point::new(300.0, 500.0));
///
/// let end = sessions.end_session(item, Point::new(305.0, 510.0), &config).unwrap();
/// assert!(end.zone.is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionController {
    sessions: FxHashMap<ItemId, DragSession>,
}

impl SessionController {
    /// Create a controller with no open sessions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for an item.
    ///
    /// Stores the pointer-to-item offset computed at grab time. Returns
    /// false (and changes nothing) if the item already has an open
    /// session: a duplicate pointer-down is ignored, not an error.
    pub fn begin_session(
        &mut self,
        item_id: ItemId,
        pointer: Point,
        item_position: Point,
    ) -> bool {
        if self.sessions.contains_key(&item_id) {
            debug!("ignoring duplicate begin for {item_id}");
            return false;
        }

        debug!("begin session for {item_id} at {pointer}");
        self.sessions.insert(
            item_id,
            DragSession {
                item_id,
                pointer_offset: pointer - item_position,
                live_hover: None,
            },
        );
        true
    }

    /// Track a move event for an open session.
    ///
    /// Returns the offset-corrected visual position and the zone under
    /// the pointer, refreshing the session's live hover. The hit-test
    /// uses the raw pointer position, not the corrected one: what
    /// counts is where the finger is, not where the item is drawn.
    ///
    /// Returns `None` if the item has no open session.
    pub fn update_session(
        &mut self,
        item_id: ItemId,
        pointer: Point,
        config: &SceneConfig,
    ) -> Option<SessionUpdate> {
        let session = self.sessions.get_mut(&item_id)?;

        let hover = resolver::resolve(pointer, config);
        session.live_hover = hover;

        let update = SessionUpdate {
            visual_position: pointer - session.pointer_offset,
            hover,
        };
        trace!("move {item_id} -> {}", update.visual_position);
        Some(update)
    }

    /// Close a session at its release position.
    ///
    /// Runs the final hit-test and returns it so the caller can hand
    /// the decision to the state manager. The session is closed
    /// whatever the outcome.
    ///
    /// Returns `None` if the item has no open session, which makes a
    /// duplicated release event a no-op.
    pub fn end_session(
        &mut self,
        item_id: ItemId,
        pointer: Point,
        config: &SceneConfig,
    ) -> Option<SessionEnd> {
        self.sessions.remove(&item_id)?;

        let zone = resolver::resolve(pointer, config);
        debug!("end session for {item_id}, released over {zone:?}");
        Some(SessionEnd { item_id, zone })
    }

    /// Check whether an item is mid-drag.
    #[must_use]
    pub fn has_session(&self, item_id: ItemId) -> bool {
        self.sessions.contains_key(&item_id)
    }

    /// Get an item's session, if open.
    #[must_use]
    pub fn session(&self, item_id: ItemId) -> Option<&DragSession> {
        self.sessions.get(&item_id)
    }

    /// Number of open sessions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Drop every open session.
    ///
    /// Called on scene reset: sessions left open by lost release events
    /// are cleared here rather than leaking into the next scene.
    pub fn clear(&mut self) {
        if !self.sessions.is_empty() {
            debug!("clearing {} pending session(s)", self.sessions.len());
        }
        self.sessions.clear();
    }
}
