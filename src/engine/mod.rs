//! Event-routing facade over the controller and state manager.
//!
//! [`SortEngine`] is what a gesture adapter talks to: it consumes raw
//! [`PointerEvent`]s, drives drag sessions, and commits drop attempts,
//! in arrival order on one logical thread of control.
//!
//! Raw move and up events carry no item id (the adapter only knows
//! where the pointer is), so the engine remembers which item the
//! pointer grabbed and routes follow-up events to it. Adapters doing
//! true multi-touch skip that routing and call the per-item methods
//! ([`SortEngine::begin_drag`] and friends) with their own pointer-to-
//! item bookkeeping; sessions for distinct items never interfere.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::config::SceneConfig;
use crate::core::geometry::Point;
use crate::core::item::{Item, ItemId};
use crate::core::rng::SceneRng;
use crate::scene;
use crate::session::SessionController;
use crate::state::{DropOutcome, GameState, SceneSnapshot};

/// A raw event from the gesture input adapter.
///
/// Coordinates are in the same unit system as the viewport dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer landed on an item.
    Down { item: ItemId, x: f32, y: f32 },
    /// Pointer moved.
    Move { x: f32, y: f32 },
    /// Pointer released.
    Up { x: f32, y: f32 },
}

/// The sorting puzzle engine.
///
/// Owns the scene configuration, the session controller, and the
/// authoritative game state. All mutation funnels through `&mut self`,
/// which serializes drop commits and hover updates as required.
///
/// ## Usage
///
/// ```
/// use candy_sort::engine::{PointerEvent, SortEngine};
/// use candy_sort::core::{CandyKind, Item, ItemId, Point, SceneConfig};
///
/// let config = SceneConfig::new(900.0, 600.0).with_drop_band_y(425.0);
/// let mut engine = SortEngine::with_items(
///     config,
///     vec![Item::new(ItemId(0), CandyKind::Gummy, Point::new(40.0, 100.0))],
/// );
///
/// engine.handle_event(PointerEvent::Down { item: ItemId(0), x: 45.0, y: 105.0 });
/// engine.handle_event(PointerEvent::Move { x: 450.0, y: 500.0 });
/// let outcome = engine.handle_event(PointerEvent::Up { x: 450.0, y: 500.0 });
///
/// assert!(outcome.unwrap().is_matched());
/// ```
#[derive(Clone, Debug)]
pub struct SortEngine {
    config: SceneConfig,
    sessions: SessionController,
    state: GameState,
    /// Item grabbed by the single logical pointer, for routing raw
    /// move/up events that carry no item id.
    active_item: Option<ItemId>,
}

impl SortEngine {
    /// Create an engine with an empty scene.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            sessions: SessionController::new(),
            state,
            active_item: None,
        }
    }

    /// Create an engine with the given items.
    #[must_use]
    pub fn with_items(config: SceneConfig, items: Vec<Item>) -> Self {
        let mut engine = Self::new(config);
        for item in items {
            engine.state.add_item(item);
        }
        engine
    }

    /// Create an engine with a randomly seeded scene.
    #[must_use]
    pub fn with_seeded_scene(config: SceneConfig, item_count: usize, seed: u64) -> Self {
        let mut rng = SceneRng::new(seed);
        let items = scene::generate_random_items(&config, item_count, &mut rng);
        Self::with_items(config, items)
    }

    // === Raw event stream ===

    /// Process one raw pointer event.
    ///
    /// Returns the drop outcome for up events that closed a session,
    /// `None` otherwise. Unknown items, duplicate events, and releases
    /// without a grab are all silently ignored; nothing here is fatal.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<DropOutcome> {
        match event {
            PointerEvent::Down { item, x, y } => {
                if self.begin_drag(item, Point::new(x, y)) {
                    self.active_item = Some(item);
                }
                None
            }
            PointerEvent::Move { x, y } => {
                let item = self.active_item?;
                self.move_drag(item, Point::new(x, y));
                None
            }
            PointerEvent::Up { x, y } => {
                let item = self.active_item.take()?;
                self.release_drag(item, Point::new(x, y))
            }
        }
    }

    // === Per-item drag API (multi-touch adapters) ===

    /// Open a drag session for an item.
    ///
    /// Ignored (returns false) for unknown items, already-dropped
    /// items, and items already mid-drag.
    pub fn begin_drag(&mut self, item_id: ItemId, pointer: Point) -> bool {
        let Some(item) = self.state.item(item_id) else {
            debug!("pointer down on unknown {item_id}");
            return false;
        };
        if item.dropped {
            // Sorted items are no longer on screen to grab
            return false;
        }
        self.sessions.begin_session(item_id, pointer, item.position)
    }

    /// Track a move for an item mid-drag.
    ///
    /// Writes the offset-corrected visual position into the state and
    /// mirrors the hover zone for rendering. No-op without a session.
    pub fn move_drag(&mut self, item_id: ItemId, pointer: Point) {
        if let Some(update) = self.sessions.update_session(item_id, pointer, &self.config) {
            self.state.set_position(item_id, update.visual_position);
            self.state.set_hover(update.hover);
        }
    }

    /// Release an item: final hit-test, commit, spring-back.
    ///
    /// The hover highlight is cleared and the item's position reverts
    /// to its origin whatever the outcome; a matched item is hidden by
    /// the render layer rather than animated back.
    ///
    /// Returns `None` for a release with no open session (duplicate
    /// delivery), which leaves all state exactly as it was.
    pub fn release_drag(&mut self, item_id: ItemId, pointer: Point) -> Option<DropOutcome> {
        let end = self.sessions.end_session(item_id, pointer, &self.config)?;

        let outcome = self.state.attempt_drop(item_id, end.zone);
        self.state.reset_position(item_id);
        self.state.set_hover(None);
        Some(outcome)
    }

    // === Scene lifecycle ===

    /// Replace the scene with new items.
    ///
    /// Pending sessions from lost release events are cleared here.
    pub fn reset_scene(&mut self, items: Vec<Item>) {
        self.sessions.clear();
        self.active_item = None;
        self.state = GameState::new(&self.config);
        for item in items {
            self.state.add_item(item);
        }
    }

    /// Replace the scene with a freshly seeded one.
    pub fn reseed_scene(&mut self, item_count: usize, seed: u64) {
        let mut rng = SceneRng::new(seed);
        let items = scene::generate_random_items(&self.config, item_count, &mut rng);
        self.reset_scene(items);
    }

    // === Views ===

    /// The scene configuration.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The authoritative game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session controller.
    #[must_use]
    pub fn sessions(&self) -> &SessionController {
        &self.sessions
    }

    /// Take an immutable snapshot for the render layer.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        self.state.snapshot()
    }

    /// Check whether every sortable item has been dropped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }
}
