//! # candy-sort
//!
//! A drag-and-drop sorting puzzle engine: draggable candies with a kind
//! attribute must be dragged into the bowl that accepts that kind.
//!
//! ## Design Principles
//!
//! 1. **Core Logic Only**: Rendering, styling, and layout live outside
//!    the crate. The engine consumes raw pointer events and exposes
//!    immutable snapshots; nothing else crosses the boundary.
//!
//! 2. **Configuration Over Convention**: Which kind each zone accepts
//!    comes from the scene's zone table, never from enum order.
//!
//! 3. **Untrusted Input**: Gesture adapters deliver events at-least-once
//!    with boundary overshoot. Every anomaly is a silent local no-op;
//!    nothing in this crate terminates the process over user input.
//!
//! ## Architecture
//!
//! - **Persistent State**: Authoritative collections use `im`
//!   structures, so snapshots are cheap copies that can never observe a
//!   half-applied commit.
//!
//! - **Advisory vs Authoritative**: Hover feedback and visual positions
//!   are advisory outputs of the session controller; `dropped` flags
//!   and accept counts are written only by the state manager's commit.
//!
//! - **Deterministic Seeding**: Scene generation is driven by a seeded
//!   RNG, so a scene is reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: Item ids and entities, geometry, RNG, scene configuration
//! - `zones`: Zone state and the pure drop-zone resolver
//! - `session`: Per-item drag session lifecycle
//! - `state`: Authoritative game state, commit rule, snapshots
//! - `scene`: Randomized scene seeding
//! - `engine`: Pointer-event facade wiring it all together

pub mod core;
pub mod engine;
pub mod scene;
pub mod session;
pub mod state;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CandyKind, Item, ItemId,
    Point, Vec2,
    SceneConfig, SceneRng, SpawnLayout,
};

pub use crate::zones::{resolver, Zone, ZoneIndex};

pub use crate::session::{DragSession, SessionController, SessionEnd, SessionUpdate};

pub use crate::state::{DropOutcome, GameState, ItemView, SceneSnapshot, ZoneView};

pub use crate::engine::{PointerEvent, SortEngine};
