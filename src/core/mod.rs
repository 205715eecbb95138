//! Core data model: items, geometry, RNG, scene configuration.
//!
//! This module contains the building blocks shared by every other
//! module. Scenes configure behavior via `SceneConfig` rather than
//! modifying the core.

pub mod config;
pub mod geometry;
pub mod item;
pub mod rng;

pub use config::{SceneConfig, SpawnLayout, DEFAULT_DROP_BAND_MARGIN};
pub use geometry::{Point, Vec2};
pub use item::{CandyKind, Item, ItemId};
pub use rng::SceneRng;
