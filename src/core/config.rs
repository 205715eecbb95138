//! Scene configuration.
//!
//! A scene is configured at startup by providing:
//! - Viewport dimensions (the unit system all pointer events use)
//! - The drop-band threshold (where releases count as drop attempts)
//! - The zone table: which candy kind each zone accepts, by zone index
//!
//! The engine never hardcodes the zone-to-kind mapping - scenes define
//! it. Changing any of these mid-scene is out of scope; build a new
//! config and reset the scene instead.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::item::CandyKind;
use crate::zones::ZoneIndex;

/// Default distance from the bottom of the viewport to the drop band.
pub const DEFAULT_DROP_BAND_MARGIN: f32 = 175.0;

/// Horizontal spawn layout for seeded scenes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnLayout {
    /// Random x within the viewport.
    #[default]
    Scattered,
    /// Every item spawns at x = 0 (single column along the left edge).
    Column,
}

/// Complete scene configuration.
///
/// ## Usage
///
/// ```
/// use candy_sort::core::{CandyKind, SceneConfig};
/// use candy_sort::zones::ZoneIndex;
///
/// let config = SceneConfig::new(900.0, 600.0)
///     .with_drop_band_y(425.0)
///     .with_zone_table([CandyKind::Gummy, CandyKind::Chocolate]);
///
/// assert_eq!(config.zone_count(), 2);
/// assert_eq!(config.expected_kind(ZoneIndex(1)), Some(CandyKind::Chocolate));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Viewport width in input-coordinate units.
    pub viewport_width: f32,

    /// Viewport height in input-coordinate units.
    pub viewport_height: f32,

    /// Vertical activation threshold. A pointer strictly below this
    /// (y greater, screen convention) is inside the drop band.
    pub drop_band_y: f32,

    /// Spawn layout used when seeding a scene.
    pub spawn_layout: SpawnLayout,

    /// Expected kind per zone, indexed by zone position left-to-right.
    /// Inline storage covers the typical 3-4 zone scene.
    zone_table: SmallVec<[CandyKind; 4]>,
}

impl SceneConfig {
    /// Create a configuration for the given viewport.
    ///
    /// Defaults: zone table is [`CandyKind::ALL`] in declaration order,
    /// the drop band sits [`DEFAULT_DROP_BAND_MARGIN`] above the bottom
    /// edge, and spawn layout is [`SpawnLayout::Scattered`].
    ///
    /// Panics if either viewport dimension is not strictly positive.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        assert!(viewport_width > 0.0, "Viewport width must be positive");
        assert!(viewport_height > 0.0, "Viewport height must be positive");

        Self {
            viewport_width,
            viewport_height,
            drop_band_y: (viewport_height - DEFAULT_DROP_BAND_MARGIN).max(0.0),
            spawn_layout: SpawnLayout::default(),
            zone_table: SmallVec::from_slice(&CandyKind::ALL),
        }
    }

    /// Set the drop-band threshold.
    #[must_use]
    pub fn with_drop_band_y(mut self, y: f32) -> Self {
        self.drop_band_y = y;
        self
    }

    /// Replace the zone table.
    ///
    /// Zone `i` accepts the `i`-th kind. Panics if the table is empty.
    #[must_use]
    pub fn with_zone_table(mut self, kinds: impl IntoIterator<Item = CandyKind>) -> Self {
        self.zone_table = kinds.into_iter().collect();
        assert!(!self.zone_table.is_empty(), "Zone table must not be empty");
        self
    }

    /// Spawn all items at x = 0.
    #[must_use]
    pub fn column_spawn(mut self) -> Self {
        self.spawn_layout = SpawnLayout::Column;
        self
    }

    /// Number of zones.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zone_table.len()
    }

    /// The expected kind per zone, in zone order.
    #[must_use]
    pub fn zone_table(&self) -> &[CandyKind] {
        &self.zone_table
    }

    /// The kind a zone accepts, or `None` for an unknown index.
    #[must_use]
    pub fn expected_kind(&self, zone: ZoneIndex) -> Option<CandyKind> {
        self.zone_table.get(zone.index()).copied()
    }

    /// Width of one horizontal zone band.
    #[must_use]
    pub fn band_width(&self) -> f32 {
        self.viewport_width / self.zone_count() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::new(900.0, 600.0);

        assert_eq!(config.zone_count(), 3);
        assert_eq!(config.zone_table(), &CandyKind::ALL);
        assert_eq!(config.drop_band_y, 600.0 - DEFAULT_DROP_BAND_MARGIN);
        assert_eq!(config.spawn_layout, SpawnLayout::Scattered);
    }

    #[test]
    fn test_expected_kind() {
        let config = SceneConfig::new(900.0, 600.0)
            .with_zone_table([CandyKind::Gummy, CandyKind::Chocolate]);

        assert_eq!(config.expected_kind(ZoneIndex(0)), Some(CandyKind::Gummy));
        assert_eq!(config.expected_kind(ZoneIndex(1)), Some(CandyKind::Chocolate));
        assert_eq!(config.expected_kind(ZoneIndex(2)), None);
    }

    #[test]
    fn test_zone_order_is_configuration_not_enum_order() {
        // Reversed table: zone 0 accepts the last declared kind
        let config = SceneConfig::new(900.0, 600.0).with_zone_table([
            CandyKind::CandyCorn,
            CandyKind::Gummy,
            CandyKind::Chocolate,
        ]);

        assert_eq!(config.expected_kind(ZoneIndex(0)), Some(CandyKind::CandyCorn));
        assert_eq!(config.expected_kind(ZoneIndex(2)), Some(CandyKind::Chocolate));
    }

    #[test]
    fn test_band_width() {
        let config = SceneConfig::new(900.0, 600.0);
        assert_eq!(config.band_width(), 300.0);

        let two = config.with_zone_table([CandyKind::Gummy, CandyKind::Chocolate]);
        assert_eq!(two.band_width(), 450.0);
    }

    #[test]
    fn test_shallow_viewport_clamps_default_band() {
        // Band margin larger than the viewport: threshold clamps to 0,
        // the whole viewport is drop band.
        let config = SceneConfig::new(300.0, 100.0);
        assert_eq!(config.drop_band_y, 0.0);
    }

    #[test]
    #[should_panic(expected = "Viewport width")]
    fn test_zero_width_panics() {
        let _ = SceneConfig::new(0.0, 600.0);
    }

    #[test]
    #[should_panic(expected = "Zone table")]
    fn test_empty_zone_table_panics() {
        let _ = SceneConfig::new(900.0, 600.0).with_zone_table([]);
    }

    #[test]
    fn test_serialization() {
        let config = SceneConfig::new(900.0, 600.0).column_spawn();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
