//! Pure drop-zone hit-testing.
//!
//! Maps a pointer position to the zone under it, or `None` while the
//! pointer is still above the drop band. Called continuously during a
//! drag for hover feedback and once more on release for the final
//! commit decision; both calls go through the same function so hover
//! and commit can never disagree about geometry.

use crate::core::config::SceneConfig;
use crate::core::geometry::Point;

use super::ZoneIndex;

/// Resolve a pointer position to a zone.
///
/// Returns `None` while the pointer is at or above the drop-band
/// threshold. Inside the band, the viewport is split into
/// `zone_count` equal-width vertical bands; the x coordinate picks the
/// band, clamped to the valid range so boundary overshoot from physical
/// input devices still lands in the nearest zone.
///
/// No side effects and no shared state: identical input always yields
/// identical output.
///
/// ```
/// use candy_sort::core::{Point, SceneConfig};
/// use candy_sort::zones::{resolver, ZoneIndex};
///
/// let config = SceneConfig::new(900.0, 600.0).with_drop_band_y(425.0);
///
/// assert_eq!(resolver::resolve(Point::new(450.0, 200.0), &config), None);
/// assert_eq!(
///     resolver::resolve(Point::new(450.0, 500.0), &config),
///     Some(ZoneIndex(1))
/// );
/// ```
#[must_use]
pub fn resolve(point: Point, config: &SceneConfig) -> Option<ZoneIndex> {
    // Screen convention: y grows downward, so "below the threshold"
    // means strictly greater. Exactly on the line is not yet a drop.
    if point.y <= config.drop_band_y {
        return None;
    }

    let max_index = config.zone_count() - 1;
    let band = (point.x / config.band_width()).floor();

    let index = if band < 0.0 {
        0
    } else {
        (band as usize).min(max_index)
    };

    Some(ZoneIndex(index as u16))
}
