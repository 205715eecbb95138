//! Randomized scene seeding.
//!
//! Builds the initial batch of items for a scene: sequential ids from
//! zero, a random kind per item drawn from the scene's zone table (so
//! every spawned item can be sorted somewhere), and a random spawn
//! position in the region above the drop band. Spawn position doubles
//! as the item's origin.
//!
//! Seeding is deterministic given a [`SceneRng`] seed, which keeps
//! scenes reproducible in tests.

use crate::core::config::{SceneConfig, SpawnLayout};
use crate::core::geometry::Point;
use crate::core::item::{Item, ItemId};
use crate::core::rng::SceneRng;

/// Generate `count` random items for a scene.
///
/// Ids are `0..count`. Kinds are drawn uniformly from the zone table.
/// Spawn y lands above the drop band; spawn x depends on the config's
/// [`SpawnLayout`] (random within the viewport, or a single column at
/// x = 0).
///
/// ```
/// use candy_sort::core::{SceneConfig, SceneRng};
/// use candy_sort::scene;
///
/// let config = SceneConfig::new(900.0, 600.0);
/// let mut rng = SceneRng::new(42);
///
/// let items = scene::generate_random_items(&config, 8, &mut rng);
/// assert_eq!(items.len(), 8);
/// assert!(items.iter().all(|item| !item.dropped));
/// ```
#[must_use]
pub fn generate_random_items(
    config: &SceneConfig,
    count: usize,
    rng: &mut SceneRng,
) -> Vec<Item> {
    let max_y = config.drop_band_y.max(0.0);

    (0..count as u32)
        .map(|i| {
            // Zone table is validated non-empty at config construction
            let kind = *rng
                .choose(config.zone_table())
                .expect("zone table is never empty");

            let x = match config.spawn_layout {
                SpawnLayout::Scattered => rng.gen_range_f32(0.0..config.viewport_width),
                SpawnLayout::Column => 0.0,
            };
            let y = rng.gen_range_f32(0.0..max_y);

            Item::new(ItemId(i), kind, Point::new(x, y))
        })
        .collect()
}
