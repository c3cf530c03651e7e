#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Hero Defense experience.

use hero_defense_core::{EnemyPath, GridSize, PlacementZones};
use hero_defense_world::{query, World};

/// Produces data required to greet the player and lay out the board.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner(&self, world: &World) -> &'static str {
        query::welcome_banner(world)
    }

    /// Exposes the grid dimensions required for rendering.
    #[must_use]
    pub fn grid(&self, world: &World) -> GridSize {
        query::grid(world)
    }

    /// Exposes the enemy path for presentation purposes.
    #[must_use]
    pub fn enemy_path<'world>(&self, world: &'world World) -> &'world EnemyPath {
        query::enemy_path(world)
    }

    /// Exposes the cells heroes may be placed on.
    #[must_use]
    pub fn placement_zones<'world>(&self, world: &'world World) -> &'world PlacementZones {
        query::placement_zones(world)
    }
}
