#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Hero Defense.
//!
//! The [`World`] owns gold, lives, the wave counter, placed heroes and the
//! pointer-driven selection state. It is mutated exclusively through
//! [`apply`], which runs every command to completion before returning, and
//! read through the [`query`] module.

mod heroes;

use hero_defense_core::{
    CellCoord, Command, EnemyPath, Event, GridSize, HeroId, HeroKind, PlacementZones,
    WaveError, MAX_GRID_SIDE, STANDARD_GRID, WELCOME_BANNER,
};
use hero_defense_system_placement::PlacementPreview;

use self::heroes::HeroRegistry;

const DEFAULT_STARTING_GOLD: u32 = 1000;
const DEFAULT_STARTING_LIVES: u32 = 20;
const DEFAULT_STARTING_WAVE: u32 = 1;
const DEFAULT_ID_SEED: u64 = 0x5eed_0f_4e70_c0de;

/// Session parameters used to build a [`World`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Gold available when the session starts.
    pub starting_gold: u32,
    /// Lives available when the session starts.
    pub starting_lives: u32,
    /// Number of the first wave.
    pub starting_wave: u32,
    /// Dimensions of the playable grid.
    pub grid: GridSize,
    /// Route enemies follow from spawn to goal.
    pub path: EnemyPath,
    /// Seed for the random suffix of hero identifiers.
    pub id_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_gold: DEFAULT_STARTING_GOLD,
            starting_lives: DEFAULT_STARTING_LIVES,
            starting_wave: DEFAULT_STARTING_WAVE,
            grid: STANDARD_GRID,
            path: EnemyPath::standard(),
            id_seed: DEFAULT_ID_SEED,
        }
    }
}

/// Reasons a [`Config`] may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The grid has no columns or no rows.
    #[error("grid must have at least one column and one row")]
    EmptyGrid,
    /// The grid exceeds the largest supported size on some side.
    #[error("grid of {columns}x{rows} cells exceeds {} cells per side", MAX_GRID_SIDE)]
    GridTooLarge {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// The enemy path has no cells.
    #[error("enemy path must contain at least one cell")]
    EmptyPath,
    /// A path cell lies outside the grid.
    #[error("path cell {cell} lies outside the grid")]
    PathOutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// A path cell is listed twice.
    #[error("path cell {cell} is listed more than once")]
    DuplicatePathCell {
        /// Offending cell.
        cell: CellCoord,
    },
}

impl Config {
    /// Checks that the map described by the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.columns() == 0 || self.grid.rows() == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        if !self.grid.within_limits() {
            return Err(ConfigError::GridTooLarge {
                columns: self.grid.columns(),
                rows: self.grid.rows(),
            });
        }

        if self.path.is_empty() {
            return Err(ConfigError::EmptyPath);
        }

        for (index, cell) in self.path.cells().iter().enumerate() {
            if !self.grid.contains(*cell) {
                return Err(ConfigError::PathOutOfBounds { cell: *cell });
            }
            if self.path.cells()[..index].contains(cell) {
                return Err(ConfigError::DuplicatePathCell { cell: *cell });
            }
        }

        Ok(())
    }
}

/// Represents the authoritative Hero Defense session state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid: GridSize,
    path: EnemyPath,
    zones: PlacementZones,
    gold: u32,
    lives: u32,
    wave: u32,
    wave_active: bool,
    paused: bool,
    heroes: HeroRegistry,
    selected: Option<HeroId>,
    hovered: Option<CellCoord>,
    show_range: bool,
}

impl World {
    /// Creates a new session on the standard map with default economy.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Creates a new session from a validated configuration.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let zones = PlacementZones::derive(config.grid, &config.path);
        Self {
            banner: WELCOME_BANNER,
            grid: config.grid,
            path: config.path,
            zones,
            gold: config.starting_gold,
            lives: config.starting_lives,
            wave: config.starting_wave,
            wave_active: false,
            paused: false,
            heroes: HeroRegistry::new(config.id_seed),
            selected: None,
            hovered: None,
            show_range: false,
        }
    }

    fn place_hero(&mut self, kind: HeroKind, cell: CellCoord, out_events: &mut Vec<Event>) {
        let preview = PlacementPreview::evaluate(
            kind,
            cell,
            self.gold,
            self.grid,
            &self.path,
            self.heroes.cells(),
        );

        if let Some(reason) = preview.rejection() {
            log::info!("refused {kind} at {cell}: {reason}");
            out_events.push(Event::HeroPlacementRejected { kind, cell, reason });
            return;
        }

        let cost = kind.archetype().base_cost;
        self.gold -= cost;
        let hero = self.heroes.recruit(kind, cell);
        log::info!("placed {kind} {hero} at {cell} for {cost} gold");
        out_events.push(Event::HeroPlaced {
            hero,
            kind,
            cell,
            cost,
        });
    }

    fn sell_hero(&mut self, hero: HeroId, out_events: &mut Vec<Event>) {
        let Some(sold) = self.heroes.remove(hero) else {
            log::debug!("ignored sale of unknown hero {hero}");
            return;
        };

        self.gold = self.gold.saturating_add(sold.sell_value);
        log::info!("sold {} {hero} for {} gold", sold.kind, sold.sell_value);
        out_events.push(Event::HeroSold {
            hero,
            kind: sold.kind,
            cell: sold.cell,
            refund: sold.sell_value,
        });

        if self.selected == Some(hero) {
            self.change_selection(None, out_events);
        }
    }

    fn select_hero(&mut self, hero: Option<HeroId>, out_events: &mut Vec<Event>) {
        if let Some(id) = hero {
            if !self.heroes.contains(id) {
                log::debug!("ignored selection of unknown hero {id}");
                return;
            }
        }
        self.change_selection(hero, out_events);
    }

    fn change_selection(&mut self, hero: Option<HeroId>, out_events: &mut Vec<Event>) {
        self.selected = hero;
        self.heroes.mark_selected(hero);
        out_events.push(Event::HeroSelected { hero });
        self.set_range_overlay(hero.is_some(), out_events);
    }

    fn set_hovered_cell(&mut self, cell: Option<CellCoord>, out_events: &mut Vec<Event>) {
        if self.hovered == cell {
            return;
        }
        self.hovered = cell;
        out_events.push(Event::HoveredCellChanged { cell });
    }

    fn set_range_overlay(&mut self, visible: bool, out_events: &mut Vec<Event>) {
        if self.show_range == visible {
            return;
        }
        self.show_range = visible;
        out_events.push(Event::RangeOverlayChanged { visible });
    }

    fn start_wave(&mut self, out_events: &mut Vec<Event>) {
        let refusal = if self.wave_active {
            Some(WaveError::AlreadyActive)
        } else if self.heroes.is_empty() {
            Some(WaveError::NoHeroes)
        } else {
            None
        };

        if let Some(reason) = refusal {
            log::info!("refused to start wave {}: {reason}", self.wave);
            out_events.push(Event::WaveStartRejected { reason });
            return;
        }

        let wave = self.wave;
        self.wave_active = true;
        self.paused = false;
        self.wave = self.wave.saturating_add(1);
        log::info!("wave {wave} started");
        out_events.push(Event::WaveStarted { wave });
    }

    fn toggle_pause(&mut self, out_events: &mut Vec<Event>) {
        if !self.wave_active {
            log::debug!("ignored pause toggle outside of a wave");
            return;
        }
        self.paused = !self.paused;
        out_events.push(Event::PauseToggled {
            paused: self.paused,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Policy rejections leave the world untouched and are reported through
/// `out_events`; no command ever fails halfway.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    log::debug!("applying {command:?}");
    match command {
        Command::PlaceHero { kind, cell } => world.place_hero(kind, cell, out_events),
        Command::SellHero { hero } => world.sell_hero(hero, out_events),
        Command::SelectHero { hero } => world.select_hero(hero, out_events),
        Command::SetHoveredCell { cell } => world.set_hovered_cell(cell, out_events),
        Command::SetRangeOverlay { visible } => world.set_range_overlay(visible, out_events),
        Command::StartWave => world.start_wave(out_events),
        Command::TogglePause => world.toggle_pause(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use hero_defense_core::{
        CellCoord, EnemyPath, GridSize, HeroId, HeroSnapshot, HeroView, PlacementZones,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Gold currently held by the player.
    #[must_use]
    pub fn gold(world: &World) -> u32 {
        world.gold
    }

    /// Lives remaining.
    #[must_use]
    pub fn lives(world: &World) -> u32 {
        world.lives
    }

    /// Number of the next wave to start.
    #[must_use]
    pub fn wave(world: &World) -> u32 {
        world.wave
    }

    /// Reports whether a wave is running.
    #[must_use]
    pub fn is_wave_active(world: &World) -> bool {
        world.wave_active
    }

    /// Reports whether the running wave is paused.
    #[must_use]
    pub fn is_paused(world: &World) -> bool {
        world.paused
    }

    /// Provides the grid dimensions.
    #[must_use]
    pub fn grid(world: &World) -> GridSize {
        world.grid
    }

    /// Provides the enemy path.
    #[must_use]
    pub fn enemy_path(world: &World) -> &EnemyPath {
        &world.path
    }

    /// Provides the placement zones derived when the world was built.
    #[must_use]
    pub fn placement_zones(world: &World) -> &PlacementZones {
        &world.zones
    }

    /// Captures a read-only view of the placed heroes in placement order.
    #[must_use]
    pub fn hero_view(world: &World) -> HeroView {
        HeroView::from_snapshots(world.heroes.iter().map(|hero| hero.snapshot()).collect())
    }

    /// Captures a single hero by identifier.
    #[must_use]
    pub fn hero(world: &World, id: HeroId) -> Option<HeroSnapshot> {
        world.heroes.get(id).map(|hero| hero.snapshot())
    }

    /// Identifies the hero standing on the provided cell, if any.
    #[must_use]
    pub fn hero_at(world: &World, cell: CellCoord) -> Option<HeroId> {
        world.heroes.at(cell).map(|hero| hero.id)
    }

    /// Captures the selected hero, re-resolved against the hero list.
    #[must_use]
    pub fn selected_hero(world: &World) -> Option<HeroSnapshot> {
        world.selected.and_then(|id| hero(world, id))
    }

    /// Cell currently under the pointer.
    #[must_use]
    pub fn hovered_cell(world: &World) -> Option<CellCoord> {
        world.hovered
    }

    /// Reports whether the range overlay should be drawn.
    #[must_use]
    pub fn show_range(world: &World) -> bool {
        world.show_range
    }
}
