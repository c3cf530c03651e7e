#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hero Defense engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters translate pointer input
//! into [`Command`] values, the world executes those commands via its `apply`
//! entry point, and then broadcasts [`Event`] values for systems to react to.
//! Static map data and the hero catalog live here as well so every layer reads
//! the same immutable baselines.

mod catalog;
mod hero;
mod map;
mod simulation;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::{
    AttackMode, DamageType, HeroArchetype, HeroKind, RangeBounds, RangeShape,
    UnknownHeroKind,
};
pub use hero::{Ability, HeroSnapshot, HeroStats, HeroView, Passive};
pub use map::{EnemyPath, GridSize, PlacementZones, MAX_GRID_SIDE, STANDARD_GRID};
pub use simulation::{Effect, EffectKind, Enemy, EnemyId, EnemyKind, WaveData, WaveGroup};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Hero Defense.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests purchase and placement of a hero at the provided cell.
    PlaceHero {
        /// Archetype of the hero to purchase.
        kind: HeroKind,
        /// Cell the hero should occupy.
        cell: CellCoord,
    },
    /// Requests that a placed hero be sold back for its stored sell value.
    SellHero {
        /// Identifier of the hero to sell.
        hero: HeroId,
    },
    /// Replaces the current hero selection. `None` clears it.
    SelectHero {
        /// Identifier of the hero to select.
        hero: Option<HeroId>,
    },
    /// Records the cell currently under the pointer.
    SetHoveredCell {
        /// Hovered cell, or `None` once the pointer leaves the grid.
        cell: Option<CellCoord>,
    },
    /// Explicitly shows or hides the range overlay.
    SetRangeOverlay {
        /// Whether the overlay should be drawn.
        visible: bool,
    },
    /// Requests that the next wave begin.
    StartWave,
    /// Flips the pause flag of the running wave.
    TogglePause,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a hero was purchased and placed.
    HeroPlaced {
        /// Identifier allocated to the new hero.
        hero: HeroId,
        /// Archetype of the placed hero.
        kind: HeroKind,
        /// Cell the hero occupies.
        cell: CellCoord,
        /// Gold debited for the purchase.
        cost: u32,
    },
    /// Reports that a placement request was refused without mutating state.
    HeroPlacementRejected {
        /// Archetype requested for placement.
        kind: HeroKind,
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PurchaseError,
    },
    /// Confirms that a hero was sold and removed from the grid.
    HeroSold {
        /// Identifier of the hero that was sold.
        hero: HeroId,
        /// Archetype of the sold hero.
        kind: HeroKind,
        /// Cell the hero occupied before the sale.
        cell: CellCoord,
        /// Gold credited back to the player.
        refund: u32,
    },
    /// Announces the hero selection after it changed.
    HeroSelected {
        /// Newly selected hero, if any.
        hero: Option<HeroId>,
    },
    /// Announces that the hovered cell changed.
    HoveredCellChanged {
        /// Newly hovered cell, if any.
        cell: Option<CellCoord>,
    },
    /// Announces that the range overlay flag changed.
    RangeOverlayChanged {
        /// Whether the overlay is now visible.
        visible: bool,
    },
    /// Confirms that a wave began.
    WaveStarted {
        /// Number of the wave that started.
        wave: u32,
    },
    /// Reports that a wave start request was refused.
    WaveStartRejected {
        /// Specific reason the wave could not start.
        reason: WaveError,
    },
    /// Announces that the pause flag flipped.
    PauseToggled {
        /// Whether the wave is now paused.
        paused: bool,
    },
}

/// Unique identifier assigned to a placed hero.
///
/// Identifiers combine the wall-clock millisecond at which the hero was placed
/// with a random suffix. They avoid collisions in practice but carry no
/// stronger uniqueness guarantee than that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId {
    issued_at_ms: u64,
    suffix: u32,
}

impl HeroId {
    /// Creates a hero identifier from its timestamp and random suffix.
    #[must_use]
    pub const fn new(issued_at_ms: u64, suffix: u32) -> Self {
        Self {
            issued_at_ms,
            suffix,
        }
    }

    /// Milliseconds since the Unix epoch at which the identifier was issued.
    #[must_use]
    pub const fn issued_at_ms(&self) -> u64 {
        self.issued_at_ms
    }

    /// Random suffix distinguishing identifiers issued in the same millisecond.
    #[must_use]
    pub const fn suffix(&self) -> u32 {
        self.suffix
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero_{}_{}", self.issued_at_ms, self.suffix)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Computes the Chebyshev (king-move) distance between two cell coordinates.
    #[must_use]
    pub fn chebyshev_distance(self, other: CellCoord) -> u32 {
        self.column()
            .abs_diff(other.column())
            .max(self.row().abs_diff(other.row()))
    }

    /// Reports whether both cells lie on the same row or the same column.
    #[must_use]
    pub fn shares_axis_with(self, other: CellCoord) -> bool {
        self.column == other.column || self.row == other.row
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Reasons a cell may be refused as a hero location.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
pub enum PlacementError {
    /// The cell lies outside the configured grid.
    #[error("cell lies outside the grid")]
    OutOfBounds,
    /// The cell is part of the enemy path.
    #[error("cell lies on the enemy path")]
    OnPath,
    /// Another hero already stands on the cell.
    #[error("cell is already occupied by a hero")]
    Occupied,
}

/// Reasons a hero purchase may be rejected by the world.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
pub enum PurchaseError {
    /// The target cell cannot host a hero.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// The player cannot afford the archetype.
    #[error("not enough gold: {required} required, {available} available")]
    InsufficientGold {
        /// Cost of the requested archetype.
        required: u32,
        /// Gold held when the purchase was attempted.
        available: u32,
    },
}

/// Reasons a wave start request may be rejected by the world.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
pub enum WaveError {
    /// No hero has been placed yet.
    #[error("place at least one hero before starting the wave")]
    NoHeroes,
    /// A wave is already running.
    #[error("a wave is already in progress")]
    AlreadyActive,
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, HeroId, HeroKind, PlacementError, PurchaseError, WaveData, WaveGroup};
    use crate::EnemyKind;
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = CellCoord::new(1, 1);
        let destination = CellCoord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn chebyshev_distance_takes_longest_axis() {
        let origin = CellCoord::new(5, 5);
        assert_eq!(origin.chebyshev_distance(CellCoord::new(6, 6)), 1);
        assert_eq!(origin.chebyshev_distance(CellCoord::new(2, 7)), 3);
        assert_eq!(origin.chebyshev_distance(origin), 0);
    }

    #[test]
    fn shares_axis_detects_rows_and_columns() {
        let origin = CellCoord::new(5, 5);
        assert!(origin.shares_axis_with(CellCoord::new(5, 9)));
        assert!(origin.shares_axis_with(CellCoord::new(0, 5)));
        assert!(!origin.shares_axis_with(CellCoord::new(6, 6)));
    }

    #[test]
    fn hero_id_displays_timestamp_and_suffix() {
        let id = HeroId::new(1_700_000_000_000, 42);
        assert_eq!(id.to_string(), "hero_1700000000000_42");
    }

    #[test]
    fn purchase_error_messages_are_readable() {
        let error = PurchaseError::from(PlacementError::OnPath);
        assert_eq!(error.to_string(), "cell lies on the enemy path");

        let error = PurchaseError::InsufficientGold {
            required: 700,
            available: 500,
        };
        assert_eq!(
            error.to_string(),
            "not enough gold: 700 required, 500 available"
        );
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn hero_kind_round_trips_through_bincode() {
        assert_round_trip(&HeroKind::Mage);
    }

    #[test]
    fn wave_data_round_trips_through_bincode() {
        let wave = WaveData {
            wave: 3,
            groups: vec![WaveGroup {
                kind: EnemyKind::Armored,
                count: 6,
                spawn_delay_ms: 800,
            }],
            gold_bonus: 150,
        };
        assert_round_trip(&wave);
    }
}
