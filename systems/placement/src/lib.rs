#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure placement rules deciding where heroes may stand.
//!
//! The world runs these checks before committing a purchase, and adapters run
//! them ahead of time to tint the hovered cell while the player is placing.

use hero_defense_core::{
    CellCoord, EnemyPath, GridSize, HeroKind, PlacementError, PurchaseError,
};

/// Decides whether a hero may be placed on `cell`.
///
/// Checks run in a fixed order: grid bounds, then the enemy path, then the
/// cells already occupied by heroes (exact coordinate equality).
pub fn can_place<I>(
    grid: GridSize,
    path: &EnemyPath,
    cell: CellCoord,
    occupied: I,
) -> Result<(), PlacementError>
where
    I: IntoIterator<Item = CellCoord>,
{
    if !grid.contains(cell) {
        return Err(PlacementError::OutOfBounds);
    }

    if path.contains(cell) {
        return Err(PlacementError::OnPath);
    }

    if occupied.into_iter().any(|taken| taken == cell) {
        return Err(PlacementError::Occupied);
    }

    Ok(())
}

/// Declarative placement preview describing a potential hero purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementPreview {
    /// Archetype proposed for placement.
    pub kind: HeroKind,
    /// Cell the hero would occupy.
    pub cell: CellCoord,
    /// Outcome of the cell legality checks.
    pub verdict: Result<(), PlacementError>,
    /// Gold the player held when the preview was evaluated.
    pub gold: u32,
}

impl PlacementPreview {
    /// Evaluates a prospective purchase of `kind` at `cell`.
    pub fn evaluate<I>(
        kind: HeroKind,
        cell: CellCoord,
        gold: u32,
        grid: GridSize,
        path: &EnemyPath,
        occupied: I,
    ) -> Self
    where
        I: IntoIterator<Item = CellCoord>,
    {
        Self {
            kind,
            cell,
            verdict: can_place(grid, path, cell, occupied),
            gold,
        }
    }

    /// Whether the evaluated gold covers the archetype's cost.
    #[must_use]
    pub fn affordable(&self) -> bool {
        self.gold >= self.kind.archetype().base_cost
    }

    /// Indicates whether the preview represents a purchase the world would accept.
    #[must_use]
    pub fn placeable(&self) -> bool {
        self.verdict.is_ok() && self.affordable()
    }

    /// First reason the world would refuse the purchase, cell checks before gold.
    #[must_use]
    pub fn rejection(&self) -> Option<PurchaseError> {
        if let Err(error) = self.verdict {
            return Some(PurchaseError::Placement(error));
        }

        if !self.affordable() {
            return Some(PurchaseError::InsufficientGold {
                required: self.kind.archetype().base_cost,
                available: self.gold,
            });
        }

        None
    }
}
