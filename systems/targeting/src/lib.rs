#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure range rules and the range overlay derived from them.
//!
//! Range membership uses Manhattan distance. The area-of-effect radius is a
//! separate query and never feeds into [`is_in_range`].

use hero_defense_core::{
    CellCoord, GridSize, HeroId, HeroKind, HeroSnapshot, RangeBounds, RangeShape,
};

/// Reports whether `target` is within `range` of `origin` under `shape`.
///
/// Circles accept any direction whose Manhattan distance lies within the
/// bounds. Lines additionally require the target to share a row or column
/// with the origin. A `0..=0` range therefore only ever matches the origin.
#[must_use]
pub fn is_in_range(
    origin: CellCoord,
    target: CellCoord,
    range: RangeBounds,
    shape: RangeShape,
) -> bool {
    let distance = origin.manhattan_distance(target);
    match shape {
        RangeShape::Circle => range.contains(distance),
        RangeShape::Line => origin.shares_axis_with(target) && range.contains(distance),
    }
}

/// Reports whether `target` lies inside the area of effect centred on `center`.
///
/// The area is a square of Chebyshev radius `radius`, so a radius of one
/// covers the centre and its eight neighbours.
#[must_use]
pub fn is_in_aoe(center: CellCoord, target: CellCoord, radius: u32) -> bool {
    center.chebyshev_distance(target) <= radius
}

/// Origin and rule the overlay should be drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlaySource {
    /// Live range of a placed, selected hero.
    Selected {
        /// Identifier of the selected hero.
        hero: HeroId,
        /// Cell the hero stands on.
        origin: CellCoord,
        /// Live range bounds of the hero.
        range: RangeBounds,
        /// Live range shape of the hero.
        shape: RangeShape,
    },
    /// Base range of an archetype hypothetically placed on the hovered cell.
    Preview {
        /// Archetype chosen in the shop.
        kind: HeroKind,
        /// Hovered cell used as the hypothetical origin.
        origin: CellCoord,
    },
}

impl OverlaySource {
    /// Decides which overlay, if any, should be visible.
    ///
    /// A selected hero always wins. Without one, a chosen archetype and a
    /// hovered cell produce a placement preview; existing heroes are never
    /// consulted for the preview.
    #[must_use]
    pub fn resolve(
        show_range: bool,
        selected: Option<&HeroSnapshot>,
        chosen: Option<HeroKind>,
        hovered: Option<CellCoord>,
    ) -> Option<Self> {
        if !show_range {
            return None;
        }

        if let Some(hero) = selected {
            return Some(Self::Selected {
                hero: hero.id,
                origin: hero.cell,
                range: hero.stats.range,
                shape: hero.stats.range_shape,
            });
        }

        match (chosen, hovered) {
            (Some(kind), Some(origin)) => Some(Self::Preview { kind, origin }),
            _ => None,
        }
    }

    /// Cell the range is measured from.
    #[must_use]
    pub fn origin(&self) -> CellCoord {
        match self {
            Self::Selected { origin, .. } | Self::Preview { origin, .. } => *origin,
        }
    }

    /// Range bounds applied by the overlay.
    #[must_use]
    pub fn range(&self) -> RangeBounds {
        match self {
            Self::Selected { range, .. } => *range,
            Self::Preview { kind, .. } => kind.archetype().base_range,
        }
    }

    /// Range shape applied by the overlay.
    #[must_use]
    pub fn shape(&self) -> RangeShape {
        match self {
            Self::Selected { shape, .. } => *shape,
            Self::Preview { kind, .. } => kind.archetype().range_shape,
        }
    }

    /// Reports whether `cell` should be highlighted.
    #[must_use]
    pub fn highlights(&self, cell: CellCoord) -> bool {
        is_in_range(self.origin(), cell, self.range(), self.shape())
    }
}

/// Range overlay system that caches the last computed highlight set.
#[derive(Debug, Default)]
pub struct RangeOverlay {
    cached_key: Option<(OverlaySource, GridSize)>,
    cached_cells: Vec<CellCoord>,
}

impl RangeOverlay {
    /// Creates a new overlay system with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the highlighted cells for `source` within `grid`.
    ///
    /// The output buffer is cleared before being populated in row-major order.
    pub fn handle(
        &mut self,
        source: Option<OverlaySource>,
        grid: GridSize,
        out: &mut Vec<CellCoord>,
    ) {
        out.clear();

        let Some(source) = source else {
            return;
        };

        let key = (source, grid);
        if self.cached_key != Some(key) {
            self.cached_cells.clear();
            self.cached_cells
                .extend(grid.cells().filter(|cell| source.highlights(*cell)));
            self.cached_key = Some(key);
        }

        out.extend_from_slice(&self.cached_cells);
    }
}
