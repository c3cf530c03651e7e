//! Static map data: grid bounds, the enemy path and derived placement zones.

use serde::{Deserialize, Serialize};

use crate::CellCoord;

/// Grid used by the standard map.
pub const STANDARD_GRID: GridSize = GridSize::new(18, 18);

/// Largest number of columns or rows a playable grid may have.
pub const MAX_GRID_SIDE: u32 = 256;

const STANDARD_PATH: [(u32, u32); 29] = [
    (0, 9),
    (1, 9),
    (2, 9),
    (3, 9),
    (4, 9),
    (5, 9),
    (5, 8),
    (5, 7),
    (5, 6),
    (5, 5),
    (6, 5),
    (7, 5),
    (8, 5),
    (9, 5),
    (10, 5),
    (11, 5),
    (12, 5),
    (12, 6),
    (12, 7),
    (12, 8),
    (12, 9),
    (12, 10),
    (12, 11),
    (12, 12),
    (13, 12),
    (14, 12),
    (15, 12),
    (16, 12),
    (17, 12),
];

/// Dimensions of the playable grid measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Creates a new grid description.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell lies within `[0, columns) x [0, rows)`.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Total number of cells in the grid, or `None` when it does not fit in `usize`.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        let columns = usize::try_from(self.columns).ok()?;
        let rows = usize::try_from(self.rows).ok()?;
        columns.checked_mul(rows)
    }

    /// Reports whether neither side exceeds [`MAX_GRID_SIDE`].
    #[must_use]
    pub const fn within_limits(&self) -> bool {
        self.columns <= MAX_GRID_SIDE && self.rows <= MAX_GRID_SIDE
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(column, row)))
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }
}

/// Ordered route enemies follow from spawn to goal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyPath {
    cells: Vec<CellCoord>,
}

impl EnemyPath {
    /// Creates a path from cells listed in travel order.
    #[must_use]
    pub fn new(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// The fixed route of the standard 18x18 map.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            STANDARD_PATH
                .iter()
                .map(|&(column, row)| CellCoord::new(column, row))
                .collect(),
        )
    }

    /// Cells of the route in travel order.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Reports whether the cell is part of the route.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Cell where enemies enter the map.
    #[must_use]
    pub fn spawn(&self) -> Option<CellCoord> {
        self.cells.first().copied()
    }

    /// Cell enemies try to reach.
    #[must_use]
    pub fn goal(&self) -> Option<CellCoord> {
        self.cells.last().copied()
    }

    /// Number of cells on the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the route has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Every in-bounds cell that is not on the enemy path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementZones {
    grid: GridSize,
    mask: Vec<bool>,
    count: usize,
}

impl PlacementZones {
    /// Derives the zones once from the grid and the path.
    ///
    /// Grids larger than [`MAX_GRID_SIDE`] on either side yield no zones.
    #[must_use]
    pub fn derive(grid: GridSize, path: &EnemyPath) -> Self {
        let cells = if grid.within_limits() {
            grid.cell_count().unwrap_or_default()
        } else {
            0
        };
        let mut mask = vec![true; cells];
        for cell in path.cells() {
            if let Some(slot) = grid.index(*cell).and_then(|index| mask.get_mut(index)) {
                *slot = false;
            }
        }
        let count = mask.iter().filter(|open| **open).count();
        Self { grid, mask, count }
    }

    /// Reports whether heroes may stand on the cell, ignoring occupancy.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.grid
            .index(cell)
            .and_then(|index| self.mask.get(index).copied())
            .unwrap_or(false)
    }

    /// Iterates the zones in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.grid.cells().filter(move |cell| self.contains(*cell))
    }

    /// Number of zone cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Reports whether the map has no zone at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_path_runs_from_spawn_to_goal() {
        let path = EnemyPath::standard();
        assert_eq!(path.len(), 29);
        assert_eq!(path.spawn(), Some(CellCoord::new(0, 9)));
        assert_eq!(path.goal(), Some(CellCoord::new(17, 12)));
        assert_eq!(path.cells()[9], CellCoord::new(5, 5));
    }

    #[test]
    fn standard_path_steps_between_neighbours() {
        let path = EnemyPath::standard();
        for pair in path.cells().windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1, "{pair:?}");
        }
    }

    #[test]
    fn grid_iterates_row_major() {
        let cells: Vec<CellCoord> = GridSize::new(2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                CellCoord::new(0, 0),
                CellCoord::new(1, 0),
                CellCoord::new(0, 1),
                CellCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn zones_exclude_path_cells() {
        let path = EnemyPath::standard();
        let zones = PlacementZones::derive(STANDARD_GRID, &path);

        assert_eq!(zones.len(), 18 * 18 - 29);
        assert_eq!(zones.iter().count(), zones.len());
        for cell in path.cells() {
            assert!(!zones.contains(*cell), "{cell} must not be a zone");
        }
        assert!(zones.contains(CellCoord::new(0, 0)));
        assert!(!zones.contains(CellCoord::new(18, 0)));
    }

    #[test]
    fn zones_ignore_out_of_bounds_path_cells() {
        let path = EnemyPath::new(vec![CellCoord::new(5, 5)]);
        let zones = PlacementZones::derive(GridSize::new(2, 2), &path);
        assert_eq!(zones.len(), 4);
    }

    #[test]
    fn oversized_grids_yield_no_zones() {
        let grid = GridSize::new(u32::MAX, u32::MAX);
        assert!(!grid.within_limits());
        assert!(GridSize::new(MAX_GRID_SIDE, MAX_GRID_SIDE).within_limits());
        assert_eq!(GridSize::new(3, 4).cell_count(), Some(12));

        let zones = PlacementZones::derive(grid, &EnemyPath::new(vec![CellCoord::new(0, 0)]));
        assert!(zones.is_empty());
    }
}
