//! Moore-neighborhood queries.
//!
//! Queries only address interior cells. Perimeter cells read the ghost
//! border, so the grid must have been wrapped for the answer to reflect the
//! torus.

use crate::grid::Grid;
use fungi_data::CellState;

/// Row/column offsets of the 8 Moore neighbors, row-major.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True iff at least one of the 8 cells around interior cell `(r, c)` is YOUNG.
#[inline]
pub fn has_young_neighbor(grid: &Grid, r: usize, c: usize) -> bool {
    moore_neighbors(grid, r, c).contains(&CellState::Young)
}

/// The 8 neighbors of interior cell `(r, c)` in [`MOORE_OFFSETS`] order.
#[inline]
pub fn moore_neighbors(grid: &Grid, r: usize, c: usize) -> [CellState; 8] {
    debug_assert!((1..=grid.rows()).contains(&r) && (1..=grid.columns()).contains(&c));
    MOORE_OFFSETS.map(|(dr, dc)| grid.get(r.wrapping_add_signed(dr), c.wrapping_add_signed(dc)))
}
