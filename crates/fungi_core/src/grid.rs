//! Bordered cell buffer.
//!
//! A grid stores `rows x columns` interior cells surrounded by a one-cell
//! ghost border, laid out row-major in a single flat buffer of
//! `(rows + 2) * (columns + 2)` cells. Row and column indices passed to
//! [`Grid::get`] and [`Grid::set`] are physical: `0` and `rows + 1` address
//! the ghost rows, `1..=rows` the interior.

use crate::error::{CoreError, Result};
use fungi_data::CellState;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Vec<CellState>,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

impl Grid {
    /// Allocates an all-EMPTY grid with its border.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 {
            return Err(CoreError::ZeroDimension { axis: "rows" });
        }
        if columns == 0 {
            return Err(CoreError::ZeroDimension { axis: "columns" });
        }

        let len = rows
            .checked_add(2)
            .zip(columns.checked_add(2))
            .and_then(|(h, w)| h.checked_mul(w))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(CoreError::GridTooLarge { rows, columns })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| CoreError::Allocation { cells: len })?;
        cells.resize(len, CellState::Empty);

        Ok(Self {
            cells,
            rows,
            columns,
        })
    }

    /// Builds a grid whose interior is `states`, given row by row.
    /// The border is left EMPTY until the next wrap.
    pub fn from_interior(rows: usize, columns: usize, states: &[CellState]) -> Result<Self> {
        let mut grid = Self::new(rows, columns)?;
        let expected = rows * columns;
        if states.len() != expected {
            return Err(CoreError::ShapeMismatch {
                expected,
                actual: states.len(),
            });
        }
        for (r, chunk) in states.chunks(columns).enumerate() {
            grid.interior_row_mut(r + 1).copy_from_slice(chunk);
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Physical row length, ghost columns included.
    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.columns + 2
    }

    /// Full physical row `r`, ghost columns included.
    #[inline]
    pub fn row(&self, r: usize) -> &[CellState] {
        let stride = self.stride();
        &self.cells[r * stride..(r + 1) * stride]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [CellState] {
        let stride = self.stride();
        &mut self.cells[r * stride..(r + 1) * stride]
    }

    /// Interior slice of physical row `r` (columns `1..=columns`).
    #[inline]
    pub fn interior_row(&self, r: usize) -> &[CellState] {
        let columns = self.columns;
        &self.row(r)[1..=columns]
    }

    #[inline]
    pub(crate) fn interior_row_mut(&mut self, r: usize) -> &mut [CellState] {
        let columns = self.columns;
        &mut self.row_mut(r)[1..=columns]
    }

    /// Panics when `(r, c)` lies outside the bordered grid.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> CellState {
        self.row(r)[c]
    }

    /// Panics when `(r, c)` lies outside the bordered grid.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, state: CellState) {
        self.row_mut(r)[c] = state;
    }

    /// Copies the interior of `src` into `self`. Borders are not copied;
    /// they are regenerated by the next wrap.
    pub fn copy_interior_from(&mut self, src: &Grid) {
        assert_eq!(
            (self.rows, self.columns),
            (src.rows, src.columns),
            "grid dimensions differ"
        );
        for r in 1..=self.rows {
            self.interior_row_mut(r).copy_from_slice(src.interior_row(r));
        }
    }

    /// Iterates interior cells in row-major order with physical coordinates.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        (1..=self.rows).flat_map(move |r| {
            self.interior_row(r)
                .iter()
                .enumerate()
                .map(move |(i, &state)| (r, i + 1, state))
        })
    }

    /// Number of interior cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_empty_with_border() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.cells.len(), 5 * 6);
        assert_eq!(grid.stride(), 6);
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.cells.iter().all(|&c| c == CellState::Empty));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(CoreError::ZeroDimension { axis: "rows" })
        );
        assert_eq!(
            Grid::new(4, 0),
            Err(CoreError::ZeroDimension { axis: "columns" })
        );
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = Grid::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, CoreError::GridTooLarge { .. }));
    }

    #[test]
    fn test_get_set_reach_border() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, CellState::Dead);
        grid.set(3, 3, CellState::Young);
        assert_eq!(grid.get(0, 0), CellState::Dead);
        assert_eq!(grid.get(3, 3), CellState::Young);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_column_panics() {
        let grid = Grid::new(2, 2).unwrap();
        grid.get(1, 4);
    }

    #[test]
    fn test_copy_interior_leaves_border() {
        let mut src = Grid::new(2, 2).unwrap();
        for r in 0..4 {
            for c in 0..4 {
                src.set(r, c, CellState::Spore);
            }
        }
        let mut dst = Grid::new(2, 2).unwrap();
        dst.copy_interior_from(&src);

        for r in 0..4 {
            for c in 0..4 {
                let interior = (1..=2).contains(&r) && (1..=2).contains(&c);
                let expected = if interior {
                    CellState::Spore
                } else {
                    CellState::Empty
                };
                assert_eq!(dst.get(r, c), expected, "cell ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_from_interior_row_major() {
        let states = [
            CellState::Spore,
            CellState::Young,
            CellState::Dead,
            CellState::Inert,
            CellState::Older,
            CellState::Empty,
        ];
        let grid = Grid::from_interior(2, 3, &states).unwrap();
        assert_eq!(grid.get(1, 2), CellState::Young);
        assert_eq!(grid.get(2, 1), CellState::Inert);
        let collected: Vec<_> = grid.interior().map(|(_, _, s)| s).collect();
        assert_eq!(collected, states);
    }

    #[test]
    fn test_from_interior_shape_mismatch() {
        let err = Grid::from_interior(2, 2, &[CellState::Empty; 3]).unwrap_err();
        assert_eq!(
            err,
            CoreError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
