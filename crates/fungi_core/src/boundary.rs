//! Toroidal wraparound of the ghost border.

use crate::grid::Grid;

impl Grid {
    /// Rewrites the ghost border so the interior behaves as a torus.
    ///
    /// Rows are wrapped first across the full physical width, then columns
    /// across the full physical height, so each corner ends up holding the
    /// diagonally opposite interior corner.
    pub fn wrap_borders(&mut self) {
        let stride = self.stride();
        let rows = self.rows;
        let columns = self.columns;

        self.cells.copy_within(rows * stride..(rows + 1) * stride, 0);
        self.cells.copy_within(stride..2 * stride, (rows + 1) * stride);

        for r in 0..=rows + 1 {
            let row = self.row_mut(r);
            row[0] = row[columns];
            row[columns + 1] = row[1];
        }
    }

    /// True when every ghost cell mirrors the opposite interior edge.
    pub fn is_wrapped(&self) -> bool {
        let rows = self.rows;
        let columns = self.columns;

        self.row(0) == self.row(rows)
            && self.row(rows + 1) == self.row(1)
            && (0..=rows + 1).all(|r| {
                let row = self.row(r);
                row[0] == row[columns] && row[columns + 1] == row[1]
            })
    }
}
