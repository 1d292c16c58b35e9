//! Offset-OR composition of one grid onto another

use crate::engine::grid::Grid;

impl Grid {
    /// Overlay another grid's live cells onto this one at an offset
    ///
    /// A cell becomes alive when it was already alive here or is alive in
    /// `other` at the corresponding offset position; live cells are never
    /// turned dead. Only positions inside both extents are touched, so any
    /// part of `other` that would land outside this grid is clipped rather
    /// than rejected. `other` is never modified.
    pub fn or_with_at(&mut self, other: &Self, at_row: usize, at_col: usize) {
        let (height, width) = self.cells.dim();

        for row in 0..other.height() {
            let target_row = at_row + row;
            if target_row >= height {
                break;
            }
            for col in 0..other.width() {
                let target_col = at_col + col;
                if target_col >= width {
                    break;
                }
                if let (Some(true), Some(dst)) = (
                    other.cells.get([row, col]).copied(),
                    self.cells.get_mut([target_row, target_col]),
                ) {
                    *dst = true;
                }
            }
        }
    }
}
