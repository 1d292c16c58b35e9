//! Connected-figure extraction for lifting a sub-pattern out of a grid

use ndarray::Array2;

use crate::engine::grid::Grid;
use crate::io::error::Result;

impl Grid {
    /// Extract the connected live figure containing `(row, col)`
    ///
    /// Collects every live cell reachable from the seed through 8-neighbor
    /// (Moore) adjacency without edge wrapping, and returns the bounding
    /// box of that region as a standalone grid holding only the region's
    /// cells. Extraction does not wrap: a figure is lifted out as one
    /// visually contiguous shape, so cells that touch only across the
    /// torus seam belong to separate figures. A dead seed yields an empty
    /// 0×0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::LifeError::OutOfBounds`] when the seed
    /// coordinates fall outside the current dimensions.
    pub fn extract_figure_at(&self, row: usize, col: usize) -> Result<Self> {
        if !self.get(row, col)? {
            return Ok(Self::new(0, 0));
        }

        let (height, width) = self.cells.dim();
        let mut visited = Array2::from_elem((height, width), false);
        if let Some(seen) = visited.get_mut([row, col]) {
            *seen = true;
        }

        let mut stack = vec![(row, col)];
        let mut members = Vec::new();
        let mut min_row = row;
        let mut max_row = row;
        let mut min_col = col;
        let mut max_col = col;

        while let Some((cur_row, cur_col)) = stack.pop() {
            min_row = min_row.min(cur_row);
            max_row = max_row.max(cur_row);
            min_col = min_col.min(cur_col);
            max_col = max_col.max(cur_col);
            members.push((cur_row, cur_col));

            let row_start = cur_row.saturating_sub(1);
            let row_end = (cur_row + 1).min(height - 1);
            let col_start = cur_col.saturating_sub(1);
            let col_end = (cur_col + 1).min(width - 1);

            for neighbor_row in row_start..=row_end {
                for neighbor_col in col_start..=col_end {
                    if neighbor_row == cur_row && neighbor_col == cur_col {
                        continue;
                    }
                    let live = self
                        .cells
                        .get([neighbor_row, neighbor_col])
                        .copied()
                        .unwrap_or(false);
                    let seen = visited
                        .get([neighbor_row, neighbor_col])
                        .copied()
                        .unwrap_or(true);
                    if live && !seen {
                        if let Some(mark) = visited.get_mut([neighbor_row, neighbor_col]) {
                            *mark = true;
                        }
                        stack.push((neighbor_row, neighbor_col));
                    }
                }
            }
        }

        let mut figure = Self::new(max_row - min_row + 1, max_col - min_col + 1);
        for (member_row, member_col) in members {
            if let Some(cell) = figure
                .cells
                .get_mut([member_row - min_row, member_col - min_col])
            {
                *cell = true;
            }
        }
        Ok(figure)
    }
}
