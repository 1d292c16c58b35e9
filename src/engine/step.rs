//! Toroidal neighbor counting and the double-buffered generation step

use ndarray::Array2;

use crate::engine::grid::Grid;

/// Count live cells in the Moore neighborhood of `(row, col)`
///
/// Neighbor coordinates wrap modulo the grid's height and width, making the
/// grid topologically a torus: the row above row 0 is the last row, the
/// column left of column 0 is the last column. On a dimension of size 1
/// every wrapped offset lands back on the cell's own row or column, so a
/// lone cell on a 1×1 grid counts itself eight times. Empty grids count
/// zero.
pub fn count_live_neighbors(cells: &Array2<bool>, row: usize, col: usize) -> usize {
    let (height, width) = cells.dim();
    if height == 0 || width == 0 {
        return 0;
    }

    let mut count = 0;
    for row_offset in 0..3 {
        let neighbor_row = (row + height + row_offset - 1) % height;
        for col_offset in 0..3 {
            if row_offset == 1 && col_offset == 1 {
                continue;
            }
            let neighbor_col = (col + width + col_offset - 1) % width;
            if cells
                .get([neighbor_row, neighbor_col])
                .copied()
                .unwrap_or(false)
            {
                count += 1;
            }
        }
    }
    count
}

/// Apply the birth/survival rule to a single cell
///
/// Live cells survive with two or three live neighbors; dead cells are
/// born with exactly three; every other combination yields a dead cell.
pub const fn apply_rule(alive: bool, live_neighbors: usize) -> bool {
    if alive {
        live_neighbors == 2 || live_neighbors == 3
    } else {
        live_neighbors == 3
    }
}

impl Grid {
    /// Advance the grid by one generation
    ///
    /// Each cell's next state is computed from the pre-step state only,
    /// written into the scratch buffer, and the two buffers then swap
    /// ownership. No partially updated generation is ever observable.
    /// Empty grids are a no-op.
    pub fn step(&mut self) {
        let (height, width) = self.cells.dim();
        for row in 0..height {
            for col in 0..width {
                let alive = self.cells.get([row, col]).copied().unwrap_or(false);
                let live_neighbors = count_live_neighbors(&self.cells, row, col);
                if let Some(next) = self.scratch.get_mut([row, col]) {
                    *next = apply_rule(alive, live_neighbors);
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}
