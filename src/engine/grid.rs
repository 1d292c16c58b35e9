//! Cell-state storage with overlap-preserving resize
//!
//! The grid is a rectangular boolean matrix where `true` marks a live cell.
//! A second matrix of identical dimensions is held as a scratch buffer so
//! the generation step can write the next state without allocating; the
//! scratch carries no meaning between operations.

use ndarray::Array2;
use rand::Rng;

use crate::io::error::{LifeError, Result};

/// Rectangular boolean grid with a reusable scratch buffer
///
/// Dimensions may be zero; an empty grid is valid and every operation that
/// iterates over it is a no-op. Coordinate access outside the current
/// dimensions is a typed [`LifeError::OutOfBounds`] failure rather than a
/// silent read of unrelated state.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: Array2<bool>,
    pub(crate) scratch: Array2<bool>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell dead
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), false),
            scratch: Array2::from_elem((height, width), false),
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as `(height, width)`
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Test whether the cell at `(row, col)` is alive
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] when the coordinates fall outside
    /// the current dimensions.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let (height, width) = self.cells.dim();
        self.cells.get([row, col]).copied().ok_or(LifeError::OutOfBounds {
            row,
            col,
            height,
            width,
        })
    }

    /// Set the liveness of the cell at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] when the coordinates fall outside
    /// the current dimensions.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let (height, width) = self.cells.dim();
        match self.cells.get_mut([row, col]) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(LifeError::OutOfBounds {
                row,
                col,
                height,
                width,
            }),
        }
    }

    /// Resize to new dimensions, preserving the overlapping region
    ///
    /// Cells present in both the old and new extents keep their value;
    /// cells newly in range start dead; cells no longer in range are
    /// discarded. The scratch buffer is resized in lockstep so both
    /// matrices always share dimensions.
    pub fn resize(&mut self, new_height: usize, new_width: usize) {
        if (new_height, new_width) == self.cells.dim() {
            return;
        }

        let mut resized = Array2::from_elem((new_height, new_width), false);
        let copy_rows = self.height().min(new_height);
        let copy_cols = self.width().min(new_width);

        // O(mn) copy of the surviving region
        for row in 0..copy_rows {
            for col in 0..copy_cols {
                if let (Some(src), Some(dst)) =
                    (self.cells.get([row, col]), resized.get_mut([row, col]))
                {
                    *dst = *src;
                }
            }
        }

        self.cells = resized;
        self.scratch = Array2::from_elem((new_height, new_width), false);
    }

    /// Kill every cell without changing dimensions
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fill every cell independently with the given live probability
    ///
    /// Probabilities outside `0.0..=1.0` behave as their nearest bound.
    pub fn randomize(&mut self, rng: &mut impl Rng, live_probability: f64) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random::<f64>() < live_probability;
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Equality compares cell state and dimensions only
///
/// The scratch buffer is excluded; it holds whatever the last generation
/// step left behind.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}
