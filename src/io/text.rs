//! Text grammar serialization and file helpers
//!
//! A grid serializes as one newline-terminated line per row, `'1'` for a
//! live cell and `'0'` for a dead one. Deserialization tokenizes on any
//! whitespace: each token is one row read left to right, `'1'` is alive and
//! any other character is dead, the final width is the longest token's
//! length with shorter rows padded dead on the right, and an empty input
//! yields an empty grid. Rectangular grids therefore round-trip exactly.

use std::fs;
use std::path::Path;

use crate::engine::grid::Grid;
use crate::io::error::{LifeError, Result};

impl Grid {
    /// Serialize into the text grammar
    pub fn to_text(&self) -> String {
        let (height, width) = self.dim();
        let mut out = String::with_capacity(height * (width + 1));
        for row in self.cells.rows() {
            for &alive in row.iter() {
                out.push(if alive { '1' } else { '0' });
            }
            out.push('\n');
        }
        out
    }

    /// Parse a grid from the text grammar
    ///
    /// Never fails: unrecognized characters are dead cells, ragged rows are
    /// padded dead, and zero tokens produce a 0×0 grid.
    pub fn from_text(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let height = tokens.len();
        let width = tokens
            .iter()
            .map(|token| token.chars().count())
            .max()
            .unwrap_or(0);

        let mut grid = Self::new(height, width);
        for (row, token) in tokens.iter().enumerate() {
            for (col, ch) in token.chars().enumerate() {
                if let (true, Some(cell)) = (ch == '1', grid.cells.get_mut([row, col])) {
                    *cell = true;
                }
            }
        }
        grid
    }

    /// Replace this grid's state and dimensions from the text grammar
    pub fn load_text(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    /// Read a grid from a file in the text grammar
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::FileSystem`] when the file cannot be read.
    pub fn from_text_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| LifeError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Write the grid to a file in the text grammar
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::FileSystem`] when the file cannot be written.
    pub fn write_text_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text()).map_err(|source| LifeError::FileSystem {
            path: path.to_path_buf(),
            operation: "write",
            source,
        })
    }
}
