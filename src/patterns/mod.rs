//! Canonical seed patterns expressed in the text grammar
//!
//! Each pattern is a small figure in the same text format the engine
//! serializes, so it parses with [`Grid::from_text`] and composes onto a
//! board with [`Grid::or_with_at`].

use crate::engine::grid::Grid;
use crate::io::error::{LifeError, Result};

/// 2×2 block, the smallest still life
pub const BLOCK: &str = "11\n11\n";

/// Period-2 blinker oscillator
pub const BLINKER: &str = "111\n";

/// Period-2 toad oscillator
pub const TOAD: &str = "0111\n1110\n";

/// Period-2 beacon oscillator
pub const BEACON: &str = "1100\n1100\n0011\n0011\n";

/// Diagonal glider, travels one cell down-right every four generations
pub const GLIDER: &str = "010\n001\n111\n";

/// R-pentomino, a long-lived methuselah
pub const R_PENTOMINO: &str = "011\n110\n010\n";

/// Names of all bundled patterns
pub const PATTERN_NAMES: [&str; 6] = [
    "block",
    "blinker",
    "toad",
    "beacon",
    "glider",
    "r-pentomino",
];

/// Look up a bundled pattern by name and parse it into a grid
///
/// # Errors
///
/// Returns [`LifeError::UnknownPattern`] when no bundled pattern has the
/// given name.
pub fn by_name(name: &str) -> Result<Grid> {
    let text = match name {
        "block" => BLOCK,
        "blinker" => BLINKER,
        "toad" => TOAD,
        "beacon" => BEACON,
        "glider" => GLIDER,
        "r-pentomino" => R_PENTOMINO,
        _ => {
            return Err(LifeError::UnknownPattern {
                name: name.to_string(),
            });
        }
    };
    Ok(Grid::from_text(text))
}
