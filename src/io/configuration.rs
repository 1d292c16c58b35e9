//! Engine and CLI constants with runtime configuration defaults

// Default torus size of the original interactive board
/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 50;
/// Default number of columns
pub const DEFAULT_WIDTH: usize = 50;

/// Default number of generations to advance
pub const DEFAULT_GENERATIONS: usize = 100;

/// Fixed seed for reproducible random fills
pub const DEFAULT_SEED: u64 = 42;

// One live cell in seven keeps a fresh soup sparse enough to evolve
/// Live-cell probability used by random fills
pub const RANDOM_FILL_PROBABILITY: f64 = 1.0 / 7.0;

// Progress bar display settings
/// Threshold for adding a batch progress bar
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Output stem used when no input file is given
pub const SOUP_STEM: &str = "soup";
/// File extensions recognized as grid patterns
pub const PATTERN_EXTENSIONS: [&str; 3] = ["life", "cells", "txt"];
