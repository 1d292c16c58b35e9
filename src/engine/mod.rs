//! Grid-state engine
//!
//! This module contains the core simulation functionality:
//! - Cell-state storage with overlap-preserving resize
//! - The double-buffered generation step on a toroidal topology
//! - Offset-OR composition and connected-figure extraction

/// Offset-OR composition of one grid onto another
pub mod compose;
/// Connected-figure extraction
pub mod figure;
/// Grid storage and state accessors
pub mod grid;
/// Toroidal neighbor counting and the generation step
pub mod step;

pub use grid::Grid;
