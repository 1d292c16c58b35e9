//! Toroidal Conway's Game of Life engine with text interchange and pattern composition
//!
//! The engine owns a rectangular boolean grid whose edges wrap, advances it
//! by the standard birth/survival rule, and exchanges state through a
//! plain-text grammar so figures can be lifted out of one board and
//! composed onto another.

#![forbid(unsafe_code)]

/// Grid storage, the toroidal generation step, and composition operations
pub mod engine;
/// Input/output operations and error handling
pub mod io;
/// Canonical seed patterns expressed in the text grammar
pub mod patterns;

pub use engine::Grid;
pub use io::error::{LifeError, Result};
