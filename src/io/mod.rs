//! Input/output: the text interchange grammar, errors, CLI, and progress

/// Command-line interface for batch pattern processing
pub mod cli;
/// Engine and CLI constants with runtime configuration defaults
pub mod configuration;
/// Error types for engine and I/O operations
pub mod error;
/// Progress display for generation runs
pub mod progress;
/// Text grammar serialization and file helpers
pub mod text;
