//! The bloom field: per-frame flower growth over a collection of blooms.

/// Bloom state machine: center, color, petals, one-way lifecycle.
pub mod bloom;
/// The garden: bloom collection, triggers, and the frame pass.
pub mod field;
/// Configuration ranges bloom parameters are drawn from.
pub mod options;
/// A single growing petal and its stroke geometry.
pub mod petal;
