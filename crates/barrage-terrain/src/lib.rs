//! Terrain system for BARRAGE.
//!
//! The ground is a fixed polyline across the play-field width. This
//! crate provides height lookup, segment bracketing, and the
//! side-of-segment relation used for projectile strike tests.

pub use barrage_core as core;

pub mod profile;

// Re-export key items for convenience.
pub use profile::{segment_is_degenerate, side_of_segment, TerrainProfile};
