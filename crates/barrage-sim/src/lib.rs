//! Match engine for BARRAGE.
//!
//! Owns the hecs ECS world, processes player commands at tick
//! boundaries, resolves projectile flight and collisions, and produces
//! MatchSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use barrage_core as core;
pub use engine::{MatchConfig, MatchEngine};
