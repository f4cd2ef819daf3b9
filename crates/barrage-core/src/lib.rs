//! Core types and definitions for the BARRAGE artillery engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod trajectory;
pub mod types;

#[cfg(test)]
mod tests;
