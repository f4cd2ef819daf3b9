//! Player commands sent from the frontend to the match engine.
//!
//! Commands are queued and drained at the next tick boundary. They are
//! best-effort: anything invalid in the current state (exhausted move
//! budget, match already over, move off the terrain) is silently ignored.

use serde::{Deserialize, Serialize};

use crate::enums::{Coefficient, Direction};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Move the active unit one step left or right along the terrain.
    Move { direction: Direction },
    /// Fire the active unit's shot and pass the turn.
    Fire,
    /// Adjust one firing parameter of the active unit's trajectory.
    /// For `Speed` the delta is truncated to an integer and the result
    /// skips zero in the direction of travel.
    AdjustCoefficient { which: Coefficient, delta: f64 },
    /// Cycle the active unit's trajectory to the next analytic form.
    CycleMode,
}
