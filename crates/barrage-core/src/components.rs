//! ECS components for hecs entities.
//!
//! Components are plain data structs; game logic lives in the engine
//! and its systems. `Point`, `PlayerColor`, and `Trajectory` are used
//! as components directly.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Marks an entity as a player-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit;

/// Marks an entity as a projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Damage state of a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Chassis {
    pub alive: bool,
    /// Confirmed strikes absorbed so far.
    pub hits: u32,
}

impl Default for Chassis {
    fn default() -> Self {
        Self {
            alive: true,
            hits: 0,
        }
    }
}

/// Per-turn movement allowance. Restored to full when the unit fires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveBudget {
    pub remaining: u32,
}

/// Previously rendered trajectory previews, oldest first.
/// Diagnostic history for the display; no gameplay check reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewHistory {
    pub paths: Vec<Vec<Point>>,
}

/// Flight state of a projectile.
///
/// The projectile's position is tracked relative to its launch point:
/// `offset.x` advances by the trajectory speed each tick and `offset.y`
/// is re-evaluated from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flight {
    /// Launch point (the firing unit's position lifted by the muzzle offset).
    pub origin: Point,
    /// Offset flown from the origin.
    pub offset: Point,
    /// Ticks until the warhead arms; no unit strike registers above zero.
    pub arming: u32,
}

impl Flight {
    /// Absolute field position.
    pub fn position(&self) -> Point {
        self.origin.offset(self.offset.x, self.offset.y)
    }
}
