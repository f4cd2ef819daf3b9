//! Match state snapshot — the complete visible state returned to the
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{MatchPhase, PlayerColor, TrajectoryMode, VictoryMode};
use crate::events::MatchEvent;
use crate::types::Point;

/// Complete match state handed to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Ticks elapsed since construction.
    pub tick: u64,
    pub phase: MatchPhase,
    pub victory_mode: VictoryMode,
    /// Roster index of the unit whose turn it is.
    pub active_unit: usize,
    /// Units in roster (turn) order.
    pub units: Vec<UnitView>,
    /// Live projectiles in firing order.
    pub projectiles: Vec<ProjectileView>,
    /// Terrain polyline vertices, left to right.
    pub terrain: Vec<Point>,
    /// Events that occurred during this tick.
    pub events: Vec<MatchEvent>,
    /// Power-up toggle carried from the match configuration.
    /// Echoed for the frontend; the engine itself does not act on it.
    pub random_power_ups: bool,
}

/// A unit as seen by the display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub position: Point,
    pub color: PlayerColor,
    pub alive: bool,
    /// Whether this unit is the current turn holder.
    pub active: bool,
    pub moves_left: u32,
    pub hits: u32,
    pub trajectory: TrajectoryView,
    /// Preview paths recorded at each past shot, oldest first.
    pub previews: Vec<Vec<Point>>,
}

/// The active firing configuration, with a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryView {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub speed: i32,
    pub mode: TrajectoryMode,
    pub label: String,
}

/// A projectile as seen by the display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Absolute field position.
    pub position: Point,
    /// Whether the arming delay has elapsed.
    pub armed: bool,
}
