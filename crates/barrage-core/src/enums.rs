//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Analytic form used by a trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrajectoryMode {
    /// `y = a*x + b`
    #[default]
    Linear,
    /// `y = a*x^2 + b*x + c`
    Quadratic,
    /// `y = a * log_b(x)`, identity fallback when undefined.
    Logarithmic,
    /// `y = a * sin(b*x)`
    Sinusoidal,
}

impl TrajectoryMode {
    /// Next mode in the fixed firing-mode cycle.
    pub fn next(self) -> TrajectoryMode {
        match self {
            TrajectoryMode::Linear => TrajectoryMode::Quadratic,
            TrajectoryMode::Quadratic => TrajectoryMode::Logarithmic,
            TrajectoryMode::Logarithmic => TrajectoryMode::Sinusoidal,
            TrajectoryMode::Sinusoidal => TrajectoryMode::Linear,
        }
    }

    /// Human-readable label shown on the in-game status line.
    pub fn label(self) -> &'static str {
        match self {
            TrajectoryMode::Linear => "direct (y = ax + b)",
            TrajectoryMode::Quadratic => "high trajectory (y = ax^2 + bx + c)",
            TrajectoryMode::Logarithmic => "armament (y = a*log(b, x))",
            TrajectoryMode::Sinusoidal => "crazy ship (y = a*sin(b*x))",
        }
    }
}

impl std::fmt::Display for TrajectoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Policy for ending a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryMode {
    /// The first confirmed unit strike ends the match.
    #[default]
    FirstHit,
    /// The match ends when a single unit remains alive.
    LastStanding,
}

/// Horizontal movement direction for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed multiplier applied to the move step.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Which firing parameter an adjustment command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coefficient {
    A,
    B,
    C,
    Speed,
}

/// Match lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// A unit is active and may move, retune, or fire.
    #[default]
    AwaitingInput,
    /// Projectiles from earlier shots are still in flight.
    /// Commands for the new active unit are still accepted.
    Resolving,
    /// Terminal: the victory condition has been met.
    Over,
}

/// Unit identity color, assigned once at match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl PlayerColor {
    /// The full palette, shuffled at match setup before assignment.
    pub const PALETTE: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Yellow,
    ];
}
