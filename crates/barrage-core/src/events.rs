//! Events emitted by the engine for frontend feedback.

use serde::{Deserialize, Serialize};

/// Something that happened during a tick, in occurrence order.
/// Units are identified by their roster index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A unit fired; the turn has already passed to the next unit.
    ShotFired { unit: usize },
    /// A projectile detonated on a unit.
    UnitHit { unit: usize, hits: u32 },
    /// A unit absorbed enough hits to be destroyed.
    UnitDestroyed { unit: usize },
    /// The victory condition was met this tick.
    MatchOver,
}
