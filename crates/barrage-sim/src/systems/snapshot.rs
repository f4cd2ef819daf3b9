//! Snapshot system: queries the ECS world and builds a complete
//! MatchSnapshot. Read-only — it never modifies the world.

use hecs::{Entity, World};

use barrage_core::components::{Chassis, Flight, MoveBudget, PreviewHistory};
use barrage_core::enums::{MatchPhase, PlayerColor};
use barrage_core::events::MatchEvent;
use barrage_core::state::{MatchSnapshot, ProjectileView, TrajectoryView, UnitView};
use barrage_core::trajectory::Trajectory;
use barrage_core::types::Point;
use barrage_terrain::TerrainProfile;

use crate::engine::MatchConfig;

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    tick: u64,
    phase: MatchPhase,
    config: &MatchConfig,
    active: usize,
    units: &[Entity],
    projectiles: &[Entity],
    terrain: &TerrainProfile,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        tick,
        phase,
        victory_mode: config.victory_mode,
        active_unit: active,
        units: build_units(world, units, active),
        projectiles: build_projectiles(world, projectiles),
        terrain: terrain.vertices().to_vec(),
        events,
        random_power_ups: config.random_power_ups,
    }
}

/// Build UnitView list in roster (turn) order.
fn build_units(world: &World, units: &[Entity], active: usize) -> Vec<UnitView> {
    units
        .iter()
        .enumerate()
        .filter_map(|(index, &entity)| {
            let position = *world.get::<&Point>(entity).ok()?;
            let color = *world.get::<&PlayerColor>(entity).ok()?;
            let chassis = *world.get::<&Chassis>(entity).ok()?;
            let budget = *world.get::<&MoveBudget>(entity).ok()?;
            let trajectory = *world.get::<&Trajectory>(entity).ok()?;
            let history = world.get::<&PreviewHistory>(entity).ok()?;

            Some(UnitView {
                position,
                color,
                alive: chassis.alive,
                active: index == active,
                moves_left: budget.remaining,
                hits: chassis.hits,
                trajectory: TrajectoryView {
                    a: trajectory.a,
                    b: trajectory.b,
                    c: trajectory.c,
                    speed: trajectory.speed,
                    mode: trajectory.mode,
                    label: trajectory.mode.label().to_string(),
                },
                previews: history.paths.clone(),
            })
        })
        .collect()
}

/// Build ProjectileView list in firing order.
fn build_projectiles(world: &World, projectiles: &[Entity]) -> Vec<ProjectileView> {
    projectiles
        .iter()
        .filter_map(|&entity| {
            let flight = world.get::<&Flight>(entity).ok()?;
            Some(ProjectileView {
                position: flight.position(),
                armed: flight.arming == 0,
            })
        })
        .collect()
}
