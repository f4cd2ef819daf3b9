//! Projectile resolution system — flight advance, termination tests,
//! hit registration, and the victory check.
//!
//! Projectiles are processed in firing order; within each projectile,
//! units are tested in roster order. Both orderings are observable (they
//! decide which of two overlapping units is credited with a hit) and
//! must stay fixed for determinism.

use hecs::{Entity, World};

use barrage_core::components::{Chassis, Flight};
use barrage_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use barrage_core::enums::VictoryMode;
use barrage_core::events::MatchEvent;
use barrage_core::trajectory::Trajectory;
use barrage_core::types::Point;
use barrage_terrain::{segment_is_degenerate, side_of_segment, TerrainProfile};

use crate::engine::MatchConfig;

/// Advance and resolve every live projectile for one tick.
///
/// Each projectile runs the full pipeline in order: flight advance,
/// off-field check, unit-strike tests (stopping at the first struck
/// unit), then the terrain-strike test. A unit strike registers a hit,
/// advances the turn if it destroyed the active unit, and evaluates the
/// victory condition. Returns true once the victory condition is met;
/// remaining projectiles are left untouched from that point on.
pub fn run(
    world: &mut World,
    units: &[Entity],
    projectiles: &mut Vec<Entity>,
    terrain: &TerrainProfile,
    config: &MatchConfig,
    active: &mut usize,
    events: &mut Vec<MatchEvent>,
) -> bool {
    let mut surviving = Vec::with_capacity(projectiles.len());
    let mut despawn_buffer: Vec<Entity> = Vec::new();
    let mut over = false;

    for &entity in projectiles.iter() {
        if over {
            // Terminal state was reached earlier this tick; the rest of
            // the list is frozen as-is.
            surviving.push(entity);
            continue;
        }

        let Some(position) = advance(world, entity) else {
            continue;
        };

        if !is_within_field(position) {
            despawn_buffer.push(entity);
            continue;
        }

        let armed = world
            .get::<&Flight>(entity)
            .map(|f| f.arming == 0)
            .unwrap_or(false);

        if armed && strike_first_unit(world, units, position, config, active, events) {
            over = victory_met(world, units, config);
            despawn_buffer.push(entity);
            continue;
        }

        if strikes_terrain(position, terrain) {
            despawn_buffer.push(entity);
            continue;
        }

        surviving.push(entity);
    }

    *projectiles = surviving;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    over
}

/// Advance one projectile: arming countdown, horizontal advance by the
/// trajectory speed, vertical re-evaluation. Returns the new absolute
/// position, or None if the entity lost its components.
fn advance(world: &mut World, entity: Entity) -> Option<Point> {
    let trajectory = *world.get::<&Trajectory>(entity).ok()?;
    let mut flight = world.get::<&mut Flight>(entity).ok()?;

    if flight.arming > 0 {
        flight.arming -= 1;
    }
    flight.offset.x += trajectory.speed as f64;
    flight.offset.y = trajectory.evaluate(flight.offset.x);

    Some(flight.position())
}

/// Strictly inside the field rectangle.
fn is_within_field(p: Point) -> bool {
    p.x > 0.0 && p.x < FIELD_WIDTH && p.y > 0.0 && p.y < FIELD_HEIGHT
}

/// Test units in roster order and register a hit on the first one within
/// the blast radius. Dead units still absorb shots. Returns true if a
/// unit was struck.
fn strike_first_unit(
    world: &mut World,
    units: &[Entity],
    position: Point,
    config: &MatchConfig,
    active: &mut usize,
    events: &mut Vec<MatchEvent>,
) -> bool {
    for (index, &unit) in units.iter().enumerate() {
        let unit_position = match world.get::<&Point>(unit) {
            Ok(p) => *p,
            Err(_) => continue,
        };
        if position.distance_to(&unit_position) >= config.injury_radius {
            continue;
        }

        let mut destroyed = false;
        if let Ok(mut chassis) = world.get::<&mut Chassis>(unit) {
            chassis.hits += 1;
            events.push(MatchEvent::UnitHit {
                unit: index,
                hits: chassis.hits,
            });
            if chassis.alive && chassis.hits >= config.hits_to_destroy {
                chassis.alive = false;
                destroyed = true;
            }
        }

        if destroyed {
            events.push(MatchEvent::UnitDestroyed { unit: index });
            // A destroyed active unit must not block future turns.
            if *active == index {
                *active = (*active + 1) % units.len();
            }
        }

        return true;
    }

    false
}

/// Victory check, evaluated on each confirmed unit strike.
fn victory_met(world: &World, units: &[Entity], config: &MatchConfig) -> bool {
    match config.victory_mode {
        VictoryMode::FirstHit => true,
        VictoryMode::LastStanding => {
            let alive = units
                .iter()
                .filter(|&&unit| world.get::<&Chassis>(unit).map(|c| c.alive).unwrap_or(false))
                .count();
            alive == 1
        }
    }
}

/// Terrain-strike test: the projectile has crossed below the terrain
/// line when its position and a deep-underground reference point at the
/// same x fall on the same side of the bracketing segment. Degenerate or
/// unbracketable segments count as no strike.
fn strikes_terrain(position: Point, terrain: &TerrainProfile) -> bool {
    let Some((l, r)) = terrain.bracket(position.x) else {
        return false;
    };
    if segment_is_degenerate(l, r) {
        return false;
    }

    let at_shot = side_of_segment(position, l, r);
    let at_depth = side_of_segment(Point::new(position.x, FIELD_HEIGHT), l, r);
    at_shot * at_depth > 0.0
}
