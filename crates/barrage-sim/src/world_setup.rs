//! Entity spawn factories and terrain generation for match setup.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::*;
use barrage_core::constants::*;
use barrage_core::enums::PlayerColor;
use barrage_core::trajectory::Trajectory;
use barrage_core::types::Point;
use barrage_terrain::TerrainProfile;

/// Generate the match terrain: baseline vertices at both field edges and
/// one randomized vertex per player. Units spawn exactly on the player
/// vertices, so their positions are snapped to terrain by construction.
pub fn generate_terrain(rng: &mut ChaCha8Rng, players: usize) -> TerrainProfile {
    let mut vertices = Vec::with_capacity(players + 2);
    vertices.push(Point::new(0.0, GROUND_LEVEL));

    let x_step = FIELD_WIDTH / players as f64;
    let mut x = FIRST_UNIT_X;
    for _ in 0..players {
        let y = rng.gen_range(GROUND_LEVEL - GROUND_VARIATION..GROUND_LEVEL + GROUND_VARIATION);
        vertices.push(Point::new(x, y));
        x += x_step;
    }

    vertices.push(Point::new(FIELD_WIDTH, GROUND_LEVEL));
    TerrainProfile::new(vertices)
}

/// Spawn one unit per spawn point, with identity colors shuffled from
/// the palette. Returns entities in spawn (turn) order.
pub fn spawn_units(
    world: &mut World,
    spawn_points: &[Point],
    rng: &mut ChaCha8Rng,
) -> Vec<hecs::Entity> {
    let mut colors = PlayerColor::PALETTE;
    colors.shuffle(rng);

    spawn_points
        .iter()
        .zip(colors.iter())
        .map(|(&position, &color)| spawn_unit(world, position, color))
        .collect()
}

/// Spawn a single unit entity with a fresh firing configuration.
pub fn spawn_unit(world: &mut World, position: Point, color: PlayerColor) -> hecs::Entity {
    world.spawn((
        Unit,
        position,
        color,
        Chassis::default(),
        MoveBudget {
            remaining: MOVES_PER_TURN,
        },
        Trajectory::default(),
        PreviewHistory::default(),
    ))
}

/// Spawn a projectile entity carrying its own trajectory clone.
pub fn spawn_projectile(
    world: &mut World,
    origin: Point,
    trajectory: Trajectory,
    arming: u32,
) -> hecs::Entity {
    world.spawn((
        Projectile,
        trajectory,
        Flight {
            origin,
            offset: Point::default(),
            arming,
        },
    ))
}
