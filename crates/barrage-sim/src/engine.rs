//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes player commands,
//! resolves projectile flight and collisions each tick, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic
//! testing: the same seed and command sequence reproduce the same
//! match tick for tick.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::components::{MoveBudget, PreviewHistory};
use barrage_core::constants::*;
use barrage_core::enums::{Coefficient, Direction, MatchPhase, VictoryMode};
use barrage_core::events::MatchEvent;
use barrage_core::state::MatchSnapshot;
use barrage_core::trajectory::Trajectory;
use barrage_core::types::Point;
use barrage_terrain::TerrainProfile;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new match. Provided once at
/// construction by the surrounding settings/menu layer.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of players (clamped to the supported range).
    pub players: usize,
    pub victory_mode: VictoryMode,
    /// Blast radius for unit strikes; also fixes the arming delay.
    pub injury_radius: f64,
    /// Confirmed strikes a unit absorbs before it is destroyed.
    pub hits_to_destroy: u32,
    /// Carried along for the frontend; unused by engine logic.
    pub random_power_ups: bool,
    /// RNG seed for terrain generation and color assignment.
    /// Same seed = same battlefield.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            victory_mode: VictoryMode::default(),
            injury_radius: DEFAULT_INJURY_RADIUS,
            hits_to_destroy: DEFAULT_HITS_TO_DESTROY,
            random_power_ups: false,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Clamp out-of-range settings to their supported bounds.
    fn normalized(mut self) -> Self {
        self.players = self.players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.injury_radius = self.injury_radius.max(MIN_INJURY_RADIUS);
        self
    }

    /// Ticks a projectile stays unarmed after launch. Coupled to the
    /// blast radius so a shot cannot detonate on its own firer.
    fn arming_ticks(&self) -> u32 {
        self.injury_radius as u32 + 1
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    config: MatchConfig,
    terrain: TerrainProfile,
    /// Units in turn order. Fixed for the whole match; destroyed units
    /// keep their slot (and still absorb shots).
    units: Vec<Entity>,
    /// Live projectiles in firing order.
    projectiles: Vec<Entity>,
    /// Roster index of the unit whose turn it is.
    active: usize,
    over: bool,
    ticks: u64,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Create a new match: generate terrain from the config seed and
    /// place one unit per player on its terrain vertex.
    pub fn new(config: MatchConfig) -> Self {
        let config = config.normalized();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();

        let terrain = world_setup::generate_terrain(&mut rng, config.players);
        let spawn_points = terrain.vertices()[1..=config.players].to_vec();
        let units = world_setup::spawn_units(&mut world, &spawn_points, &mut rng);

        Self {
            world,
            config,
            terrain,
            units,
            projectiles: Vec::new(),
            active: 0,
            over: false,
            ticks: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    ///
    /// Drains queued commands, then resolves every live projectile in
    /// firing order. Once the match is over, ticks are still accepted
    /// but have no gameplay effect.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if !self.over {
            let over = systems::resolve::run(
                &mut self.world,
                &self.units,
                &mut self.projectiles,
                &self.terrain,
                &self.config,
                &mut self.active,
                &mut self.events,
            );
            if over {
                self.over = true;
                self.events.push(MatchEvent::MatchOver);
            }
        }

        self.ticks += 1;
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.ticks,
            self.phase(),
            &self.config,
            self.active,
            &self.units,
            &self.projectiles,
            &self.terrain,
            events,
        )
    }

    /// Current lifecycle phase. `Resolving` is derived: the turn passes
    /// at fire time, so input is accepted whenever the match is not over.
    pub fn phase(&self) -> MatchPhase {
        if self.over {
            MatchPhase::Over
        } else if self.projectiles.is_empty() {
            MatchPhase::AwaitingInput
        } else {
            MatchPhase::Resolving
        }
    }

    /// Whether the victory condition has been met.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Roster index of the current turn holder.
    pub fn active_unit(&self) -> usize {
        self.active
    }

    /// Ticks elapsed since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The match terrain.
    pub fn terrain(&self) -> &TerrainProfile {
        &self.terrain
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands are best-effort: invalid
    /// ones (match over, exhausted budget, move off the terrain) are
    /// silently dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.over {
            return;
        }

        match command {
            PlayerCommand::Move { direction } => self.move_active(direction),
            PlayerCommand::Fire => self.fire_active(),
            PlayerCommand::AdjustCoefficient { which, delta } => self.adjust_active(which, delta),
            PlayerCommand::CycleMode => {
                if let Ok(mut trajectory) = self.world.get::<&mut Trajectory>(self.active_entity())
                {
                    trajectory.next_mode();
                }
            }
        }
    }

    fn active_entity(&self) -> Entity {
        self.units[self.active]
    }

    /// Move the active unit one step, re-snapping it to terrain height.
    fn move_active(&mut self, direction: Direction) {
        let entity = self.active_entity();

        let remaining = match self.world.get::<&MoveBudget>(entity) {
            Ok(budget) => budget.remaining,
            Err(_) => return,
        };
        if remaining == 0 {
            return;
        }

        let position = match self.world.get::<&Point>(entity) {
            Ok(p) => *p,
            Err(_) => return,
        };
        let new_x = position.x + direction.sign() * MOVE_STEP;
        let Some(new_y) = self.terrain.height_at(new_x) else {
            return;
        };

        if let Ok(mut p) = self.world.get::<&mut Point>(entity) {
            *p = Point::new(new_x, new_y);
        }
        if let Ok(mut budget) = self.world.get::<&mut MoveBudget>(entity) {
            budget.remaining -= 1;
        }
    }

    /// Fire the active unit's shot: restore the move budget, record the
    /// preview path, spawn a projectile carrying a clone of the firing
    /// configuration, and pass the turn immediately — the new active
    /// unit may already act while this shot is still airborne.
    fn fire_active(&mut self) {
        let entity = self.active_entity();

        let position = match self.world.get::<&Point>(entity) {
            Ok(p) => *p,
            Err(_) => return,
        };
        let trajectory = match self.world.get::<&Trajectory>(entity) {
            Ok(t) => *t,
            Err(_) => return,
        };

        if let Ok(mut budget) = self.world.get::<&mut MoveBudget>(entity) {
            budget.remaining = MOVES_PER_TURN;
        }
        if let Ok(mut history) = self.world.get::<&mut PreviewHistory>(entity) {
            history
                .paths
                .push(trajectory.preview_path(position, FIELD_WIDTH));
        }

        let origin = position.offset(0.0, -MUZZLE_OFFSET);
        let projectile = world_setup::spawn_projectile(
            &mut self.world,
            origin,
            trajectory,
            self.config.arming_ticks(),
        );
        self.projectiles.push(projectile);
        self.events.push(MatchEvent::ShotFired { unit: self.active });

        self.advance_turn();
    }

    /// Adjust one firing parameter of the active unit's trajectory.
    /// Speed skips zero in the direction of travel.
    fn adjust_active(&mut self, which: Coefficient, delta: f64) {
        let Ok(mut trajectory) = self.world.get::<&mut Trajectory>(self.active_entity()) else {
            return;
        };

        match which {
            Coefficient::A => trajectory.a += delta,
            Coefficient::B => trajectory.b += delta,
            Coefficient::C => trajectory.c += delta,
            Coefficient::Speed => {
                let step = delta as i32;
                let mut speed = trajectory.speed + step;
                if speed == 0 {
                    speed = if step >= 0 { 1 } else { -1 };
                }
                trajectory.speed = speed;
            }
        }
    }

    /// Pass the turn to the next unit in fixed cyclic order, regardless
    /// of alive state.
    fn advance_turn(&mut self) {
        self.active = (self.active + 1) % self.units.len();
    }

    /// Build an engine over an explicit terrain and unit layout
    /// (for fixed-scenario tests).
    #[cfg(test)]
    pub(crate) fn with_layout(
        config: MatchConfig,
        terrain: TerrainProfile,
        unit_xs: &[f64],
    ) -> Self {
        let mut config = config.normalized();
        config.players = unit_xs.len();

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();

        let spawn_points: Vec<Point> = unit_xs
            .iter()
            .map(|&x| Point::new(x, terrain.height_at(x).unwrap()))
            .collect();
        let units = world_setup::spawn_units(&mut world, &spawn_points, &mut rng);

        Self {
            world,
            config,
            terrain,
            units,
            projectiles: Vec::new(),
            active: 0,
            over: false,
            ticks: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Inject a projectile directly, bypassing any unit's fire action.
    #[cfg(test)]
    pub(crate) fn spawn_test_projectile(&mut self, origin: Point, trajectory: Trajectory) {
        let projectile = world_setup::spawn_projectile(
            &mut self.world,
            origin,
            trajectory,
            self.config.arming_ticks(),
        );
        self.projectiles.push(projectile);
    }
}
