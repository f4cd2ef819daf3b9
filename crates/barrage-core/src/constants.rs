//! Field dimensions and gameplay tuning parameters.

// --- Play-field ---

/// Field width in field units (pixels in the reference presentation).
pub const FIELD_WIDTH: f64 = 1024.0;

/// Field height in field units.
pub const FIELD_HEIGHT: f64 = 600.0;

// --- Terrain ---

/// Baseline ground height at both field edges.
pub const GROUND_LEVEL: f64 = 300.0;

/// Maximum deviation of a generated terrain vertex from the baseline.
pub const GROUND_VARIATION: f64 = 100.0;

// --- Units ---

/// X coordinate of the leftmost unit's spawn vertex.
pub const FIRST_UNIT_X: f64 = 200.0;

/// Horizontal distance covered by one move command.
pub const MOVE_STEP: f64 = 20.0;

/// Moves granted per turn; restored each time the unit fires.
pub const MOVES_PER_TURN: u32 = 5;

/// Supported player counts.
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

// --- Projectiles ---

/// Vertical lift of the launch point above the firing unit's hull.
pub const MUZZLE_OFFSET: f64 = 3.0;

// --- Firing configuration steps (used by frontends driving the engine) ---

/// Canonical increment for the a/b/c coefficients.
pub const COEFF_STEP: f64 = 0.1;

/// Canonical increment for the speed scalar.
pub const SPEED_STEP: i32 = 1;

// --- Match configuration defaults and bounds ---

/// Smallest allowed blast radius; configs below this are raised to it.
pub const MIN_INJURY_RADIUS: f64 = 10.0;

pub const DEFAULT_INJURY_RADIUS: f64 = 40.0;

pub const DEFAULT_HITS_TO_DESTROY: u32 = 3;
