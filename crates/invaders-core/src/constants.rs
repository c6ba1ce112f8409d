//! Simulation constants and tuning parameters.
//!
//! Speeds and probabilities are tuned against a nominal 60 frames per second
//! and are reproduced exactly rather than re-derived for other tick lengths.

/// Nominal frame rate (Hz) the design speeds are tuned for.
pub const FRAME_RATE: u32 = 60;

/// Multiplier reconciling variable frame length with per-frame design speeds.
pub const FRAME_RATE_NORMALIZER: f32 = FRAME_RATE as f32;

// --- Playfield ---

/// Horizontal boundary magnitude for aliens, the mothership and the player.
pub const HORIZONTAL_BOUND: f32 = 20.0;

// --- Player ---

/// Player spawn position.
pub const PLAYER_SPAWN: [f32; 3] = [0.0, -15.0, 0.0];

/// Player horizontal speed (units per second, not frame-normalized).
pub const PLAYER_SPEED: f32 = 9.0;

/// Seconds between player shots.
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.5;

// --- Aliens ---

/// Hit points of a freshly spawned alien.
pub const ALIEN_HIT_POINTS: u32 = 4;

/// Alien horizontal speed (units per normalized frame).
pub const ALIEN_SPEED: f32 = 0.01;

/// Vertical step taken by an alien on each direction reversal.
pub const ALIEN_STEP_DOWN: f32 = 2.0;

/// Per-tick probability that a ready alien fires.
pub const ALIEN_FIRE_PROBABILITY: f32 = 0.002;

/// Alien cooldown is re-armed to a uniform value in [MIN, MAX).
pub const ALIEN_FIRE_COOLDOWN_MIN: f32 = 1.5;
pub const ALIEN_FIRE_COOLDOWN_MAX: f32 = 3.5;

// --- Mothership ---

/// Hit points of a freshly spawned mothership.
pub const MOTHERSHIP_HIT_POINTS: u32 = 5;

/// Mothership horizontal speed (units per normalized frame).
pub const MOTHERSHIP_SPEED: f32 = 0.1;

/// Height at which the mothership enters.
pub const MOTHERSHIP_SPAWN_Y: f32 = 15.0;

/// Per-tick probability that a ready mothership fires.
pub const MOTHERSHIP_FIRE_PROBABILITY: f32 = 0.02;

/// Fixed mothership cooldown after firing (seconds).
pub const MOTHERSHIP_FIRE_COOLDOWN: f32 = 1.5;

// --- Formation ---

/// Rows in a wave formation.
pub const FORMATION_ROWS: usize = 3;

/// Columns in a wave formation.
pub const FORMATION_COLUMNS: usize = 5;

/// Horizontal spacing between formation columns.
pub const FORMATION_COLUMN_SPACING: f32 = 5.0;

/// Vertical spacing between formation rows.
pub const FORMATION_ROW_SPACING: f32 = 3.0;

/// Height of the lowest formation row.
pub const FORMATION_BASE_Y: f32 = 10.0;

// --- Projectiles ---

/// Player projectile speed (units per normalized frame).
pub const PLAYER_PROJECTILE_SPEED: f32 = 1.25;

/// Alien projectile speed (units per normalized frame).
pub const ALIEN_PROJECTILE_SPEED: f32 = 0.5;

/// Distance ahead of the firer at which a projectile appears.
pub const PROJECTILE_SPAWN_OFFSET: f32 = 2.0;

/// Distance from the origin along the travel axis past which a projectile self-disposes.
pub const PROJECTILE_TRAVEL_BOUND: f32 = 120.0;

/// Length of the collision ray cast ahead of each projectile.
pub const COLLISION_RAY_LENGTH: f32 = 4.0;

// --- Hit feedback ---

/// Half-range of the X-axis tilt applied to an alien that survives a hit (radians).
pub const ALIEN_HIT_TILT: f32 = 0.15;

/// Half-range of the Z-axis roll applied to a mothership that survives a hit (radians).
pub const MOTHERSHIP_HIT_ROLL: f32 = 0.125;

// --- Explosions (magnitude, duration seconds) ---

pub const IMPACT_EXPLOSION: (f32, f32) = (10.0, 0.7);
pub const PLAYER_IMPACT_EXPLOSION: (f32, f32) = (12.0, 1.2);
pub const MOTHERSHIP_HIT_EXPLOSION: (f32, f32) = (10.0, 1.0);
pub const ALIEN_DESTROYED_EXPLOSION: (f32, f32) = (20.0, 1.0);
pub const MOTHERSHIP_DESTROYED_EXPLOSION: (f32, f32) = (30.0, 2.0);
pub const PLAYER_DESTROYED_EXPLOSION: (f32, f32) = (40.0, 2.5);

// --- Collision surfaces (half-extents of loaded models) ---

pub const PLAYER_HALF_EXTENTS: [f32; 3] = [1.0, 1.0, 0.5];
pub const ALIEN_HALF_EXTENTS: [f32; 3] = [1.0, 1.0, 0.5];
pub const MOTHERSHIP_HALF_EXTENTS: [f32; 3] = [3.0, 1.5, 1.0];
