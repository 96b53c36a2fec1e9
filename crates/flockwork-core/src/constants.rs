//! Default tuning parameters.
//!
//! These are only defaults: every value reaches the simulation through an
//! explicit config struct, never through global state.

// --- World ---

/// Default world width in screen units.
pub const WORLD_WIDTH: f64 = 800.0;

/// Default world height in screen units.
pub const WORLD_HEIGHT: f64 = 600.0;

/// Nominal frame rate used by the headless frame loop (Hz).
pub const FPS: u32 = 60;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Player ---

/// Player movement speed (units per second).
pub const PLAYER_SPEED: f64 = 200.0;

/// Player sprite size.
pub const PLAYER_SIZE: f64 = 32.0;

// --- Homing enemy ---

/// Speed at which a homing enemy closes on its point.
pub const ENEMY_SPEED: f64 = 100.0;

/// Enemy sprite size.
pub const ENEMY_SIZE: f64 = 24.0;

// --- Wander ---

/// Wander cruise speed.
pub const WANDER_SPEED: f64 = 50.0;

/// Seconds between wander heading changes.
pub const WANDER_DIRECTION_CHANGE_INTERVAL: f64 = 2.0;

/// Wanderer sprite size.
pub const WANDERER_SIZE: f64 = 16.0;

// --- Pursuit ---

/// Pursuit speed.
pub const PURSUIT_SPEED: f64 = 100.0;

/// Chaser sprite size.
pub const CHASER_SIZE: f64 = 24.0;

// --- Flocking ---

/// Flocking cruise speed.
pub const FLOCKING_SPEED: f64 = 80.0;

/// Radius within which other entities count as neighbors (strict).
pub const FLOCKING_RADIUS: f64 = 100.0;

pub const SEPARATION_WEIGHT: f64 = 1.5;
pub const ALIGNMENT_WEIGHT: f64 = 1.0;
pub const COHESION_WEIGHT: f64 = 1.0;

/// Boid sprite size.
pub const BOID_SIZE: f64 = 8.0;

/// Default number of boids in the demo scene.
pub const DEMO_FLOCK_SIZE: usize = 24;

/// Half-width of the square a demo flock is scattered across.
pub const DEMO_FLOCK_SPREAD: f64 = 120.0;
