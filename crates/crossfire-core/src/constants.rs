//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Seconds per tick (~60 Hz).
pub const DT: f32 = 0.016;

// --- Player ---

/// Player walking speed (units per second) along each input axis.
pub const PLAYER_MOVE_SPEED: f32 = 20.0;

/// Radius of the player's own body for ray queries.
pub const PLAYER_BODY_RADIUS: f32 = 1.0;

/// Player spawn point.
pub const PLAYER_SPAWN: Vec3 = Vec3::ZERO;

// --- Camera ---

/// Camera eye offset from the player position.
pub const CAMERA_EYE_OFFSET: Vec3 = Vec3::new(0.0, 10.0, 50.0);

/// Point the camera looks at when a session starts.
pub const CAMERA_INITIAL_TARGET: Vec3 = Vec3::ZERO;

/// Mouse look sensitivity (degrees per mouse count).
pub const LOOK_SENSITIVITY_DEG: f32 = 0.1;

/// Pitch limit (degrees). Keeps the forward vector away from the poles.
pub const CAMERA_PITCH_LIMIT_DEG: f32 = 89.0;

// --- Enemies ---

/// Enemy pursuit speed (units per second).
pub const ENEMY_SPEED: f32 = 5.0;

/// Radius of an enemy for ray queries.
pub const ENEMY_HIT_RADIUS: f32 = 1.0;

/// Where the first enemy of the default arena stands.
pub const ENEMY_DEFAULT_SPAWN: Vec3 = Vec3::new(20.0, 0.0, 20.0);

/// Inner radius of the random spawn ring around the player.
pub const SPAWN_RING_MIN: f32 = 25.0;

/// Outer radius of the random spawn ring around the player.
pub const SPAWN_RING_MAX: f32 = 40.0;

// --- Hit tags ---

/// Tag prefix reported by the ray query for enemy actors.
pub const ENEMY_TAG_PREFIX: &str = "enemy:";

/// Tag reported for the shooter's own body.
pub const PLAYER_TAG: &str = "player";

/// Tag reported for static scenery.
pub const SCENERY_TAG: &str = "scenery";

/// Floating point tolerance used for geometric comparisons.
pub const EPSILON: f32 = 1e-6;
