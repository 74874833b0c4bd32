//! Pursuit steering.
//!
//! Pure functions that compute how far an enemy moves toward the player in
//! one tick. No ECS dependency, operates on plain data.

use glam::Vec3;

use crossfire_core::components::Pursuer;
use crossfire_core::constants::ENEMY_SPEED;

/// Steering parameters for one enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitProfile {
    /// Ground speed (units per second).
    pub speed: f32,
}

impl Default for PursuitProfile {
    fn default() -> Self {
        Self { speed: ENEMY_SPEED }
    }
}

impl From<Pursuer> for PursuitProfile {
    fn from(pursuer: Pursuer) -> Self {
        Self {
            speed: pursuer.speed,
        }
    }
}

/// Input to the steering step for a single enemy.
pub struct PursuitContext {
    pub position: Vec3,
    pub target: Vec3,
    pub profile: PursuitProfile,
    /// Elapsed tick time in seconds. Negative values are treated as zero.
    pub dt: f32,
}

/// Output of the steering step.
pub struct PursuitUpdate {
    pub new_position: Vec3,
    pub displacement: Vec3,
    /// False when the enemy stood on the target or no time elapsed.
    pub moved: bool,
}

/// Displacement that moves `enemy` toward `player` for one tick.
///
/// When the two positions coincide the direction is undefined and the
/// displacement is zero.
pub fn pursuit_displacement(enemy: Vec3, player: Vec3, speed: f32, dt: f32) -> Vec3 {
    let dt = dt.max(0.0);
    match (player - enemy).try_normalize() {
        Some(direction) => direction * speed * dt,
        None => Vec3::ZERO,
    }
}

/// Evaluate one steering step.
pub fn pursue(ctx: &PursuitContext) -> PursuitUpdate {
    let displacement = pursuit_displacement(ctx.position, ctx.target, ctx.profile.speed, ctx.dt);
    PursuitUpdate {
        new_position: ctx.position + displacement,
        displacement,
        moved: displacement != Vec3::ZERO,
    }
}
