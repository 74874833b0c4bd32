//! Player locomotion from the movement axes.
//!
//! Movement is along world axes: +y walks toward -Z, +x strafes toward +X.
//! Each axis is clamped to [-1, 1] independently, so diagonals are faster.

use glam::{Vec2, Vec3};
use hecs::World;

use crossfire_core::components::{Player, Position};

/// Translate the player by one tick of input.
pub fn run(world: &mut World, move_axes: Vec2, speed: f32, dt: f32) {
    if !move_axes.is_finite() {
        log::warn!("ignoring non-finite movement input {move_axes}");
        return;
    }

    let axes = move_axes.clamp(Vec2::NEG_ONE, Vec2::ONE);
    let step = speed * dt.max(0.0);
    let delta = Vec3::new(axes.x * step, 0.0, -axes.y * step);

    for (_entity, (_player, pos)) in world.query_mut::<(&Player, &mut Position)>() {
        pos.0 += delta;
    }
}
