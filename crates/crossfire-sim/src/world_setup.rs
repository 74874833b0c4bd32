//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player (with its camera rig), enemies and scenery with the
//! appropriate component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crossfire_core::components::*;
use crossfire_core::constants::*;
use crossfire_core::types::EnemyId;

use crate::systems::camera;

/// Spawn the player at `position` with a camera rig looking at the arena center.
pub fn spawn_player(world: &mut World, position: Vec3) -> hecs::Entity {
    let rig = camera::rig_looking_at(
        CAMERA_EYE_OFFSET,
        CAMERA_INITIAL_TARGET - (position + CAMERA_EYE_OFFSET),
    );

    world.spawn((
        Player,
        Position(position),
        rig,
        SphereCollider {
            radius: PLAYER_BODY_RADIUS,
        },
    ))
}

/// Spawn an enemy roster member.
pub fn spawn_enemy(world: &mut World, id: EnemyId, position: Vec3, speed: f32) -> hecs::Entity {
    world.spawn((
        Enemy { id },
        Position(position),
        Pursuer { speed },
        SphereCollider {
            radius: ENEMY_HIT_RADIUS,
        },
    ))
}

/// Spawn a static scenery box.
pub fn spawn_obstacle(world: &mut World, center: Vec3, half_extents: Vec3) -> hecs::Entity {
    world.spawn((
        Obstacle {
            half_extents: half_extents.abs(),
        },
        Position(center),
    ))
}

/// Spawn `count` enemies at random bearings on a ring around `center`.
/// Enemies stand on the ground plane of `center`. Returns their ids and positions.
pub fn spawn_enemy_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    center: Vec3,
    count: usize,
    speed: f32,
) -> Vec<(EnemyId, Vec3)> {
    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let bearing: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let range: f32 = rng.gen_range(SPAWN_RING_MIN..SPAWN_RING_MAX);
        let position = center + Vec3::new(range * bearing.sin(), 0.0, range * bearing.cos());

        let id = allocate_enemy_id(next_enemy_id);
        spawn_enemy(world, id, position, speed);
        spawned.push((id, position));
    }
    spawned
}

/// Hand out the next enemy id. Ids start at 1 and are never reused.
pub fn allocate_enemy_id(next_enemy_id: &mut u32) -> EnemyId {
    *next_enemy_id += 1;
    EnemyId(*next_enemy_id)
}
