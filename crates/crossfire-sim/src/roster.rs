//! Enemy roster bookkeeping.
//!
//! The roster is the set of entities carrying an [`Enemy`] component.
//! Every member is alive: killed enemies are despawned, never flagged.

use glam::Vec3;
use hecs::{Entity, World};

use crossfire_core::components::{Enemy, Player, Position};
use crossfire_core::state::EnemyView;
use crossfire_core::types::EnemyId;

/// Look up the entity of a roster member.
pub fn find_enemy(world: &World, id: EnemyId) -> Option<Entity> {
    world
        .query::<&Enemy>()
        .iter()
        .find(|(_, enemy)| enemy.id == id)
        .map(|(entity, _)| entity)
}

/// Remove an enemy from the roster. Returns false if it was not a member.
pub fn remove_enemy(world: &mut World, id: EnemyId) -> bool {
    match find_enemy(world, id) {
        Some(entity) => world.despawn(entity).is_ok(),
        None => false,
    }
}

/// Number of roster members.
pub fn enemy_count(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

/// All roster members, sorted by id.
pub fn list_enemies(world: &World) -> Vec<EnemyView> {
    let player = player_position(world);

    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            id: enemy.id,
            position: pos.0,
            range: pos.0.distance(player),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Position of the player (origin if no player has been spawned).
pub fn player_position(world: &World) -> Vec3 {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
        .unwrap_or_default()
}
