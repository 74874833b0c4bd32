//! Snapshot system: queries the ECS world and builds a complete SessionSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use crossfire_core::enums::{FireMode, GamePhase};
use crossfire_core::events::CombatEvent;
use crossfire_core::state::*;
use crossfire_core::types::SimTime;

use crate::roster;
use crate::systems::camera;

/// Build a complete SessionSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    fire_mode: FireMode,
    events: Vec<CombatEvent>,
    score: &ScoreView,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        fire_mode,
        player: PlayerView {
            position: roster::player_position(world),
        },
        camera: camera::pose(world),
        enemies: roster::list_enemies(world),
        events,
        score: *score,
    }
}
