//! Session snapshot: the complete visible state handed to the driver each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{FireMode, GamePhase};
use crate::events::CombatEvent;
use crate::types::{CameraPose, EnemyId, SimTime};

/// Complete session state produced after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub fire_mode: FireMode,
    pub player: PlayerView,
    pub camera: CameraPose,
    /// Roster members, sorted by id.
    pub enemies: Vec<EnemyView>,
    pub events: Vec<CombatEvent>,
    pub score: ScoreView,
}

/// Player state for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
}

/// A roster member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Vec3,
    /// Distance to the player.
    pub range: f32,
}

/// Running score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub kills: u32,
    pub misses: u32,
    pub enemies_spawned: u32,
}
