//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::EnemyId;

/// Combat events produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// An enemy joined the roster.
    EnemySpawned { enemy: EnemyId, position: Vec3 },
    /// The player pulled the trigger.
    ShotFired { origin: Vec3, direction: Vec3 },
    /// The shot resolved to an enemy, which was removed from the roster.
    EnemyHit { enemy: EnemyId, distance: f32 },
    /// The shot hit nothing, or the nearest hit was not an enemy.
    ShotMissed {
        /// Tag of the object that blocked the shot, if any.
        blocked_by: Option<String>,
    },
    /// The last enemy in the roster was killed.
    RosterCleared,
}
