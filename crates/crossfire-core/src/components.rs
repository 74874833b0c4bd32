//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::EnemyId;

/// World-space position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Marks the player entity. Exactly one exists per session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as a member of the enemy roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
}

/// Chase behavior parameters for an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pursuer {
    /// Pursuit speed (units per second).
    pub speed: f32,
}

/// First-person camera attached to the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraRig {
    /// Rotation about +Y in radians. 0 looks down -Z.
    pub yaw: f32,
    /// Elevation in radians, positive looks up.
    pub pitch: f32,
    /// Eye position relative to the owning player.
    pub eye_offset: Vec3,
}

/// Sphere used by the headless ray query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SphereCollider {
    pub radius: f32,
}

/// Static scenery: an axis-aligned box centered on the entity position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub half_extents: Vec3,
}
