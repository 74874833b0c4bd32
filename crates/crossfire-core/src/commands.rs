//! Session commands sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::FireMode;

/// All possible out-of-band session actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Switch between edge- and level-triggered fire.
    SetFireMode { mode: FireMode },
    /// Add an enemy to the roster at the given position.
    SpawnEnemy { position: Vec3 },
}
