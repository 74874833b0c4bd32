//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Systems run every tick.
    #[default]
    Active,
    /// Ticks are no-ops until resumed.
    Paused,
    /// Every enemy has been defeated. Ticks are no-ops until an enemy spawns.
    Cleared,
}

/// How the fire input turns into shots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FireMode {
    /// One shot per press (not-pressed -> pressed transition).
    #[default]
    Edge,
    /// One shot every tick the button is held.
    Level,
}
