//! Per-tick input samples.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Device state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// Strafe (x, +right) and walk (y, +forward) axes in [-1, 1].
    #[serde(default)]
    pub move_axes: Vec2,
    /// Relative mouse motion in counts since the last sample.
    #[serde(default)]
    pub look_delta: Vec2,
    /// Whether the fire button is currently held.
    #[serde(default)]
    pub fire_pressed: bool,
}

impl InputSample {
    /// A sample with no movement, no look and the trigger released.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A sample with only the trigger held.
    pub fn fire() -> Self {
        Self {
            fire_pressed: true,
            ..Self::default()
        }
    }

    /// A sample with only movement.
    pub fn walk(x: f32, y: f32) -> Self {
        Self {
            move_axes: Vec2::new(x, y),
            ..Self::default()
        }
    }
}
