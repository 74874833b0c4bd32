//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: all state lives in components.

pub mod camera;
pub mod hitscan;
pub mod player_movement;
pub mod pursuit;
pub mod snapshot;
