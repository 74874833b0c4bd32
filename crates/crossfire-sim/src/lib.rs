//! Simulation engine for Crossfire.
//!
//! Owns the hecs ECS world (player, camera, enemy roster, scenery), runs
//! systems at a fixed tick, resolves hitscan shots against a spatial ray
//! query and produces `SessionSnapshot`s for the driver.

pub mod engine;
pub mod roster;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use crossfire_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use scene::{RayQuery, SceneGeometry};
