//! Crossfire headless driver.
//!
//! Wires the simulation engine to an input source, paces ticks, and
//! releases every acquired collaborator when the loop ends.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod session;

pub use crossfire_core as core;
