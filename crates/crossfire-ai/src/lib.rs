//! Enemy AI for Crossfire.
//!
//! Implements pursuit steering: each enemy walks straight at the player
//! at a fixed speed.

pub mod pursuit;

pub use crossfire_core as core;

#[cfg(test)]
mod tests;
