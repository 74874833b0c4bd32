//! Core types and definitions for the Crossfire combat core.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input samples, state snapshots, events, errors
//! and constants. It has no dependency on a renderer or an ECS runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
