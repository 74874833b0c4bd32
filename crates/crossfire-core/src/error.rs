//! Errors surfaced by external collaborators and by the simulation itself.

use glam::Vec3;
use thiserror::Error;

/// Failure reported by the scene (ray query) or input layer.
///
/// The simulation never retries: the tick is aborted and the error is
/// handed to the driver unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollaboratorError {
    /// The ray has a zero-length or non-finite direction, or a non-finite origin.
    #[error("malformed ray: origin {origin}, direction {direction}")]
    MalformedRay { origin: Vec3, direction: Vec3 },
    /// The spatial ray query failed for another reason.
    #[error("ray query failed: {0}")]
    RayQuery(String),
    /// The input device layer failed to produce a sample.
    #[error("input device failed: {0}")]
    Input(String),
}

/// A session setup or roster request the simulation refuses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("{field} must be {expected}, got {value}")]
    InvalidConfig {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("spawn position {0} is not finite")]
    NonFiniteSpawn(Vec3),
}
