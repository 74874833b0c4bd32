//! Fundamental geometric and simulation types.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_TAG_PREFIX, PLAYER_TAG};

/// Stable identity of an enemy actor. Rendered as `E<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl FromStr for EnemyId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('E')
            .and_then(|n| n.parse().ok())
            .map(EnemyId)
            .ok_or(())
    }
}

impl EnemyId {
    /// Ray query tag for this enemy (`enemy:E<n>`).
    pub fn tag(&self) -> String {
        format!("{ENEMY_TAG_PREFIX}{self}")
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Camera position and unit forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
}

/// One record returned by a spatial ray query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Object tag, e.g. `enemy:E1`, `player`, `scenery`.
    pub tag: String,
    /// Distance from the ray origin along the ray.
    pub distance: f32,
}

impl RayHit {
    pub fn new(tag: impl Into<String>, distance: f32) -> Self {
        Self {
            tag: tag.into(),
            distance,
        }
    }

    /// Parse the tag into a [`HitTag`].
    pub fn kind(&self) -> HitTag {
        HitTag::parse(&self.tag)
    }
}

/// What a ray hit record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTag {
    /// An enemy actor.
    Enemy(EnemyId),
    /// The shooter's own body. Rays pass through it.
    Player,
    /// Anything else. Blocks the shot.
    Scenery,
}

impl HitTag {
    /// Classify a raw tag. Malformed enemy tags count as scenery.
    pub fn parse(tag: &str) -> Self {
        if tag == PLAYER_TAG {
            return HitTag::Player;
        }
        match tag.strip_prefix(ENEMY_TAG_PREFIX).map(str::parse::<EnemyId>) {
            Some(Ok(id)) => HitTag::Enemy(id),
            _ => HitTag::Scenery,
        }
    }
}
