//! Hitscan resolution: cast the camera ray, kill the enemy it lands on.
//!
//! Hits are inspected nearest-first. The shooter's own body and enemies
//! that already left the roster let the ray through; anything else is
//! decisive. A decisive enemy is removed from the roster, a decisive
//! piece of scenery blocks the shot.

use hecs::World;

use crossfire_core::error::CollaboratorError;
use crossfire_core::types::{CameraPose, EnemyId, HitTag, RayHit};

use crate::roster;
use crate::scene::RayQuery;

/// Result of one shot.
#[derive(Debug, Clone, PartialEq)]
pub enum ShotOutcome {
    /// The enemy was hit and removed from the roster.
    Hit { enemy: EnemyId, distance: f32 },
    /// Nothing decisive was hit, or scenery blocked the ray.
    Miss { blocked_by: Option<String> },
}

/// Cast a ray along the camera's forward vector and resolve it against the roster.
///
/// Query failures are returned unchanged and leave the roster untouched.
pub fn fire<Q: RayQuery + ?Sized>(
    query: &mut Q,
    pose: CameraPose,
    world: &mut World,
) -> Result<ShotOutcome, CollaboratorError> {
    let hits = query.query_ray(pose.position, pose.forward)?;
    Ok(resolve(hits, world))
}

/// Walk a nearest-first hit sequence and apply the first decisive hit.
pub fn resolve(hits: impl IntoIterator<Item = RayHit>, world: &mut World) -> ShotOutcome {
    for hit in hits {
        match hit.kind() {
            HitTag::Player => continue,
            HitTag::Enemy(id) => {
                if roster::remove_enemy(world, id) {
                    return ShotOutcome::Hit {
                        enemy: id,
                        distance: hit.distance,
                    };
                }
                // Already dead this tick (e.g. a stale scene): not a target.
                log::debug!("ray passed through {id}, no longer in the roster");
            }
            HitTag::Scenery => {
                return ShotOutcome::Miss {
                    blocked_by: Some(hit.tag),
                };
            }
        }
    }

    ShotOutcome::Miss { blocked_by: None }
}
