//! Pursuit system: every roster member closes in on the player.
//!
//! Calls the steering functions from crossfire-ai and writes the new
//! positions back into the world.

use hecs::World;

use crossfire_core::components::{Enemy, Position, Pursuer};

use crossfire_ai::pursuit::{pursue, PursuitContext};

use crate::roster;

/// Run pursuit steering over the whole roster.
pub fn run(world: &mut World, dt: f32) {
    let target = roster::player_position(world);

    for (_entity, (_enemy, pos, pursuer)) in world.query_mut::<(&Enemy, &mut Position, &Pursuer)>() {
        let update = pursue(&PursuitContext {
            position: pos.0,
            target,
            profile: (*pursuer).into(),
            dt,
        });
        if update.moved {
            pos.0 = update.new_position;
        }
    }
}
