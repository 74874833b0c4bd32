//! First-person camera: mouse look and pose queries.

use glam::{Vec2, Vec3};
use hecs::World;

use crossfire_core::components::{CameraRig, Player, Position};
use crossfire_core::constants::{CAMERA_EYE_OFFSET, CAMERA_PITCH_LIMIT_DEG};
use crossfire_core::types::CameraPose;

/// Apply one tick of mouse motion to the player's camera.
///
/// Moving the mouse right turns right, moving it down looks down.
pub fn run(world: &mut World, look_delta: Vec2, sensitivity_deg: f32) {
    if !look_delta.is_finite() {
        log::warn!("ignoring non-finite look input {look_delta}");
        return;
    }
    if look_delta == Vec2::ZERO {
        return;
    }

    let limit = CAMERA_PITCH_LIMIT_DEG.to_radians();
    for (_entity, (_player, rig)) in world.query_mut::<(&Player, &mut CameraRig)>() {
        rig.yaw = (rig.yaw - (look_delta.x * sensitivity_deg).to_radians())
            .rem_euclid(std::f32::consts::TAU);
        rig.pitch = (rig.pitch - (look_delta.y * sensitivity_deg).to_radians()).clamp(-limit, limit);
    }
}

/// Unit forward vector for a yaw/pitch pair. Yaw 0, pitch 0 looks down -Z.
pub fn forward(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

/// Build a rig at `eye_offset` whose forward vector points along `direction`.
pub fn rig_looking_at(eye_offset: Vec3, direction: Vec3) -> CameraRig {
    let limit = CAMERA_PITCH_LIMIT_DEG.to_radians();
    let (yaw, pitch) = match direction.try_normalize() {
        Some(dir) => (
            (-dir.x).atan2(-dir.z).rem_euclid(std::f32::consts::TAU),
            dir.y.clamp(-1.0, 1.0).asin().clamp(-limit, limit),
        ),
        None => (0.0, 0.0),
    };
    CameraRig {
        yaw,
        pitch,
        eye_offset,
    }
}

/// Current camera pose: player position plus eye offset, looking along the rig.
pub fn pose(world: &World) -> CameraPose {
    world
        .query::<(&Player, &Position, &CameraRig)>()
        .iter()
        .next()
        .map(|(_, (_, pos, rig))| CameraPose {
            position: pos.0 + rig.eye_offset,
            forward: forward(rig.yaw, rig.pitch),
        })
        .unwrap_or(CameraPose {
            position: CAMERA_EYE_OFFSET,
            forward: Vec3::NEG_Z,
        })
}
