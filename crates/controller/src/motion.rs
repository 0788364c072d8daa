use glam::Vec3;
use walkabout_common::{CollisionWorld, PlayerBody};
use walkabout_input::InputSample;

/// Below this raw direction length a frame's movement is treated as zero.
pub const MOVE_EPSILON: f32 = 1e-3;

/// Sum the active key flags into an unnormalized move direction on the
/// current basis. Opposing keys cancel; any subset may be active at once.
pub fn move_direction(sample: &InputSample, forward: Vec3, right: Vec3) -> Vec3 {
    let mut dir = Vec3::ZERO;
    if sample.move_forward {
        dir += forward;
    }
    if sample.move_back {
        dir -= forward;
    }
    if sample.move_left {
        dir -= right;
    }
    if sample.move_right {
        dir += right;
    }
    dir
}

/// Resolve one frame of movement against the static collision world.
///
/// The direction is normalized so diagonal input moves no faster than
/// axis-aligned input, then scaled by `speed * dt` for frame-rate
/// independence. The proposed position is clamped to keep the eye at least
/// `body.height` above the ground plane, then tested against every volume.
/// Any overlap rejects the entire displacement; there is no axis sliding, so
/// a diagonal approach into a wall sticks rather than glancing along it.
///
/// Returns the committed position: the proposal when clear, the input
/// position when blocked or when the direction is effectively zero.
pub fn resolve(
    position: Vec3,
    direction: Vec3,
    speed: f32,
    dt: f32,
    body: &PlayerBody,
    world: &CollisionWorld,
) -> Vec3 {
    if direction.length() <= MOVE_EPSILON {
        return position;
    }

    let mut proposed = position + direction.normalize() * speed * dt;
    if proposed.y < body.height {
        proposed.y = body.height;
    }

    if world.intersects_any(&body.aabb_at(proposed)) {
        tracing::trace!(
            x = proposed.x,
            y = proposed.y,
            z = proposed.z,
            "move rejected by static geometry"
        );
        return position;
    }

    proposed
}
