use glam::{Quat, Vec3};

/// World up axis. Yaw rotates about this; pitch rotates about the derived
/// right axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Accumulated pitch is clamped to ±89 degrees (in radians) so repeated
/// vertical mouse travel can never flip the view upside-down.
pub const PITCH_LIMIT: f32 = 1.553_343;

/// Look orientation: a unit forward vector plus explicitly tracked
/// accumulated pitch.
///
/// Pitch is accumulated rather than re-derived from the vector each frame so
/// the clamp saturates exactly instead of drifting with float error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    forward: Vec3,
    pitch: f32,
}

impl Orientation {
    /// Build an orientation from a look direction. Normalizes the input; a
    /// degenerate direction falls back to `-Z`. Initial pitch is derived once
    /// from the vertical component.
    pub fn from_forward(forward: Vec3) -> Self {
        let forward = forward.try_normalize().unwrap_or(Vec3::NEG_Z);
        Self {
            forward,
            pitch: forward.y.clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Lateral movement axis. The pitch clamp keeps forward away from
    /// vertical, so the cross product stays well-conditioned; the fallback
    /// only guards hand-built orientations.
    pub fn right(&self) -> Vec3 {
        self.forward
            .cross(WORLD_UP)
            .try_normalize()
            .unwrap_or(Vec3::X)
    }

    /// Apply one frame of mouse look.
    ///
    /// Sign convention (fixed and tested): positive `dx` yaws by a positive
    /// angle about `+Y`, turning the view counterclockwise seen from above;
    /// positive `dy` pitches the view down. Yaw is applied first, then pitch
    /// about the right axis of the *yawed* (pre-pitch) forward, so the two
    /// compose without introducing roll.
    ///
    /// A delta of exactly (0, 0) returns `self` unchanged, bit for bit.
    pub fn apply_look(&self, dx: f32, dy: f32, sensitivity: f32) -> Orientation {
        if dx == 0.0 && dy == 0.0 {
            return *self;
        }

        let yaw = dx * sensitivity;
        // The applied pitch is the clamped accumulator delta, not the raw
        // request: once saturated, further travel in that direction is lost.
        let clamped = (self.pitch - dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let pitch = clamped - self.pitch;

        let yawed = Quat::from_axis_angle(WORLD_UP, yaw) * self.forward;
        let Some(right) = yawed.cross(WORLD_UP).try_normalize() else {
            // Forward collinear with up; pitch has no defined axis this frame.
            return Orientation {
                forward: yawed.normalize(),
                pitch: self.pitch,
            };
        };

        let forward = (Quat::from_axis_angle(right, pitch) * yawed).normalize();
        Orientation {
            forward,
            pitch: clamped,
        }
    }
}
