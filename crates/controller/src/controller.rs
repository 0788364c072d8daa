use crate::motion;
use crate::orientation::Orientation;
use glam::Vec3;
use walkabout_common::{CollisionWorld, PlayerBody, Pose, Spawn};
use walkabout_input::InputSample;

/// Tuning for the movement controller. Defaults match the prototype level
/// scale: 6 units/second walk speed, 0.0035 rad per pixel of mouse travel.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Radians of rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,
    pub body: PlayerBody,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            mouse_sensitivity: 0.0035,
            body: PlayerBody::default(),
        }
    }
}

/// First-person controller: owns the camera pose and advances it once per
/// frame from an input sample and the static collision world.
///
/// Per-frame order is fixed: orientation first (movement projects onto the
/// updated basis), then motion resolution. The reset action and malformed
/// samples short-circuit the whole frame.
#[derive(Debug, Clone)]
pub struct PlayerController {
    position: Vec3,
    orientation: Orientation,
    spawn: Spawn,
    config: ControllerConfig,
}

impl PlayerController {
    pub fn new(spawn: Spawn, config: ControllerConfig) -> Self {
        Self {
            position: spawn.position,
            orientation: Orientation::from_forward(spawn.forward),
            spawn,
            config,
        }
    }

    /// The validated camera pose for this frame. Read-only to callers; the
    /// render side derives its view transform from it.
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.orientation.forward())
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn spawn(&self) -> Spawn {
        self.spawn
    }

    /// Advance one frame.
    ///
    /// A malformed sample (NaN/Inf mouse delta or dt, negative dt) skips the
    /// frame entirely so degenerate collaborator output can never corrupt
    /// the pose. The edge-triggered reset bypasses orientation, movement,
    /// and collision.
    pub fn step(&mut self, sample: &InputSample, world: &CollisionWorld) {
        if sample.is_malformed() {
            tracing::trace!(dt = sample.dt, "skipping frame: malformed input sample");
            return;
        }

        if sample.reset_pressed {
            self.reset();
            return;
        }

        self.orientation = self.orientation.apply_look(
            sample.mouse_dx,
            sample.mouse_dy,
            self.config.mouse_sensitivity,
        );

        let direction = motion::move_direction(
            sample,
            self.orientation.forward(),
            self.orientation.right(),
        );
        self.position = motion::resolve(
            self.position,
            direction,
            self.config.move_speed,
            sample.dt,
            &self.config.body,
            world,
        );
    }

    /// Snap back to the spawn pose, unconditionally. Position, forward, and
    /// accumulated pitch all return to their load-time values.
    pub fn reset(&mut self) {
        self.position = self.spawn.position;
        self.orientation = Orientation::from_forward(self.spawn.forward);
        tracing::debug!(
            x = self.position.x,
            y = self.position.y,
            z = self.position.z,
            "pose reset to spawn"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkabout_common::Aabb;

    fn spawn() -> Spawn {
        Spawn::at(Vec3::new(0.0, 1.6, 8.0))
    }

    fn controller() -> PlayerController {
        PlayerController::new(spawn(), ControllerConfig::default())
    }

    fn crate_world() -> CollisionWorld {
        CollisionWorld::new(vec![Aabb::new(
            Vec3::new(1.5, 0.0, -4.5),
            Vec3::new(2.5, 1.5, -3.5),
        )])
    }

    fn forward_sample(dt: f32) -> InputSample {
        InputSample {
            move_forward: true,
            dt,
            ..InputSample::default()
        }
    }

    #[test]
    fn forward_frame_covers_speed_times_dt() {
        let mut c = controller();
        let before = c.pose().position;
        c.step(&forward_sample(0.016), &CollisionWorld::empty());
        let moved = (c.pose().position - before).length();
        assert!((moved - 0.096).abs() < 1e-5);
    }

    #[test]
    fn diagonal_input_does_not_exceed_axis_speed() {
        let mut c = controller();
        let before = c.pose().position;
        let sample = InputSample {
            move_forward: true,
            move_right: true,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&sample, &CollisionWorld::empty());
        let moved = (c.pose().position - before).length();
        assert!((moved - 0.096).abs() < 1e-5);
    }

    #[test]
    fn every_single_key_direction_moves_at_full_speed() {
        for flags in [
            (true, false, false, false),
            (false, true, false, false),
            (false, false, true, false),
            (false, false, false, true),
        ] {
            let mut c = controller();
            let before = c.pose().position;
            let sample = InputSample {
                move_forward: flags.0,
                move_back: flags.1,
                move_left: flags.2,
                move_right: flags.3,
                dt: 0.016,
                ..InputSample::default()
            };
            c.step(&sample, &CollisionWorld::empty());
            let moved = (c.pose().position - before).length();
            assert!((moved - 0.096).abs() < 1e-5, "flags {flags:?} moved {moved}");
        }
    }

    #[test]
    fn opposing_keys_produce_no_motion() {
        let mut c = controller();
        let before = c.pose();
        let sample = InputSample {
            move_forward: true,
            move_back: true,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&sample, &CollisionWorld::empty());
        assert_eq!(c.pose(), before);
    }

    #[test]
    fn proposal_inside_crate_leaves_position_unchanged() {
        // Spec scenario: from (2, 1.6, -2) a third of a second forward
        // proposes (2, 1.6, -4), inside the crate volume.
        let mut c = PlayerController::new(
            Spawn::at(Vec3::new(2.0, 1.6, -2.0)),
            ControllerConfig::default(),
        );
        let before = c.pose().position;
        c.step(&forward_sample(1.0 / 3.0), &crate_world());
        assert_eq!(c.pose().position, before);
    }

    #[test]
    fn walking_toward_crate_stops_at_it() {
        let mut c = controller();
        let world = crate_world();
        // Forward is -Z from x=0; the crate sits off-axis at x∈[1.5,2.5],
        // so a straight walk passes it. Aim the spawn at the crate instead.
        let mut c_aimed = PlayerController::new(
            Spawn {
                position: Vec3::new(2.0, 1.6, 8.0),
                forward: Vec3::NEG_Z,
            },
            ControllerConfig::default(),
        );
        for _ in 0..200 {
            c.step(&forward_sample(0.016), &world);
            c_aimed.step(&forward_sample(0.016), &world);
        }
        // The unobstructed walker passed the crate row; the aimed one is
        // held at the near face (z = -3.5 plus player radius).
        assert!(c.pose().position.z < -4.5);
        assert!(c_aimed.pose().position.z > -3.5);
        assert!(c_aimed.pose().position.z < -3.0);
    }

    #[test]
    fn diagonal_approach_sticks_instead_of_sliding() {
        // A slide response would commit the lateral component of this move;
        // full rejection discards it too, so the player sticks.
        let mut c = PlayerController::new(
            Spawn {
                position: Vec3::new(2.0, 1.6, -3.0),
                forward: Vec3::NEG_Z,
            },
            ControllerConfig::default(),
        );
        let before = c.pose().position;
        let sample = InputSample {
            move_forward: true,
            move_right: true,
            dt: 0.1,
            ..InputSample::default()
        };
        c.step(&sample, &crate_world());
        assert_eq!(c.pose().position, before);
    }

    #[test]
    fn empty_world_always_commits() {
        let mut c = controller();
        for _ in 0..100 {
            c.step(&forward_sample(0.016), &CollisionWorld::empty());
        }
        assert!((c.pose().position.z - (8.0 - 100.0 * 0.096)).abs() < 1e-3);
    }

    #[test]
    fn look_then_move_uses_updated_basis() {
        let mut c = controller();
        // Yaw a quarter turn: forward swings from -Z to -X under the
        // positive-dx-counterclockwise convention.
        let quarter_turn_dx = std::f32::consts::FRAC_PI_2 / 0.0035;
        let look = InputSample {
            mouse_dx: quarter_turn_dx,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&look, &CollisionWorld::empty());
        assert!((c.pose().forward - Vec3::NEG_X).length() < 1e-4);

        let before = c.pose().position;
        c.step(&forward_sample(0.016), &CollisionWorld::empty());
        let delta = c.pose().position - before;
        assert!(delta.x < 0.0);
        assert!(delta.z.abs() < 1e-5);
    }

    #[test]
    fn look_and_move_in_same_frame_projects_onto_new_basis() {
        let mut c = controller();
        let quarter_turn_dx = std::f32::consts::FRAC_PI_2 / 0.0035;
        let sample = InputSample {
            move_forward: true,
            mouse_dx: quarter_turn_dx,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&sample, &CollisionWorld::empty());
        let delta = c.pose().position - spawn().position;
        // Movement followed the frame's fresh forward (-X), not the stale one.
        assert!((delta.x + 0.096).abs() < 1e-4);
        assert!(delta.z.abs() < 1e-4);
    }

    #[test]
    fn reset_restores_spawn_pose() {
        let mut c = controller();
        for _ in 0..50 {
            let sample = InputSample {
                move_forward: true,
                mouse_dx: 40.0,
                mouse_dy: -25.0,
                dt: 0.016,
                ..InputSample::default()
            };
            c.step(&sample, &CollisionWorld::empty());
        }
        assert_ne!(c.pose(), spawn().pose());

        let reset = InputSample {
            reset_pressed: true,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&reset, &CollisionWorld::empty());
        assert_eq!(c.pose(), spawn().pose());
    }

    #[test]
    fn reset_works_immediately_after_rejected_move() {
        let mut c = PlayerController::new(
            Spawn {
                position: Vec3::new(2.0, 1.6, -2.0),
                forward: Vec3::NEG_Z,
            },
            ControllerConfig::default(),
        );
        let world = crate_world();
        c.step(&forward_sample(1.0 / 3.0), &world);

        let reset = InputSample {
            reset_pressed: true,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&reset, &world);
        assert_eq!(c.pose().position, Vec3::new(2.0, 1.6, -2.0));
        assert_eq!(c.pose().forward, Vec3::NEG_Z);
    }

    #[test]
    fn reset_bypasses_collision() {
        // Spawn inside a volume: reset must still land exactly there.
        let world = CollisionWorld::new(vec![Aabb::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 2.0, 1.0),
        )]);
        let mut c = PlayerController::new(
            Spawn::at(Vec3::new(0.0, 1.6, 0.0)),
            ControllerConfig::default(),
        );
        let reset = InputSample {
            reset_pressed: true,
            dt: 0.016,
            ..InputSample::default()
        };
        c.step(&reset, &world);
        assert_eq!(c.pose().position, Vec3::new(0.0, 1.6, 0.0));
    }

    #[test]
    fn malformed_samples_leave_state_untouched() {
        let mut c = controller();
        let before = c.pose();
        for sample in [
            InputSample {
                move_forward: true,
                dt: f32::NAN,
                ..InputSample::default()
            },
            InputSample {
                mouse_dx: f32::INFINITY,
                dt: 0.016,
                ..InputSample::default()
            },
            InputSample {
                mouse_dy: f32::NAN,
                dt: 0.016,
                ..InputSample::default()
            },
            InputSample {
                move_forward: true,
                dt: -1.0,
                ..InputSample::default()
            },
        ] {
            c.step(&sample, &CollisionWorld::empty());
            assert_eq!(c.pose(), before);
        }
    }

    #[test]
    fn forward_is_unit_after_every_frame() {
        let mut c = controller();
        let world = crate_world();
        for i in 0..500 {
            let sample = InputSample {
                move_forward: i % 2 == 0,
                move_left: i % 3 == 0,
                mouse_dx: (i % 50) as f32 - 25.0,
                mouse_dy: (i % 30) as f32 - 15.0,
                dt: 0.016,
                ..InputSample::default()
            };
            c.step(&sample, &world);
            assert!((c.pose().forward.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_dt_frame_does_not_move() {
        let mut c = controller();
        let before = c.pose();
        c.step(&forward_sample(0.0), &CollisionWorld::empty());
        assert_eq!(c.pose().position, before.position);
    }
}
