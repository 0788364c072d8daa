/// A game action key, independent of any physical keyboard layout.
///
/// The desktop shell maps winit key codes onto these; the tracker and the
/// controller never see platform key types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Forward,
    Back,
    Left,
    Right,
    Reset,
}

/// Per-frame input snapshot consumed by the movement controller.
///
/// Constructed fresh each frame by [`InputTracker::take_sample`] and
/// discarded after use.
///
/// [`InputTracker::take_sample`]: crate::tracker::InputTracker::take_sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    pub move_forward: bool,
    pub move_back: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Mouse travel since the previous frame, in pixels.
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    /// Edge-triggered: true only on the frame the reset key went down.
    pub reset_pressed: bool,
    /// Elapsed time since the previous frame, in seconds.
    pub dt: f32,
}

impl InputSample {
    /// A sample the controller must skip: non-finite mouse delta or dt, or a
    /// negative dt. Raw input collaborators can emit degenerate values
    /// (first-frame zero dt, huge dt after a stall); zero dt is fine, but
    /// NaN/Inf must never reach the pose.
    pub fn is_malformed(&self) -> bool {
        !self.mouse_dx.is_finite()
            || !self.mouse_dy.is_finite()
            || !self.dt.is_finite()
            || self.dt < 0.0
    }

    /// True if any movement key is active this frame.
    pub fn has_movement(&self) -> bool {
        self.move_forward || self.move_back || self.move_left || self.move_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_is_well_formed() {
        let sample = InputSample::default();
        assert!(!sample.is_malformed());
        assert!(!sample.has_movement());
    }

    #[test]
    fn nan_delta_is_malformed() {
        let sample = InputSample {
            mouse_dx: f32::NAN,
            ..InputSample::default()
        };
        assert!(sample.is_malformed());
    }

    #[test]
    fn infinite_dt_is_malformed() {
        let sample = InputSample {
            dt: f32::INFINITY,
            ..InputSample::default()
        };
        assert!(sample.is_malformed());
    }

    #[test]
    fn negative_dt_is_malformed() {
        let sample = InputSample {
            dt: -0.016,
            ..InputSample::default()
        };
        assert!(sample.is_malformed());
    }

    #[test]
    fn zero_dt_is_well_formed() {
        let sample = InputSample {
            dt: 0.0,
            ..InputSample::default()
        };
        assert!(!sample.is_malformed());
    }
}
