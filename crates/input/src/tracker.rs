use crate::sample::{GameKey, InputSample};
use std::collections::HashSet;

/// Accumulates raw input between frames and drains it into per-frame samples.
///
/// Held keys persist across frames; mouse deltas and press edges accumulate
/// until [`take_sample`] drains them. Mouse motion is only recorded while the
/// pointer is captured, so cursor travel over menus never turns the camera.
///
/// [`take_sample`]: InputTracker::take_sample
#[derive(Debug, Default)]
pub struct InputTracker {
    held: HashSet<GameKey>,
    pressed: HashSet<GameKey>,
    mouse_dx: f32,
    mouse_dy: f32,
    pointer_captured: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. A press only registers as an edge if the key
    /// was not already held (key repeat does not re-trigger).
    pub fn key_event(&mut self, key: GameKey, down: bool) {
        if down {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Accumulate mouse travel. Ignored while the pointer is not captured.
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.pointer_captured {
            self.mouse_dx += dx;
            self.mouse_dy += dy;
        }
    }

    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Capture or release the pointer. Releasing clears held keys so nothing
    /// stays stuck while the window cannot see key-up events.
    pub fn set_pointer_captured(&mut self, captured: bool) {
        self.pointer_captured = captured;
        if !captured {
            self.clear();
        }
    }

    /// Drop all transient state. Called on focus loss.
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        tracing::trace!("input state cleared");
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    /// Snapshot this frame's input and drain the accumulated deltas and
    /// press edges. Held movement keys are left in place.
    pub fn take_sample(&mut self, dt: f32) -> InputSample {
        let sample = InputSample {
            move_forward: self.held.contains(&GameKey::Forward),
            move_back: self.held.contains(&GameKey::Back),
            move_left: self.held.contains(&GameKey::Left),
            move_right: self.held.contains(&GameKey::Right),
            mouse_dx: self.mouse_dx,
            mouse_dy: self.mouse_dy,
            reset_pressed: self.pressed.contains(&GameKey::Reset),
            dt,
        };
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        self.pressed.clear();
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_survive_sampling() {
        let mut tracker = InputTracker::new();
        tracker.key_event(GameKey::Forward, true);

        let s1 = tracker.take_sample(0.016);
        let s2 = tracker.take_sample(0.016);
        assert!(s1.move_forward);
        assert!(s2.move_forward);

        tracker.key_event(GameKey::Forward, false);
        let s3 = tracker.take_sample(0.016);
        assert!(!s3.move_forward);
    }

    #[test]
    fn press_edge_fires_once() {
        let mut tracker = InputTracker::new();
        tracker.key_event(GameKey::Reset, true);

        assert!(tracker.take_sample(0.016).reset_pressed);
        // Still held, but the edge has been consumed
        assert!(!tracker.take_sample(0.016).reset_pressed);

        // Key repeat while held does not re-trigger
        tracker.key_event(GameKey::Reset, true);
        assert!(!tracker.take_sample(0.016).reset_pressed);

        // Release and press again fires a new edge
        tracker.key_event(GameKey::Reset, false);
        tracker.key_event(GameKey::Reset, true);
        assert!(tracker.take_sample(0.016).reset_pressed);
    }

    #[test]
    fn mouse_deltas_accumulate_and_drain() {
        let mut tracker = InputTracker::new();
        tracker.set_pointer_captured(true);
        tracker.mouse_motion(3.0, -1.0);
        tracker.mouse_motion(2.0, 1.5);

        let sample = tracker.take_sample(0.016);
        assert_eq!(sample.mouse_dx, 5.0);
        assert_eq!(sample.mouse_dy, 0.5);

        let next = tracker.take_sample(0.016);
        assert_eq!(next.mouse_dx, 0.0);
        assert_eq!(next.mouse_dy, 0.0);
    }

    #[test]
    fn mouse_ignored_without_capture() {
        let mut tracker = InputTracker::new();
        tracker.mouse_motion(100.0, 100.0);
        let sample = tracker.take_sample(0.016);
        assert_eq!(sample.mouse_dx, 0.0);
        assert_eq!(sample.mouse_dy, 0.0);
    }

    #[test]
    fn releasing_capture_clears_held_keys() {
        let mut tracker = InputTracker::new();
        tracker.set_pointer_captured(true);
        tracker.key_event(GameKey::Forward, true);
        assert!(tracker.is_held(GameKey::Forward));

        tracker.set_pointer_captured(false);
        assert!(!tracker.is_held(GameKey::Forward));
        assert!(!tracker.take_sample(0.016).move_forward);
    }
}
