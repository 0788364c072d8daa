//! First-person movement controller: per-frame orientation update, motion
//! resolution against static collision volumes, and reset-to-spawn.
//!
//! The controller is a pure per-frame transform over
//! `(pose, input sample, collision world)`. It never reads the window, the
//! GPU, or the clock, which is what makes it deterministic and unit-testable
//! without a live render context.
//!
//! # Invariants
//! - The forward vector is unit length after every frame.
//! - A frame either commits a fully validated pose or leaves it untouched.
//! - Malformed input (NaN/Inf/negative dt) is absorbed as a no-op frame.

pub mod controller;
pub mod motion;
pub mod orientation;

pub use controller::{ControllerConfig, PlayerController};
pub use orientation::Orientation;

pub fn crate_info() -> &'static str {
    "walkabout-controller v0.1.0"
}
