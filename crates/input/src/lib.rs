//! Input sampling: raw window events mapped to per-frame snapshots.
//!
//! The controller consumes [`InputSample`] values, never raw window events.
//! Any shell (desktop today, other embodiments later) feeds an
//! [`InputTracker`] and drains one sample per frame.
//!
//! # Invariants
//! - A sample is an ephemeral snapshot; deltas and press edges drain on take.
//! - Losing focus or pointer capture clears all held keys.

pub mod sample;
pub mod tracker;

pub use sample::{GameKey, InputSample};
pub use tracker::InputTracker;

pub fn crate_info() -> &'static str {
    "walkabout-input v0.1.0"
}
