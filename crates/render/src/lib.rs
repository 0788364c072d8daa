//! Renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the pose and the level; they never mutate either.
//! - No rendering call originates inside the movement controller.

pub mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "walkabout-render v0.1.0"
}
