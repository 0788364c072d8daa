//! wgpu render backend for the walkabout prototype.
//!
//! Renders a grid floor, instanced cubes for level props, and optional
//! collision-box wireframes. The view transform is derived from the
//! controller's pose each frame; all geometry is built once at load because
//! props never move.
//!
//! # Invariants
//! - The renderer never mutates the pose or the level.
//! - The camera is driven by the controller; no look/move logic lives here.

mod camera;
mod gpu;
mod shaders;

pub use camera::CameraLens;
pub use gpu::WgpuRenderer;
