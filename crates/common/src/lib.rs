//! Shared plain types for the walkabout prototype.
//!
//! # Invariants
//! - A `Pose`'s forward vector is always unit length.
//! - Collision volumes are axis-aligned and immutable once built.

pub mod types;

pub use types::{
    Aabb, CollisionWorld, LOOK_DISTANCE, PlayerBody, Pose, Prop, PropKind, Spawn,
};
