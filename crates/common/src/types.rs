use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Distance from the camera position to the derived look target.
pub const LOOK_DISTANCE: f32 = 1.0;

/// Camera pose: a position plus a unit-length look direction.
///
/// Owned exclusively by the movement controller and mutated once per frame.
/// Renderers read it and derive the view transform; they never write it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Pose {
    /// Build a pose, normalizing `forward`. A degenerate (near-zero) forward
    /// falls back to `-Z` rather than producing NaN components.
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        let forward = forward.try_normalize().unwrap_or(Vec3::NEG_Z);
        Self { position, forward }
    }

    /// The point the camera looks at, a fixed distance along the forward axis.
    pub fn target(&self) -> Vec3 {
        self.position + self.forward * LOOK_DISTANCE
    }
}

/// Axis-aligned bounding box defined by min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Separating-axis test for axis-aligned boxes: the boxes intersect iff
    /// their extents overlap on all three axes simultaneously. Touching faces
    /// count as an intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// The static collision volumes of a loaded level.
///
/// Built once at level load and never mutated during play, so any number of
/// readers may share it without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionWorld {
    boxes: Vec<Aabb>,
}

impl CollisionWorld {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    /// A world with no volumes; movement against it is unconditional.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// True if the probe box overlaps any volume in the world.
    pub fn intersects_any(&self, probe: &Aabb) -> bool {
        self.boxes.iter().any(|b| b.intersects(probe))
    }
}

/// Capsule-approximated player collision volume, expressed as an AABB
/// centered on the feet: horizontal half-extent `radius`, vertical extent
/// `[eye_y - height, eye_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    pub radius: f32,
    pub height: f32,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            radius: 0.3,
            height: 1.6,
        }
    }
}

impl PlayerBody {
    /// The player's collision box when the eye sits at `position`.
    pub fn aabb_at(&self, position: Vec3) -> Aabb {
        Aabb::new(
            Vec3::new(
                position.x - self.radius,
                position.y - self.height,
                position.z - self.radius,
            ),
            Vec3::new(position.x + self.radius, position.y, position.z + self.radius),
        )
    }
}

/// Kind of prop placed in a level. Unknown kinds still load and collide;
/// renderers draw them as a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    Crate,
    Tree,
    #[serde(other)]
    Unknown,
}

/// A placed object in the level. Static for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Vec3,
    pub scale: f32,
}

impl Prop {
    /// The prop's collision volume: a box centered on the placement with
    /// horizontal half-extent `0.5 * scale` and height `1.5 * scale` rising
    /// from the placement's base.
    pub fn collision_box(&self) -> Aabb {
        let half = 0.5 * self.scale;
        Aabb::new(
            Vec3::new(
                self.position.x - half,
                self.position.y,
                self.position.z - half,
            ),
            Vec3::new(
                self.position.x + half,
                self.position.y + 1.5 * self.scale,
                self.position.z + half,
            ),
        )
    }
}

/// Fixed reference pose used on level load and by the reset action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Spawn {
    /// Spawn at a position with the default look direction (`-Z`), matching
    /// the level format which stores spawn position only.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            forward: Vec3::NEG_Z,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_target_is_along_forward() {
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z);
        assert_eq!(pose.target(), Vec3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn pose_normalizes_forward() {
        let pose = Pose::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
        assert!((pose.forward.length() - 1.0).abs() < 1e-6);
        assert_eq!(pose.forward, Vec3::NEG_Z);
    }

    #[test]
    fn pose_guards_zero_forward() {
        let pose = Pose::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(pose.forward, Vec3::NEG_Z);
    }

    #[test]
    fn aabb_overlap_on_all_axes() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn aabb_separated_on_one_axis_does_not_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        // Overlaps on X and Y, separated on Z
        let b = Aabb::new(Vec3::new(0.5, 0.5, 2.0), Vec3::new(1.5, 1.5, 3.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn aabb_touching_faces_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn collision_world_probe() {
        let world = CollisionWorld::new(vec![
            Aabb::new(Vec3::new(1.5, 0.0, -4.5), Vec3::new(2.5, 1.5, -3.5)),
        ]);
        let body = PlayerBody::default();
        assert!(world.intersects_any(&body.aabb_at(Vec3::new(2.0, 1.6, -4.0))));
        assert!(!world.intersects_any(&body.aabb_at(Vec3::new(0.0, 1.6, 8.0))));
    }

    #[test]
    fn empty_world_never_intersects() {
        let world = CollisionWorld::empty();
        let probe = Aabb::new(Vec3::splat(-100.0), Vec3::splat(100.0));
        assert!(!world.intersects_any(&probe));
        assert!(world.is_empty());
    }

    #[test]
    fn player_body_box_hangs_from_eye() {
        let body = PlayerBody::default();
        let b = body.aabb_at(Vec3::new(0.0, 1.6, 0.0));
        assert_eq!(b.min, Vec3::new(-0.3, 0.0, -0.3));
        assert_eq!(b.max, Vec3::new(0.3, 1.6, 0.3));
    }

    #[test]
    fn prop_collision_box_scales() {
        let prop = Prop {
            kind: PropKind::Tree,
            position: Vec3::new(-3.0, 0.0, 6.0),
            scale: 1.5,
        };
        let b = prop.collision_box();
        assert_eq!(b.min, Vec3::new(-3.75, 0.0, 5.25));
        assert_eq!(b.max, Vec3::new(-2.25, 2.25, 6.75));
    }

    #[test]
    fn spawn_pose_defaults_to_minus_z() {
        let spawn = Spawn::at(Vec3::new(0.0, 1.6, 8.0));
        let pose = spawn.pose();
        assert_eq!(pose.forward, Vec3::NEG_Z);
        assert_eq!(pose.target(), Vec3::new(0.0, 1.6, 7.0));
    }
}
