use glam::{Mat4, Vec3};
use walkabout_common::Pose;

/// Projection parameters for the first-person view.
///
/// The pose (position + look direction) is controller-owned; the lens only
/// adds what rendering needs on top of it.
pub struct CameraLens {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraLens {
    fn default() -> Self {
        Self {
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraLens {
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self, pose: &Pose) -> Mat4 {
        Mat4::look_at_rh(pose.position, pose.target(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, pose: &Pose) -> Mat4 {
        self.projection_matrix() * self.view_matrix(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lens_produces_valid_matrix() {
        let lens = CameraLens::default();
        let pose = Pose::new(Vec3::new(0.0, 1.6, 8.0), Vec3::NEG_Z);
        let vp = lens.view_projection(&pose);
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn view_follows_pose() {
        let lens = CameraLens::default();
        let a = lens.view_matrix(&Pose::new(Vec3::new(0.0, 1.6, 8.0), Vec3::NEG_Z));
        let b = lens.view_matrix(&Pose::new(Vec3::new(5.0, 1.6, 8.0), Vec3::NEG_Z));
        assert_ne!(a, b);
    }

    #[test]
    fn aspect_tracks_resize() {
        let mut lens = CameraLens::default();
        lens.set_aspect(1280, 720);
        assert!((lens.aspect - 1280.0 / 720.0).abs() < 1e-6);
        // Degenerate height clamps instead of dividing by zero
        lens.set_aspect(1280, 0);
        assert!(lens.aspect.is_finite());
    }
}
