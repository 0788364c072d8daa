use walkabout_common::Pose;
use walkabout_level::LevelData;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the loaded level and the frame's camera pose, then
/// produces output. Pose truth is controller-owned; the level is immutable.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the level as seen from the given pose.
    fn render(&self, level: &LevelData, pose: &Pose) -> Self::Output;
}

/// Text renderer for CLI output and tests.
///
/// Produces a human-readable description of the scene: the camera pose, its
/// derived target, and every prop placement.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, level: &LevelData, pose: &Pose) -> String {
        let mut out = String::new();
        let t = pose.target();
        out.push_str(&format!(
            "Camera: pos=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2})\n",
            pose.position.x, pose.position.y, pose.position.z, t.x, t.y, t.z
        ));
        out.push_str(&format!("Props: {}\n", level.props.len()));

        for prop in &level.props {
            let b = prop.collision_box();
            out.push_str(&format!(
                "  {:?} at ({:.2}, {:.2}, {:.2}) scale={:.2} box=({:.2}..{:.2}, {:.2}..{:.2}, {:.2}..{:.2})\n",
                prop.kind,
                prop.position.x,
                prop.position.y,
                prop.position.z,
                prop.scale,
                b.min.x,
                b.max.x,
                b.min.y,
                b.max.y,
                b.min.z,
                b.max.z,
            ));
        }

        out
    }
}
