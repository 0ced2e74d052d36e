use glam::Vec3;
use mazewalk_scene::Scene;
use mazewalk_sim::Frame;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Camera up vector.
    pub up: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl RenderView {
    pub const DEFAULT_FOV: f32 = 45.0;

    /// View for a simulation frame: the camera rig the step derived.
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            eye: frame.eye,
            target: frame.target,
            up: frame.up,
            fov_degrees: Self::DEFAULT_FOV,
        }
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: Self::DEFAULT_FOV,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the static scene, one frame snapshot, and a view
/// configuration, then produces output. It never mutates either input.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, scene: &Scene, frame: &Frame, view: &RenderView) -> Self::Output;
}

/// Debug text renderer: a human-readable dump of the frame.
///
/// Useful for CLI output, logging, and exercising the render interface
/// without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, frame: &Frame, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (dt={:.4}s{}) ===\n",
            frame.dt,
            if frame.exit { ", exit" } else { "" }
        ));
        out.push_str(&format!(
            "Character: pos=({:.2}, {:.2}, {:.2}) facing={:.1} deg\n",
            frame.position.x, frame.position.y, frame.position.z, frame.facing_deg
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        ));
        out.push_str(&format!(
            "Scene: {} platforms, {} obstacles\n",
            scene.platforms().len(),
            scene.obstacles().len()
        ));

        for (i, p) in scene.platforms().iter().enumerate() {
            out.push_str(&format!(
                "  platform[{i}] top={:.2} min=({:.1}, {:.1}, {:.1}) max=({:.1}, {:.1}, {:.1})\n",
                p.top(),
                p.min().x,
                p.min().y,
                p.min().z,
                p.max().x,
                p.max().y,
                p.max().z,
            ));
        }

        out
    }
}
