use glam::Mat4;
use mazewalk_render::RenderView;

/// Perspective projection parameters.
///
/// The view side comes from the simulation as eye/target/up points; this
/// type owns only what the window knows (aspect) and what the backend
/// chooses (clip planes).
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self, view: &RenderView) -> Mat4 {
        Mat4::look_at_rh(view.eye, view.target, view.up)
    }

    pub fn projection_matrix(&self, view: &RenderView) -> Mat4 {
        Mat4::perspective_rh(view.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, view: &RenderView) -> Mat4 {
        self.projection_matrix(view) * self.view_matrix(view)
    }
}
