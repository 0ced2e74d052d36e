//! wgpu render backend for the maze demo.
//!
//! Draws every platform and obstacle box as a scaled instanced unit cube
//! (the scene's box geometry IS the render geometry) plus a marker box
//! for the character, rotated to its facing angle.
//!
//! # Invariants
//! - The renderer never mutates scene or simulation state.
//! - Everything drawn derives from one frame snapshot and one view.

mod camera;
mod gpu;
mod shaders;

pub use camera::Projection;
pub use gpu::WgpuRenderer;

pub fn crate_info() -> &'static str {
    "mazewalk-render-wgpu v0.1.0"
}
