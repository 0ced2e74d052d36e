//! Static collision scene: platform and obstacle box collections.
//!
//! # Invariants
//! - Both collections are immutable after construction; populated once at
//!   startup, read every frame.
//! - Every box passed validation (`min <= max` per axis) at load time.
//! - Queries are read-only and total.

mod maze;
mod scene;

pub use maze::maze;
pub use scene::{BoxData, Scene, SceneData, SceneError};

pub fn crate_info() -> &'static str {
    "mazewalk-scene v0.1.0"
}
