//! Simulation core: collision-aware movement, orbit camera, frame clock.
//!
//! # Invariants
//! - After every step the character's collision sphere lies outside every
//!   obstacle box (the spawn point is validated at construction).
//! - All per-frame mutation flows through `Simulation::step`, which
//!   consumes one input snapshot and one timestamp and returns one
//!   frame-coherent output snapshot.
//! - Stepping is deterministic: the same scene, inputs, and timestamps
//!   produce the same frames.

mod camera;
mod character;
mod clock;
mod simulation;

pub use camera::{CameraRig, OrbitCamera};
pub use character::{Character, facing_degrees};
pub use clock::FrameClock;
pub use simulation::{Frame, SimError, Simulation};

pub fn crate_info() -> &'static str {
    "mazewalk-sim v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("sim"));
    }
}
