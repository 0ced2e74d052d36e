use glam::Vec3;
use mazewalk_input::InputSnapshot;
use mazewalk_scene::Scene;

use crate::camera::OrbitCamera;
use crate::character::{Character, DEFAULT_RADIUS, DEFAULT_SPEED, facing_degrees};
use crate::clock::FrameClock;

/// Errors from simulation construction.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(
        "spawn position ({x}, {y}, {z}) intersects an obstacle within radius {radius}; \
         move the spawn point to free space"
    )]
    SpawnBlocked { x: f32, y: f32, z: f32, radius: f32 },
}

/// Frame-coherent output snapshot handed to the renderer.
///
/// Everything the render subsystem needs for one frame lives here; the
/// renderer never reaches back into mutable simulation state.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Character world position, for placing the mesh.
    pub position: Vec3,
    /// Model yaw in degrees, facing camera-relative forward.
    pub facing_deg: f32,
    /// Camera eye position.
    pub eye: Vec3,
    /// Camera look-at target.
    pub target: Vec3,
    /// Camera up vector.
    pub up: Vec3,
    /// Seconds covered by this frame.
    pub dt: f32,
    /// Exit was requested; the loop should wind down.
    pub exit: bool,
}

/// All per-frame mutable state in one owned struct.
///
/// One logical thread drives `step` once per frame: input snapshot in,
/// frame snapshot out. Nothing here is shared, so there is no tearing
/// between input arrival and the frame's camera computation.
#[derive(Debug)]
pub struct Simulation {
    character: Character,
    camera: OrbitCamera,
    clock: FrameClock,
}

impl Simulation {
    /// Default spawn: an open corner of the demo maze.
    pub const SPAWN: Vec3 = Vec3::new(-17.0, 0.0, -17.0);

    /// Simulation with the default character at the default spawn.
    pub fn new(scene: &Scene) -> Result<Self, SimError> {
        Self::with_spawn(scene, Self::SPAWN)
    }

    /// Simulation spawning at an authored position. Fails fast when the
    /// spawn point already intersects an obstacle, rather than letting a
    /// corrupt position leak into the frame loop.
    pub fn with_spawn(scene: &Scene, spawn: Vec3) -> Result<Self, SimError> {
        let character = Character::new(spawn, DEFAULT_RADIUS, DEFAULT_SPEED);
        if scene.blocked(spawn, character.radius()) {
            return Err(SimError::SpawnBlocked {
                x: spawn.x,
                y: spawn.y,
                z: spawn.z,
                radius: character.radius(),
            });
        }
        tracing::info!(x = spawn.x, y = spawn.y, z = spawn.z, "simulation ready");
        Ok(Self {
            character,
            camera: OrbitCamera::default(),
            clock: FrameClock::new(),
        })
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Re-seed the clock so the next `step` sees a zero-length first
    /// frame. Shells call this right before entering the loop.
    pub fn start_clock(&mut self, now: f64) {
        self.clock = FrameClock::started_at(now);
    }

    /// Advance one frame: tick the clock, fold the input deltas into the
    /// camera state, move the character against the scene, derive the
    /// camera rig. Strictly sequential; the returned [`Frame`] is the
    /// only thing the renderer sees.
    pub fn step(&mut self, scene: &Scene, input: &InputSnapshot, now: f64) -> Frame {
        let dt = self.clock.tick(now);

        self.camera.apply_pointer_delta(input.pointer_delta);
        self.camera.apply_scroll(input.scroll);

        self.character
            .advance(scene, input.keys, self.camera.yaw_deg, dt);

        let rig = self.camera.rig(self.character.position());
        Frame {
            position: self.character.position(),
            facing_deg: facing_degrees(self.camera.yaw_deg),
            eye: rig.eye,
            target: rig.target,
            up: rig.up,
            dt,
            exit: input.exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use mazewalk_input::{InputSnapshot, MoveKeys};
    use mazewalk_scene::maze;

    fn demo_scene() -> Scene {
        Scene::try_from(maze()).unwrap()
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    #[test]
    fn default_spawn_is_valid_in_the_demo_maze() {
        let scene = demo_scene();
        let sim = Simulation::new(&scene).unwrap();
        assert_eq!(sim.character().position(), Simulation::SPAWN);
    }

    #[test]
    fn spawn_inside_a_wall_is_rejected() {
        let scene = demo_scene();
        let err = Simulation::with_spawn(&scene, Vec3::new(-19.0, 0.0, 0.0)).unwrap_err();
        assert!(err.to_string().contains("spawn position"));
    }

    #[test]
    fn idle_step_leaves_position_and_snaps_to_ground() {
        let scene = demo_scene();
        let mut sim = Simulation::new(&scene).unwrap();
        sim.start_clock(0.0);
        let frame = sim.step(&scene, &idle(), 0.016);
        assert_eq!(frame.position, Simulation::SPAWN);
        assert!((frame.dt - 0.016).abs() < 1e-6);
        assert!(!frame.exit);
    }

    #[test]
    fn held_key_walks_frame_by_frame() {
        let scene = demo_scene();
        let mut sim = Simulation::new(&scene).unwrap();
        sim.start_clock(0.0);
        let input = InputSnapshot {
            keys: MoveKeys {
                back: true,
                ..MoveKeys::default()
            },
            ..InputSnapshot::default()
        };
        let mut now = 0.0;
        for _ in 0..10 {
            now += 0.1;
            sim.step(&scene, &input, now);
        }
        // One second of walking +z at 4 units/sec from the spawn corner.
        let p = sim.character().position();
        assert!((p.z - -13.0).abs() < 1e-3);
        assert_eq!(p.x, -17.0);
    }

    #[test]
    fn sliding_along_the_west_wall() {
        let scene = demo_scene();
        let mut sim = Simulation::new(&scene).unwrap();
        sim.start_clock(0.0);
        let input = InputSnapshot {
            keys: MoveKeys {
                back: true,
                left: true,
                ..MoveKeys::default()
            },
            ..InputSnapshot::default()
        };
        let mut now = 0.0;
        for _ in 0..20 {
            now += 0.05;
            let frame = sim.step(&scene, &input, now);
            assert!(!scene.blocked(frame.position, sim.character().radius()));
        }
        let p = sim.character().position();
        // Pressed into the wall: x pinned at tangent range, z kept moving.
        assert!(p.x >= -18.001);
        assert!(p.z > -16.5);
    }

    #[test]
    fn pointer_and_scroll_fold_into_the_camera_each_step() {
        let scene = demo_scene();
        let mut sim = Simulation::new(&scene).unwrap();
        sim.start_clock(0.0);
        let input = InputSnapshot {
            pointer_delta: Vec2::new(50.0, -25.0),
            scroll: 2.0,
            ..InputSnapshot::default()
        };
        sim.step(&scene, &input, 0.016);
        let cam = sim.camera();
        assert!((cam.yaw_deg - (-90.0 + 6.0)).abs() < 1e-4);
        assert!((cam.pitch_deg - 15.0).abs() < 1e-4);
        assert!((cam.distance - 2.2).abs() < 1e-5);
    }

    #[test]
    fn frame_carries_a_consistent_camera_rig() {
        let scene = demo_scene();
        let mut sim = Simulation::new(&scene).unwrap();
        sim.start_clock(0.0);
        let frame = sim.step(&scene, &idle(), 0.016);
        let rig = sim.camera().rig(frame.position);
        assert_eq!(frame.eye, rig.eye);
        assert_eq!(frame.target, rig.target);
        assert_eq!(frame.up, Vec3::Y);
        assert_eq!(frame.facing_deg, facing_degrees(sim.camera().yaw_deg));
    }

    #[test]
    fn exit_flag_passes_through() {
        let scene = demo_scene();
        let mut sim = Simulation::new(&scene).unwrap();
        let input = InputSnapshot {
            exit: true,
            ..InputSnapshot::default()
        };
        assert!(sim.step(&scene, &input, 0.016).exit);
    }

    #[test]
    fn steps_are_deterministic() {
        let scene = demo_scene();
        let mut a = Simulation::new(&scene).unwrap();
        let mut b = Simulation::new(&scene).unwrap();
        let input = InputSnapshot {
            keys: MoveKeys {
                forward: true,
                right: true,
                ..MoveKeys::default()
            },
            pointer_delta: Vec2::new(3.0, 1.0),
            ..InputSnapshot::default()
        };
        for i in 1..=50 {
            let now = i as f64 * 0.016;
            let fa = a.step(&scene, &input, now);
            let fb = b.step(&scene, &input, now);
            assert_eq!(fa.position, fb.position);
            assert_eq!(fa.eye, fb.eye);
        }
    }
}
