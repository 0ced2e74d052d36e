use glam::Vec2;

use crate::pointer::PointerTracker;

/// A directional movement key, independent of any window toolkit's
/// key codes. The shell maps raw codes to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

/// Pressed state of the four movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Back => self.back = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Frame-coherent input sample handed to the simulation once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub keys: MoveKeys,
    /// Accumulated raw pointer delta since the last snapshot.
    pub pointer_delta: Vec2,
    /// Accumulated scroll delta since the last snapshot.
    pub scroll: f32,
    /// Exit was requested at some point this session.
    pub exit: bool,
}

/// Per-frame input collector fed by the window shell.
///
/// Event handlers only record here; nothing downstream sees a partial
/// update. `snapshot` drains the accumulated deltas, so a frame's camera
/// computation works from exactly the motion that arrived since the
/// previous frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys: MoveKeys,
    tracker: PointerTracker,
    pointer_delta: Vec2,
    scroll: f32,
    exit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement key edge.
    pub fn key(&mut self, key: MoveKey, pressed: bool) {
        self.keys.set(key, pressed);
    }

    /// Record an absolute pointer position sample.
    pub fn pointer_sample(&mut self, position: Vec2) {
        self.pointer_delta += self.tracker.sample(position);
    }

    /// Record a relative pointer motion (toolkits that report deltas
    /// directly bypass the tracker).
    pub fn pointer_motion(&mut self, delta: Vec2) {
        self.pointer_delta += delta;
    }

    /// Record a scroll step.
    pub fn scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Latch the exit request. Checked once per frame loop iteration.
    pub fn request_exit(&mut self) {
        tracing::debug!("exit requested");
        self.exit = true;
    }

    /// Drain the frame's accumulated input. Key state and the exit latch
    /// persist; deltas reset to zero.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            keys: self.keys,
            pointer_delta: self.pointer_delta,
            scroll: self.scroll,
            exit: self.exit,
        };
        self.pointer_delta = Vec2::ZERO;
        self.scroll = 0.0;
        snap
    }
}
