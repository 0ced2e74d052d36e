use glam::{Vec2, Vec3};

/// Pitch limit in degrees, keeping the orbit short of the poles.
const PITCH_LIMIT: f32 = 89.0;
/// Orbit distance bounds in world units.
const DISTANCE_MIN: f32 = 1.2;
const DISTANCE_MAX: f32 = 10.0;

/// Third-person orbit camera: yaw/pitch/distance parametrize the eye's
/// position around a tracked target. The gaze is NOT derived from
/// yaw/pitch; it always points at the target (see [`CameraRig::front`]).
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Yaw around +Y in degrees. Unbounded; trig wraps it naturally.
    pub yaw_deg: f32,
    /// Pitch in degrees, clamped to [-89, 89].
    pub pitch_deg: f32,
    /// Eye distance from the target, clamped to [1.2, 10.0].
    pub distance: f32,
    /// Degrees of yaw/pitch per pointer pixel.
    pub sensitivity: f32,
    /// Distance change per scroll step.
    pub zoom_rate: f32,
    /// Vertical offset of the look-at target above the tracked object,
    /// approximating eye height.
    pub target_height: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw_deg: -90.0,
            pitch_deg: 12.0,
            distance: 3.0,
            sensitivity: 0.12,
            zoom_rate: 0.4,
            target_height: 0.8,
        }
    }
}

impl OrbitCamera {
    /// Apply a raw screen-space pointer delta. Vertical motion is
    /// inverted so moving the pointer up pitches the camera up.
    pub fn apply_pointer_delta(&mut self, delta: Vec2) {
        self.yaw_deg += delta.x * self.sensitivity;
        self.pitch_deg =
            (self.pitch_deg - delta.y * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a scroll step; scrolling up brings the eye closer.
    pub fn apply_scroll(&mut self, delta: f32) {
        self.distance = (self.distance - delta * self.zoom_rate).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Horizontal heading for camera-relative movement.
    pub fn heading(&self) -> Vec3 {
        let yaw_rad = self.yaw_deg.to_radians();
        Vec3::new(yaw_rad.cos(), 0.0, yaw_rad.sin()).normalize()
    }

    /// Derive this frame's camera placement around the tracked object.
    pub fn rig(&self, object_position: Vec3) -> CameraRig {
        let forward = self.heading();
        let height = self.distance * self.pitch_deg.to_radians().sin();
        CameraRig {
            eye: object_position - forward * self.distance + Vec3::new(0.0, height, 0.0),
            target: object_position + Vec3::new(0.0, self.target_height, 0.0),
            up: Vec3::Y,
        }
    }
}

/// Camera placement for one frame: semantic points and vectors, not
/// matrices. View-matrix construction belongs to the render backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraRig {
    /// Gaze direction, recomputed from eye and target so the camera
    /// always frames the object regardless of the orbit parameters.
    pub fn front(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }
}
