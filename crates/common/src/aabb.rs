use glam::Vec3;

/// Axis named in extent-validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Errors from geometry construction.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("box extent inverted on {axis} axis: min {min} > max {max}")]
    InvertedExtent { axis: Axis, min: f32, max: f32 },
}

/// Axis-aligned bounding box, defined by component-wise min/max corners.
///
/// `min <= max` holds per axis for every constructed value; `new` rejects
/// inverted extents so malformed authoring data fails at load time instead
/// of misbehaving inside the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Construct a box from its corners, validating `min <= max` per axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, GeometryError> {
        let axes = [
            (Axis::X, min.x, max.x),
            (Axis::Y, min.y, max.y),
            (Axis::Z, min.z, max.z),
        ];
        for (axis, lo, hi) in axes {
            if lo > hi {
                return Err(GeometryError::InvertedExtent { axis, min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Height of the top surface.
    pub fn top(&self) -> f32 {
        self.max.y
    }

    /// Clamp a point to the box, per axis.
    pub fn clamp_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Squared distance from a point to the nearest point on the box.
    /// Zero when the point is inside.
    pub fn distance_squared_to(&self, p: Vec3) -> f32 {
        self.clamp_point(p).distance_squared(p)
    }

    /// Sphere overlap test. Boundary-exclusive: a sphere exactly tangent
    /// to the box surface does not count as intersecting.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.distance_squared_to(center) < radius * radius
    }

    /// Horizontal containment of `(x, z)`, boundaries inclusive.
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.z && z <= self.max.z
    }
}
