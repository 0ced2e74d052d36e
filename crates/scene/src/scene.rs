use glam::Vec3;
use mazewalk_common::{Aabb, GeometryError};
use serde::{Deserialize, Serialize};

/// Errors from scene construction.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("{collection} box {index} is malformed: {source}")]
    InvalidBox {
        collection: &'static str,
        index: usize,
        source: GeometryError,
    },
}

/// Raw corner pair for one box, as authored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxData {
    pub min: Vec3,
    pub max: Vec3,
}

/// Raw scene description: the serializable authoring form.
///
/// The demo layout is hardcoded (see [`crate::maze`]), but this type keeps
/// the seam open for loading a layout from a config file without touching
/// the query contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub platforms: Vec<BoxData>,
    pub obstacles: Vec<BoxData>,
}

/// The static collision scene.
///
/// Platforms are walkable: their top surface defines a snap height for any
/// point inside their horizontal extent. Obstacles block horizontal
/// movement entirely and never affect vertical position.
#[derive(Debug, Clone)]
pub struct Scene {
    platforms: Vec<Aabb>,
    obstacles: Vec<Aabb>,
}

impl Scene {
    /// Build a scene from already-validated boxes.
    pub fn new(platforms: Vec<Aabb>, obstacles: Vec<Aabb>) -> Self {
        Self { platforms, obstacles }
    }

    /// Validate raw authoring data into a scene, failing fast on the first
    /// malformed box instead of carrying it into the frame loop.
    pub fn from_data(data: SceneData) -> Result<Self, SceneError> {
        let platforms = validate_boxes("platform", &data.platforms)?;
        let obstacles = validate_boxes("obstacle", &data.obstacles)?;
        tracing::debug!(
            platforms = platforms.len(),
            obstacles = obstacles.len(),
            "scene validated"
        );
        Ok(Self::new(platforms, obstacles))
    }

    pub fn platforms(&self) -> &[Aabb] {
        &self.platforms
    }

    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    /// True iff a sphere at `center` overlaps any obstacle box.
    ///
    /// Linear scan; fine at this fixed, hand-authored scale. A spatial
    /// index could replace it behind the same contract if the scene grew.
    pub fn blocked(&self, center: Vec3, radius: f32) -> bool {
        self.obstacles
            .iter()
            .any(|b| b.intersects_sphere(center, radius))
    }

    /// Top height of the highest platform whose horizontal extent contains
    /// `(x, z)`, or `None` when no platform is underfoot.
    ///
    /// The highest top wins so a character walking onto an elevated pad
    /// snaps up instead of falling through to a lower surface.
    pub fn highest_platform_at(&self, x: f32, z: f32) -> Option<f32> {
        self.platforms
            .iter()
            .filter(|p| p.contains_xz(x, z))
            .map(|p| p.top())
            .reduce(f32::max)
    }
}

impl TryFrom<SceneData> for Scene {
    type Error = SceneError;

    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        Self::from_data(data)
    }
}

fn validate_boxes(collection: &'static str, raw: &[BoxData]) -> Result<Vec<Aabb>, SceneError> {
    raw.iter()
        .enumerate()
        .map(|(index, b)| {
            Aabb::new(b.min, b.max).map_err(|source| SceneError::InvalidBox {
                collection,
                index,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(min: (f32, f32, f32), max: (f32, f32, f32)) -> BoxData {
        BoxData {
            min: Vec3::from(min),
            max: Vec3::from(max),
        }
    }

    fn scene_with(platforms: Vec<BoxData>, obstacles: Vec<BoxData>) -> Scene {
        Scene::from_data(SceneData { platforms, obstacles }).unwrap()
    }

    #[test]
    fn from_data_rejects_malformed_box() {
        let data = SceneData {
            platforms: vec![span((0.0, 0.0, 0.0), (1.0, 1.0, 1.0))],
            obstacles: vec![span((2.0, 0.0, 0.0), (1.0, 1.0, 1.0))],
        };
        let err = Scene::from_data(data).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("obstacle box 0"));
    }

    #[test]
    fn blocked_matches_any_obstacle() {
        let scene = scene_with(
            vec![],
            vec![
                span((0.0, 0.0, 0.0), (1.0, 2.0, 1.0)),
                span((5.0, 0.0, 0.0), (6.0, 2.0, 1.0)),
            ],
        );
        assert!(scene.blocked(Vec3::new(1.3, 0.5, 0.5), 0.5));
        assert!(scene.blocked(Vec3::new(4.7, 0.5, 0.5), 0.5));
        assert!(!scene.blocked(Vec3::new(3.0, 0.5, 0.5), 0.5));
    }

    #[test]
    fn blocked_is_boundary_exclusive() {
        let scene = scene_with(vec![], vec![span((0.0, 0.0, 0.0), (1.0, 2.0, 1.0))]);
        // Exactly tangent to the +x face: not blocked.
        assert!(!scene.blocked(Vec3::new(1.5, 0.5, 0.5), 0.5));
    }

    #[test]
    fn obstacles_never_affect_empty_scene() {
        let scene = scene_with(vec![], vec![]);
        assert!(!scene.blocked(Vec3::ZERO, 10.0));
        assert!(scene.highest_platform_at(0.0, 0.0).is_none());
    }

    #[test]
    fn highest_platform_tie_breaks_upward() {
        let scene = scene_with(
            vec![
                span((-5.0, 0.0, -5.0), (5.0, 1.0, 5.0)),
                span((-2.0, 1.5, -2.0), (2.0, 2.0, 2.0)),
            ],
            vec![],
        );
        // Both platforms contain the origin; the higher top wins.
        assert_eq!(scene.highest_platform_at(0.0, 0.0), Some(2.0));
        // Outside the raised pad only the ground remains.
        assert_eq!(scene.highest_platform_at(4.0, 4.0), Some(1.0));
    }

    #[test]
    fn no_platform_underfoot_returns_none() {
        let scene = scene_with(vec![span((0.0, 0.0, 0.0), (1.0, 1.0, 1.0))], vec![]);
        assert!(scene.highest_platform_at(3.0, 3.0).is_none());
    }

    #[test]
    fn platform_extent_is_inclusive() {
        let scene = scene_with(vec![span((0.0, 0.0, 0.0), (1.0, 1.0, 1.0))], vec![]);
        assert_eq!(scene.highest_platform_at(1.0, 1.0), Some(1.0));
        assert_eq!(scene.highest_platform_at(0.0, 0.0), Some(1.0));
    }
}
