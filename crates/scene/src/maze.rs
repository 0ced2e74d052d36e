use glam::Vec3;

use crate::scene::{BoxData, SceneData};

fn span(min: (f32, f32, f32), max: (f32, f32, f32)) -> BoxData {
    BoxData {
        min: Vec3::from(min),
        max: Vec3::from(max),
    }
}

/// The hand-authored demo layout: a 40x40 walled court with two raised
/// pads and a set of interior corridor walls.
///
/// Returns raw data so callers validate it through `Scene::try_from` at
/// startup like any other layout source.
pub fn maze() -> SceneData {
    let platforms = vec![
        // ground slab
        span((-20.0, -0.1, -20.0), (20.0, 0.0, 20.0)),
        // raised pads, reachable by walking onto them
        span((-12.0, 0.6, 6.0), (-4.0, 1.6, 10.0)),
        span((6.0, 1.1, -8.0), (12.0, 2.1, -2.0)),
    ];

    let obstacles = vec![
        // boundary walls; the spawn corner at (-17, -17) stays clear
        span((-19.5, 0.0, -19.5), (-18.5, 2.5, 19.5)),
        span((18.5, 0.0, -19.5), (19.5, 2.5, 19.5)),
        span((-19.5, 0.0, 18.5), (19.5, 2.5, 19.5)),
        span((-19.5, 0.0, -19.5), (19.5, 2.5, -18.5)),
        // interior walls forming the corridors
        span((-12.0, 0.0, -12.0), (-11.0, 2.2, 6.0)),
        span((-6.0, 0.0, -6.0), (6.0, 2.0, -5.0)),
        span((5.0, 0.0, -3.0), (6.0, 2.0, 13.0)),
        span((-2.0, 0.0, 2.0), (10.0, 2.0, 3.0)),
        span((-10.0, 0.0, 7.5), (-0.5, 2.2, 8.5)),
        span((-4.0, 0.0, 4.0), (-3.0, 2.0, 14.0)),
        span((2.0, 0.0, 10.0), (4.0, 1.6, 12.0)),
        span((-8.0, 0.0, -3.0), (-6.5, 1.6, -1.0)),
    ];

    SceneData { platforms, obstacles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn maze_data_validates() {
        let scene = Scene::try_from(maze()).unwrap();
        assert_eq!(scene.platforms().len(), 3);
        assert_eq!(scene.obstacles().len(), 12);
    }

    #[test]
    fn spawn_corner_is_open() {
        let scene = Scene::try_from(maze()).unwrap();
        assert!(!scene.blocked(Vec3::new(-17.0, 0.0, -17.0), 0.5));
    }

    #[test]
    fn ground_covers_spawn_corner() {
        let scene = Scene::try_from(maze()).unwrap();
        assert_eq!(scene.highest_platform_at(-17.0, -17.0), Some(0.0));
    }

    #[test]
    fn raised_pads_sit_above_ground() {
        let scene = Scene::try_from(maze()).unwrap();
        assert_eq!(scene.highest_platform_at(-8.0, 8.0), Some(1.6));
        assert_eq!(scene.highest_platform_at(9.0, -5.0), Some(2.1));
    }

    #[test]
    fn west_boundary_wall_blocks() {
        let scene = Scene::try_from(maze()).unwrap();
        // Pushing toward x = -19 from the spawn corner runs into the wall.
        assert!(scene.blocked(Vec3::new(-19.0, 0.0, -17.0), 0.5));
    }
}
