use lightcast::config::SceneConfig;
use lightcast::{Scene, Vec2};

pub const EPS: f32 = 1e-4;

/// Assert two points are equal within tolerance
pub fn assert_point_near(actual: Vec2, expected: Vec2, eps: f32) {
    let d = actual.distance(expected);
    if d > eps {
        panic!(
            "point ({}, {}) not within {} of expected ({}, {})",
            actual.x, actual.y, eps, expected.x, expected.y
        );
    }
}

/// The reference scene: three interior walls inside the closed
/// 500x500 arena (seven walls total)
pub fn reference_scene() -> Scene {
    Scene::from_config(&SceneConfig::default())
}
