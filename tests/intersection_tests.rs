mod common;

use common::{assert_point_near, EPS};
use lightcast::{vec2, Ray, Segment};

#[test]
fn perpendicular_hit_lands_on_wall() {
    let ray = Ray::new(vec2(0.0, 0.0), 0.0);
    let wall = Segment::new(5.0, -5.0, 5.0, 5.0);

    let hit = ray.cast(&wall).expect("ray should hit the wall");
    assert_point_near(hit, vec2(5.0, 0.0), EPS);
}

#[test]
fn wall_behind_origin_is_not_hit() {
    let ray = Ray::new(vec2(0.0, 0.0), 0.0);
    let wall = Segment::new(-5.0, -5.0, -5.0, 5.0);

    assert!(ray.cast(&wall).is_none());
}

#[test]
fn parallel_wall_is_not_hit() {
    let ray = Ray::new(vec2(0.0, 0.0), 0.0);
    let wall = Segment::new(0.0, 1.0, 5.0, 1.0);

    assert!(ray.cast(&wall).is_none());
}

#[test]
fn colinear_wall_is_not_hit() {
    // The wall lies on the ray's own line: den == 0, no point is reported
    let ray = Ray::new(vec2(0.0, 0.0), 0.0);
    let wall = Segment::new(2.0, 0.0, 8.0, 0.0);

    assert!(ray.cast(&wall).is_none());
}

#[test]
fn shared_corner_of_two_walls_is_invisible() {
    // Two walls joined at (5, 0); a ray through the joint grazes the
    // end of one wall (t == 1) and the start of the other (t == 0),
    // and neither reports a hit
    let ray = Ray::new(vec2(0.0, 0.0), 0.0);
    let upper = Segment::new(5.0, -5.0, 5.0, 0.0);
    let lower = Segment::new(5.0, 0.0, 5.0, 5.0);

    assert!(ray.cast(&upper).is_none());
    assert!(ray.cast(&lower).is_none());
}

#[test]
fn diagonal_hit_lands_at_known_point() {
    // 45 degree ray against the wall from (0, 10) to (10, 0)
    let ray = Ray::new(vec2(0.0, 0.0), 45.0);
    let wall = Segment::new(0.0, 10.0, 10.0, 0.0);

    let hit = ray.cast(&wall).expect("ray should hit the wall");
    assert_point_near(hit, vec2(5.0, 5.0), 1e-3);
}

#[test]
fn range_is_unbounded() {
    let ray = Ray::new(vec2(0.0, 0.0), 0.0);
    let wall = Segment::new(100_000.0, -5.0, 100_000.0, 5.0);

    let hit = ray.cast(&wall).expect("distant wall should still be hit");
    assert_point_near(hit, vec2(100_000.0, 0.0), 1.0);
}

#[test]
fn rotated_ray_hits_the_wall_it_now_faces() {
    // Start facing +x, rotate a quarter turn to face +y (screen down)
    let mut ray = Ray::new(vec2(0.0, 0.0), 0.0);
    ray.rotate(std::f32::consts::FRAC_PI_2);

    let side_wall = Segment::new(5.0, -5.0, 5.0, 5.0);
    let floor_wall = Segment::new(-5.0, 5.0, 5.0, 5.0);

    assert!(ray.cast(&side_wall).is_none());
    let hit = ray.cast(&floor_wall).expect("ray should hit the wall below");
    assert_point_near(hit, vec2(0.0, 5.0), 1e-3);
}
