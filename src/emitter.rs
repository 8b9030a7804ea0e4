use crate::ray::Ray;
use crate::segment::Segment;
use macroquad::math::{vec2, Vec2};

/// The mobile agent casting a fan of rays from its current position.
///
/// The emitter integrates one velocity step per frame (no acceleration,
/// no collision response) and keeps every owned ray anchored to its
/// position. Ray order is fixed at construction; `look_at` reports hits
/// in that order.
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Current position (rays emanate from here)
    pub pos: Vec2,
    /// Per-frame displacement applied by `update`
    pub velocity: Vec2,
    /// The ray fan, in construction order
    pub rays: Vec<Ray>,
}

impl Emitter {
    /// Create an emitter with the default fan: -20° to +20° inclusive,
    /// one ray per degree (41 rays)
    pub fn new(pos: Vec2) -> Self {
        Self::with_fan(pos, -20.0, 20.0, 1.0)
    }

    /// Create an emitter with a custom angular fan. Angles are in degrees;
    /// rays are generated from `min_deg` up to and including `max_deg`.
    /// A non-positive step falls back to 1°.
    pub fn with_fan(pos: Vec2, min_deg: f32, max_deg: f32, step_deg: f32) -> Self {
        let step = if step_deg > 0.0 { step_deg } else { 1.0 };

        let mut rays = Vec::new();
        let mut a = min_deg;
        while a <= max_deg {
            rays.push(Ray::new(pos, a));
            a += step;
        }

        Emitter {
            pos,
            velocity: vec2(0.0, 0.0),
            rays,
        }
    }

    /// Rebuild an emitter from previously captured state
    pub fn from_parts(pos: Vec2, velocity: Vec2, rays: Vec<Ray>) -> Self {
        Emitter { pos, velocity, rays }
    }

    /// Advance one frame: apply velocity to the position, then anchor
    /// every ray's origin to the new position. Directions are unaffected.
    pub fn update(&mut self) {
        self.pos += self.velocity;
        for ray in &mut self.rays {
            ray.set_origin(self.pos);
        }
    }

    /// Set the per-frame velocity. Overwrites both components.
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.velocity = vec2(vx, vy);
    }

    /// Zero the velocity
    pub fn stop(&mut self) {
        self.velocity = vec2(0.0, 0.0);
    }

    /// Rotate every ray's direction by a signed angle in radians.
    /// Repeated calls accumulate.
    pub fn turn(&mut self, delta_rad: f32) {
        for ray in &mut self.rays {
            ray.rotate(delta_rad);
        }
    }

    /// Find the nearest wall hit for every ray, in ray order.
    ///
    /// Each ray is cast against every wall; the hit with the smallest
    /// distance from the emitter position wins. The comparison is strict,
    /// so on an exact distance tie the first wall in iteration order is
    /// kept. Rays that no wall stops yield `None`.
    pub fn look_at(&self, walls: &[Segment]) -> Vec<Option<Vec2>> {
        let mut hits = Vec::with_capacity(self.rays.len());

        for ray in &self.rays {
            let mut closest: Option<Vec2> = None;
            let mut record = f32::INFINITY;

            for wall in walls {
                if let Some(pt) = ray.cast(wall) {
                    let d = self.pos.distance(pt);
                    if d < record {
                        record = d;
                        closest = Some(pt);
                    }
                }
            }

            hits.push(closest);
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fan_has_41_rays() {
        let emitter = Emitter::new(vec2(250.0, 250.0));
        assert_eq!(emitter.rays.len(), 41);
    }

    #[test]
    fn test_custom_fan_bounds_inclusive() {
        let emitter = Emitter::with_fan(vec2(0.0, 0.0), -10.0, 10.0, 5.0);
        // -10, -5, 0, 5, 10
        assert_eq!(emitter.rays.len(), 5);
    }

    #[test]
    fn test_update_propagates_position_to_rays() {
        let mut emitter = Emitter::new(vec2(100.0, 100.0));
        emitter.set_velocity(1.0, 0.0);
        emitter.update();

        assert_eq!(emitter.pos, vec2(101.0, 100.0));
        for ray in &emitter.rays {
            assert_eq!(ray.pos, emitter.pos);
        }
    }

    #[test]
    fn test_stop_zeroes_velocity() {
        let mut emitter = Emitter::new(vec2(0.0, 0.0));
        emitter.set_velocity(0.0, -1.0);
        emitter.stop();
        emitter.update();

        assert_eq!(emitter.pos, vec2(0.0, 0.0));
    }

    #[test]
    fn test_set_velocity_overwrites_both_components() {
        let mut emitter = Emitter::new(vec2(0.0, 0.0));
        emitter.set_velocity(1.0, 0.0);
        emitter.set_velocity(0.0, 1.0);

        assert_eq!(emitter.velocity, vec2(0.0, 1.0));
    }

    #[test]
    fn test_no_walls_yields_all_none() {
        let emitter = Emitter::new(vec2(250.0, 250.0));
        let hits = emitter.look_at(&[]);

        assert_eq!(hits.len(), emitter.rays.len());
        assert!(hits.iter().all(|h| h.is_none()));
    }

    #[test]
    fn test_nearest_wall_wins() {
        // Single ray pointing along +x, two walls in front
        let mut emitter = Emitter::with_fan(vec2(0.0, 0.0), 0.0, 0.0, 1.0);
        assert_eq!(emitter.rays.len(), 1);
        emitter.update();

        let far = Segment::new(10.0, -5.0, 10.0, 5.0);
        let near = Segment::new(5.0, -5.0, 5.0, 5.0);

        // Far wall listed first; the near one must still win
        let hits = emitter.look_at(&[far, near]);
        let hit = hits[0].expect("ray should hit a wall");
        assert!((hit.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_turn_accumulates() {
        let mut emitter = Emitter::with_fan(vec2(0.0, 0.0), 0.0, 0.0, 1.0);
        emitter.turn(0.1);
        emitter.turn(0.1);

        let expected = Vec2::from_angle(0.2);
        let dir = emitter.rays[0].dir;
        assert!((dir.x - expected.x).abs() < 1e-5);
        assert!((dir.y - expected.y).abs() < 1e-5);
    }
}
