use crate::segment::Segment;
use macroquad::math::{vec2, Vec2};

/// A directed half-line probing for the nearest wall.
/// The origin is rewritten every frame to follow the owning emitter;
/// the direction accumulates rotation across `rotate` calls.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin of the half-line
    pub pos: Vec2,
    /// Direction of the half-line (unit length at construction)
    pub dir: Vec2,
}

impl Ray {
    /// Create a ray at `origin` pointing at `angle_deg` degrees
    /// (0° along the positive x-axis)
    pub fn new(origin: Vec2, angle_deg: f32) -> Self {
        Ray {
            pos: origin,
            dir: Vec2::from_angle(angle_deg.to_radians()),
        }
    }

    /// Move the ray's origin (direction is unaffected)
    pub fn set_origin(&mut self, new_pos: Vec2) {
        self.pos = new_pos;
    }

    /// Rotate the direction in place by a signed angle in radians
    pub fn rotate(&mut self, delta_rad: f32) {
        self.dir = Vec2::from_angle(delta_rad).rotate(self.dir);
    }

    /// Intersect this ray with a wall segment.
    ///
    /// The wall is `a + t * (b - a)` with `0 < t < 1` (endpoints excluded),
    /// the ray is `pos + u * dir` with `u > 0` (origin excluded, range
    /// unbounded). Parallel or coincident lines yield no intersection, as
    /// does a zero-length direction (`den` is 0 in both cases).
    pub fn cast(&self, wall: &Segment) -> Option<Vec2> {
        let x1 = wall.a.x;
        let y1 = wall.a.y;
        let x2 = wall.b.x;
        let y2 = wall.b.y;

        let x3 = self.pos.x;
        let y3 = self.pos.y;
        let x4 = self.pos.x + self.dir.x;
        let y4 = self.pos.y + self.dir.y;

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        if t > 0.0 && t < 1.0 && u > 0.0 {
            Some(vec2(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }
}
