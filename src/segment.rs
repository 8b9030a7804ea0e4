use macroquad::math::{vec2, Vec2};

/// A wall: a finite line segment between two points.
/// Endpoints never change after construction; degenerate segments
/// (a == b) are not rejected but produce no intersections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point of the wall
    pub a: Vec2,
    /// End point of the wall
    pub b: Vec2,
}

impl Segment {
    /// Create a segment from endpoint coordinates
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Segment {
            a: vec2(x1, y1),
            b: vec2(x2, y2),
        }
    }

    /// Create a segment from two points
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Segment { a, b }
    }
}
