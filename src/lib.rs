pub mod config;
pub mod emitter;
pub mod ray;
pub mod scene;
pub mod segment;
pub mod snapshot;

pub use emitter::Emitter;
pub use ray::Ray;
pub use scene::Scene;
pub use segment::Segment;
pub use snapshot::Snapshot;

pub use macroquad::math::{vec2, Vec2};
