use crate::config::SceneConfig;
use crate::segment::Segment;

/// The static wall layout. Walls are ordered (insertion order) and
/// constant once the application is running.
#[derive(Debug, Clone)]
pub struct Scene {
    pub walls: Vec<Segment>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Scene { walls: Vec::new() }
    }

    /// Create a closed square arena with corners (0, 0) and (size, size):
    /// the four boundary walls and nothing else
    pub fn bounded(size: f32) -> Self {
        let mut scene = Scene::new();
        scene.push_boundary(size);
        scene
    }

    /// Build the scene described by the configuration: interior walls in
    /// config order, then the arena boundary
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Scene::new();

        for wall in &config.walls {
            scene.add_wall(Segment::new(wall.a[0], wall.a[1], wall.b[0], wall.b[1]));
        }

        scene.push_boundary(config.arena_size);
        scene
    }

    /// Append a wall (setup-time only; walls are never edited at runtime)
    pub fn add_wall(&mut self, wall: Segment) {
        self.walls.push(wall);
    }

    /// All walls in scene order
    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    fn push_boundary(&mut self, size: f32) {
        self.add_wall(Segment::new(0.0, 0.0, 0.0, size));
        self.add_wall(Segment::new(0.0, 0.0, size, 0.0));
        self.add_wall(Segment::new(size, size, 0.0, size));
        self.add_wall(Segment::new(size, size, size, 0.0));
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
