use crate::emitter::Emitter;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::segment::Segment;
use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;

/// Serializable record of the running simulation: wall layout, emitter
/// state (including per-ray directions, so accumulated rotation survives
/// a round trip) and the hit list of the captured frame.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub walls: Vec<WallData>,
    pub emitter: EmitterData,
    /// One entry per ray, `null` where the ray hit nothing
    pub hits: Vec<Option<[f32; 2]>>,
}

/// Wall endpoints as [x, y] pairs
#[derive(Debug, Serialize, Deserialize)]
pub struct WallData {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

/// Minimal emitter state for capture/restore
#[derive(Debug, Serialize, Deserialize)]
pub struct EmitterData {
    pub pos: [f32; 2],
    pub velocity: [f32; 2],
    pub ray_dirs: Vec<[f32; 2]>,
}

impl Snapshot {
    /// Capture the current simulation state
    pub fn capture(scene: &Scene, emitter: &Emitter, hits: &[Option<Vec2>]) -> Self {
        let walls = scene
            .walls
            .iter()
            .map(|wall| WallData {
                a: [wall.a.x, wall.a.y],
                b: [wall.b.x, wall.b.y],
            })
            .collect();

        let emitter_data = EmitterData {
            pos: [emitter.pos.x, emitter.pos.y],
            velocity: [emitter.velocity.x, emitter.velocity.y],
            ray_dirs: emitter.rays.iter().map(|r| [r.dir.x, r.dir.y]).collect(),
        };

        let hit_data = hits.iter().map(|h| h.map(|p| [p.x, p.y])).collect();

        Snapshot {
            walls,
            emitter: emitter_data,
            hits: hit_data,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize snapshot: {}", e))
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = self.to_json()?;

        fs::write(path, json).map_err(|e| format!("Failed to write snapshot file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read snapshot file: {}", e))?;

        let snapshot: Snapshot =
            serde_json::from_str(&json).map_err(|e| format!("Failed to parse snapshot: {}", e))?;

        Ok(snapshot)
    }

    /// Rebuild the scene and emitter from this snapshot
    pub fn restore(&self) -> (Scene, Emitter) {
        let mut scene = Scene::new();
        for wall in &self.walls {
            scene.add_wall(Segment::new(wall.a[0], wall.a[1], wall.b[0], wall.b[1]));
        }

        let pos = vec2(self.emitter.pos[0], self.emitter.pos[1]);
        let rays = self
            .emitter
            .ray_dirs
            .iter()
            .map(|d| Ray {
                pos,
                dir: vec2(d[0], d[1]),
            })
            .collect();

        let emitter = Emitter::from_parts(
            pos,
            vec2(self.emitter.velocity[0], self.emitter.velocity[1]),
            rays,
        );

        (scene, emitter)
    }
}
