use arboard::Clipboard;
use lightcast::config::Config;
use lightcast::{Emitter, Scene, Snapshot};
use macroquad::prelude::*;

/// Application state: configuration, the static scene and the emitter,
/// plus the hit list computed for the current frame
struct AppState {
    config: Config,
    scene: Scene,
    emitter: Emitter,
    hits: Vec<Option<Vec2>>,
}

impl AppState {
    fn new(config: Config) -> Self {
        let scene = Scene::from_config(&config.scene);
        let emitter = Emitter::with_fan(
            vec2(config.emitter.start_x, config.emitter.start_y),
            config.emitter.fan_min_deg,
            config.emitter.fan_max_deg,
            config.emitter.fan_step_deg,
        );
        let hits = emitter.look_at(&scene.walls);

        AppState {
            config,
            scene,
            emitter,
            hits,
        }
    }

    fn handle_input(&mut self) {
        let speed = self.config.emitter.move_speed;
        let turn_speed = self.config.emitter.turn_speed;

        // Arrow keys set an axis-aligned velocity; each press overwrites
        // both components, so movement is never diagonal
        if is_key_pressed(KeyCode::Left) {
            self.emitter.set_velocity(-speed, 0.0);
        } else if is_key_pressed(KeyCode::Right) {
            self.emitter.set_velocity(speed, 0.0);
        } else if is_key_pressed(KeyCode::Up) {
            self.emitter.set_velocity(0.0, -speed);
        } else if is_key_pressed(KeyCode::Down) {
            self.emitter.set_velocity(0.0, speed);
        }

        // Releasing any arrow stops the emitter, even if another arrow
        // is still held
        if is_key_released(KeyCode::Left)
            || is_key_released(KeyCode::Right)
            || is_key_released(KeyCode::Up)
            || is_key_released(KeyCode::Down)
        {
            self.emitter.stop();
        }

        if is_key_pressed(KeyCode::A) {
            self.emitter.turn(-turn_speed);
        }
        if is_key_pressed(KeyCode::D) {
            self.emitter.turn(turn_speed);
        }

        if is_key_pressed(KeyCode::C) {
            self.copy_to_clipboard();
        }
        if is_key_pressed(KeyCode::S) {
            self.save_snapshot();
        }
    }

    /// Advance the simulation one frame and recompute the hit list
    fn tick(&mut self) {
        self.emitter.update();
        self.hits = self.emitter.look_at(&self.scene.walls);
    }

    fn draw(&self) {
        let window = &self.config.window;
        clear_background(Color::from_rgba(
            window.background_r,
            window.background_g,
            window.background_b,
            255,
        ));

        for wall in &self.scene.walls {
            draw_line(wall.a.x, wall.a.y, wall.b.x, wall.b.y, 1.0, WHITE);
        }

        // One line per ray, from the emitter to its nearest hit;
        // rays that hit nothing draw nothing
        for hit in &self.hits {
            if let Some(pt) = hit {
                draw_line(self.emitter.pos.x, self.emitter.pos.y, pt.x, pt.y, 1.0, WHITE);
            }
        }

        let hit_count = self.hits.iter().filter(|h| h.is_some()).count();
        draw_text(
            &format!(
                "Emitter: ({:.0}, {:.0})  Rays: {}  Hits: {}",
                self.emitter.pos.x,
                self.emitter.pos.y,
                self.emitter.rays.len(),
                hit_count
            ),
            10.0,
            20.0,
            20.0,
            WHITE,
        );
        draw_text(
            "Arrows: move  A/D: turn  C: copy snapshot  S: save snapshot  Esc: quit",
            10.0,
            40.0,
            20.0,
            WHITE,
        );
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.scene, &self.emitter, &self.hits)
    }

    fn copy_to_clipboard(&self) {
        let json = match self.snapshot().to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&json) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Snapshot copied to clipboard!");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn save_snapshot(&self) {
        match self.snapshot().save_to_file("snapshot.json") {
            Ok(()) => println!("Snapshot saved to snapshot.json"),
            Err(e) => eprintln!("{}", e),
        }
    }
}

#[macroquad::main("Lightcast - 2D Ray Casting")]
async fn main() {
    let config = Config::load();
    request_new_screen_size(config.window.width as f32, config.window.height as f32);

    let mut state = AppState::new(config);

    loop {
        state.handle_input();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.tick();
        state.draw();

        next_frame().await
    }
}
