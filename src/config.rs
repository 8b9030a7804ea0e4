use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub emitter: EmitterConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

#[derive(Debug, Deserialize)]
pub struct EmitterConfig {
    #[serde(default = "default_start_x")]
    pub start_x: f32,
    #[serde(default = "default_start_y")]
    pub start_y: f32,
    #[serde(default = "default_fan_min_deg")]
    pub fan_min_deg: f32,
    #[serde(default = "default_fan_max_deg")]
    pub fan_max_deg: f32,
    #[serde(default = "default_fan_step_deg")]
    pub fan_step_deg: f32,
    /// Radians applied per turn key press
    #[serde(default = "default_turn_speed")]
    pub turn_speed: f32,
    /// Pixels travelled per frame while a movement key is held
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
}

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_arena_size")]
    pub arena_size: f32,
    #[serde(default = "default_walls")]
    pub walls: Vec<WallConfig>,
}

/// One interior wall, endpoints as [x, y] pairs
#[derive(Debug, Clone, Deserialize)]
pub struct WallConfig {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

// Default values
fn default_width() -> i32 { 500 }
fn default_height() -> i32 { 500 }
fn default_bg_r() -> u8 { 0 }
fn default_bg_g() -> u8 { 0 }
fn default_bg_b() -> u8 { 0 }
fn default_start_x() -> f32 { 250.0 }
fn default_start_y() -> f32 { 250.0 }
fn default_fan_min_deg() -> f32 { -20.0 }
fn default_fan_max_deg() -> f32 { 20.0 }
fn default_fan_step_deg() -> f32 { 1.0 }
fn default_turn_speed() -> f32 { 0.1 }
fn default_move_speed() -> f32 { 1.0 }
fn default_arena_size() -> f32 { 500.0 }

fn default_walls() -> Vec<WallConfig> {
    vec![
        WallConfig { a: [300.0, 100.0], b: [300.0, 300.0] },
        WallConfig { a: [400.0, 300.0], b: [500.0, 200.0] },
        WallConfig { a: [100.0, 450.0], b: [400.0, 450.0] },
    ]
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            start_x: default_start_x(),
            start_y: default_start_y(),
            fan_min_deg: default_fan_min_deg(),
            fan_max_deg: default_fan_max_deg(),
            fan_step_deg: default_fan_step_deg(),
            turn_speed: default_turn_speed(),
            move_speed: default_move_speed(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            arena_size: default_arena_size(),
            walls: default_walls(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            emitter: EmitterConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
