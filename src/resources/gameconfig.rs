//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! target_fps = 60
//! max_frames = 1200
//!
//! [player]
//! size = 1.0
//! speed = 0.05
//! collision_radius = 0.4
//!
//! [movement]
//! sample_resolution = 8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::movementsettings::{DEFAULT_SAMPLE_RESOLUTION, MovementSettings};

/// Default safe values for startup
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAX_FRAMES: u32 = 1200;
const DEFAULT_PLAYER_SIZE: f32 = 1.0;
const DEFAULT_PLAYER_SPEED: f32 = 0.05;
const DEFAULT_COLLISION_RADIUS: f32 = DEFAULT_PLAYER_SIZE * 0.5 * 0.8;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the simulation pace, the player's logical size, speed and collision
/// radius, and the movement resolver's sample resolution.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Simulation steps per second; the step delta is `1 / target_fps`.
    pub target_fps: u32,
    /// Number of steps the headless runner simulates before stopping.
    pub max_frames: u32,
    /// Side of the player's square footprint, in world units.
    pub player_size: f32,
    /// Distance the player moves per step for each held direction.
    pub player_speed: f32,
    /// Radius of the player's collision circle.
    pub collision_radius: f32,
    /// Samples per axis in the movement resolver's containment check.
    pub sample_resolution: usize,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            max_frames: DEFAULT_MAX_FRAMES,
            player_size: DEFAULT_PLAYER_SIZE,
            player_speed: DEFAULT_PLAYER_SPEED,
            collision_radius: DEFAULT_COLLISION_RADIUS,
            sample_resolution: DEFAULT_SAMPLE_RESOLUTION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)
    }

    /// Load configuration from INI text. Used by tests and embedded configs.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    /// Parse every key into a copy first; `self` is only replaced once the
    /// whole file is valid.
    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        let mut loaded = self.clone();

        // [simulation] section
        if let Some(fps) = config.getuint("simulation", "target_fps")? {
            let fps = u32::try_from(fps)
                .map_err(|_| format!("simulation.target_fps out of range: {}", fps))?;
            if fps == 0 {
                return Err("simulation.target_fps must be > 0".to_string());
            }
            loaded.target_fps = fps;
        }
        if let Some(frames) = config.getuint("simulation", "max_frames")? {
            loaded.max_frames = u32::try_from(frames)
                .map_err(|_| format!("simulation.max_frames out of range: {}", frames))?;
        }

        // [player] section
        if let Some(size) = config.getfloat("player", "size")? {
            if size <= 0.0 {
                return Err(format!("player.size must be > 0, got {}", size));
            }
            loaded.player_size = size as f32;
        }
        if let Some(speed) = config.getfloat("player", "speed")? {
            loaded.player_speed = speed as f32;
        }
        if let Some(radius) = config.getfloat("player", "collision_radius")? {
            if radius < 0.0 {
                return Err(format!("player.collision_radius must be >= 0, got {}", radius));
            }
            loaded.collision_radius = radius as f32;
        }

        // [movement] section
        if let Some(resolution) = config.getuint("movement", "sample_resolution")? {
            if resolution == 0 {
                return Err("movement.sample_resolution must be > 0".to_string());
            }
            loaded.sample_resolution = usize::try_from(resolution).map_err(|_| {
                format!("movement.sample_resolution out of range: {}", resolution)
            })?;
        }

        *self = loaded;
        info!(
            "Loaded config: fps={}, max_frames={}, player size={}, speed={}, radius={}, samples={}",
            self.target_fps,
            self.max_frames,
            self.player_size,
            self.player_speed,
            self.collision_radius,
            self.sample_resolution
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "target_fps", Some(self.target_fps.to_string()));
        config.set("simulation", "max_frames", Some(self.max_frames.to_string()));

        // [player] section
        config.set("player", "size", Some(self.player_size.to_string()));
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set(
            "player",
            "collision_radius",
            Some(self.collision_radius.to_string()),
        );

        // [movement] section
        config.set(
            "movement",
            "sample_resolution",
            Some(self.sample_resolution.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Fixed step length in seconds.
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Movement resolver settings derived from this configuration.
    pub fn movement_settings(&self) -> MovementSettings {
        MovementSettings::with_sample_resolution(self.sample_resolution)
    }
}
