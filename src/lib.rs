//! Meteor Defense - A wave-based click-to-destroy arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, wave director, hit resolution, session)
//! - `audio`: Sound effect sink the session reports to
//! - `highscores`: Best score tracking over a storage backend
//! - `persistence`: Single-word high score storage
//! - `settings`: Session configuration and difficulty presets

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, NullAudio, RecordingAudio, SoundEffect};
pub use highscores::HighScore;
pub use settings::{ConfigError, Difficulty, SessionConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield width (screen space, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    /// Asteroids crossing this line cost a life
    pub const BASE_LINE_Y: f32 = 680.0;
    /// Power-ups past this line are recycled silently
    pub const POWERUP_FLOOR_Y: f32 = 690.0;
    /// Spawn row, just above the visible area
    pub const SPAWN_Y: f32 = -30.0;
    /// Horizontal inset of the spawn band from each edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Asteroid defaults
    pub const BASE_SPEED: f32 = 150.0;
    pub const SPEED_STEP: f32 = 25.0;
    pub const BASE_HIT_POINTS: u32 = 1;
    pub const BASE_POINTS: u32 = 100;
    pub const POINT_STEP: u32 = 50;
    /// Rotation rate magnitude range (degrees/sec)
    pub const MIN_ROTATION_RATE: f32 = 30.0;
    pub const MAX_ROTATION_RATE: f32 = 90.0;
    /// Duration of the red hit flash (seconds)
    pub const HIT_FLASH_DURATION: f32 = 0.15;
    /// Click radius for a scale 1.0 asteroid
    pub const CLICK_RADIUS: f32 = 35.0;

    /// Spawn cadence (seconds)
    pub const BASE_SPAWN_INTERVAL: f32 = 1.5;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.4;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.1;
    /// Time between wave advances (seconds)
    pub const WAVE_INTERVAL: f32 = 20.0;

    /// Power-up defaults
    pub const POWERUP_DRIFT_SPEED: f32 = 65.0;
    pub const POWERUP_CLICK_RADIUS: f32 = 22.0;

    /// Explosion burst lifetime (seconds)
    pub const EXPLOSION_DURATION: f32 = 0.6;
}

/// Euclidean distance test without the square root
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) <= radius * radius
}
