//! Session configuration and difficulty presets
//!
//! Static configuration consumed when a session starts. Loaded from JSON; any
//! field left out falls back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`SessionConfig`]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Starting difficulty offered on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Default,
    Advanced,
    Hardcore,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Default => "Default",
            Difficulty::Advanced => "Advanced",
            Difficulty::Hardcore => "Hardcore",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" | "normal" => Some(Difficulty::Default),
            "advanced" => Some(Difficulty::Advanced),
            "hardcore" | "hard" => Some(Difficulty::Hardcore),
            _ => None,
        }
    }

    /// Wave the session starts on
    pub fn starting_wave(&self) -> u32 {
        match self {
            Difficulty::Default => 1,
            Difficulty::Advanced => 5,
            Difficulty::Hardcore => 10,
        }
    }
}

/// Everything a session reads at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for spawn placement, size draws, rotation
    pub seed: u64,

    // === Session ===
    pub starting_lives: u32,
    /// Power-up pickups never raise lives above this
    pub max_lives: u32,
    /// 1-based wave the session starts on
    pub starting_wave: u32,

    // === Pools ===
    pub asteroid_pool_size: usize,
    pub explosion_pool_size: usize,
    pub powerup_pool_size: usize,
    /// Instances constructed per scheduler step while warming
    pub prefill_chunk: usize,

    // === Asteroid scaling ===
    pub base_speed: f32,
    pub speed_step: f32,
    pub base_hit_points: u32,
    pub base_points: u32,
    pub point_step: u32,

    // === Cadence (seconds) ===
    pub base_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub spawn_interval_step: f32,
    pub wave_interval: f32,

    // === Feedback ===
    pub hit_flash_duration: f32,
    pub click_radius: f32,
    pub explosion_duration: f32,

    // === Power-ups ===
    /// Chance in [0, 1] that a destroyed asteroid drops a power-up
    pub powerup_drop_chance: f64,
    pub powerup_drift_speed: f32,
    pub powerup_click_radius: f32,

    // === Playfield ===
    pub playfield_width: f32,
    pub spawn_margin: f32,
    pub spawn_y: f32,
    pub base_line_y: f32,
    pub powerup_floor_y: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_0F_A57E_401D,

            starting_lives: 3,
            max_lives: 5,
            starting_wave: 1,

            asteroid_pool_size: 20,
            explosion_pool_size: 15,
            powerup_pool_size: 5,
            prefill_chunk: 5,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            base_hit_points: BASE_HIT_POINTS,
            base_points: BASE_POINTS,
            point_step: POINT_STEP,

            base_spawn_interval: BASE_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            wave_interval: WAVE_INTERVAL,

            hit_flash_duration: HIT_FLASH_DURATION,
            click_radius: CLICK_RADIUS,
            explosion_duration: EXPLOSION_DURATION,

            powerup_drop_chance: 0.1,
            powerup_drift_speed: POWERUP_DRIFT_SPEED,
            powerup_click_radius: POWERUP_CLICK_RADIUS,

            playfield_width: PLAYFIELD_WIDTH,
            spawn_margin: SPAWN_MARGIN,
            spawn_y: SPAWN_Y,
            base_line_y: BASE_LINE_Y,
            powerup_floor_y: POWERUP_FLOOR_Y,
        }
    }
}

impl SessionConfig {
    /// Create a config from a difficulty preset (applies preset defaults)
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let mut config = Self::default();
        config.apply_difficulty(difficulty);
        config
    }

    /// Apply a difficulty preset (updates the starting wave)
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.starting_wave = difficulty.starting_wave();
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded session config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        if self.max_lives < self.starting_lives {
            return invalid("max_lives", "must not be below starting_lives");
        }
        if self.starting_wave == 0 {
            return invalid("starting_wave", "waves are 1-based");
        }
        if self.prefill_chunk == 0 {
            return invalid("prefill_chunk", "must construct at least one instance per step");
        }
        if self.base_hit_points == 0 {
            return invalid("base_hit_points", "must be at least 1");
        }
        if !(self.min_spawn_interval > 0.0) {
            return invalid("min_spawn_interval", "must be positive");
        }
        if self.base_spawn_interval < self.min_spawn_interval {
            return invalid("base_spawn_interval", "must not be below min_spawn_interval");
        }
        if self.spawn_interval_step < 0.0 {
            return invalid("spawn_interval_step", "must not be negative");
        }
        if !(self.wave_interval > 0.0) {
            return invalid("wave_interval", "must be positive");
        }
        if !(self.hit_flash_duration > 0.0) {
            return invalid("hit_flash_duration", "must be positive");
        }
        if !(self.explosion_duration > 0.0) {
            return invalid("explosion_duration", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.powerup_drop_chance) {
            return invalid("powerup_drop_chance", "must be within [0, 1]");
        }
        if self.playfield_width <= 2.0 * self.spawn_margin {
            return invalid("spawn_margin", "leaves no room to spawn");
        }
        Ok(())
    }
}
