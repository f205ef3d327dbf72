//! Falling asteroids: the only hostile entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hit::HitTarget;
use super::pool::Poolable;

/// Tint applied the instant a non-lethal hit lands
pub const DAMAGE_TINT: [f32; 3] = [1.0, 0.2, 0.2];
/// Resting tint
pub const NEUTRAL_TINT: [f32; 3] = [1.0, 1.0, 1.0];

/// Size class, drawn independently per spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] = [
        AsteroidSize::Small,
        AsteroidSize::Medium,
        AsteroidSize::Large,
    ];

    /// Visual scale (also scales the click radius)
    pub fn scale(&self) -> f32 {
        match self {
            AsteroidSize::Small => 0.6,
            AsteroidSize::Medium => 1.0,
            AsteroidSize::Large => 1.5,
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            AsteroidSize::Small => 1.3,
            AsteroidSize::Medium => 1.0,
            AsteroidSize::Large => 0.7,
        }
    }

    /// Extra hit points on top of the wave value
    pub fn hit_point_bonus(&self) -> u32 {
        match self {
            AsteroidSize::Large => 1,
            _ => 0,
        }
    }

    pub fn points_multiplier(&self) -> f32 {
        match self {
            AsteroidSize::Small => 0.6,
            AsteroidSize::Medium => 1.0,
            AsteroidSize::Large => 2.0,
        }
    }
}

/// Wave-scaled stats plus per-spawn draws, before size multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidParams {
    pub pos: Vec2,
    pub speed: f32,
    pub hit_points: u32,
    pub point_value: u32,
    pub size: AsteroidSize,
    /// Radians per second, signed
    pub rotation_rate: f32,
    pub flash_duration: f32,
}

impl Default for AsteroidParams {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            pos: Vec2::ZERO,
            speed: BASE_SPEED,
            hit_points: BASE_HIT_POINTS,
            point_value: BASE_POINTS,
            size: AsteroidSize::Medium,
            rotation_rate: 0.0,
            flash_duration: HIT_FLASH_DURATION,
        }
    }
}

/// What a frame of movement did to an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidStep {
    /// Parked; nothing moved
    Idle,
    Falling,
    /// Passed the base line this frame; the session must release it
    CrossedBaseLine,
}

/// Result of one click landing on an asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Asteroid was parked; nothing happened
    Ignored,
    /// Still alive, now flashing
    Damaged { remaining: u32 },
    /// Out of hit points; the session must destroy and release it now
    Depleted { pos: Vec2, points: u32 },
}

/// A pooled asteroid
#[derive(Debug, Clone, Default)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Downward speed after the size multiplier (pixels/sec)
    pub speed: f32,
    pub hit_points: u32,
    /// Score awarded on destruction after the size multiplier
    pub point_value: u32,
    pub size: AsteroidSize,
    /// Accumulated rotation (radians)
    pub rotation: f32,
    pub rotation_rate: f32,
    flash_timer: f32,
    flash_duration: f32,
    active: bool,
    visible: bool,
}

impl Poolable for Asteroid {
    type Params = AsteroidParams;

    fn activate(&mut self, params: AsteroidParams) {
        let size = params.size;
        self.pos = params.pos;
        self.speed = params.speed * size.speed_multiplier();
        self.hit_points = params.hit_points.saturating_add(size.hit_point_bonus());
        self.point_value = (params.point_value as f32 * size.points_multiplier()).round() as u32;
        self.size = size;
        self.rotation = 0.0;
        self.rotation_rate = params.rotation_rate;
        self.flash_timer = 0.0;
        self.flash_duration = params.flash_duration;
        self.active = true;
        self.visible = true;
    }

    fn deactivate(&mut self) {
        self.flash_timer = 0.0;
        self.active = false;
        self.visible = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Asteroid {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scale(&self) -> f32 {
        self.size.scale()
    }

    /// Fall, spin, and decay the hit flash
    pub fn update(&mut self, dt: f32, base_line_y: f32) -> AsteroidStep {
        if !self.active {
            return AsteroidStep::Idle;
        }

        self.pos.y += self.speed * dt;
        self.rotation += self.rotation_rate * dt;

        if self.flash_timer > 0.0 {
            self.flash_timer = (self.flash_timer - dt).max(0.0);
        }

        if self.pos.y > base_line_y {
            AsteroidStep::CrossedBaseLine
        } else {
            AsteroidStep::Falling
        }
    }

    /// Remove one hit point
    pub fn take_hit(&mut self) -> HitOutcome {
        if !self.active || self.hit_points == 0 {
            return HitOutcome::Ignored;
        }

        self.hit_points -= 1;
        if self.hit_points == 0 {
            HitOutcome::Depleted {
                pos: self.pos,
                points: self.point_value,
            }
        } else {
            self.flash_timer = self.flash_duration;
            HitOutcome::Damaged {
                remaining: self.hit_points,
            }
        }
    }

    /// Seconds of hit flash left
    pub fn flash_timer(&self) -> f32 {
        self.flash_timer
    }

    /// 1.0 right after a hit, fading linearly to 0.0
    pub fn flash_intensity(&self) -> f32 {
        if self.flash_duration <= 0.0 {
            return 0.0;
        }
        (self.flash_timer / self.flash_duration).clamp(0.0, 1.0)
    }

    /// Current modulate color (red fading back to white)
    pub fn tint(&self) -> [f32; 3] {
        let t = 1.0 - self.flash_intensity();
        let mut tint = [0.0; 3];
        for (c, (from, to)) in tint.iter_mut().zip(DAMAGE_TINT.iter().zip(NEUTRAL_TINT.iter())) {
            *c = from + (to - from) * t;
        }
        tint
    }
}

impl HitTarget for Asteroid {
    fn hit_center(&self) -> Vec2 {
        self.pos
    }

    fn hit_radius(&self, base_radius: f32) -> f32 {
        base_radius * self.scale()
    }
}
