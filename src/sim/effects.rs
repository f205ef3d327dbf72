//! Explosions and power-ups
//!
//! Neither affects the score on its own; both recycle themselves through the
//! session once their lifetime or boundary is reached.

use glam::Vec2;

use super::hit::HitTarget;
use super::pool::Poolable;
use crate::consts::*;

/// Particle burst left behind by a destroyed asteroid
#[derive(Debug, Clone, Default)]
pub struct Explosion {
    pub pos: Vec2,
    elapsed: f32,
    duration: f32,
    active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionParams {
    pub pos: Vec2,
    /// Burst lifetime (seconds)
    pub duration: f32,
}

impl Poolable for Explosion {
    type Params = ExplosionParams;

    fn activate(&mut self, params: ExplosionParams) {
        self.pos = params.pos;
        self.elapsed = 0.0;
        self.duration = params.duration;
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Explosion {
    /// Advance the burst; true once it has finished
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt;
        self.elapsed >= self.duration
    }

    /// Burst progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Slowly drifting pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub drift_speed: f32,
    click_radius: f32,
    /// Seconds since activation (drives the pulse)
    pulse_timer: f32,
    active: bool,
}

impl Default for PowerUp {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            drift_speed: POWERUP_DRIFT_SPEED,
            click_radius: POWERUP_CLICK_RADIUS,
            pulse_timer: 0.0,
            active: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpParams {
    pub pos: Vec2,
    pub drift_speed: f32,
    pub click_radius: f32,
}

/// What a frame of drifting did to a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpStep {
    Idle,
    Drifting,
    /// Fell off the bottom; the session releases it with no other effect
    CrossedFloor,
}

impl Poolable for PowerUp {
    type Params = PowerUpParams;

    fn activate(&mut self, params: PowerUpParams) {
        self.pos = params.pos;
        self.drift_speed = params.drift_speed;
        self.click_radius = params.click_radius;
        self.pulse_timer = 0.0;
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl PowerUp {
    pub fn update(&mut self, dt: f32, floor_y: f32) -> PowerUpStep {
        if !self.active {
            return PowerUpStep::Idle;
        }
        self.pos.y += self.drift_speed * dt;
        self.pulse_timer += dt;

        if self.pos.y > floor_y {
            PowerUpStep::CrossedFloor
        } else {
            PowerUpStep::Drifting
        }
    }

    /// Glow pulse in [0.4, 1.0]
    pub fn pulse(&self) -> f32 {
        0.7 + 0.3 * (self.pulse_timer * 5.0).sin()
    }

    /// Sparkle rotation (radians)
    pub fn spin(&self) -> f32 {
        self.pulse_timer * 0.6
    }
}

impl HitTarget for PowerUp {
    fn hit_center(&self) -> Vec2 {
        self.pos
    }

    /// Fixed radius; the base click radius does not apply
    fn hit_radius(&self, _base_radius: f32) -> f32 {
        self.click_radius
    }
}
