//! Read-only frame view for presentation layers
//!
//! A snapshot copies out exactly what a renderer or a replay log needs from
//! the active entities, so nothing outside the simulation holds pool
//! references across frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::AsteroidSize;
use super::state::{GamePhase, GameSession};
use crate::audio::AudioSink;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub slot: usize,
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub size: AsteroidSize,
    pub visible: bool,
    /// Damage flash, 1.0 right after a hit fading to 0.0
    pub flash: f32,
    pub tint: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub slot: usize,
    pub pos: Vec2,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub slot: usize,
    pub pos: Vec2,
    pub pulse: f32,
    pub spin: f32,
}

/// Everything visible at the end of a frame, in pool order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub score: u64,
    pub lives: u32,
    pub wave: u32,
    pub phase: GamePhase,
    pub asteroids: Vec<AsteroidView>,
    pub explosions: Vec<ExplosionView>,
    pub powerups: Vec<PowerUpView>,
}

impl<A: AudioSink> GameSession<A> {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame(),
            score: self.score(),
            lives: self.lives(),
            wave: self.wave(),
            phase: self.phase(),
            asteroids: self
                .asteroids()
                .iter_active()
                .map(|(handle, a)| AsteroidView {
                    slot: handle.index(),
                    pos: a.pos,
                    rotation: a.rotation,
                    scale: a.scale(),
                    size: a.size,
                    visible: a.is_visible(),
                    flash: a.flash_intensity(),
                    tint: a.tint(),
                })
                .collect(),
            explosions: self
                .explosions()
                .iter_active()
                .map(|(handle, e)| ExplosionView {
                    slot: handle.index(),
                    pos: e.pos,
                    progress: e.progress(),
                })
                .collect(),
            powerups: self
                .powerups()
                .iter_active()
                .map(|(handle, p)| PowerUpView {
                    slot: handle.index(),
                    pos: p.pos,
                    pulse: p.pulse(),
                    spin: p.spin(),
                })
                .collect(),
        }
    }
}
