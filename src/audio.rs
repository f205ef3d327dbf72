//! Audio collaborator
//!
//! The simulation never synthesizes sound itself. It reports effects to an
//! [`AudioSink`] that the host injects into the session; playback is fire and
//! forget.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Asteroid destroyed
    Explosion,
    /// Asteroid damaged but still alive
    Hit,
    /// Asteroid reached the base line
    LifeLost,
    /// Wave timer advanced the difficulty
    WaveAdvance,
    /// Power-up clicked
    PowerUpCollect,
    /// Last life lost
    GameOver,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Explosion => "explosion",
            SoundEffect::Hit => "hit",
            SoundEffect::LifeLost => "life_lost",
            SoundEffect::WaveAdvance => "wave_advance",
            SoundEffect::PowerUpCollect => "powerup_collect",
            SoundEffect::GameOver => "game_over",
        }
    }
}

/// Receiver for sound requests coming out of the simulation
pub trait AudioSink {
    /// Play a sound effect
    fn play(&mut self, effect: SoundEffect);

    fn play_explosion(&mut self) {
        self.play(SoundEffect::Explosion);
    }

    fn play_hit(&mut self) {
        self.play(SoundEffect::Hit);
    }

    fn play_life_lost(&mut self) {
        self.play(SoundEffect::LifeLost);
    }

    fn play_wave_advance(&mut self) {
        self.play(SoundEffect::WaveAdvance);
    }

    fn play_power_up(&mut self) {
        self.play(SoundEffect::PowerUpCollect);
    }

    fn play_game_over(&mut self) {
        self.play(SoundEffect::GameOver);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect);
    }
}

/// Silent sink (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that logs each effect at trace level and counts them
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Vec<SoundEffect>,
    muted: bool,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute; muted effects are dropped, not recorded
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Every effect played so far, oldest first
    pub fn played(&self) -> &[SoundEffect] {
        &self.played
    }

    /// Number of times `effect` was played
    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|e| **e == effect).count()
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::trace!("sfx: {}", effect.as_str());
        self.played.push(effect);
    }
}
