//! Fixed timestep simulation tick
//!
//! One pass per frame, always in this order:
//! 1. click resolution
//! 2. spawn and wave timers
//! 3. entity updates in pool order (releases take effect immediately)
//!
//! While the pools are still warming, each tick performs one pre-fill chunk
//! instead and the timers stay disarmed until the following frame.

use glam::Vec2;

use super::state::{GamePhase, GameSession};
use crate::audio::AudioSink;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Clicks since the last tick, in arrival order (screen space)
    pub clicks: Vec<Vec2>,
}

impl TickInput {
    pub fn click(point: Vec2) -> Self {
        Self {
            clicks: vec![point],
        }
    }

    pub fn clear(&mut self) {
        self.clicks.clear();
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick<A: AudioSink>(session: &mut GameSession<A>, input: &TickInput, dt: f32) {
    session.frame += 1;

    if session.phase() == GamePhase::Warming {
        session.warm_step();
        return;
    }

    for &point in &input.clicks {
        session.click(point);
    }

    session.run_timers(dt);

    session.update_entities(dt);
}
