//! Wave director: warm-up, spawn cadence, difficulty scaling
//!
//! Phases:
//! - `Warming`: pools are pre-filled a chunk per scheduler step; no timers run
//! - `Active`: spawn and wave timers fire
//! - `GameOver`: terminal, every timer and request is ignored

use serde::{Deserialize, Serialize};

use crate::settings::SessionConfig;

/// Pool being pre-filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefillStage {
    Asteroids,
    Explosions,
    PowerUps,
}

impl PrefillStage {
    /// Stage after this one (None once every pool is filled)
    pub fn next(self) -> Option<Self> {
        match self {
            PrefillStage::Asteroids => Some(PrefillStage::Explosions),
            PrefillStage::Explosions => Some(PrefillStage::PowerUps),
            PrefillStage::PowerUps => None,
        }
    }
}

/// Something that can pre-fill its pools stage by stage
pub trait Prefill {
    /// True once the stage's pool holds its initial capacity
    fn is_filled(&self, stage: PrefillStage) -> bool;

    /// Construct at most `budget` instances for `stage`; returns how many were built
    fn prefill(&mut self, stage: PrefillStage, budget: usize) -> usize;
}

/// Resumable position of the warm-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefillCursor {
    /// Stage still in progress (None when complete)
    pub stage: Option<PrefillStage>,
    /// Instances constructed so far, all stages
    pub built: usize,
    /// Scheduler steps consumed so far
    pub steps: u32,
}

impl Default for PrefillCursor {
    fn default() -> Self {
        Self {
            stage: Some(PrefillStage::Asteroids),
            built: 0,
            steps: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorPhase {
    Warming { cursor: PrefillCursor },
    Active,
    GameOver,
}

/// Wave-scaled asteroid stats, before size multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnStats {
    pub wave: u32,
    pub speed: f32,
    pub hit_points: u32,
    pub point_value: u32,
}

/// Timer output for one frame, in firing order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectorEvent {
    Spawn(SpawnStats),
    WaveAdvanced { wave: u32, spawn_interval: f32 },
}

/// Per-wave scaling coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveScaling {
    pub base_speed: f32,
    pub speed_step: f32,
    pub base_hit_points: u32,
    pub base_points: u32,
    pub point_step: u32,
}

impl WaveScaling {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            base_speed: config.base_speed,
            speed_step: config.speed_step,
            base_hit_points: config.base_hit_points,
            base_points: config.base_points,
            point_step: config.point_step,
        }
    }

    /// Stats for a 1-based wave; integer stats saturate at `u32::MAX`
    pub fn stats_for(&self, wave: u32) -> SpawnStats {
        let w = wave.max(1) - 1;
        SpawnStats {
            wave,
            speed: self.base_speed + w as f32 * self.speed_step,
            hit_points: self.base_hit_points.saturating_add(w / 3),
            point_value: self
                .base_points
                .saturating_add(w.saturating_mul(self.point_step)),
        }
    }
}

/// Spawn interval after `advances` wave advances from `base`
pub fn spawn_interval_after(base: f32, step: f32, min: f32, advances: u32) -> f32 {
    (base - advances as f32 * step).max(min)
}

/// Owns the wave number and both gameplay timers
#[derive(Debug, Clone)]
pub struct WaveDirector {
    phase: DirectorPhase,
    wave: u32,
    scaling: WaveScaling,
    spawn_interval: f32,
    min_spawn_interval: f32,
    spawn_interval_step: f32,
    wave_interval: f32,
    /// Seconds accumulated toward the next spawn
    spawn_timer: f32,
    /// Seconds accumulated toward the next wave
    wave_timer: f32,
    prefill_chunk: usize,
}

impl WaveDirector {
    pub fn new(config: &SessionConfig) -> Self {
        let wave = config.starting_wave.max(1);
        Self {
            phase: DirectorPhase::Warming {
                cursor: PrefillCursor::default(),
            },
            wave,
            scaling: WaveScaling::from_config(config),
            spawn_interval: spawn_interval_after(
                config.base_spawn_interval,
                config.spawn_interval_step,
                config.min_spawn_interval,
                wave - 1,
            ),
            min_spawn_interval: config.min_spawn_interval,
            spawn_interval_step: config.spawn_interval_step,
            wave_interval: config.wave_interval,
            spawn_timer: 0.0,
            wave_timer: 0.0,
            prefill_chunk: config.prefill_chunk.max(1),
        }
    }

    pub fn phase(&self) -> DirectorPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == DirectorPhase::Active
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == DirectorPhase::GameOver
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    pub fn scaling(&self) -> &WaveScaling {
        &self.scaling
    }

    /// Stats the next spawn would get
    pub fn current_stats(&self) -> SpawnStats {
        self.scaling.stats_for(self.wave)
    }

    /// Run one warm-up step: build up to one chunk of pool instances.
    ///
    /// Returns true on the step that completes warm-up and arms the timers.
    pub fn warm<P: Prefill>(&mut self, pools: &mut P) -> bool {
        let chunk = self.prefill_chunk;
        let DirectorPhase::Warming { cursor } = &mut self.phase else {
            return false;
        };

        let mut budget = chunk;
        while let Some(stage) = cursor.stage {
            if pools.is_filled(stage) {
                cursor.stage = stage.next();
                continue;
            }
            if budget == 0 {
                break;
            }
            let built = pools.prefill(stage, budget);
            if built == 0 {
                // Nothing could be built; treat the stage as done rather than spin
                cursor.stage = stage.next();
                continue;
            }
            budget = budget.saturating_sub(built);
            cursor.built += built;
        }
        cursor.steps += 1;

        if cursor.stage.is_some() {
            return false;
        }

        log::info!(
            "Pools warmed: {} instances over {} steps, starting at wave {}",
            cursor.built,
            cursor.steps,
            self.wave
        );
        self.phase = DirectorPhase::Active;
        self.spawn_timer = 0.0;
        self.wave_timer = 0.0;
        true
    }

    /// Advance both timers by `dt`, emitting spawns and wave advances in order
    pub fn advance(&mut self, dt: f32, out: &mut Vec<DirectorEvent>) {
        if !self.is_active() || dt <= 0.0 {
            return;
        }

        self.spawn_timer += dt;
        while self.spawn_timer >= self.spawn_interval {
            self.spawn_timer -= self.spawn_interval;
            out.push(DirectorEvent::Spawn(self.current_stats()));
        }

        self.wave_timer += dt;
        while self.wave_timer >= self.wave_interval {
            self.wave_timer -= self.wave_interval;
            self.step_wave(out);
        }
    }

    /// Advance the wave immediately. Ignored unless active.
    pub fn advance_wave(&mut self, out: &mut Vec<DirectorEvent>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.wave_timer = 0.0;
        self.step_wave(out);
        true
    }

    /// Stats for an out-of-band spawn request; None unless active
    pub fn request_spawn(&self) -> Option<SpawnStats> {
        self.is_active().then(|| self.current_stats())
    }

    /// Override the current spawn interval (floored at the minimum).
    ///
    /// Later wave advances subtract their step from this value.
    pub fn set_spawn_interval(&mut self, interval: f32) {
        if self.is_game_over() {
            return;
        }
        self.spawn_interval = interval.max(self.min_spawn_interval);
    }

    /// Latch game over; true only on the first call
    pub fn game_over(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = DirectorPhase::GameOver;
        self.spawn_timer = 0.0;
        self.wave_timer = 0.0;
        true
    }

    fn step_wave(&mut self, out: &mut Vec<DirectorEvent>) {
        self.wave = self.wave.saturating_add(1);
        self.spawn_interval =
            (self.spawn_interval - self.spawn_interval_step).max(self.min_spawn_interval);
        // Re-arm the spawn timer at the new interval
        self.spawn_timer = 0.0;
        log::info!(
            "Wave {} (spawn every {:.2}s)",
            self.wave,
            self.spawn_interval
        );
        out.push(DirectorEvent::WaveAdvanced {
            wave: self.wave,
            spawn_interval: self.spawn_interval,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Pools that only count instances
    struct Counts {
        have: [usize; 3],
        want: [usize; 3],
    }

    impl Counts {
        fn new(want: [usize; 3]) -> Self {
            Self { have: [0; 3], want }
        }

        fn slot(stage: PrefillStage) -> usize {
            match stage {
                PrefillStage::Asteroids => 0,
                PrefillStage::Explosions => 1,
                PrefillStage::PowerUps => 2,
            }
        }
    }

    impl Prefill for Counts {
        fn is_filled(&self, stage: PrefillStage) -> bool {
            let i = Self::slot(stage);
            self.have[i] >= self.want[i]
        }

        fn prefill(&mut self, stage: PrefillStage, budget: usize) -> usize {
            let i = Self::slot(stage);
            let built = (self.want[i] - self.have[i]).min(budget);
            self.have[i] += built;
            built
        }
    }

    fn active_director(config: &SessionConfig) -> WaveDirector {
        let mut director = WaveDirector::new(config);
        let mut pools = Counts::new([0, 0, 0]);
        assert!(director.warm(&mut pools));
        director
    }

    #[test]
    fn test_reference_wave_stats() {
        let scaling = WaveScaling::from_config(&SessionConfig::default());

        let w1 = scaling.stats_for(1);
        assert_eq!(w1.speed, 150.0);
        assert_eq!(w1.hit_points, 1);
        assert_eq!(w1.point_value, 100);

        let w4 = scaling.stats_for(4);
        assert_eq!(w4.speed, 225.0);
        assert_eq!(w4.hit_points, 2);
        assert_eq!(w4.point_value, 250);

        assert_eq!(scaling.stats_for(3).hit_points, 1);
        assert_eq!(scaling.stats_for(7).hit_points, 3);
    }

    #[test]
    fn test_warmup_is_chunked_and_ordered() {
        let config = SessionConfig {
            prefill_chunk: 5,
            ..Default::default()
        };
        let mut director = WaveDirector::new(&config);
        let mut pools = Counts::new([12, 4, 2]);

        // 12 asteroids + 4 explosions + 2 power-ups = 18 instances, 5 per step
        let mut steps = 0;
        while !director.warm(&mut pools) {
            steps += 1;
            assert!(steps < 10, "warm-up never completed");
            // Explosions never start before asteroids are complete
            if pools.have[1] > 0 {
                assert_eq!(pools.have[0], 12);
            }
            let mut out = Vec::new();
            director.advance(100.0, &mut out);
            assert!(out.is_empty(), "timers fired during warm-up");
        }
        assert_eq!(steps + 1, 4);
        assert_eq!(pools.have, [12, 4, 2]);
        assert!(director.is_active());
        // Further warm calls are no-ops
        assert!(!director.warm(&mut pools));
    }

    #[test]
    fn test_spawn_timer_fires_on_interval() {
        let config = SessionConfig::default();
        let mut director = active_director(&config);
        let mut out = Vec::new();

        director.advance(1.4, &mut out);
        assert!(out.is_empty());
        director.advance(0.2, &mut out);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], DirectorEvent::Spawn(SpawnStats { wave: 1, .. })));

        out.clear();
        director.advance(4.5, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_wave_advance_shrinks_interval_and_rearms() {
        let config = SessionConfig::default();
        let mut director = active_director(&config);
        let mut out = Vec::new();

        director.advance(1.0, &mut out);
        assert!(director.advance_wave(&mut out));
        assert_eq!(director.wave(), 2);
        assert!((director.spawn_interval() - 1.4).abs() < 1e-5);
        assert_eq!(
            out,
            vec![DirectorEvent::WaveAdvanced {
                wave: 2,
                spawn_interval: director.spawn_interval()
            }]
        );

        // Timer was re-armed: 1.0s of progress was discarded
        out.clear();
        director.advance(1.3, &mut out);
        assert!(out.is_empty());
        director.advance(0.11, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_wave_timer_advances_wave() {
        let config = SessionConfig {
            wave_interval: 10.0,
            ..Default::default()
        };
        let mut director = active_director(&config);
        let mut out = Vec::new();
        director.advance(10.0, &mut out);
        assert_eq!(director.wave(), 2);
        assert!(out
            .iter()
            .any(|e| matches!(e, DirectorEvent::WaveAdvanced { wave: 2, .. })));
    }

    #[test]
    fn test_manual_interval_adjustment_is_tracked() {
        let config = SessionConfig::default();
        let mut director = active_director(&config);
        director.set_spawn_interval(1.0);
        director.advance_wave(&mut Vec::new());
        assert!((director.spawn_interval() - 0.9).abs() < 1e-5);

        director.set_spawn_interval(0.01);
        assert_eq!(director.spawn_interval(), config.min_spawn_interval);
    }

    #[test]
    fn test_starting_wave_seeds_interval() {
        let config = SessionConfig {
            starting_wave: 5,
            ..Default::default()
        };
        let director = WaveDirector::new(&config);
        assert_eq!(director.wave(), 5);
        assert!((director.spawn_interval() - 1.1).abs() < 1e-5);
        assert_eq!(director.current_stats().speed, 250.0);
    }

    #[test]
    fn test_extreme_waves_saturate() {
        let scaling = WaveScaling::from_config(&SessionConfig::default());
        let stats = scaling.stats_for(u32::MAX);
        assert_eq!(stats.point_value, u32::MAX);
        assert_eq!(stats.hit_points, 1 + (u32::MAX - 1) / 3);

        let scaling = WaveScaling {
            base_hit_points: u32::MAX,
            ..scaling
        };
        assert_eq!(scaling.stats_for(7).hit_points, u32::MAX);

        let config = SessionConfig {
            starting_wave: u32::MAX,
            ..Default::default()
        };
        let mut director = active_director(&config);
        assert!(director.advance_wave(&mut Vec::new()));
        assert_eq!(director.wave(), u32::MAX);
        assert_eq!(director.spawn_interval(), config.min_spawn_interval);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let config = SessionConfig::default();
        let mut director = active_director(&config);
        assert!(director.game_over());
        assert!(!director.game_over());

        let mut out = Vec::new();
        director.advance(1_000.0, &mut out);
        assert!(out.is_empty());
        assert!(!director.advance_wave(&mut out));
        assert!(director.request_spawn().is_none());
        assert_eq!(director.wave(), 1);
    }

    #[test]
    fn test_requests_rejected_while_warming() {
        let mut director = WaveDirector::new(&SessionConfig::default());
        assert!(director.request_spawn().is_none());
        assert!(!director.advance_wave(&mut Vec::new()));
    }

    proptest! {
        #[test]
        fn prop_interval_never_below_minimum(advances in 0u32..500, manual in 0.0f32..3.0) {
            let config = SessionConfig::default();
            let mut director = active_director(&config);
            director.set_spawn_interval(manual);
            let mut out = Vec::new();
            for _ in 0..advances {
                director.advance_wave(&mut out);
                prop_assert!(director.spawn_interval() >= config.min_spawn_interval);
            }
        }

        #[test]
        fn prop_stats_follow_formula(wave in 1u32..1_000) {
            let scaling = WaveScaling::from_config(&SessionConfig::default());
            let stats = scaling.stats_for(wave);
            prop_assert_eq!(stats.hit_points, 1 + (wave - 1) / 3);
            prop_assert_eq!(stats.point_value, 100 + (wave - 1) * 50);
            prop_assert!((stats.speed - (150.0 + (wave - 1) as f32 * 25.0)).abs() < 1e-2);
        }

        #[test]
        fn prop_stats_monotonic(wave in 1u32..1_000) {
            let scaling = WaveScaling::from_config(&SessionConfig::default());
            let a = scaling.stats_for(wave);
            let b = scaling.stats_for(wave + 1);
            prop_assert!(b.speed > a.speed);
            prop_assert!(b.hit_points >= a.hit_points);
            prop_assert!(b.point_value > a.point_value);
        }
    }
}
