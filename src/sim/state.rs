//! Game session state
//!
//! The session owns the pools, the director and the injected audio sink. It is
//! the single choke point for side effects: entities only report what
//! happened to them, and every score change, life loss, sound, explosion and
//! pool release goes through here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidParams, AsteroidSize, AsteroidStep, HitOutcome};
use super::director::{
    DirectorEvent, DirectorPhase, Prefill, PrefillStage, SpawnStats, WaveDirector,
};
use super::effects::{Explosion, ExplosionParams, PowerUp, PowerUpParams, PowerUpStep};
use super::hit::{ClickTarget, HitResolver};
use super::pool::{Handle, Pool};
use crate::audio::{AudioSink, NullAudio};
use crate::settings::{ConfigError, SessionConfig};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pools are being pre-filled; nothing spawns yet
    Warming,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Notable things that happened during a frame, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WarmupComplete,
    AsteroidSpawned { slot: usize, size: AsteroidSize, wave: u32 },
    AsteroidDamaged { slot: usize, remaining: u32 },
    AsteroidDestroyed { slot: usize, pos: Vec2, points: u32 },
    AsteroidEscaped { slot: usize },
    LifeLost { remaining: u32 },
    WaveAdvanced { wave: u32 },
    PowerUpDropped { slot: usize },
    PowerUpCollected { lives: u32 },
    GameOver { score: u64, wave: u32 },
}

/// The three entity pools plus their initial capacities
#[derive(Debug, Clone, Default)]
pub struct Pools {
    pub asteroids: Pool<Asteroid>,
    pub explosions: Pool<Explosion>,
    pub powerups: Pool<PowerUp>,
    capacity: [usize; 3],
}

impl Pools {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            capacity: [
                config.asteroid_pool_size,
                config.explosion_pool_size,
                config.powerup_pool_size,
            ],
            ..Default::default()
        }
    }

    fn target(&self, stage: PrefillStage) -> usize {
        match stage {
            PrefillStage::Asteroids => self.capacity[0],
            PrefillStage::Explosions => self.capacity[1],
            PrefillStage::PowerUps => self.capacity[2],
        }
    }

    fn len(&self, stage: PrefillStage) -> usize {
        match stage {
            PrefillStage::Asteroids => self.asteroids.len(),
            PrefillStage::Explosions => self.explosions.len(),
            PrefillStage::PowerUps => self.powerups.len(),
        }
    }
}

impl Prefill for Pools {
    fn is_filled(&self, stage: PrefillStage) -> bool {
        self.len(stage) >= self.target(stage)
    }

    fn prefill(&mut self, stage: PrefillStage, budget: usize) -> usize {
        let target = self.target(stage);
        let before = self.len(stage);
        match stage {
            PrefillStage::Asteroids => self.asteroids.prefill_step(target, budget),
            PrefillStage::Explosions => self.explosions.prefill_step(target, budget),
            PrefillStage::PowerUps => self.powerups.prefill_step(target, budget),
        };
        self.len(stage) - before
    }
}

/// One playthrough
#[derive(Debug)]
pub struct GameSession<A: AudioSink = NullAudio> {
    config: SessionConfig,
    rng: Pcg32,
    audio: A,
    director: WaveDirector,
    resolver: HitResolver,
    pools: Pools,
    score: u64,
    lives: u32,
    /// Frames ticked so far
    pub(crate) frame: u64,
    events: Vec<GameEvent>,
    /// Scratch buffer reused every frame for timer output
    director_events: Vec<DirectorEvent>,
}

impl GameSession<NullAudio> {
    /// Session without sound
    pub fn headless(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::new(config, NullAudio)
    }
}

impl<A: AudioSink> GameSession<A> {
    /// Validate `config` and set up an unwarmed session
    pub fn new(config: SessionConfig, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "New session: wave {}, {} lives, seed {:#x}",
            config.starting_wave,
            config.starting_lives,
            config.seed
        );
        Ok(Self {
            rng: Pcg32::seed_from_u64(config.seed),
            audio,
            director: WaveDirector::new(&config),
            resolver: HitResolver::new(config.click_radius),
            pools: Pools::new(&config),
            score: 0,
            lives: config.starting_lives,
            frame: 0,
            events: Vec::new(),
            director_events: Vec::new(),
            config,
        })
    }

    // === Accessors ===

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        match self.director.phase() {
            DirectorPhase::Warming { .. } => GamePhase::Warming,
            DirectorPhase::Active => GamePhase::Playing,
            DirectorPhase::GameOver => GamePhase::GameOver,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.director.is_game_over()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn wave(&self) -> u32 {
        self.director.wave()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    pub fn asteroids(&self) -> &Pool<Asteroid> {
        &self.pools.asteroids
    }

    pub fn explosions(&self) -> &Pool<Explosion> {
        &self.pools.explosions
    }

    pub fn powerups(&self) -> &Pool<PowerUp> {
        &self.pools.powerups
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    // === Warm-up ===

    /// One scheduler step of pool pre-fill; true on the step that finishes it
    pub fn warm_step(&mut self) -> bool {
        let done = self.director.warm(&mut self.pools);
        if done {
            self.events.push(GameEvent::WarmupComplete);
        }
        done
    }

    /// Run warm-up to completion in one go
    pub fn finish_warmup(&mut self) {
        while self.phase() == GamePhase::Warming {
            self.warm_step();
        }
    }

    // === Input ===

    /// Route a click to at most one entity
    pub fn click(&mut self, point: Vec2) -> Option<ClickTarget> {
        if self.is_game_over() {
            return None;
        }
        let target = self
            .resolver
            .resolve(point, &self.pools.asteroids, &self.pools.powerups)?;
        match target {
            ClickTarget::Asteroid(handle) => {
                self.apply_hit(handle);
            }
            ClickTarget::PowerUp(handle) => {
                self.collect_powerup(handle);
            }
        }
        Some(target)
    }

    /// Remove one hit point; on depletion destroy the asteroid in the same step
    pub fn apply_hit(&mut self, handle: Handle<Asteroid>) -> HitOutcome {
        if self.is_game_over() {
            return HitOutcome::Ignored;
        }
        let Some(asteroid) = self.pools.asteroids.get_mut(handle) else {
            return HitOutcome::Ignored;
        };

        let outcome = asteroid.take_hit();
        match outcome {
            HitOutcome::Ignored => {}
            HitOutcome::Damaged { remaining } => {
                self.audio.play_hit();
                self.events.push(GameEvent::AsteroidDamaged {
                    slot: handle.index(),
                    remaining,
                });
            }
            HitOutcome::Depleted { pos, points } => self.destroy(handle, pos, points),
        }
        outcome
    }

    /// Explosion sound, explosion entity, score, release; in that order
    fn destroy(&mut self, handle: Handle<Asteroid>, pos: Vec2, points: u32) {
        self.audio.play_explosion();
        self.pools.explosions.acquire(ExplosionParams {
            pos,
            duration: self.config.explosion_duration,
        });
        self.score += u64::from(points);
        self.pools.asteroids.release(handle);
        self.events.push(GameEvent::AsteroidDestroyed {
            slot: handle.index(),
            pos,
            points,
        });
        log::debug!(
            "Asteroid {} destroyed for {} (score {})",
            handle.index(),
            points,
            self.score
        );

        let chance = self.config.powerup_drop_chance;
        if chance > 0.0 && self.rng.random_bool(chance) {
            let drop = self.pools.powerups.acquire(PowerUpParams {
                pos,
                drift_speed: self.config.powerup_drift_speed,
                click_radius: self.config.powerup_click_radius,
            });
            self.events.push(GameEvent::PowerUpDropped { slot: drop.index() });
        }
    }

    /// Pick up a power-up: one extra life, capped
    pub fn collect_powerup(&mut self, handle: Handle<PowerUp>) -> bool {
        if self.is_game_over() || !self.pools.powerups.release(handle) {
            return false;
        }
        self.lives = self.lives.saturating_add(1).min(self.config.max_lives);
        self.audio.play_power_up();
        self.events.push(GameEvent::PowerUpCollected { lives: self.lives });
        true
    }

    // === Lives ===

    /// Lose one life; latches game over on the last one.
    ///
    /// Returns false (and does nothing) once the game is over.
    pub fn lose_life(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.audio.play_life_lost();
        self.events.push(GameEvent::LifeLost {
            remaining: self.lives,
        });
        log::info!("Life lost, {} remaining", self.lives);

        if self.lives == 0 {
            self.enter_game_over();
        }
        true
    }

    fn enter_game_over(&mut self) {
        if !self.director.game_over() {
            return;
        }
        self.audio.play_game_over();
        self.events.push(GameEvent::GameOver {
            score: self.score,
            wave: self.wave(),
        });
        log::info!("Game over! Final score: {} (wave {})", self.score, self.wave());
    }

    // === Spawning and waves ===

    /// Spawn one asteroid at the current wave's stats; None unless playing
    pub fn spawn_asteroid(&mut self) -> Option<Handle<Asteroid>> {
        let stats = self.director.request_spawn()?;
        Some(self.spawn_with(stats))
    }

    /// Advance the wave immediately; false unless playing
    pub fn advance_wave(&mut self) -> bool {
        let mut out = std::mem::take(&mut self.director_events);
        let advanced = self.director.advance_wave(&mut out);
        self.apply_director_events(&mut out);
        self.director_events = out;
        advanced
    }

    /// Override the spawn interval for the rest of the run (floored)
    pub fn set_spawn_interval(&mut self, interval: f32) {
        self.director.set_spawn_interval(interval);
    }

    /// Fire whatever spawn and wave timers are due after `dt`
    pub fn run_timers(&mut self, dt: f32) {
        let mut out = std::mem::take(&mut self.director_events);
        self.director.advance(dt, &mut out);
        self.apply_director_events(&mut out);
        self.director_events = out;
    }

    fn apply_director_events(&mut self, out: &mut Vec<DirectorEvent>) {
        for event in out.drain(..) {
            match event {
                DirectorEvent::Spawn(stats) => {
                    self.spawn_with(stats);
                }
                DirectorEvent::WaveAdvanced { wave, .. } => {
                    self.audio.play_wave_advance();
                    self.events.push(GameEvent::WaveAdvanced { wave });
                }
            }
        }
    }

    fn spawn_with(&mut self, stats: SpawnStats) -> Handle<Asteroid> {
        use crate::consts::{MAX_ROTATION_RATE, MIN_ROTATION_RATE};

        let margin = self.config.spawn_margin;
        let x = self
            .rng
            .random_range(margin..=self.config.playfield_width - margin);
        let size = AsteroidSize::ALL[self.rng.random_range(0..AsteroidSize::ALL.len())];
        let magnitude = self.rng.random_range(MIN_ROTATION_RATE..=MAX_ROTATION_RATE);
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let handle = self.pools.asteroids.acquire(AsteroidParams {
            pos: Vec2::new(x, self.config.spawn_y),
            speed: stats.speed,
            hit_points: stats.hit_points,
            point_value: stats.point_value,
            size,
            rotation_rate: (magnitude * direction).to_radians(),
            flash_duration: self.config.hit_flash_duration,
        });
        self.events.push(GameEvent::AsteroidSpawned {
            slot: handle.index(),
            size,
            wave: stats.wave,
        });
        log::debug!(
            "Spawned {:?} asteroid in slot {} (wave {})",
            size,
            handle.index(),
            stats.wave
        );
        handle
    }

    // === Per-frame entity update ===

    /// Move every active entity in pool order; releases take effect immediately
    pub fn update_entities(&mut self, dt: f32) {
        let base_line = self.config.base_line_y;
        for index in 0..self.pools.asteroids.len() {
            let handle = Handle::new(index);
            let Some(asteroid) = self.pools.asteroids.get_mut(handle) else {
                continue;
            };
            if asteroid.update(dt, base_line) == AsteroidStep::CrossedBaseLine {
                self.asteroid_escaped(handle);
            }
        }

        for index in 0..self.pools.explosions.len() {
            let handle = Handle::new(index);
            let finished = match self.pools.explosions.get_mut(handle) {
                Some(explosion) => explosion.update(dt),
                None => continue,
            };
            if finished {
                self.pools.explosions.release(handle);
            }
        }

        let floor = self.config.powerup_floor_y;
        for index in 0..self.pools.powerups.len() {
            let handle = Handle::new(index);
            let step = match self.pools.powerups.get_mut(handle) {
                Some(powerup) => powerup.update(dt, floor),
                None => continue,
            };
            if step == PowerUpStep::CrossedFloor {
                self.pools.powerups.release(handle);
            }
        }
    }

    /// Asteroid reached the base: a life is lost (unless the game is over) and it is recycled
    fn asteroid_escaped(&mut self, handle: Handle<Asteroid>) {
        self.pools.asteroids.release(handle);
        self.events.push(GameEvent::AsteroidEscaped {
            slot: handle.index(),
        });
        self.lose_life();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudio, SoundEffect};
    use crate::sim::pool::Poolable;

    fn session_with(config: SessionConfig) -> GameSession<RecordingAudio> {
        let mut session = GameSession::new(config, RecordingAudio::new()).unwrap();
        session.finish_warmup();
        session
    }

    fn quiet_config() -> SessionConfig {
        SessionConfig {
            powerup_drop_chance: 0.0,
            ..Default::default()
        }
    }

    /// Place an asteroid exactly where a test wants it
    fn place(
        session: &mut GameSession<RecordingAudio>,
        pos: Vec2,
        hit_points: u32,
    ) -> Handle<Asteroid> {
        let handle = session.spawn_asteroid().unwrap();
        let asteroid = session.pools.asteroids.get_mut(handle).unwrap();
        asteroid.activate(AsteroidParams {
            pos,
            hit_points,
            size: AsteroidSize::Medium,
            ..Default::default()
        });
        handle
    }

    #[test]
    fn test_warmup_prefills_all_pools() {
        let mut session = GameSession::headless(SessionConfig::default()).unwrap();
        assert_eq!(session.phase(), GamePhase::Warming);
        assert!(session.spawn_asteroid().is_none());

        let mut steps = 0;
        while !session.warm_step() {
            steps += 1;
        }
        // 20 + 15 + 5 instances at 5 per step
        assert_eq!(steps + 1, 8);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.asteroids().len(), 20);
        assert_eq!(session.explosions().len(), 15);
        assert_eq!(session.powerups().len(), 5);
        assert_eq!(session.asteroids().active_count(), 0);
        assert_eq!(session.drain_events(), vec![GameEvent::WarmupComplete]);
    }

    #[test]
    fn test_destroy_sequence() {
        let mut session = session_with(quiet_config());
        let h = place(&mut session, Vec2::new(200.0, 200.0), 1);
        session.drain_events();

        let outcome = session.apply_hit(h);
        assert!(matches!(outcome, HitOutcome::Depleted { points: 100, .. }));
        assert_eq!(session.score(), 100);
        assert!(session.asteroids().get(h).is_none());
        assert_eq!(session.explosions().active_count(), 1);
        let (_, explosion) = session.explosions().iter_active().next().unwrap();
        assert_eq!(explosion.pos, Vec2::new(200.0, 200.0));
        assert_eq!(session.audio().played(), &[SoundEffect::Explosion]);

        // A second hit on the released handle does nothing
        assert_eq!(session.apply_hit(h), HitOutcome::Ignored);
        assert_eq!(session.score(), 100);
        assert_eq!(session.explosions().active_count(), 1);
    }

    #[test]
    fn test_damage_flashes_without_scoring() {
        let mut session = session_with(quiet_config());
        let h = place(&mut session, Vec2::new(200.0, 200.0), 3);

        assert_eq!(session.apply_hit(h), HitOutcome::Damaged { remaining: 2 });
        let asteroid = session.asteroids().get(h).unwrap();
        assert!(asteroid.flash_intensity() > 0.99);
        assert_eq!(session.score(), 0);
        assert_eq!(session.audio().count(SoundEffect::Hit), 1);
        assert_eq!(session.audio().count(SoundEffect::Explosion), 0);
    }

    #[test]
    fn test_click_hits_first_in_pool_order() {
        let mut session = session_with(quiet_config());
        let first = place(&mut session, Vec2::new(100.0, 100.0), 2);
        let second = place(&mut session, Vec2::new(110.0, 100.0), 2);

        assert_eq!(
            session.click(Vec2::new(112.0, 100.0)),
            Some(ClickTarget::Asteroid(first))
        );
        assert_eq!(session.asteroids().get(first).unwrap().hit_points, 1);
        assert_eq!(session.asteroids().get(second).unwrap().hit_points, 2);

        // Empty space
        assert_eq!(session.click(Vec2::new(900.0, 500.0)), None);
    }

    #[test]
    fn test_base_line_crossing_costs_a_life() {
        let mut session = session_with(quiet_config());
        let h = place(&mut session, Vec2::new(300.0, 679.0), 1);

        session.update_entities(0.1);
        assert_eq!(session.lives(), 2);
        assert!(session.asteroids().get(h).is_none());
        assert_eq!(session.audio().count(SoundEffect::LifeLost), 1);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_game_over_latches_once() {
        let mut session = session_with(quiet_config());
        assert!(session.lose_life());
        assert!(session.lose_life());
        assert!(session.lose_life());
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.lives(), 0);

        assert!(!session.lose_life());
        assert!(session.spawn_asteroid().is_none());
        assert!(!session.advance_wave());
        assert_eq!(session.lives(), 0);

        let game_overs = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(session.audio().count(SoundEffect::GameOver), 1);
        assert_eq!(session.audio().count(SoundEffect::LifeLost), 3);
    }

    #[test]
    fn test_no_scoring_after_game_over() {
        let mut session = session_with(quiet_config());
        let h = place(&mut session, Vec2::new(100.0, 100.0), 1);
        for _ in 0..3 {
            session.lose_life();
        }
        assert_eq!(session.click(Vec2::new(100.0, 100.0)), None);
        assert_eq!(session.apply_hit(h), HitOutcome::Ignored);
        assert_eq!(session.score(), 0);

        // Escaping after game over does not touch lives
        session.update_entities(10.0);
        assert_eq!(session.lives(), 0);
        assert!(session.asteroids().get(h).is_none());
    }

    #[test]
    fn test_wave_advance_plays_sound() {
        let mut session = session_with(quiet_config());
        assert!(session.advance_wave());
        assert_eq!(session.wave(), 2);
        assert_eq!(session.audio().count(SoundEffect::WaveAdvance), 1);
        assert!(session.events().contains(&GameEvent::WaveAdvanced { wave: 2 }));
    }

    #[test]
    fn test_spawned_asteroid_uses_wave_stats() {
        let mut session = session_with(SessionConfig {
            starting_wave: 4,
            ..quiet_config()
        });
        let h = session.spawn_asteroid().unwrap();
        let a = session.asteroids().get(h).unwrap();
        let expected_speed = 225.0 * a.size.speed_multiplier();
        assert!((a.speed - expected_speed).abs() < 1e-3);
        assert_eq!(a.hit_points, 2 + a.size.hit_point_bonus());
        assert_eq!(
            a.point_value,
            (250.0 * a.size.points_multiplier()).round() as u32
        );
        assert_eq!(a.pos.y, session.config().spawn_y);
        assert!(a.pos.x >= 50.0 && a.pos.x <= 1230.0);
        let degrees = a.rotation_rate.to_degrees().abs();
        assert!((29.9..=90.1).contains(&degrees));
    }

    #[test]
    fn test_pool_grows_past_prefill() {
        let mut session = session_with(SessionConfig {
            asteroid_pool_size: 2,
            ..quiet_config()
        });
        for _ in 0..5 {
            session.spawn_asteroid().unwrap();
        }
        assert_eq!(session.asteroids().len(), 5);
        assert_eq!(session.asteroids().grown(), 3);
        assert_eq!(session.asteroids().active_count(), 5);
    }

    #[test]
    fn test_powerup_drop_and_collect() {
        let mut session = session_with(SessionConfig {
            powerup_drop_chance: 1.0,
            ..Default::default()
        });
        session.lose_life();
        let h = place(&mut session, Vec2::new(400.0, 300.0), 1);
        session.apply_hit(h);
        assert_eq!(session.powerups().active_count(), 1);

        // Same spot: the asteroid is gone, so the power-up is what gets clicked
        let target = session.click(Vec2::new(400.0, 300.0));
        assert!(matches!(target, Some(ClickTarget::PowerUp(_))));
        assert_eq!(session.lives(), 3);
        assert_eq!(session.powerups().active_count(), 0);
        assert_eq!(session.audio().count(SoundEffect::PowerUpCollect), 1);
    }

    #[test]
    fn test_powerup_lives_capped() {
        let mut session = session_with(SessionConfig {
            powerup_drop_chance: 1.0,
            max_lives: 3,
            ..Default::default()
        });
        let h = place(&mut session, Vec2::new(400.0, 300.0), 1);
        session.apply_hit(h);
        session.click(Vec2::new(400.0, 300.0));
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_powerup_falls_off_silently() {
        let mut session = session_with(SessionConfig {
            powerup_drop_chance: 1.0,
            ..Default::default()
        });
        let h = place(&mut session, Vec2::new(400.0, 680.0), 1);
        session.apply_hit(h);
        let score = session.score();
        session.update_entities(1.0);
        assert_eq!(session.powerups().active_count(), 0);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn test_explosion_returns_to_pool() {
        let mut session = session_with(quiet_config());
        let h = place(&mut session, Vec2::new(400.0, 100.0), 1);
        session.apply_hit(h);
        assert_eq!(session.explosions().active_count(), 1);
        session.update_entities(0.3);
        assert_eq!(session.explosions().active_count(), 1);
        session.update_entities(0.35);
        assert_eq!(session.explosions().active_count(), 0);
    }

    #[test]
    fn test_extreme_configs_spawn_without_overflow() {
        let far_wave = SessionConfig::from_json(r#"{ "starting_wave": 100000000 }"#).unwrap();
        let mut session = session_with(far_wave);
        let h = session.spawn_asteroid().unwrap();
        let a = session.asteroids().get(h).unwrap();
        assert!(a.hit_points > 33_000_000);
        assert!(a.point_value > 0);

        let tough = SessionConfig::from_json(r#"{ "base_hit_points": 4294967295 }"#).unwrap();
        let mut session = session_with(tough);
        // Enough draws that every size class shows up
        for _ in 0..40 {
            let h = session.spawn_asteroid().unwrap();
            assert_eq!(session.asteroids().get(h).unwrap().hit_points, u32::MAX);
        }
        assert!(session
            .asteroids()
            .iter_active()
            .any(|(_, a)| a.size == AsteroidSize::Large));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameSession::headless(SessionConfig {
            starting_lives: 0,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
