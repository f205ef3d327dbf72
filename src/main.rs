//! Meteor Defense entry point
//!
//! Runs a headless session at the fixed simulation rate with a simple
//! autopilot doing the clicking, records the high score and prints a JSON
//! summary of the run.
//!
//! Usage: `meteor-defense [default|advanced|hardcore] [--config FILE] [--seed N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::{Parser, ValueEnum};
    use serde::Serialize;

    use meteor_defense::consts::{MAX_SUBSTEPS, SIM_DT};
    use meteor_defense::persistence::FileStorage;
    use meteor_defense::sim::{GameEvent, GameSession, TickInput, tick};
    use meteor_defense::{Difficulty, HighScore, NullAudio, SessionConfig};

    /// Host frame length fed to the accumulator (slower than the sim rate)
    const HOST_DT: f32 = 1.0 / 50.0;
    /// Default stop for runs the autopilot never loses (10 simulated minutes)
    const FRAME_CAP: u64 = 60 * 60 * 10;
    /// Sim frames between autopilot clicks
    const CLICK_EVERY: u64 = 9;

    #[derive(Parser, Debug)]
    #[command(name = "meteor-defense")]
    #[command(about = "Headless autopilot run of the meteor defense simulation")]
    struct Cli {
        /// Difficulty preset (sets the starting wave)
        #[arg(value_enum)]
        difficulty: Option<CliDifficulty>,
        /// Session config JSON; missing fields take their defaults
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the RNG seed from the config
        #[arg(long)]
        seed: Option<u64>,
        /// High score file (4 bytes, little endian)
        #[arg(long, default_value = "highscore.dat")]
        highscore: PathBuf,
        /// Stop after this many simulation frames
        #[arg(long, default_value_t = FRAME_CAP)]
        max_frames: u64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    enum CliDifficulty {
        Default,
        Advanced,
        Hardcore,
    }

    impl From<CliDifficulty> for Difficulty {
        fn from(value: CliDifficulty) -> Self {
            match value {
                CliDifficulty::Default => Difficulty::Default,
                CliDifficulty::Advanced => Difficulty::Advanced,
                CliDifficulty::Hardcore => Difficulty::Hardcore,
            }
        }
    }

    #[derive(Debug, Default, Serialize)]
    struct RunSummary {
        difficulty: &'static str,
        seed: u64,
        frames: u64,
        game_over: bool,
        score: u64,
        wave: u32,
        lives: u32,
        destroyed: u32,
        escaped: u32,
        powerups_collected: u32,
        pool_growth: [usize; 3],
        high_score: u32,
        new_record: bool,
    }

    /// Runner state: session, accumulator and tallies
    struct Runner {
        session: GameSession<NullAudio>,
        accumulator: f32,
        input: TickInput,
        summary: RunSummary,
        max_frames: u64,
    }

    impl Runner {
        fn new(session: GameSession<NullAudio>, difficulty: Difficulty, max_frames: u64) -> Self {
            let summary = RunSummary {
                difficulty: difficulty.as_str(),
                seed: session.config().seed,
                ..Default::default()
            };
            Self {
                session,
                accumulator: 0.0,
                input: TickInput::default(),
                summary,
                max_frames,
            }
        }

        /// Aim at the asteroid closest to the base line
        fn autopilot(&mut self) {
            if self.session.frame() % CLICK_EVERY != 0 {
                return;
            }
            let target = self
                .session
                .asteroids()
                .iter_active()
                .map(|(_, a)| a.pos)
                .max_by(|a, b| a.y.total_cmp(&b.y));
            // Sweep power-ups when nothing is falling
            let target = target.or_else(|| {
                self.session
                    .powerups()
                    .iter_active()
                    .map(|(_, p)| p.pos)
                    .next()
            });
            if let Some(point) = target {
                self.input.clicks.push(point);
            }
        }

        /// One host frame worth of fixed steps
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT
                && substeps < MAX_SUBSTEPS
                && self.session.frame() < self.max_frames
            {
                self.autopilot();
                tick(&mut self.session, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clicks are one-shot
                self.input.clear();
                self.tally();
            }
        }

        fn tally(&mut self) {
            for event in self.session.drain_events() {
                match event {
                    GameEvent::AsteroidDestroyed { .. } => self.summary.destroyed += 1,
                    GameEvent::AsteroidEscaped { .. } => self.summary.escaped += 1,
                    GameEvent::PowerUpCollected { .. } => self.summary.powerups_collected += 1,
                    GameEvent::WaveAdvanced { wave } => log::info!("Reached wave {}", wave),
                    _ => {}
                }
            }
        }

        fn run(mut self) -> RunSummary {
            while !self.session.is_game_over() && self.session.frame() < self.max_frames {
                self.update(HOST_DT);
            }
            if !self.session.is_game_over() {
                log::warn!("Frame cap reached at wave {}", self.session.wave());
            }

            let pools = self.session.pools();
            self.summary.frames = self.session.frame();
            self.summary.game_over = self.session.is_game_over();
            self.summary.score = self.session.score();
            self.summary.wave = self.session.wave();
            self.summary.lives = self.session.lives();
            self.summary.pool_growth = [
                pools.asteroids.grown(),
                pools.explosions.grown(),
                pools.powerups.grown(),
            ];
            self.summary
        }
    }

    /// Config file (or defaults) with the difficulty preset, if any, applied on top
    fn load_config(difficulty: Option<Difficulty>, path: Option<PathBuf>) -> SessionConfig {
        let mut config = match path {
            Some(path) => SessionConfig::load(&path).unwrap_or_else(|e| {
                log::warn!("Failed to load {}: {}, using defaults", path.display(), e);
                SessionConfig::default()
            }),
            None => SessionConfig::default(),
        };
        if let Some(difficulty) = difficulty {
            config.apply_difficulty(difficulty);
        }
        config
    }

    pub fn main() {
        env_logger::init();
        log::info!("Meteor Defense (headless) starting...");

        let cli = Cli::parse();
        let difficulty = cli.difficulty.map(Difficulty::from);
        let mut config = load_config(difficulty, cli.config);
        if let Some(seed) = cli.seed {
            config.seed = seed;
        }
        let difficulty = difficulty.unwrap_or_default();

        let session = match GameSession::headless(config) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Invalid session config: {}", e);
                std::process::exit(2);
            }
        };

        let mut high_score = HighScore::load(FileStorage::new(cli.highscore));

        let mut summary = Runner::new(session, difficulty, cli.max_frames).run();
        summary.new_record = high_score.try_record(summary.score);
        summary.high_score = high_score.best();
        if summary.new_record {
            log::info!("New high score: {}", summary.high_score);
        }

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize run summary: {}", e),
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is a library on the web; there is no headless runner
}
