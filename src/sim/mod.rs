//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod director;
pub mod effects;
pub mod hit;
pub mod pool;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidParams, AsteroidSize, AsteroidStep, HitOutcome};
pub use director::{
    DirectorEvent, DirectorPhase, Prefill, PrefillCursor, PrefillStage, SpawnStats, WaveDirector,
    WaveScaling,
};
pub use effects::{Explosion, ExplosionParams, PowerUp, PowerUpParams, PowerUpStep};
pub use hit::{ClickTarget, HitResolver, HitTarget};
pub use pool::{Handle, Pool, Poolable};
pub use snapshot::{AsteroidView, ExplosionView, FrameSnapshot, PowerUpView};
pub use state::{GameEvent, GamePhase, GameSession, Pools};
pub use tick::{TickInput, tick};
