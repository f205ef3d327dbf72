//! Click hit-testing against pooled entities
//!
//! Scan order is pool order and the first match wins. There is no nearest or
//! topmost tie-break: with overlapping asteroids the lower pool slot is hit.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::effects::PowerUp;
use super::pool::{Handle, Pool, Poolable};
use crate::within_radius;

/// Capability of any entity a click can land on
pub trait HitTarget: Poolable {
    /// Center of the clickable disc
    fn hit_center(&self) -> Vec2;

    /// Radius of the clickable disc given the session's base click radius
    fn hit_radius(&self, base_radius: f32) -> f32;

    fn contains(&self, point: Vec2, base_radius: f32) -> bool {
        self.is_active() && within_radius(self.hit_center(), point, self.hit_radius(base_radius))
    }
}

/// What a click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Asteroid(Handle<Asteroid>),
    PowerUp(Handle<PowerUp>),
}

/// Maps a click point to at most one entity
#[derive(Debug, Clone, Copy)]
pub struct HitResolver {
    base_radius: f32,
}

impl HitResolver {
    pub fn new(base_radius: f32) -> Self {
        Self { base_radius }
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// First active entity in pool order whose disc contains `point`
    pub fn first_hit<T: HitTarget>(&self, pool: &Pool<T>, point: Vec2) -> Option<Handle<T>> {
        pool.iter_active()
            .find(|(_, target)| target.contains(point, self.base_radius))
            .map(|(handle, _)| handle)
    }

    /// Asteroids take priority; power-ups are only tested when no asteroid matched
    pub fn resolve(
        &self,
        point: Vec2,
        asteroids: &Pool<Asteroid>,
        powerups: &Pool<PowerUp>,
    ) -> Option<ClickTarget> {
        self.first_hit(asteroids, point)
            .map(ClickTarget::Asteroid)
            .or_else(|| self.first_hit(powerups, point).map(ClickTarget::PowerUp))
    }
}
