//! Growable object pools with stable handles
//!
//! Each pool is a dense arena of one entity variant. Instances are built once
//! (during pre-fill or when the pool runs dry) and then recycled forever; the
//! pool never shrinks. Callers hold [`Handle`]s, never references.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Capability shared by every poolable entity
pub trait Poolable: Default {
    /// Per-activation parameters
    type Params;

    /// Reset all per-use state from `params` and become active
    fn activate(&mut self, params: Self::Params);

    /// Park the instance: inactive, invisible, skipped by updates and hit tests
    fn deactivate(&mut self);

    fn is_active(&self) -> bool;
}

/// Stable index into a [`Pool<T>`]
pub struct Handle<T> {
    index: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index: index as u32,
            _marker: PhantomData,
        }
    }

    /// Slot index (pool insertion order)
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.index)
    }
}

/// Growable pool of one entity variant
#[derive(Debug, Clone)]
pub struct Pool<T> {
    items: Vec<T>,
    /// How many times `acquire` found no free slot and constructed one
    grown: usize,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            grown: 0,
        }
    }
}

impl<T: Poolable> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct up to `chunk` inactive instances toward `target`.
    ///
    /// Returns true once the pool holds at least `target` instances.
    pub fn prefill_step(&mut self, target: usize, chunk: usize) -> bool {
        let missing = target.saturating_sub(self.items.len());
        let build = missing.min(chunk);
        self.items.reserve(build);
        for _ in 0..build {
            self.items.push(T::default());
        }
        self.items.len() >= target
    }

    /// Fill to `target` in one go
    pub fn prefill(&mut self, target: usize) {
        self.prefill_step(target, usize::MAX);
    }

    /// Activate the first inactive instance, growing the pool if none is free
    pub fn acquire(&mut self, params: T::Params) -> Handle<T> {
        let index = match self.items.iter().position(|item| !item.is_active()) {
            Some(index) => index,
            None => {
                self.items.push(T::default());
                self.grown += 1;
                log::debug!(
                    "{} pool exhausted, grew to {}",
                    std::any::type_name::<T>(),
                    self.items.len()
                );
                self.items.len() - 1
            }
        };
        self.items[index].activate(params);
        Handle::new(index)
    }

    /// Return an instance to the pool.
    ///
    /// Returns false (and does nothing) if it was already inactive.
    pub fn release(&mut self, handle: Handle<T>) -> bool {
        match self.items.get_mut(handle.index()) {
            Some(item) if item.is_active() => {
                item.deactivate();
                true
            }
            _ => false,
        }
    }

    /// Active instance behind `handle`
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.items.get(handle.index()).filter(|item| item.is_active())
    }

    /// Mutable active instance behind `handle`
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.items
            .get_mut(handle.index())
            .filter(|item| item.is_active())
    }

    /// Active instances in pool order
    pub fn iter_active(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_active())
            .map(|(i, item)| (Handle::new(i), item))
    }

    /// Total instances owned by the pool
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    /// Instances constructed by `acquire` because no slot was free.
    ///
    /// Pre-fill never counts; growth on a pool that was never pre-filled does.
    pub fn grown(&self) -> usize {
        self.grown
    }
}
