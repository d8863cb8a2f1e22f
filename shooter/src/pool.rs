use crate::entity::Movable;
use crate::error::PoolError;
use common::shapes::Rectangle;

/// Something an `EntityPool` can hand out and take back.
pub trait Poolable {
    type Params;

    fn is_alive(&self) -> bool;

    // Bring a dead entity to life
    fn spawn(&mut self, params: Self::Params);

    // Return the entity to its dead, zeroed state
    fn reset(&mut self);

    /// Whether a live entity should go back to the pool.
    fn is_spent(&self, world: &Rectangle) -> bool;
}

/// Fixed-capacity pool of reusable entities.
///
/// All entities are built up front and the backing vector never grows.
/// `live` splits it in two: `slots[..live]` are alive, most recently spawned
/// first, and `slots[live..]` are free.
#[derive(Debug)]
pub struct EntityPool<T> {
    slots: Vec<T>,
    live: usize,
}

impl<T: Poolable> EntityPool<T> {
    pub fn from_fn<F: FnMut() -> T>(capacity: usize, factory: F) -> Self {
        let slots: Vec<T> = std::iter::repeat_with(factory).take(capacity).collect();
        debug_assert!(slots.iter().all(|slot| !slot.is_alive()));
        EntityPool { slots, live: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    /// The whole backing sequence, dead slots included.
    pub fn items(&self) -> &[T] {
        &self.slots
    }

    pub fn alive(&self) -> &[T] {
        &self.slots[..self.live]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Mutable access to a live slot. Dead slots are only reachable through
    /// `spawn`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[..self.live].get_mut(index)
    }

    /// True when at least `n` more entities can be spawned.
    pub fn has_available(&self, n: usize) -> bool {
        self.slots.len() - self.live >= n
    }

    /// Spawns into the first free slot and rotates it to the front.
    pub fn spawn(&mut self, params: T::Params) -> Result<&mut T, PoolError> {
        if !self.has_available(1) {
            log::warn!("spawn into a full pool of {}", self.slots.len());
            return Err(PoolError::Exhausted {
                capacity: self.slots.len(),
            });
        }

        let slot = self.live;
        debug_assert!(!self.slots[slot].is_alive());
        self.slots[slot].spawn(params);
        self.slots[..=slot].rotate_right(1);
        self.live += 1;
        Ok(&mut self.slots[0])
    }

    /// Spawns two entities or none. `second` ends up at index 0, `first` at
    /// index 1.
    pub fn fire_pair(&mut self, first: T::Params, second: T::Params) -> bool {
        if !self.has_available(2) {
            log::trace!(
                "pool has {} of {} slots alive, skipping pair",
                self.live,
                self.slots.len()
            );
            return false;
        }
        self.spawn(first).is_ok() && self.spawn(second).is_ok()
    }

    /// Resets the live entity at `index` and moves it just past the live
    /// prefix. The other live entities keep their order.
    pub fn recycle(&mut self, index: usize) -> bool {
        if index >= self.live {
            return false;
        }
        self.slots[index].reset();
        self.slots[index..self.live].rotate_left(1);
        self.live -= 1;
        true
    }
}

impl<T: Poolable + Movable> EntityPool<T> {
    /// Moves every live entity one tick and recycles the spent ones.
    /// Returns how many were recycled.
    pub fn animate(&mut self, world: &Rectangle) -> usize {
        let mut recycled = 0;
        let mut i = 0;
        while i < self.live {
            self.slots[i].advance(world);
            if self.slots[i].is_spent(world) {
                // The next live entity shifts into `i`, so stay put.
                self.recycle(i);
                recycled += 1;
            } else {
                i += 1;
            }
        }
        recycled
    }
}
