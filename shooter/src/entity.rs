//! Capabilities shared by everything that lives in the world.
//!
//! Entities are plain structs that pick the capabilities they need:
//! `Movable` to step once per tick, `Drawable` to be handed to a renderer and
//! `Collidable` (from the `collisions` crate) to take part in hit detection.

pub use collisions::{Collidable, CollisionTag};
pub use common::shapes::{Bounded, Rectangle};

/// Stable name for an entity during one tick.
///
/// Projectile slots are positions in their pool and shift whenever the pool
/// spawns or recycles, so a slot id is only meaningful until the next
/// `animate` or spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Player,
    Hostile,
    PlayerProjectile(usize),
    HostileProjectile(usize),
}

pub trait Movable {
    /// Advance one tick inside `world`.
    fn advance(&mut self, world: &Rectangle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Hero,
    Enemy,
    Bullet,
    EnemyBullet,
}

pub trait Drawable: Bounded {
    fn sprite(&self) -> Sprite;

    fn is_visible(&self) -> bool;
}

/// Implemented by the renderer.
pub trait Surface {
    fn draw_sprite(&mut self, sprite: Sprite, at: &Rectangle);
}
