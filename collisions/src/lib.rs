use common::shapes::Bounded;

mod resolver;

pub use resolver::{ColliderSet, CollisionResolver, Contact};

/// What kind of thing an entity is, for collision filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionTag {
    Hero,
    Bullet,
    Enemy,
    EnemyBullet,
}

pub trait Collidable: Bounded {
    fn collidable_type(&self) -> CollisionTag;

    /// The single kind this entity registers hits against.
    fn collidable_with(&self) -> CollisionTag;

    fn is_colliding(&self) -> bool;

    fn set_colliding(&mut self, colliding: bool);

    // One-directional: A can hit B when A accepts B's kind.
    fn can_collide_with(&self, other: &dyn Collidable) -> bool {
        self.collidable_with() == other.collidable_type()
    }
}

/// The handle a resolver stores in its quadtree: an entity key plus the tags
/// needed to filter candidates without touching the entity again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Collider<K> {
    pub key: K,
    pub kind: CollisionTag,
    pub accepts: CollisionTag,
}

impl<K> Collider<K> {
    pub fn of<C: Collidable + ?Sized>(key: K, entity: &C) -> Self {
        Collider {
            key,
            kind: entity.collidable_type(),
            accepts: entity.collidable_with(),
        }
    }

    pub fn can_collide_with(&self, other: &Collider<K>) -> bool {
        self.accepts == other.kind
    }
}
