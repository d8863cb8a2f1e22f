use crate::{Collidable, Collider};
use common::shapes::Rectangle;
use fxhash::FxHashSet;
use quadtree::collision_detection;
use quadtree::{Config, Entry, QuadTree, QuadtreeResult};
use std::fmt::Debug;
use std::hash::Hash;

/// A confirmed hit found while checking `subject`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contact<K> {
    pub subject: K,
    pub other: K,
}

/// Gives the resolver write access to the entities behind its keys.
pub trait ColliderSet<K> {
    fn collider_mut(&mut self, key: K) -> Option<&mut dyn Collidable>;
}

/// Runs the per-tick collision pass.
///
/// The quadtree is rebuilt from scratch every tick:
/// 1. `clear`
/// 2. `insert` every live entity
/// 3. `detect` once per entity of interest
/// 4. `apply` to set the colliding flag on both sides of every contact
///
/// The resolver only ever sets flags. Recycling and despawning belong to
/// whoever owns the entities.
pub struct CollisionResolver<K> {
    tree: QuadTree<Collider<K>>,
    contacts: Vec<Contact<K>>,
    candidates: Vec<Entry<Collider<K>>>,
    flagged: FxHashSet<K>,
}

impl<K> CollisionResolver<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new(world: Rectangle, config: Config) -> QuadtreeResult<Self> {
        Ok(CollisionResolver {
            tree: QuadTree::new_with_config(world, config)?,
            contacts: Vec::new(),
            candidates: Vec::new(),
            flagged: FxHashSet::default(),
        })
    }

    pub fn tree(&self) -> &QuadTree<Collider<K>> {
        &self.tree
    }

    /// Contacts recorded since the last `clear`.
    pub fn contacts(&self) -> &[Contact<K>] {
        &self.contacts
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.contacts.clear();
    }

    pub fn insert<C: Collidable + ?Sized>(&mut self, key: K, entity: &C) {
        self.tree
            .insert(Collider::of(key, entity), entity.bounding_box());
    }

    /// Checks `subject` against its broad-phase candidates and records a
    /// contact for every compatible candidate that strictly overlaps it.
    /// Returns the number of contacts found.
    pub fn detect<C: Collidable + ?Sized>(&mut self, key: K, subject: &C) -> usize {
        let bounds = subject.bounding_box();
        let collider = Collider::of(key, subject);

        self.candidates.clear();
        self.tree.could_collide_with(&bounds, &mut self.candidates);

        let before = self.contacts.len();
        for candidate in &self.candidates {
            if candidate.value.key == key {
                continue;
            }
            if collider.can_collide_with(&candidate.value)
                && collision_detection::rectangle_rectangle(&bounds, &candidate.bounds)
            {
                self.contacts.push(Contact {
                    subject: key,
                    other: candidate.value.key,
                });
            }
        }

        let found = self.contacts.len() - before;
        log::trace!(
            "{:?}: {} candidates, {} contacts",
            key,
            self.candidates.len(),
            found
        );
        found
    }

    /// Flags both sides of every recorded contact. Returns how many distinct
    /// entities were flagged.
    pub fn apply<S: ColliderSet<K> + ?Sized>(&mut self, set: &mut S) -> usize {
        self.flagged.clear();
        for contact in &self.contacts {
            for key in [contact.subject, contact.other] {
                if self.flagged.contains(&key) {
                    continue;
                }
                match set.collider_mut(key) {
                    Some(entity) => {
                        entity.set_colliding(true);
                        self.flagged.insert(key);
                    }
                    None => log::warn!("contact references unknown entity {:?}", key),
                }
            }
        }
        self.flagged.len()
    }
}
