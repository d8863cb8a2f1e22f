//! The simulation core the frame loop drives once per tick.

use crate::config::GameConfig;
use crate::entity::{Bounded, Collidable, Drawable, EntityId, Movable, Rectangle, Surface};
use crate::error::GameError;
use crate::hostile::HostileActor;
use crate::player::{Intent, PlayerActor};
use crate::pool::EntityPool;
use crate::projectile::{Projectile, ProjectileSpawn};
use collisions::{ColliderSet, CollisionResolver, Contact};
use quadtree::QuadTree;

/// Every entity in the world. Kept apart from the resolver so the resolver
/// can borrow it mutably while it flags contacts.
#[derive(Debug)]
pub struct Actors {
    pub player: PlayerActor,
    pub hostile: HostileActor,
    pub player_projectiles: EntityPool<Projectile>,
    pub hostile_projectiles: EntityPool<Projectile>,
}

impl ColliderSet<EntityId> for Actors {
    fn collider_mut(&mut self, key: EntityId) -> Option<&mut dyn Collidable> {
        match key {
            EntityId::Player => Some(&mut self.player as &mut dyn Collidable),
            EntityId::Hostile => Some(&mut self.hostile as &mut dyn Collidable),
            EntityId::PlayerProjectile(slot) => self
                .player_projectiles
                .get_mut(slot)
                .map(|projectile| projectile as &mut dyn Collidable),
            EntityId::HostileProjectile(slot) => self
                .hostile_projectiles
                .get_mut(slot)
                .map(|projectile| projectile as &mut dyn Collidable),
        }
    }
}

pub struct World {
    bounds: Rectangle,
    actors: Actors,
    resolver: CollisionResolver<EntityId>,
    ticks: u64,
}

impl World {
    pub fn new(config: GameConfig) -> Result<World, GameError> {
        config.validate()?;
        let bounds = config.world.bounds();
        let resolver = CollisionResolver::new(bounds, config.quadtree)?;

        let projectiles = &config.projectiles;
        let (width, height) = (projectiles.width, projectiles.height);
        let actors = Actors {
            player: PlayerActor::new(&config.player),
            hostile: HostileActor::new(&config.hostile),
            player_projectiles: EntityPool::from_fn(projectiles.player_capacity, || {
                Projectile::player(width, height)
            }),
            hostile_projectiles: EntityPool::from_fn(projectiles.hostile_capacity, || {
                Projectile::hostile(width, height)
            }),
        };

        log::info!(
            "world {}x{}, {} player and {} hostile projectile slots, quadtree {:?}",
            bounds.width,
            bounds.height,
            projectiles.player_capacity,
            projectiles.hostile_capacity,
            config.quadtree
        );

        Ok(World {
            bounds,
            actors,
            resolver,
            ticks: 0,
        })
    }

    /// Runs one simulation step: move everything, then resolve collisions.
    pub fn tick(&mut self, intent: &Intent) {
        let bounds = self.bounds;

        self.actors.player.set_intent(*intent);
        self.actors.player.advance(&bounds);
        if let Some([a, b]) = self.actors.player.take_fire_request() {
            self.fire_projectile_pair(a, b);
        }

        self.actors.hostile.advance(&bounds);
        if let Some([a, b]) = self.actors.hostile.take_fire_request() {
            self.fire_hostile_projectile_pair(a, b);
        }

        let recycled = self.actors.player_projectiles.animate(&bounds)
            + self.actors.hostile_projectiles.animate(&bounds);

        let flagged = self.resolve_collisions();
        self.ticks += 1;

        log::trace!(
            "tick {}: {} recycled, {} flagged",
            self.ticks,
            recycled,
            flagged
        );
    }

    /// Rebuilds the quadtree from every live entity and flags both sides of
    /// every hit. Returns the number of entities flagged.
    pub fn resolve_collisions(&mut self) -> usize {
        let resolver = &mut self.resolver;
        let actors = &self.actors;

        resolver.clear();
        resolver.insert(EntityId::Player, &actors.player);
        for (slot, projectile) in actors.player_projectiles.alive().iter().enumerate() {
            resolver.insert(EntityId::PlayerProjectile(slot), projectile);
        }
        resolver.insert(EntityId::Hostile, &actors.hostile);
        for (slot, projectile) in actors.hostile_projectiles.alive().iter().enumerate() {
            resolver.insert(EntityId::HostileProjectile(slot), projectile);
        }

        resolver.detect(EntityId::Hostile, &actors.hostile);
        resolver.detect(EntityId::Player, &actors.player);

        resolver.apply(&mut self.actors)
    }

    /// Spawns two player projectiles, or none when the pool can't fit both.
    pub fn fire_projectile_pair(&mut self, a: ProjectileSpawn, b: ProjectileSpawn) -> bool {
        self.actors.player_projectiles.fire_pair(a, b)
    }

    pub fn fire_hostile_projectile_pair(&mut self, a: ProjectileSpawn, b: ProjectileSpawn) -> bool {
        self.actors.hostile_projectiles.fire_pair(a, b)
    }

    /// Hands every visible entity to the renderer.
    pub fn draw(&self, surface: &mut dyn Surface) {
        fn draw_one<D: Drawable>(surface: &mut dyn Surface, entity: &D) {
            if entity.is_visible() {
                surface.draw_sprite(entity.sprite(), &entity.bounding_box());
            }
        }

        draw_one(surface, &self.actors.player);
        draw_one(surface, &self.actors.hostile);
        for projectile in self.actors.player_projectiles.alive() {
            draw_one(surface, projectile);
        }
        for projectile in self.actors.hostile_projectiles.alive() {
            draw_one(surface, projectile);
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn player(&self) -> &PlayerActor {
        &self.actors.player
    }

    pub fn hostile(&self) -> &HostileActor {
        &self.actors.hostile
    }

    pub fn player_projectiles(&self) -> &[Projectile] {
        self.actors.player_projectiles.alive()
    }

    pub fn hostile_projectiles(&self) -> &[Projectile] {
        self.actors.hostile_projectiles.alive()
    }

    pub fn player_projectile_pool(&self) -> &EntityPool<Projectile> {
        &self.actors.player_projectiles
    }

    pub fn hostile_projectile_pool(&self) -> &EntityPool<Projectile> {
        &self.actors.hostile_projectiles
    }

    /// Contacts found by the last collision pass.
    pub fn contacts(&self) -> &[Contact<EntityId>] {
        self.resolver.contacts()
    }

    pub fn quadtree(&self) -> &QuadTree<collisions::Collider<EntityId>> {
        self.resolver.tree()
    }
}
