use crate::entity::{Bounded, Collidable, CollisionTag, Drawable, Movable, Rectangle, Sprite};
use crate::pool::Poolable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
}

/// Where and how fast a projectile starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl ProjectileSpawn {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        ProjectileSpawn { x, y, speed }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    bounds: Rectangle,
    heading: Heading,
    speed: f32,
    alive: bool,
    colliding: bool,
    kind: CollisionTag,
    accepts: CollisionTag,
    sprite: Sprite,
}

impl Projectile {
    pub fn new(
        width: f32,
        height: f32,
        heading: Heading,
        kind: CollisionTag,
        accepts: CollisionTag,
        sprite: Sprite,
    ) -> Self {
        Projectile {
            bounds: Rectangle::new(0.0, 0.0, width, height),
            heading,
            speed: 0.0,
            alive: false,
            colliding: false,
            kind,
            accepts,
            sprite,
        }
    }

    /// A dead projectile fired by the player: travels up, hits enemies.
    pub fn player(width: f32, height: f32) -> Self {
        Projectile::new(
            width,
            height,
            Heading::Up,
            CollisionTag::Bullet,
            CollisionTag::Enemy,
            Sprite::Bullet,
        )
    }

    /// A dead projectile fired by a hostile: travels down, hits the hero.
    pub fn hostile(width: f32, height: f32) -> Self {
        Projectile::new(
            width,
            height,
            Heading::Down,
            CollisionTag::EnemyBullet,
            CollisionTag::Hero,
            Sprite::EnemyBullet,
        )
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn x(&self) -> f32 {
        self.bounds.x
    }

    pub fn y(&self) -> f32 {
        self.bounds.y
    }
}

impl Poolable for Projectile {
    type Params = ProjectileSpawn;

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn spawn(&mut self, params: ProjectileSpawn) {
        self.bounds.x = params.x;
        self.bounds.y = params.y;
        self.speed = params.speed;
        self.alive = true;
    }

    fn reset(&mut self) {
        self.bounds.x = 0.0;
        self.bounds.y = 0.0;
        self.speed = 0.0;
        self.alive = false;
        self.colliding = false;
    }

    fn is_spent(&self, world: &Rectangle) -> bool {
        if self.colliding {
            return true;
        }
        match self.heading {
            Heading::Up => self.bounds.y <= world.y,
            Heading::Down => self.bounds.y >= world.bottom(),
        }
    }
}

impl Movable for Projectile {
    fn advance(&mut self, _world: &Rectangle) {
        match self.heading {
            Heading::Up => self.bounds.y -= self.speed,
            Heading::Down => self.bounds.y += self.speed,
        }
    }
}

impl Bounded for Projectile {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}

impl Collidable for Projectile {
    fn collidable_type(&self) -> CollisionTag {
        self.kind
    }

    fn collidable_with(&self) -> CollisionTag {
        self.accepts
    }

    fn is_colliding(&self) -> bool {
        self.colliding
    }

    fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }
}

impl Drawable for Projectile {
    fn sprite(&self) -> Sprite {
        self.sprite
    }

    fn is_visible(&self) -> bool {
        self.alive && !self.colliding
    }
}
