use crate::config::PlayerConfig;
use crate::entity::{Bounded, Collidable, CollisionTag, Drawable, Movable, Rectangle, Sprite};
use crate::projectile::ProjectileSpawn;

/// What the input layer wants the player to do this tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Intent {
    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

#[derive(Debug, Clone)]
pub struct PlayerActor {
    bounds: Rectangle,
    speed: f32,
    padding: f32,
    fire_rate: u32,
    fire_counter: u32,
    muzzle_offsets: [(f32, f32); 2],
    projectile_speed: f32,
    intent: Intent,
    pending_fire: Option<[ProjectileSpawn; 2]>,
    colliding: bool,
}

impl PlayerActor {
    pub fn new(config: &PlayerConfig) -> Self {
        PlayerActor {
            bounds: config.spawn,
            speed: config.speed,
            padding: config.padding,
            fire_rate: config.fire_rate,
            fire_counter: 0,
            muzzle_offsets: config.muzzle_offsets,
            projectile_speed: config.projectile_speed,
            intent: Intent::default(),
            pending_fire: None,
            colliding: false,
        }
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Ticks since the last shot.
    pub fn fire_counter(&self) -> u32 {
        self.fire_counter
    }

    /// Takes the projectile pair queued by the last `advance`, if any.
    pub fn take_fire_request(&mut self) -> Option<[ProjectileSpawn; 2]> {
        self.pending_fire.take()
    }

    fn muzzles(&self) -> [ProjectileSpawn; 2] {
        self.muzzle_offsets.map(|(dx, dy)| {
            ProjectileSpawn::new(self.bounds.x + dx, self.bounds.y + dy, self.projectile_speed)
        })
    }

    fn clamp_to(&mut self, world: &Rectangle) {
        let min_x = world.x + self.padding;
        let min_y = world.y + self.padding;
        let max_x = world.right() - self.padding - self.bounds.width;
        let max_y = world.bottom() - self.padding - self.bounds.height;
        // A world too small for the box pins it to the top-left inset.
        self.bounds.x = self.bounds.x.min(max_x).max(min_x);
        self.bounds.y = self.bounds.y.min(max_y).max(min_y);
    }
}

impl Movable for PlayerActor {
    fn advance(&mut self, world: &Rectangle) {
        self.fire_counter = self.fire_counter.saturating_add(1);

        let intent = self.intent;
        if intent.is_moving() {
            if intent.up {
                self.bounds.y -= self.speed;
            }
            if intent.down {
                self.bounds.y += self.speed;
            }
            if intent.left {
                self.bounds.x -= self.speed;
            }
            if intent.right {
                self.bounds.x += self.speed;
            }
            self.clamp_to(world);
        }

        if intent.fire && self.fire_rate < self.fire_counter {
            self.pending_fire = Some(self.muzzles());
            self.fire_counter = 0;
        }
    }
}

impl Bounded for PlayerActor {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}

impl Collidable for PlayerActor {
    fn collidable_type(&self) -> CollisionTag {
        CollisionTag::Hero
    }

    fn collidable_with(&self) -> CollisionTag {
        CollisionTag::EnemyBullet
    }

    fn is_colliding(&self) -> bool {
        self.colliding
    }

    fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }
}

impl Drawable for PlayerActor {
    fn sprite(&self) -> Sprite {
        Sprite::Hero
    }

    fn is_visible(&self) -> bool {
        !self.colliding
    }
}
