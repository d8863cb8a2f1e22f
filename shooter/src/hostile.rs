use crate::config::HostileConfig;
use crate::entity::{Bounded, Collidable, CollisionTag, Drawable, Movable, Rectangle, Sprite};
use crate::projectile::ProjectileSpawn;

/// One leg of the hostile's scripted flight path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Enter,
    Wait,
    Leave,
    DownLeft,
    Right,
    UpRight,
    DownRight,
    Up,
}

/// Velocity, duration and successor of a `Phase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStep {
    pub dx: f32,
    pub dy: f32,
    /// Ticks spent moving before switching to `next`.
    pub stop: u32,
    pub next: Phase,
}

impl Phase {
    pub fn step(self) -> PhaseStep {
        let (dx, dy, stop, next) = match self {
            Phase::Enter => (0.0, 1.0, 150, Phase::Wait),
            Phase::Wait => (0.0, 0.0, 120, Phase::Leave),
            Phase::Leave => (0.0, -1.0, 200, Phase::DownLeft),
            Phase::DownLeft => (-3.0, 3.0, 100, Phase::Right),
            Phase::Right => (3.0, 0.0, 100, Phase::UpRight),
            Phase::UpRight => (3.0, -4.0, 50, Phase::DownRight),
            Phase::DownRight => (3.0, 4.0, 50, Phase::Up),
            // After the first pass the loop never re-enters or waits.
            Phase::Up => (0.0, -4.0, 50, Phase::DownLeft),
        };
        PhaseStep { dx, dy, stop, next }
    }
}

#[derive(Debug, Clone)]
pub struct HostileActor {
    bounds: Rectangle,
    phase: Phase,
    phase_counter: u32,
    fire_interval: u32,
    fire_counter: u32,
    muzzle_offsets: [(f32, f32); 2],
    projectile_speed: f32,
    pending_fire: Option<[ProjectileSpawn; 2]>,
    colliding: bool,
}

impl HostileActor {
    pub fn new(config: &HostileConfig) -> Self {
        HostileActor {
            bounds: config.spawn,
            phase: Phase::Enter,
            phase_counter: 0,
            fire_interval: config.fire_interval,
            fire_counter: 0,
            muzzle_offsets: config.muzzle_offsets,
            projectile_speed: config.projectile_speed,
            pending_fire: None,
            colliding: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_counter(&self) -> u32 {
        self.phase_counter
    }

    pub fn take_fire_request(&mut self) -> Option<[ProjectileSpawn; 2]> {
        self.pending_fire.take()
    }

    fn fire_tick(&mut self) {
        if self.fire_interval == 0 {
            return;
        }
        self.fire_counter += 1;
        if self.fire_counter >= self.fire_interval {
            self.fire_counter = 0;
            self.pending_fire = Some(self.muzzle_offsets.map(|(dx, dy)| {
                ProjectileSpawn::new(
                    self.bounds.x + dx,
                    self.bounds.y + dy,
                    self.projectile_speed,
                )
            }));
        }
    }
}

impl Movable for HostileActor {
    fn advance(&mut self, _world: &Rectangle) {
        self.phase_counter += 1;
        let step = self.phase.step();
        if self.phase_counter <= step.stop {
            self.bounds.x += step.dx;
            self.bounds.y += step.dy;
        } else {
            log::debug!("hostile phase {:?} -> {:?}", self.phase, step.next);
            self.phase_counter = 0;
            self.phase = step.next;
        }
        self.fire_tick();
    }
}

impl Bounded for HostileActor {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}

impl Collidable for HostileActor {
    fn collidable_type(&self) -> CollisionTag {
        CollisionTag::Enemy
    }

    fn collidable_with(&self) -> CollisionTag {
        CollisionTag::Bullet
    }

    fn is_colliding(&self) -> bool {
        self.colliding
    }

    fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }
}

impl Drawable for HostileActor {
    fn sprite(&self) -> Sprite {
        Sprite::Enemy
    }

    fn is_visible(&self) -> bool {
        true
    }
}
