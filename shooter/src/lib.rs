pub mod config;
pub mod entity;
pub mod error;
pub mod hostile;
pub mod logging;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod world;

pub use config::GameConfig;
pub use entity::{EntityId, Sprite, Surface};
pub use error::{ConfigError, GameError, PoolError};
pub use player::Intent;
pub use projectile::ProjectileSpawn;
pub use world::World;
