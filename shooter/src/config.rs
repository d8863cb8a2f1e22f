use crate::error::ConfigError;
use common::shapes::Rectangle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the core needs at startup. Every section is optional in a
/// config file; missing values fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub hostile: HostileConfig,
    pub projectiles: ProjectileConfig,
    pub quadtree: quadtree::Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl WorldConfig {
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: 640.0,
            height: 480.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn: Rectangle,
    /// Pixels per tick for each held direction.
    pub speed: f32,
    /// Minimum distance kept from every world edge.
    pub padding: f32,
    /// Ticks that must pass between two shots.
    pub fire_rate: u32,
    /// Projectile origins relative to the player's top-left corner.
    pub muzzle_offsets: [(f32, f32); 2],
    pub projectile_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            spawn: Rectangle::new(320.0, 400.0, 40.0, 40.0),
            speed: 7.0,
            padding: 10.0,
            fire_rate: 7,
            muzzle_offsets: [(5.0, 15.0), (33.0, 15.0)],
            projectile_speed: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileConfig {
    pub spawn: Rectangle,
    /// Ticks between two shots; 0 never fires.
    pub fire_interval: u32,
    pub muzzle_offsets: [(f32, f32); 2],
    pub projectile_speed: f32,
}

impl Default for HostileConfig {
    fn default() -> Self {
        HostileConfig {
            spawn: Rectangle::new(250.0, -100.0, 200.0, 150.0),
            fire_interval: 0,
            muzzle_offsets: [(40.0, 150.0), (160.0, 150.0)],
            projectile_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub width: f32,
    pub height: f32,
    pub player_capacity: usize,
    pub hostile_capacity: usize,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        ProjectileConfig {
            width: 7.0,
            height: 20.0,
            player_capacity: 30,
            hostile_capacity: 30,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if !(world.width.is_finite() && world.height.is_finite())
            || world.width <= 0.0
            || world.height <= 0.0
        {
            return Err(ConfigError::Invalid(format!(
                "world must have a positive size (width: {}, height: {})",
                world.width, world.height
            )));
        }
        if !self.player.spawn.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "player spawn box is malformed: {:?}",
                self.player.spawn
            )));
        }
        if !self.hostile.spawn.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "hostile spawn box is malformed: {:?}",
                self.hostile.spawn
            )));
        }
        let projectiles = &self.projectiles;
        if !Rectangle::new(0.0, 0.0, projectiles.width, projectiles.height).is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "projectile size is malformed (width: {}, height: {})",
                projectiles.width, projectiles.height
            )));
        }
        Ok(())
    }
}
