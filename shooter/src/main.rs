use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shooter::entity::{Bounded, Collidable, Rectangle};
use shooter::{logging, GameConfig, Intent, Sprite, Surface, World};

/// Runs the shooter core headless for a fixed number of ticks.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the built-in game settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Hold the fire button for the whole run.
    #[arg(short, long)]
    fire: bool,
}

/// Counts what would have been drawn on the last frame.
#[derive(Debug, Default)]
struct CountingSurface {
    sprites: usize,
}

impl Surface for CountingSurface {
    fn draw_sprite(&mut self, _sprite: Sprite, _at: &Rectangle) {
        self.sprites += 1;
    }
}

// Sweeps left and right under the hostile's flight path.
fn scripted_intent(tick: u64, fire: bool) -> Intent {
    let leg = (tick / 60) % 2;
    Intent {
        left: leg == 0,
        right: leg == 1,
        fire,
        ..Intent::default()
    }
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut world = World::new(config).context("building world")?;
    let mut first_hit = None;
    for tick in 0..args.ticks {
        world.tick(&scripted_intent(tick, args.fire));
        if first_hit.is_none() && world.hostile().is_colliding() {
            first_hit = Some(world.tick_count());
            log::info!("hostile hit on tick {}", world.tick_count());
        }
    }

    let mut surface = CountingSurface::default();
    world.draw(&mut surface);

    log::info!(
        "ran {} ticks: player at {:?}, hostile phase {:?}, {} player and {} hostile projectiles live, {} sprites on the last frame",
        world.tick_count(),
        world.player().bounding_box(),
        world.hostile().phase(),
        world.player_projectiles().len(),
        world.hostile_projectiles().len(),
        surface.sprites
    );
    if first_hit.is_none() {
        log::info!("hostile was never hit");
    }
    Ok(())
}
