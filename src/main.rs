//! Sprite generator
//!
//! Writes cannon, kick, bat, throw and rail sprites to `public/assets/sprites/`.
//!
//! Run with: `cargo run`

use action_sprites::{SpriteConfig, generate};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = SpriteConfig::default();
    generate::run(&config)?;

    Ok(())
}
