//! Rail: projectile between two rails, bridged by electric arcs

use std::path::PathBuf;

use image::Rgba;
use tracing::debug;

use crate::canvas::{Canvas, rgb};
use crate::config::SpriteConfig;
use crate::constants::SPRITE_SIZE;
use crate::error::SpriteError;

pub const FILE_NAME: &str = "rail.png";

const RAIL: Rgba<u8> = rgb(100, 100, 120);
const PROJECTILE: Rgba<u8> = rgb(50, 200, 255);
const ARC: Rgba<u8> = rgb(100, 255, 255);
const GLOW_SIGMA: f32 = 5.0;

pub fn render() -> Result<Canvas, SpriteError> {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    // Rails
    canvas.draw_rectangle(50, 100, 206, 120, RAIL);
    canvas.draw_rectangle(50, 180, 206, 200, RAIL);

    canvas.draw_rectangle(100, 130, 150, 170, PROJECTILE);

    // Arcs
    canvas.draw_line(125, 120, 125, 130, ARC, 2);
    canvas.draw_line(125, 170, 125, 180, ARC, 2);

    debug!(sigma = GLOW_SIGMA, "applying rail glow");
    canvas.with_glow(GLOW_SIGMA)
}

pub fn run(config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
    super::save(&render()?, FILE_NAME, config)
}
