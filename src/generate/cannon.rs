//! Cannon: barrel with a glowing energy core

use std::path::PathBuf;

use image::Rgba;
use tracing::debug;

use crate::canvas::{Canvas, rgb};
use crate::config::SpriteConfig;
use crate::constants::SPRITE_SIZE;
use crate::error::SpriteError;
use crate::gradient::draw_gradient_circle;

pub const FILE_NAME: &str = "cannon.png";

const BARREL_DARK: Rgba<u8> = rgb(40, 40, 50);
const BARREL_LIGHT: Rgba<u8> = rgb(60, 60, 70);
const CORE_RIM: [u8; 3] = [100, 200, 255];
const CORE_CENTER: [u8; 3] = [0, 50, 100];
const CORE_POS: (i32, i32) = (128, 100);
const CORE_RADIUS: i32 = 50;
const GLOW_SIGMA: f32 = 10.0;

pub fn render() -> Result<Canvas, SpriteError> {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    canvas.draw_rectangle(80, 100, 176, 220, BARREL_DARK);
    canvas.draw_rectangle(90, 100, 166, 220, BARREL_LIGHT);

    draw_gradient_circle(&mut canvas, CORE_POS, CORE_RADIUS, CORE_RIM, CORE_CENTER)?;

    debug!(sigma = GLOW_SIGMA, "applying cannon glow");
    canvas.with_glow(GLOW_SIGMA)
}

pub fn run(config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
    super::save(&render()?, FILE_NAME, config)
}
