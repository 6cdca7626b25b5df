//! Kick: patched ball with a motion streak

use std::path::PathBuf;

use image::Rgba;

use crate::canvas::{Canvas, rgb, rgba};
use crate::config::SpriteConfig;
use crate::constants::SPRITE_SIZE;
use crate::error::SpriteError;

pub const FILE_NAME: &str = "kick.png";

const BALL_FILL: Rgba<u8> = rgb(240, 240, 240);
const BALL_OUTLINE: Rgba<u8> = rgb(200, 200, 200);
const PATCH: Rgba<u8> = rgb(20, 20, 20);
const STREAK: Rgba<u8> = rgba(200, 200, 200, 100);

/// Pentagon patch centres
const PATCHES: [(i32, i32); 5] = [(128, 128), (80, 80), (176, 80), (80, 176), (176, 176)];
const PATCH_RADIUS: i32 = 25;

pub fn render() -> Result<Canvas, SpriteError> {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    canvas.draw_ellipse(28, 28, 228, 228, BALL_FILL, Some((BALL_OUTLINE, 2)));

    for (px, py) in PATCHES {
        canvas.draw_regular_polygon(px, py, PATCH_RADIUS, 5, 0.0, PATCH)?;
    }

    canvas.draw_line(10, 128, 50, 128, STREAK, 10);

    Ok(canvas)
}

pub fn run(config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
    super::save(&render()?, FILE_NAME, config)
}
