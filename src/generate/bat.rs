//! Bat: diagonal handle and barrel with an impact flash at the tip

use std::path::PathBuf;

use image::Rgba;

use crate::canvas::{Canvas, rgb, rgba};
use crate::config::SpriteConfig;
use crate::constants::SPRITE_SIZE;
use crate::error::SpriteError;

pub const FILE_NAME: &str = "bat.png";

const HANDLE: Rgba<u8> = rgb(180, 140, 100);
const BARREL: Rgba<u8> = rgb(210, 180, 140);
const GRAIN: Rgba<u8> = rgb(190, 160, 120);
const IMPACT: Rgba<u8> = rgba(255, 255, 200, 180);

pub fn render() -> Result<Canvas, SpriteError> {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    canvas.draw_line(60, 200, 100, 160, HANDLE, 20);
    canvas.draw_line(100, 160, 200, 60, BARREL, 35);
    canvas.draw_line(110, 150, 190, 70, GRAIN, 2);

    // Overwrites the barrel tip, translucent pixels included
    canvas.draw_regular_polygon(200, 60, 40, 8, 22.0, IMPACT)?;

    Ok(canvas)
}

pub fn run(config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
    super::save(&render()?, FILE_NAME, config)
}
