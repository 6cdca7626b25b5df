//! Throw: abstract arm releasing a ball, trailed by speed lines

use std::path::PathBuf;

use image::Rgba;

use crate::canvas::{Canvas, rgb, rgba};
use crate::config::SpriteConfig;
use crate::constants::SPRITE_SIZE;
use crate::error::SpriteError;

pub const FILE_NAME: &str = "throw.png";

const ARM: Rgba<u8> = rgb(200, 150, 100);
const BALL: Rgba<u8> = rgb(255, 50, 50);
const SPEED_LINE: Rgba<u8> = rgba(255, 255, 255, 150);

const ARM_SHAPE: [(i32, i32); 4] = [(50, 200), (100, 150), (150, 150), (100, 250)];
const SPEED_LINES: i32 = 3;

pub fn render() -> Result<Canvas, SpriteError> {
    let mut canvas = Canvas::new(SPRITE_SIZE, SPRITE_SIZE);

    canvas.draw_polygon(&ARM_SHAPE, ARM)?;
    canvas.draw_ellipse(140, 100, 200, 160, BALL, None);

    for i in 0..SPEED_LINES {
        let y = 110 + i * 20;
        canvas.draw_line(210, y, 250, y, SPEED_LINE, 5);
    }

    Ok(canvas)
}

pub fn run(config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
    super::save(&render()?, FILE_NAME, config)
}
