//! Faux radial gradient built from stacked circles

use image::Rgba;

use crate::canvas::Canvas;
use crate::error::SpriteError;

/// Paints concentric filled circles from `radius` down to 1, each one
/// linearly interpolated between `outer` (at the rim) and `inner` (towards the
/// centre). Channels are truncated, and the smallest ring still carries
/// `1 / radius` of the outer color.
pub fn draw_gradient_circle(
    canvas: &mut Canvas,
    center: (i32, i32),
    radius: i32,
    outer: [u8; 3],
    inner: [u8; 3],
) -> Result<(), SpriteError> {
    if radius <= 0 {
        return Err(SpriteError::InvalidGeometry(format!(
            "gradient radius must be positive, got {radius}"
        )));
    }

    let (x, y) = center;
    for r in (1..=radius).rev() {
        let ratio = r as f64 / radius as f64;
        let color = Rgba([
            lerp(outer[0], inner[0], ratio),
            lerp(outer[1], inner[1], ratio),
            lerp(outer[2], inner[2], ratio),
            255,
        ]);
        canvas.draw_ellipse(x - r, y - r, x + r, y + r, color, None);
    }

    Ok(())
}

fn lerp(outer: u8, inner: u8, ratio: f64) -> u8 {
    (outer as f64 * ratio + inner as f64 * (1.0 - ratio)) as u8
}
