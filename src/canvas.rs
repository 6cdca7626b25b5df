//! RGBA drawing surface
//!
//! Thin layer over `image::RgbaImage` and `imageproc::drawing` that gives the
//! sprite generators box-style geometry: rectangles and ellipses are described
//! by inclusive bounding boxes, lines carry a pixel width, and every shape
//! overwrites the pixels beneath it (alpha included) instead of blending.

use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::constants::TRANSPARENT;
use crate::error::SpriteError;

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Color with explicit alpha
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}

/// In-memory RGBA pixel buffer being drawn into
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(TRANSPARENT)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at (x, y), or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Fills the box `[x0, x1] x [y0, y1]`, both ends inclusive
    pub fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, fill: Rgba<u8>) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        let rect = Rect::at(left, top).of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_filled_rect_mut(&mut self.image, rect, fill);
    }

    /// Fills the ellipse inscribed in the bounding box, then strokes an inward
    /// outline of `outline.1` pixels on top if one is given. An odd extent has
    /// no centre pixel, so the shape is stamped at both middle pixels to reach
    /// the far edge.
    pub fn draw_ellipse(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        fill: Rgba<u8>,
        outline: Option<(Rgba<u8>, u32)>,
    ) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        let rx = (right - left) / 2;
        let ry = (bottom - top) / 2;

        let mut centers = vec![
            (left + rx, top + ry),
            (right - rx, top + ry),
            (left + rx, bottom - ry),
            (right - rx, bottom - ry),
        ];
        centers.sort_unstable();
        centers.dedup();

        for &center in &centers {
            draw_filled_ellipse_mut(&mut self.image, center, rx, ry, fill);
        }

        if let Some((color, width)) = outline {
            for inset in 0..width as i32 {
                if rx - inset < 0 || ry - inset < 0 {
                    break;
                }
                for &center in &centers {
                    draw_hollow_ellipse_mut(&mut self.image, center, rx - inset, ry - inset, color);
                }
            }
        }
    }

    /// Fills a regular `sides`-gon with circumradius `radius`.
    ///
    /// Vertex `i` sits at `270 - 180/sides + rotation + i * 360/sides` degrees,
    /// measured counter-clockwise on screen, so rotation 0 leaves a flat edge
    /// at the bottom.
    pub fn draw_regular_polygon(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        sides: u32,
        rotation: f64,
        fill: Rgba<u8>,
    ) -> Result<(), SpriteError> {
        if sides < 3 {
            return Err(SpriteError::InvalidGeometry(format!(
                "regular polygon needs at least 3 sides, got {sides}"
            )));
        }

        let step = 360.0 / sides as f64;
        let start = 270.0 - 0.5 * step + rotation;
        let vertices: Vec<(i32, i32)> = (0..sides)
            .map(|i| {
                let angle = (start + step * i as f64).to_radians();
                (
                    (cx as f64 + radius as f64 * angle.cos()).round() as i32,
                    (cy as f64 - radius as f64 * angle.sin()).round() as i32,
                )
            })
            .collect();

        self.draw_polygon(&vertices, fill)
    }

    /// Fills the simple polygon through `vertices` (implicitly closed)
    pub fn draw_polygon(&mut self, vertices: &[(i32, i32)], fill: Rgba<u8>) -> Result<(), SpriteError> {
        if vertices.len() < 3 {
            return Err(SpriteError::InvalidGeometry(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        let points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
        self.fill_points(points, fill);
        Ok(())
    }

    /// Strokes a segment `width` pixels wide with butt caps.
    ///
    /// Wide strokes cover every pixel whose projection falls on the segment and
    /// whose signed distance from it lies in `[-width/2, width/2)`, so an
    /// axis-aligned stroke is exactly `width` pixels across.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>, width: u32) {
        if width <= 1 {
            draw_line_segment_mut(
                &mut self.image,
                (x0 as f32, y0 as f32),
                (x1 as f32, y1 as f32),
                color,
            );
            return;
        }

        let dx = (x1 - x0) as i64;
        let dy = (y1 - y0) as i64;
        let len_sq = dx * dx + dy * dy;
        let w = width as i32;

        if len_sq == 0 {
            let lo = -(w / 2);
            self.draw_rectangle(x0 + lo, y0 + lo, x0 + lo + w - 1, y0 + lo + w - 1, color);
            return;
        }

        // Distance bound scaled by the segment length, matching `across` below
        let band = width as f64 / 2.0 * (len_sq as f64).sqrt();
        let reach = (w + 1) / 2;
        let (canvas_w, canvas_h) = (self.width() as i32, self.height() as i32);
        let xs = (x0.min(x1) - reach).max(0)..=(x0.max(x1) + reach).min(canvas_w - 1);
        let ys = (y0.min(y1) - reach).max(0)..=(y0.max(y1) + reach).min(canvas_h - 1);

        for py in ys {
            for px in xs.clone() {
                let rx = (px - x0) as i64;
                let ry = (py - y0) as i64;
                let along = rx * dx + ry * dy;
                if along < 0 || along > len_sq {
                    continue;
                }
                let across = (ry * dx - rx * dy) as f64;
                if across >= -band && across < band {
                    self.image.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }

    /// Returns a Gaussian-blurred copy; every channel, alpha included, is
    /// convolved independently. Non-positive sigma yields an unchanged copy.
    pub fn gaussian_blur(&self, sigma: f32) -> Canvas {
        if sigma <= 0.0 {
            return self.clone();
        }
        Canvas {
            image: imageproc::filter::gaussian_blur_f32(&self.image, sigma),
        }
    }

    /// Straight-alpha "over" blend of `top` onto `bottom`
    pub fn alpha_composite(bottom: &Canvas, top: &Canvas) -> Result<Canvas, SpriteError> {
        if bottom.dimensions() != top.dimensions() {
            return Err(SpriteError::DimensionMismatch {
                bottom: bottom.dimensions(),
                top: top.dimensions(),
            });
        }

        let (width, height) = bottom.dimensions();
        let image = RgbaImage::from_fn(width, height, |x, y| {
            over(*bottom.image.get_pixel(x, y), *top.image.get_pixel(x, y))
        });
        Ok(Canvas { image })
    }

    /// Soft halo: a blurred copy with the sharp canvas composited on top
    pub fn with_glow(&self, sigma: f32) -> Result<Canvas, SpriteError> {
        let glow = self.gaussian_blur(sigma);
        Canvas::alpha_composite(&glow, self)
    }

    /// Encodes as RGBA PNG, creating parent directories and overwriting any
    /// existing file
    pub fn save_png(&self, path: &Path) -> Result<(), SpriteError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SpriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| SpriteError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }

    fn fill_points(&mut self, mut points: Vec<Point<i32>>, fill: Rgba<u8>) {
        // imageproc rejects an explicitly closed ring
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        match points.as_slice() {
            [] => {}
            [p] => {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width() && (p.y as u32) < self.height() {
                    self.image.put_pixel(p.x as u32, p.y as u32, fill);
                }
            }
            _ => draw_polygon_mut(&mut self.image, &points, fill),
        }
    }
}

fn over(bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    match top[3] {
        0 => return bottom,
        255 => return top,
        _ => {}
    }

    let src_a = top[3] as f32 / 255.0;
    let dst_a = bottom[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let channel = |i: usize| {
        let c = (top[i] as f32 * src_a + bottom[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
