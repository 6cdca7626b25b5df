//! Action sprites - procedural icon generator for game-action glyphs
//!
//! Draws the cannon, kick, bat, throw and rail sprites as 256x256
//! transparent PNGs using simple shape primitives, a faux radial gradient
//! and a blur-based glow.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod gradient;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, rgb, rgba};
pub use config::SpriteConfig;
pub use constants::*;
pub use error::SpriteError;
pub use generate::{SpriteKind, run, run_parallel};
pub use gradient::draw_gradient_circle;
