//! Shared constants for sprite generation

/// Width and height of every generated sprite, in pixels
pub const SPRITE_SIZE: u32 = 256;

/// Output directory used when no other is configured (relative to the working directory)
pub const DEFAULT_OUTPUT_DIR: &str = "public/assets/sprites";

/// Fully transparent pixel every canvas starts from
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
