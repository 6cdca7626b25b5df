//! Output configuration threaded through every generator.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_OUTPUT_DIR;

/// Where generated sprites are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteConfig {
    /// Directory receiving the PNG files (created on first save)
    pub output_dir: PathBuf,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SpriteConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full destination path for a sprite file name
    pub fn sprite_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
