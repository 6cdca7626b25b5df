//! Error types for sprite generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while drawing or writing sprites.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding or the file write failed.
    #[error("failed to write {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A drawing primitive was given degenerate geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Two canvases of different sizes were composited.
    #[error("dimension mismatch: {bottom:?} vs {top:?}")]
    DimensionMismatch { bottom: (u32, u32), top: (u32, u32) },
}
