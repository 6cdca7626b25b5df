//! Sprite generation
//!
//! One module per action glyph. Each exposes `render()`, which builds the
//! finished canvas, and `run()`, which renders and writes it under the
//! configured output directory:
//! - cannon: barrel with a glowing energy core
//! - kick: patched ball with a motion streak
//! - bat: diagonal bat with an impact flash
//! - throw: arm, ball and speed lines
//! - rail: rails, projectile and arcs with a glow

pub mod bat;
pub mod cannon;
pub mod kick;
pub mod rail;
pub mod throw;

use std::fmt;
use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::canvas::Canvas;
use crate::config::SpriteConfig;
use crate::error::SpriteError;

/// The fixed set of generated sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Cannon,
    Kick,
    Bat,
    Throw,
    Rail,
}

impl SpriteKind {
    /// Every sprite, in generation order
    pub const ALL: [SpriteKind; 5] = [
        SpriteKind::Cannon,
        SpriteKind::Kick,
        SpriteKind::Bat,
        SpriteKind::Throw,
        SpriteKind::Rail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpriteKind::Cannon => "cannon",
            SpriteKind::Kick => "kick",
            SpriteKind::Bat => "bat",
            SpriteKind::Throw => "throw",
            SpriteKind::Rail => "rail",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            SpriteKind::Cannon => cannon::FILE_NAME,
            SpriteKind::Kick => kick::FILE_NAME,
            SpriteKind::Bat => bat::FILE_NAME,
            SpriteKind::Throw => throw::FILE_NAME,
            SpriteKind::Rail => rail::FILE_NAME,
        }
    }

    /// Draws the sprite without touching the filesystem
    pub fn render(self) -> Result<Canvas, SpriteError> {
        match self {
            SpriteKind::Cannon => cannon::render(),
            SpriteKind::Kick => kick::render(),
            SpriteKind::Bat => bat::render(),
            SpriteKind::Throw => throw::render(),
            SpriteKind::Rail => rail::render(),
        }
    }

    /// Draws the sprite and writes it, returning the written path
    #[instrument(level = "debug", skip(config), fields(sprite = self.name()))]
    pub fn generate(self, config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
        match self {
            SpriteKind::Cannon => cannon::run(config),
            SpriteKind::Kick => kick::run(config),
            SpriteKind::Bat => bat::run(config),
            SpriteKind::Throw => throw::run(config),
            SpriteKind::Rail => rail::run(config),
        }
    }
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates every sprite in order, stopping at the first failure
pub fn run(config: &SpriteConfig) -> Result<Vec<PathBuf>, SpriteError> {
    info!(output_dir = %config.output_dir().display(), "generating sprites");

    let mut written = Vec::with_capacity(SpriteKind::ALL.len());
    for kind in SpriteKind::ALL {
        written.push(kind.generate(config)?);
    }

    info!(count = written.len(), "generated sprites");
    Ok(written)
}

/// Generates every sprite concurrently. Sprites share no state, so the
/// output matches [`run`]; paths come back in generation order.
pub fn run_parallel(config: &SpriteConfig) -> Result<Vec<PathBuf>, SpriteError> {
    info!(output_dir = %config.output_dir().display(), "generating sprites in parallel");

    SpriteKind::ALL
        .par_iter()
        .map(|kind| kind.generate(config))
        .collect()
}

/// Writes a finished canvas and prints the confirmation line
fn save(canvas: &Canvas, file_name: &str, config: &SpriteConfig) -> Result<PathBuf, SpriteError> {
    let path = config.sprite_path(file_name);
    debug!(width = canvas.width(), height = canvas.height(), "encoding {}", path.display());
    canvas.save_png(&path)?;
    println!("Saved {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{rgb, rgba};
    use crate::constants::SPRITE_SIZE;
    use image::Rgba;
    use std::collections::BTreeSet;
    use std::fs;

    fn pixel(kind: SpriteKind, x: u32, y: u32) -> Rgba<u8> {
        kind.render().unwrap().pixel(x, y).unwrap()
    }

    #[test]
    fn test_file_names_match_sprite_names() {
        for kind in SpriteKind::ALL {
            assert_eq!(kind.file_name(), format!("{}.png", kind.name()));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_every_sprite_is_full_size() {
        for kind in SpriteKind::ALL {
            let canvas = kind.render().unwrap();
            assert_eq!(canvas.dimensions(), (SPRITE_SIZE, SPRITE_SIZE), "{kind}");
        }
    }

    #[test]
    fn test_cannon_layers() {
        assert_eq!(pixel(SpriteKind::Cannon, 85, 200), rgb(40, 40, 50));
        assert_eq!(pixel(SpriteKind::Cannon, 128, 200), rgb(60, 60, 70));
        // Energy core centre: smallest gradient ring
        assert_eq!(pixel(SpriteKind::Cannon, 128, 100), rgb(2, 53, 103));
        assert_eq!(pixel(SpriteKind::Cannon, 0, 0), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_cannon_glow_extends_past_barrel() {
        let halo = pixel(SpriteKind::Cannon, 72, 180);
        assert!(halo[3] > 0 && halo[3] < 255, "got {halo:?}");
    }

    #[test]
    fn test_kick_layers() {
        assert_eq!(pixel(SpriteKind::Kick, 128, 128), rgb(20, 20, 20));
        assert_eq!(pixel(SpriteKind::Kick, 128, 28), rgb(200, 200, 200));
        assert_eq!(pixel(SpriteKind::Kick, 128, 60), rgb(240, 240, 240));
        assert_eq!(pixel(SpriteKind::Kick, 15, 128), rgba(200, 200, 200, 100));
        assert_eq!(pixel(SpriteKind::Kick, 5, 5), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_kick_patches_point_upwards() {
        let kick = SpriteKind::Kick.render().unwrap();
        let patch = rgb(20, 20, 20);

        // Centre patch: flat bottom edge between (113, 148) and (143, 148)
        assert!((113..=143).all(|x| kick.pixel(x, 148) == Some(patch)));
        assert_ne!(kick.pixel(128, 149), Some(patch));

        // Apex at (128, 103)
        assert_eq!(kick.pixel(128, 103), Some(patch));
        let apex = (100..156).filter(|&x| kick.pixel(x, 103) == Some(patch)).count();
        assert!(apex <= 3, "apex row has {apex} patch pixels");
        assert_ne!(kick.pixel(128, 102), Some(patch));
    }

    #[test]
    fn test_bat_layers() {
        assert_eq!(pixel(SpriteKind::Bat, 80, 180), rgb(180, 140, 100));
        // Grain is two pixels across the barrel
        let bat = SpriteKind::Bat.render().unwrap();
        for (x, y) in [(130, 130), (131, 130), (130, 131)] {
            assert_eq!(bat.pixel(x, y), Some(rgb(190, 160, 120)), "grain at ({x}, {y})");
        }
        assert_eq!(bat.pixel(131, 131), Some(rgb(210, 180, 140)));
        assert_eq!(pixel(SpriteKind::Bat, 140, 130), rgb(210, 180, 140));
        assert_eq!(pixel(SpriteKind::Bat, 200, 60), rgba(255, 255, 200, 180));
    }

    #[test]
    fn test_throw_layers() {
        assert_eq!(pixel(SpriteKind::Throw, 100, 190), rgb(200, 150, 100));
        assert_eq!(pixel(SpriteKind::Throw, 170, 130), rgb(255, 50, 50));
        for y in [110, 130, 150] {
            assert_eq!(pixel(SpriteKind::Throw, 230, y), rgba(255, 255, 255, 150));
        }
        assert_eq!(pixel(SpriteKind::Throw, 230, 120), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_rail_layers() {
        assert_eq!(pixel(SpriteKind::Rail, 60, 110), rgb(100, 100, 120));
        assert_eq!(pixel(SpriteKind::Rail, 60, 190), rgb(100, 100, 120));
        assert_eq!(pixel(SpriteKind::Rail, 125, 150), rgb(50, 200, 255));
        assert_eq!(pixel(SpriteKind::Rail, 125, 125), rgb(100, 255, 255));
        assert_eq!(pixel(SpriteKind::Rail, 10, 10), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_run_writes_exactly_five_sprites() {
        let dir = tempfile::tempdir().unwrap();
        let config = SpriteConfig::new(dir.path().join("public/assets/sprites"));

        let written = run(&config).unwrap();
        assert_eq!(written.len(), 5);

        let names: BTreeSet<String> = fs::read_dir(config.output_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        let expected: BTreeSet<String> = ["bat.png", "cannon.png", "kick.png", "rail.png", "throw.png"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, expected);

        for path in &written {
            let img = image::open(path).unwrap();
            assert_eq!(img.color(), image::ColorType::Rgba8, "{}", path.display());
            assert_eq!((img.width(), img.height()), (256, 256));
        }
    }

    #[test]
    fn test_run_returns_paths_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = SpriteConfig::new(dir.path());

        let written = run(&config).unwrap();
        let expected: Vec<PathBuf> = SpriteKind::ALL
            .iter()
            .map(|kind| config.sprite_path(kind.file_name()))
            .collect();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_rerun_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let config = SpriteConfig::new(dir.path().join("sprites"));

        let first: Vec<Vec<u8>> = run(&config)
            .unwrap()
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect();
        let second: Vec<Vec<u8>> = run(&config)
            .unwrap()
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(fs::read_dir(config.output_dir()).unwrap().count(), 5);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let sequential = SpriteConfig::new(dir.path().join("seq"));
        let parallel = SpriteConfig::new(dir.path().join("par"));

        let seq_paths = run(&sequential).unwrap();
        let par_paths = run_parallel(&parallel).unwrap();

        assert_eq!(seq_paths.len(), par_paths.len());
        for (a, b) in seq_paths.iter().zip(&par_paths) {
            assert_eq!(a.file_name(), b.file_name());
            assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
        }
    }

    #[test]
    fn test_generate_fails_when_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("sprites");
        fs::write(&blocker, b"occupied").unwrap();

        let err = SpriteKind::Kick
            .generate(&SpriteConfig::new(&blocker))
            .unwrap_err();
        assert!(matches!(err, SpriteError::CreateDir { .. }));
    }
}
