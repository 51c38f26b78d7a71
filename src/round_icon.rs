//! Round (circle-masked) variants of an existing icon.

use crate::{
    canvas::{fill_ellipse, fill_rect, transparent_layer},
    manifest::{Manifest, Shape},
    mask::{apply_mask, make_round, round_mask},
    output::{ensure_dir, save_png},
    palette::{Palette, WHITE},
};
use anyhow::{Context, Result};
use image::{DynamicImage, RgbaImage};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_SOURCE: &str = "edp.png";
pub const NOTIFICATION_SIZE: u32 = 256;
pub const NOTIFICATION_FILE: &str = "notification-icon.png";

const DEFAULT_TARGETS_JSON: &str = r#"
[
  { "file": "icon.png", "size": 1024 },
  { "file": "adaptive-icon.png", "size": 1024 },
  { "file": "splash-icon.png", "size": 1024 },
  { "file": "favicon.png", "size": 32 },
  { "file": "favicon-16x16.png", "size": 16 },
  { "file": "favicon-32x32.png", "size": 32 },
  { "file": "favicon-48x48.png", "size": 48 },
  { "file": "favicon-64x64.png", "size": 64 }
]
"#;

/// One round icon to write: file name inside the output directory and edge length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoundTarget {
    pub file: String,
    pub size: u32,
}

pub fn default_targets() -> Vec<RoundTarget> {
    parse_targets(DEFAULT_TARGETS_JSON).expect("built-in target table")
}

/// Parse a JSON array of `{ "file", "size" }` objects.
pub fn parse_targets(json: &str) -> Result<Vec<RoundTarget>> {
    let targets: Vec<RoundTarget> =
        serde_json::from_str(json).context("Invalid round icon target list")?;

    for target in &targets {
        if target.size == 0 {
            anyhow::bail!("Target {} has zero size", target.file);
        }
        if Path::new(&target.file).file_name().map(|n| n != target.file.as_str()).unwrap_or(true) {
            anyhow::bail!("Target file must be a plain file name, got {}", target.file);
        }
    }
    Ok(targets)
}

pub fn load_targets(path: &Path) -> Result<Vec<RoundTarget>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read target list {}", path.display()))?;
    parse_targets(&json)
}

#[derive(Debug, Clone)]
pub struct RoundIconOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub targets: Vec<RoundTarget>,
    pub palette: Palette,
    pub manifest: bool,
}

impl Default for RoundIconOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from("assets"),
            targets: default_targets(),
            palette: Palette::default(),
            manifest: false,
        }
    }
}

/// Load `input`, cut it round at `size` and save it to `output`.
pub fn make_icon_round(input: &Path, output: &Path, size: u32) -> Result<RgbaImage> {
    let source = image::open(input)
        .with_context(|| format!("Failed to load image {}", input.display()))?;
    round_from_source(&source, output, size)
}

fn round_from_source(source: &DynamicImage, output: &Path, size: u32) -> Result<RgbaImage> {
    let round = make_round(source, size);
    save_png(&DynamicImage::ImageRgba8(round.clone()), output)?;
    println!("✓ Created round icon: {}", output.display());
    Ok(round)
}

/// White disc with three ascending bars, cut round. The mask becomes the
/// alpha channel, so the ring between the disc and the mask edge is opaque
/// black.
pub fn create_round_notification_icon(size: u32, palette: &Palette) -> RgbaImage {
    let s = size as i32;
    let mut img = transparent_layer(size, size);

    let margin = s / 6;
    fill_ellipse(&mut img, margin, margin, s - margin, s - margin, WHITE);

    let (cx, cy) = (s / 2, s / 2);
    let bar_w = s / 20;
    let spacing = bar_w + 5;
    let bars = [
        (cx - spacing, cy + bar_w, bar_w, s / 8),
        (cx, cy - bar_w, bar_w, s / 6),
        (cx + spacing, cy - s / 10, bar_w, s / 5),
    ];
    for (x, y, w, h) in bars {
        fill_rect(&mut img, x, y, x + w, y + h, palette.notification_bars);
    }

    apply_mask(&mut img, &round_mask(size));
    img
}

/// Write every round target from `options.input`, then the round
/// notification icon.
pub fn create_all_round_icons(options: &RoundIconOptions) -> Result<Manifest> {
    if !options.input.exists() {
        anyhow::bail!("Original icon not found at {}", options.input.display());
    }
    ensure_dir(&options.output)?;

    // Decode once; every target is resized from the same raster.
    let source = image::open(&options.input)
        .with_context(|| format!("Failed to load image {}", options.input.display()))?;
    info!(
        source = %options.input.display(),
        width = source.width(),
        height = source.height(),
        targets = options.targets.len(),
        "making round icons"
    );
    if source.width() != source.height() {
        debug!("source is not square, it will be stretched to each target");
    }

    let mut manifest = Manifest::default();
    for target in &options.targets {
        let path = options.output.join(&target.file);
        round_from_source(&source, &path, target.size)?;
        manifest.add(target.file.as_str(), target.size, Shape::Round);
    }

    let notification = create_round_notification_icon(NOTIFICATION_SIZE, &options.palette);
    let path = options.output.join(NOTIFICATION_FILE);
    save_png(&DynamicImage::ImageRgba8(notification), &path)?;
    manifest.add(NOTIFICATION_FILE, NOTIFICATION_SIZE, Shape::Round);
    println!("✓ Created round notification icon: {}", path.display());

    if options.manifest {
        let path = manifest.write(&options.output)?;
        println!("✓ Created manifest: {}", path.display());
    }
    Ok(manifest)
}
