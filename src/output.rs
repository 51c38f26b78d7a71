use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, DynamicImage, ImageEncoder,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::debug;

/// Make sure the output directory exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir)
        .with_context(|| format!("Can't create output directory {}", dir.display()))
}

/// Write `image` as a best-compression PNG. Images without an alpha channel
/// are stored as RGB, everything else as RGBA.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let written = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        write_png(rgba.as_raw(), &mut out, rgba.width(), rgba.height(), ColorType::Rgba8)
    } else {
        let rgb = image.to_rgb8();
        write_png(rgb.as_raw(), &mut out, rgb.width(), rgb.height(), ColorType::Rgb8)
    };
    written.with_context(|| format!("Failed to write PNG {}", path.display()))?;

    out.flush()?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "wrote png");
    Ok(())
}

// Encode raw pixel data as PNG with compression
fn write_png<W: Write>(
    image_data: &[u8],
    w: W,
    width: u32,
    height: u32,
    color: ColorType,
) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, color)?;
    Ok(())
}
