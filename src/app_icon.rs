//! The branded square app icon and the assets derived from it.

use crate::{
    canvas::{composite, fill_ellipse, fill_rect, fill_rounded_rect, transparent_layer, vertical_gradient},
    manifest::{Manifest, Shape},
    output::{ensure_dir, save_png},
    palette::{Palette, WHITE},
    text::LabelFont,
};
use anyhow::Result;
use image::{imageops::FilterType, DynamicImage, Pixel, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::info;

pub const ICON_SIZE: u32 = 1024;
pub const NOTIFICATION_SIZE: u32 = 256;
pub const FAVICON_SIZE: u32 = 32;
pub const DEFAULT_LABEL: &str = "EDU";

/// Full-size copies of the base icon, with the wording used in progress output.
pub const BASE_ASSETS: [(&str, &str); 3] = [
    ("icon.png", "app icon"),
    ("adaptive-icon.png", "adaptive icon"),
    ("splash-icon.png", "splash icon"),
];
pub const NOTIFICATION_FILE: &str = "notification-icon.png";
pub const FAVICON_FILE: &str = "favicon.png";

const OVERLAY_FILL: Rgba<u8> = Rgba([255, 255, 255, 40]);
const SHADOW_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone)]
pub struct AppIconOptions {
    pub output: PathBuf,
    pub label: String,
    pub font: Option<PathBuf>,
    pub palette: Palette,
    pub manifest: bool,
}

impl Default for AppIconOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets"),
            label: DEFAULT_LABEL.to_string(),
            font: None,
            palette: Palette::default(),
            manifest: false,
        }
    }
}

// Lengths are laid out on a 1024px design grid.
fn grid(size: i32, design_px: i32) -> i32 {
    (design_px * size / ICON_SIZE as i32).max(1)
}

fn rgb(color: Rgba<u8>) -> Rgb<u8> {
    color.to_rgb()
}

/// Paint the app icon: gradient background, translucent rounded panel,
/// book with spine and text lines, three accent dots and the label.
pub fn create_app_icon(size: u32, palette: &Palette, label: &str, font: &LabelFont) -> RgbImage {
    let s = size as i32;
    let mut img = vertical_gradient(size, size, rgb(palette.gradient_top), rgb(palette.gradient_bottom));

    let margin = s / 8;
    let mut panel = transparent_layer(size, size);
    fill_rounded_rect(&mut panel, margin, margin, s - margin, s - margin, s / 6, OVERLAY_FILL);
    img = composite(&img, &panel);

    let (cx, cy) = (s / 2, s / 2);
    let book_w = s / 3;
    let book_h = s / 4;
    let left = cx - book_w / 2;
    let top = cy - book_h / 2 - s / 12;

    fill_rounded_rect(&mut img, left, top, left + book_w, top + book_h, grid(s, 20), rgb(WHITE));

    let spine_x = left + book_w / 3;
    fill_rect(&mut img, spine_x, top, spine_x + grid(s, 8), top + book_h, rgb(palette.spine));

    let line_top = top + book_h / 4;
    let line_step = book_h / 6;
    let line_left = left + book_w / 6;
    let line_right = left + book_w - book_w / 6;
    for i in 0..3 {
        let y = line_top + i * line_step;
        let thickness = if i == 0 { grid(s, 3) } else { grid(s, 2) };
        let right = line_right - i * grid(s, 20);
        fill_rect(&mut img, line_left, y, right, y + thickness, rgb(palette.text_lines));
    }

    let dot = grid(s, 12);
    let dot_y = cy + book_h / 2 + s / 10;
    for (i, color) in palette.dots.iter().enumerate() {
        let dot_x = cx - grid(s, 30) + i as i32 * grid(s, 30);
        fill_ellipse(
            &mut img,
            dot_x - dot / 2,
            dot_y - dot / 2,
            dot_x + dot / 2,
            dot_y + dot / 2,
            rgb(*color),
        );
    }

    if !label.is_empty() {
        let font_px = size / 20;
        let (text_w, _) = font.measure(label, font_px);
        let text_x = cx - text_w / 2;
        let text_y = cy + book_h / 2 + s / 6;
        let shadow = grid(s, 2);

        let mut text_layer = transparent_layer(size, size);
        font.draw(&mut text_layer, SHADOW_FILL, text_x + shadow, text_y + shadow, font_px, label);
        font.draw(&mut text_layer, WHITE, text_x, text_y, font_px, label);
        img = composite(&img, &text_layer);
    }

    img
}

/// White book silhouette on a transparent background.
pub fn create_notification_icon(size: u32) -> RgbaImage {
    let s = size as i32;
    let mut img = transparent_layer(size, size);

    let (cx, cy) = (s / 2, s / 2);
    let book_w = s / 2;
    let book_h = s / 3;
    let left = cx - book_w / 2;
    let top = cy - book_h / 2;

    fill_rounded_rect(&mut img, left, top, left + book_w, top + book_h, s / 20, WHITE);
    let spine_x = left + book_w / 3;
    fill_rect(&mut img, spine_x, top, spine_x + s / 32, top + book_h, WHITE);

    img
}

/// Write every asset derived from `base` into `out_dir` and return the
/// record of what was written.
pub fn save_app_icons(base: &RgbImage, out_dir: &Path) -> Result<Manifest> {
    ensure_dir(out_dir)?;
    let mut manifest = Manifest::default();
    let base = DynamicImage::ImageRgb8(base.clone());

    for (file, what) in BASE_ASSETS {
        let path = out_dir.join(file);
        save_png(&base, &path)?;
        manifest.add(file, base.width(), Shape::Square);
        println!("✓ Created {what}: {}", path.display());
    }

    let notification = DynamicImage::ImageRgba8(create_notification_icon(NOTIFICATION_SIZE));
    let path = out_dir.join(NOTIFICATION_FILE);
    save_png(&notification, &path)?;
    manifest.add(NOTIFICATION_FILE, NOTIFICATION_SIZE, Shape::Square);
    println!("✓ Created notification icon: {}", path.display());

    let favicon = base.resize_exact(FAVICON_SIZE, FAVICON_SIZE, FilterType::Lanczos3);
    let path = out_dir.join(FAVICON_FILE);
    save_png(&favicon, &path)?;
    manifest.add(FAVICON_FILE, FAVICON_SIZE, Shape::Square);
    println!("✓ Created favicon: {}", path.display());

    Ok(manifest)
}

/// Paint the icon and write all app icon assets.
pub fn generate_app_icons(options: &AppIconOptions) -> Result<Manifest> {
    let font = LabelFont::load(options.font.as_deref());
    info!(label = %options.label, outline_font = font.is_outline(), "painting app icon");

    let icon = create_app_icon(ICON_SIZE, &options.palette, &options.label, &font);
    let manifest = save_app_icons(&icon, &options.output)?;

    if options.manifest {
        let path = manifest.write(&options.output)?;
        println!("✓ Created manifest: {}", path.display());
    }
    Ok(manifest)
}
