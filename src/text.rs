//! Label text rendering.
//!
//! A TrueType font is preferred; when no usable font file is found the
//! label is drawn with the `font8x8` bitmap font instead.

use crate::canvas::fill_rect;
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::RgbaImage;
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Bold sans fonts tried in order when no font is given explicitly.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub enum LabelFont {
    Outline(Font<'static>),
    Bitmap,
}

impl LabelFont {
    /// Load `explicit` if given, otherwise the first system candidate that
    /// parses. Falls back to the bitmap font.
    pub fn load(explicit: Option<&Path>) -> Self {
        let candidates: Vec<PathBuf> = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        };

        for path in &candidates {
            if let Some(font) = load_font_file(path) {
                debug!(font = %path.display(), "using outline font");
                return LabelFont::Outline(font);
            }
        }

        match explicit {
            Some(path) => warn!(font = %path.display(), "can't load font, using built-in bitmap font"),
            None => warn!("no system font found, using built-in bitmap font"),
        }
        LabelFont::Bitmap
    }

    pub fn is_outline(&self) -> bool {
        matches!(self, LabelFont::Outline(_))
    }

    /// Width and height in pixels of `text` rendered at `px` pixels tall.
    pub fn measure(&self, text: &str, px: u32) -> (i32, i32) {
        match self {
            LabelFont::Outline(font) => text_size(Scale::uniform(px as f32), font, text),
            LabelFont::Bitmap => {
                let cell = bitmap_cell(px);
                let glyphs = text.chars().count() as i32;
                if glyphs == 0 {
                    return (0, 0);
                }
                (glyphs * GLYPH_SIZE * cell, GLYPH_SIZE * cell)
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`). Glyph coverage
    /// is blended into the existing pixels.
    pub fn draw(&self, canvas: &mut RgbaImage, color: image::Rgba<u8>, x: i32, y: i32, px: u32, text: &str) {
        match self {
            LabelFont::Outline(font) => {
                draw_text_mut(canvas, color, x, y, Scale::uniform(px as f32), font, text)
            }
            LabelFont::Bitmap => draw_bitmap_text(canvas, color, x, y, px, text),
        }
    }
}

fn load_font_file(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    let font = Font::try_from_vec(bytes);
    if font.is_none() {
        warn!(font = %path.display(), "file is not a usable TrueType font");
    }
    font
}

const GLYPH_SIZE: i32 = 8;
const MISSING_GLYPH: char = '?';

fn bitmap_cell(px: u32) -> i32 {
    (px as i32 / GLYPH_SIZE).max(1)
}

/// 8×8 glyph rows; bit 0 is the left column. Characters outside the
/// basic Latin block render as `?` so the measured width is always filled.
fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| BASIC_FONTS.get(MISSING_GLYPH))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(canvas: &mut RgbaImage, color: image::Rgba<u8>, x: i32, y: i32, px: u32, text: &str) {
    let cell = bitmap_cell(px);
    let advance = GLYPH_SIZE * cell;

    for (i, ch) in text.chars().enumerate() {
        let left = x + i as i32 * advance;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let cx = left + col * cell;
                let cy = y + row as i32 * cell;
                fill_rect(canvas, cx, cy, cx + cell - 1, cy + cell - 1, color);
            }
        }
    }
}
