//! Drawing primitives on top of `imageproc`.
//!
//! All box coordinates are inclusive on both corners, so
//! `fill_rect(img, 10, 10, 12, 12, c)` paints a 3×3 block. Primitives set
//! pixels; translucent shapes are drawn on a transparent layer and
//! composited with [`composite`].

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut, Canvas},
    rect::Rect,
};

/// Paint a vertical gradient: row `y` gets `top + (bottom - top) * y / height`,
/// truncated toward zero per channel.
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        let color = gradient_row(top, bottom, y, height);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// Colour of row `y` in a gradient spanning `height` rows.
pub fn gradient_row(top: Rgb<u8>, bottom: Rgb<u8>, y: u32, height: u32) -> Rgb<u8> {
    let t = y as f32 / height.max(1) as f32;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb([
        lerp(top[0], bottom[0]),
        lerp(top[1], bottom[1]),
        lerp(top[2], bottom[2]),
    ])
}

pub fn fill_rect<C: Canvas>(canvas: &mut C, x0: i32, y0: i32, x1: i32, y1: i32, color: C::Pixel) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(canvas, rect, color);
}

/// Filled rectangle with circular corners. The radius is clamped to half
/// the shorter side.
pub fn fill_rounded_rect<C: Canvas>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: C::Pixel,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let r = radius.clamp(0, (x1 - x0).min(y1 - y0) / 2);
    if r == 0 {
        fill_rect(canvas, x0, y0, x1, y1, color);
        return;
    }

    // Cross of two rectangles, then the four corner discs.
    fill_rect(canvas, x0 + r, y0, x1 - r, y1, color);
    fill_rect(canvas, x0, y0 + r, x1, y1 - r, color);
    for (cx, cy) in [(x0 + r, y0 + r), (x1 - r, y0 + r), (x0 + r, y1 - r), (x1 - r, y1 - r)] {
        draw_filled_circle_mut(canvas, (cx, cy), r, color);
    }
}

/// Filled ellipse inscribed in the inclusive bounding box.
pub fn fill_ellipse<C: Canvas>(canvas: &mut C, x0: i32, y0: i32, x1: i32, y1: i32, color: C::Pixel) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    draw_filled_ellipse_mut(canvas, center, (x1 - x0) / 2, (y1 - y0) / 2, color);
}

/// A fully transparent RGBA layer to draw translucent shapes on.
pub fn transparent_layer(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Source-over composite of `layer` onto an opaque RGB base.
pub fn composite(base: &RgbImage, layer: &RgbaImage) -> RgbImage {
    let mut rgba = image::DynamicImage::ImageRgb8(base.clone()).to_rgba8();
    image::imageops::overlay(&mut rgba, layer, 0, 0);
    image::DynamicImage::ImageRgba8(rgba).to_rgb8()
}
