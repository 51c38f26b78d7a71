//! Circular alpha masks for round icons.

use image::{imageops::FilterType, DynamicImage, GrayImage, Luma, RgbaImage};

/// Grayscale mask: 0 everywhere, 255 inside the circle inscribed in the
/// `size`×`size` square.
///
/// Pixels are sampled at their centres. Pixels within one pixel inside the
/// edge get a proportional value so the rim is anti-aliased; anything
/// whose centre lies outside the circle stays 0.
pub fn round_mask(size: u32) -> GrayImage {
    let center = size as f32 / 2.0;
    let radius = size as f32 / 2.0;

    GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let distance = (dx * dx + dy * dy).sqrt();

        let coverage = if distance > radius {
            0.0
        } else if distance > radius - 1.0 {
            radius - distance
        } else {
            1.0
        };
        Luma([(coverage * 255.0).round() as u8])
    })
}

/// Use the mask as the image's alpha channel, replacing whatever alpha
/// the image had. Colour channels are left untouched.
///
/// # Panics
///
/// Panics if `img` and `mask` differ in dimensions.
pub fn apply_mask(img: &mut RgbaImage, mask: &GrayImage) {
    assert_eq!(
        img.dimensions(),
        mask.dimensions(),
        "mask must match image dimensions"
    );
    for (pixel, coverage) in img.pixels_mut().zip(mask.pixels()) {
        pixel[3] = coverage[0];
    }
}

/// Resize `img` to `size`×`size` (Lanczos3) when needed and cut it to a circle.
pub fn make_round(img: &DynamicImage, size: u32) -> RgbaImage {
    let mut rgba = if img.width() == size && img.height() == size {
        img.to_rgba8()
    } else {
        img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8()
    };
    apply_mask(&mut rgba, &round_mask(size));
    rgba
}
