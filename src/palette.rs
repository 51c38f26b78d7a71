//! Brand colours, kept as CSS strings and parsed with `css-color`.

use image::Rgba;
use std::str::FromStr;
use tracing::warn;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parse a CSS colour (`#rgb`, `#rrggbb`, names, `rgb()`, `rgba()`).
///
/// Unparseable input is logged and replaced by `fallback`.
pub fn parse_color(css: &str, fallback: Rgba<u8>) -> Rgba<u8> {
    css_color::Srgb::from_str(css)
        .map(|color| {
            Rgba([
                channel(color.red),
                channel(color.green),
                channel(color.blue),
                channel(color.alpha),
            ])
        })
        .unwrap_or_else(|_| {
            warn!(color = css, "unrecognised CSS color, using fallback");
            fallback
        })
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Colours used by both icon tools.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub gradient_top: Rgba<u8>,
    pub gradient_bottom: Rgba<u8>,
    pub spine: Rgba<u8>,
    pub text_lines: Rgba<u8>,
    pub dots: [Rgba<u8>; 3],
    pub notification_bars: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_top: Rgba([0x00, 0xf5, 0xff, 255]),
            gradient_bottom: Rgba([0x0a, 0xc3, 0x9b, 255]),
            spine: Rgba([0x00, 0x66, 0xcc, 255]),
            text_lines: Rgba([0x33, 0x33, 0x33, 255]),
            dots: [
                Rgba([0xff, 0x6b, 0x6b, 255]),
                Rgba([0x4e, 0xcd, 0xc4, 255]),
                Rgba([0x45, 0xb7, 0xd1, 255]),
            ],
            notification_bars: Rgba([0x00, 0xf5, 0xff, 255]),
        }
    }
}

impl Palette {
    /// Override the gradient endpoints from CSS strings, keeping the
    /// defaults for anything that fails to parse.
    pub fn with_gradient(mut self, top: Option<&str>, bottom: Option<&str>) -> Self {
        if let Some(top) = top {
            self.gradient_top = parse_color(top, self.gradient_top);
        }
        if let Some(bottom) = bottom {
            self.gradient_bottom = parse_color(bottom, self.gradient_bottom);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#0066cc", WHITE), Rgba([0, 102, 204, 255]));
        assert_eq!(parse_color("#fff", TRANSPARENT), WHITE);
        assert_eq!(parse_color("white", TRANSPARENT), WHITE);
    }

    #[test]
    fn parses_alpha() {
        assert_eq!(parse_color("rgba(0, 0, 0, 0)", WHITE), TRANSPARENT);
    }

    #[test]
    fn falls_back_on_garbage() {
        assert_eq!(parse_color("not-a-color", WHITE), WHITE);
    }

    #[test]
    fn gradient_override_keeps_defaults_for_bad_input() {
        let palette = Palette::default().with_gradient(Some("#000000"), Some("???"));
        assert_eq!(palette.gradient_top, Rgba([0, 0, 0, 255]));
        assert_eq!(palette.gradient_bottom, Palette::default().gradient_bottom);
    }
}
