//! Glyph measurement and rasterization for the keepsake text block.
//!
//! The booth burns its text into the bitmap, so measurement and drawing
//! must agree exactly: both walk the same rusttype glyph layout. Widths are
//! advance-based (trailing spaces count), which is what the wrap algorithm
//! relies on when it measures candidate lines ending in a space.

use std::sync::OnceLock;

use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};

use crate::error::{BoothError, BoothResult};

static TITLE_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
static CAPTION_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Oblique.ttf");

/// Bold face used for the title line.
pub fn title_font() -> BoothResult<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| Font::try_from_bytes(TITLE_FONT_BYTES))
        .as_ref()
        .ok_or_else(|| BoothError::render_surface("embedded title font failed to parse"))
}

/// Oblique face used for the caption lines.
pub fn caption_font() -> BoothResult<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| Font::try_from_bytes(CAPTION_FONT_BYTES))
        .as_ref()
        .ok_or_else(|| BoothError::render_surface("embedded caption font failed to parse"))
}

/// Advance width of `text` at `px` pixels, including trailing whitespace.
pub fn text_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(px);
    let mut width = 0.0;
    let mut last_glyph = None;
    for ch in text.chars() {
        let glyph = font.glyph(ch).scaled(scale);
        if let Some(prev) = last_glyph {
            width += font.pair_kerning(scale, prev, glyph.id());
        }
        width += glyph.h_metrics().advance_width;
        last_glyph = Some(glyph.id());
    }
    width
}

/// Draw `text` horizontally centered on `center_x` with its baseline at
/// `baseline_y`, alpha-blending glyph coverage over the existing pixels.
pub fn draw_text_centered(
    img: &mut RgbaImage,
    font: &Font<'_>,
    px: f32,
    center_x: f32,
    baseline_y: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let start_x = center_x - text_width(font, px, text) / 2.0;

    for glyph in font.layout(text, scale, point(start_x, baseline_y)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let x = gx as i32 + bb.min.x;
                let y = gy as i32 + bb.min.y;
                if x < 0 || y < 0 {
                    return;
                }
                let (x, y) = (x as u32, y as u32);
                if x >= img.width() || y >= img.height() {
                    return;
                }
                let alpha = coverage.clamp(0.0, 1.0);
                if alpha == 0.0 {
                    return;
                }
                let dst = img.get_pixel_mut(x, y);
                let inv = 1.0 - alpha;
                dst.0[0] = (color.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
                dst.0[1] = (color.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
                dst.0[2] = (color.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
                dst.0[3] = 255;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fonts_parse() {
        assert!(title_font().is_ok());
        assert!(caption_font().is_ok());
    }

    #[test]
    fn test_width_grows_with_text() {
        let font = caption_font().unwrap();
        let short = text_width(font, 28.0, "hi");
        let long = text_width(font, 28.0, "hi there sailor");
        assert!(short > 0.0);
        assert!(long > short);
    }

    #[test]
    fn test_trailing_space_adds_width() {
        let font = caption_font().unwrap();
        assert!(text_width(font, 28.0, "word ") > text_width(font, 28.0, "word"));
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let font = title_font().unwrap();
        assert_eq!(text_width(font, 48.0, ""), 0.0);
    }

    #[test]
    fn test_drawing_touches_pixels() {
        let font = title_font().unwrap();
        let mut img = RgbaImage::from_pixel(200, 80, Rgba([255, 255, 255, 255]));
        draw_text_centered(&mut img, font, 48.0, 100.0, 60.0, Rgba([17, 24, 39, 255]), "Hi");
        assert!(img.pixels().any(|p| p.0[0] < 255));
    }
}
