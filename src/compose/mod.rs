//! # Image Compositor
//!
//! Flattens the generated caricature and its caption text into the single
//! keepsake picture: source image on top, bold title and word-wrapped
//! italic caption centered beneath it on a white band, encoded as JPEG at
//! quality 95.
//!
//! The offscreen canvas is owned by the call that creates it and is
//! dropped on every exit path, including failures.

pub mod layout;
pub mod text;

pub use layout::{CompositeLayout, compute_layout, wrap_caption};

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::error::{BoothError, BoothResult};
use layout::{CAPTION_LINE_HEIGHT, CAPTION_PX, PADDING, TEXT_GAP, TITLE_LINE_HEIGHT, TITLE_PX};

/// JPEG quality of the flattened keepsake.
const KEEPSAKE_JPEG_QUALITY: u8 = 95;

/// Solid background behind the text band.
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Text color (#111827).
const TEXT_COLOR: Rgba<u8> = Rgba([17, 24, 39, 255]);

/// Largest canvas we will allocate, in pixels. Mirrors the area ceiling of
/// the rendering surfaces kiosk browsers provide.
const MAX_CANVAS_AREA: u64 = 1 << 28;

/// Composite the encoded source image with a title and caption.
///
/// The canvas keeps the source width; its height is the source height plus
/// the title line, the gap, the wrapped caption lines, and padding above
/// and below the text block. An empty caption still occupies one caption
/// line; an empty title still occupies the title line.
///
/// # Errors
///
/// [`BoothError::ImageLoad`] when the source bytes fail to decode;
/// [`BoothError::RenderSurface`] when the canvas cannot be acquired.
pub fn compose_keepsake(image_bytes: &[u8], title: &str, caption: &str) -> BoothResult<Vec<u8>> {
    let source = image::load_from_memory(image_bytes)
        .map_err(|e| BoothError::image_load("composition", e))?
        .to_rgba8();
    let (image_w, image_h) = source.dimensions();

    let caption_font = text::caption_font()?;
    let title_font = text::title_font()?;

    let plan = compute_layout(image_w, image_h, caption, |s| {
        text::text_width(caption_font, CAPTION_PX, s)
    });
    debug!(
        canvas_w = plan.canvas_w,
        canvas_h = plan.canvas_h,
        lines = plan.lines.len(),
        "computed composite layout"
    );

    if plan.canvas_w == 0
        || plan.canvas_h == 0
        || plan.canvas_w as u64 * plan.canvas_h as u64 > MAX_CANVAS_AREA
    {
        return Err(BoothError::render_surface(format!(
            "{}x{} canvas not acquirable",
            plan.canvas_w, plan.canvas_h
        )));
    }

    let mut canvas = RgbaImage::from_pixel(plan.canvas_w, plan.canvas_h, BACKGROUND);
    imageops::overlay(&mut canvas, &source, 0, 0);

    let center_x = plan.canvas_w as f32 / 2.0;
    text::draw_text_centered(
        &mut canvas,
        title_font,
        TITLE_PX,
        center_x,
        (image_h + PADDING + TITLE_LINE_HEIGHT) as f32,
        TEXT_COLOR,
        title,
    );

    let mut baseline_y = image_h + PADDING + TITLE_LINE_HEIGHT + TEXT_GAP + CAPTION_LINE_HEIGHT;
    for line in &plan.lines {
        text::draw_text_centered(
            &mut canvas,
            caption_font,
            CAPTION_PX,
            center_x,
            baseline_y as f32,
            TEXT_COLOR,
            line,
        );
        baseline_y += CAPTION_LINE_HEIGHT;
    }

    let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), KEEPSAKE_JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| BoothError::render_surface(format!("keepsake encode failed: {}", e)))?;
    Ok(out)
}
