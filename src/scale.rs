//! # Proportional Resizer
//!
//! Shrinks the keepsake to fit the share bounds while preserving aspect
//! ratio, then re-encodes it as JPEG at quality 80. Plan computation and
//! pixel work live in the `booth-scale` crate; this module adapts encoded
//! images onto that path and maps its failures into the booth taxonomy.

use std::io::Cursor;

use booth_scale::cpu::scale_rgba_cpu;
use booth_scale::plan::{Bounds, Size, build_plan};
use fast_image_resize::Resizer;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::error::{BoothError, BoothResult};

/// JPEG quality of the share-sized image.
const SHARE_JPEG_QUALITY: u8 = 80;

/// Downscale `image_bytes` to fit within `max_w` × `max_h`.
///
/// Never upscales; an image already within the active bound is re-encoded
/// at its original dimensions. The constraint branch follows the input's
/// orientation (see `booth_scale::plan`).
///
/// # Errors
///
/// [`BoothError::ImageLoad`] when the bytes fail to decode;
/// [`BoothError::RenderSurface`] when the scaling surface cannot be set up.
pub fn resize_to_fit(image_bytes: &[u8], max_w: u32, max_h: u32) -> BoothResult<Vec<u8>> {
    let source = image::load_from_memory(image_bytes)
        .map_err(|e| BoothError::image_load("resize", e))?
        .to_rgba8();
    let (w, h) = source.dimensions();

    let input = Size { w, h };
    let plan = build_plan(input, Bounds { max_w, max_h });
    debug!(
        in_w = input.w,
        in_h = input.h,
        out_w = plan.out.w,
        out_h = plan.out.h,
        "planned share downscale"
    );

    let mut dst = vec![0u8; (plan.out.w as usize) * (plan.out.h as usize) * 4];
    let mut resizer = Resizer::new();
    scale_rgba_cpu(&mut resizer, source.as_raw(), input, &plan, &mut dst)
        .map_err(|e| BoothError::render_surface(e.to_string()))?;

    let scaled = RgbaImage::from_raw(plan.out.w, plan.out.h, dst)
        .ok_or_else(|| BoothError::render_surface("scaled buffer/dimension mismatch"))?;
    let rgb = DynamicImage::ImageRgba8(scaled).into_rgb8();

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), SHARE_JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| BoothError::render_surface(format!("share encode failed: {}", e)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut out = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    fn output_dims(jpeg: &[u8]) -> (u32, u32) {
        let decoded = image::load_from_memory(jpeg).unwrap();
        (decoded.width(), decoded.height())
    }

    #[test]
    fn test_landscape_fits_width_bound() {
        // 800x600 at 400x600: width branch, height = round(600 * 400/800).
        let jpeg = resize_to_fit(&png_bytes(800, 600), 400, 600).unwrap();
        assert_eq!(output_dims(&jpeg), (400, 300));
    }

    #[test]
    fn test_portrait_fits_height_bound() {
        let jpeg = resize_to_fit(&png_bytes(600, 900), 400, 600).unwrap();
        assert_eq!(output_dims(&jpeg), (400, 600));
    }

    #[test]
    fn test_already_small_image_keeps_dimensions() {
        let jpeg = resize_to_fit(&png_bytes(300, 200), 400, 600).unwrap();
        assert_eq!(output_dims(&jpeg), (300, 200));
    }

    #[test]
    fn test_never_upscales() {
        let jpeg = resize_to_fit(&png_bytes(120, 80), 400, 600).unwrap();
        assert_eq!(output_dims(&jpeg), (120, 80));
    }

    #[test]
    fn test_orientation_branch_asymmetry() {
        // Landscape inside the width bound is untouched even though its
        // height exceeds the height bound.
        let jpeg = resize_to_fit(&png_bytes(300, 200), 400, 100).unwrap();
        assert_eq!(output_dims(&jpeg), (300, 200));
    }

    #[test]
    fn test_undecodable_input_is_image_load_failure() {
        let err = resize_to_fit(b"garbage", 400, 600).unwrap_err();
        assert_eq!(err.category(), "image_load");
    }
}
