//! Decoded RGBA frame passed between the capture boundary and the pipeline.

use std::io::Cursor;
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::error::{BoothError, BoothResult};

/// JPEG quality used when re-encoding a captured frame for the service.
const CAPTURE_JPEG_QUALITY: u8 = 92;

/// A dense, row-major RGBA8 frame. The buffer is reference-counted so a
/// frame can flow through the pipeline without copying pixel data.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl RgbaFrame {
    /// Wrap a decoded image buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: Arc::new(image.into_raw()),
            width,
            height,
        }
    }

    /// Build a frame from raw RGBA bytes. The buffer length must equal
    /// `width * height * 4`; a mismatched buffer is the caller's bug and
    /// leaves downstream feature extraction undefined.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Re-encode the frame as a JPEG suitable for the generative service.
    pub fn to_jpeg(&self) -> BoothResult<Vec<u8>> {
        let image = RgbaImage::from_raw(self.width, self.height, self.data.as_ref().clone())
            .ok_or_else(|| BoothError::image_load("frame_encode", "buffer/dimension mismatch"))?;
        let rgb = DynamicImage::ImageRgba8(image).into_rgb8();

        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), CAPTURE_JPEG_QUALITY);
        rgb.write_with_encoder(encoder)
            .map_err(|e| BoothError::image_load("frame_encode", e))?;
        Ok(out)
    }
}
