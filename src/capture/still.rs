//! Still-photo frame source: serves one decoded photo as the captured frame.

use std::path::PathBuf;

use async_trait::async_trait;
use booth_scale::plan::Size;
use image::GenericImageView;
use tracing::debug;

use crate::capture::{FrameSource, RgbaFrame};
use crate::error::{BoothError, BoothResult};

/// Frame source backed by a single photo on disk. Stands in for the kiosk
/// camera when the pipeline is driven from the CLI or from tests.
pub struct StillSource {
    path: PathBuf,
    frame: Option<RgbaFrame>,
}

impl StillSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frame: None,
        }
    }

    fn load(&self) -> BoothResult<RgbaFrame> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| BoothError::io(format!("read {}", self.path.display()), e))?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| BoothError::image_load("still_capture", e))?;
        debug!(
            path = %self.path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "decoded still photo"
        );
        Ok(RgbaFrame::from_image(decoded.to_rgba8()))
    }
}

#[async_trait]
impl FrameSource for StillSource {
    async fn initialize(&mut self) -> BoothResult<()> {
        self.frame = Some(self.load()?);
        Ok(())
    }

    async fn capture_frame(&mut self) -> BoothResult<RgbaFrame> {
        match &self.frame {
            Some(frame) => Ok(frame.clone()),
            None => self.load(),
        }
    }

    fn input_size(&self) -> Option<Size> {
        self.frame.as_ref().map(|f| Size {
            w: f.width,
            h: f.height,
        })
    }

    async fn shutdown(&mut self) -> BoothResult<()> {
        self.frame = None;
        Ok(())
    }
}
