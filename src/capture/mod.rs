//! # Capture Module
//!
//! The camera collaborator boundary. The pipeline never initiates capture
//! itself; it consumes decoded RGBA frames from a [`FrameSource`]. The CLI
//! stands a still photo in for the kiosk camera via [`StillSource`].

pub mod frame;
pub mod still;

pub use frame::RgbaFrame;
pub use still::StillSource;

use async_trait::async_trait;
use booth_scale::plan::Size;

use crate::error::BoothResult;

/// Abstract interface for frame capture sources.
/// Enables pluggable capture backends (webcam, still photo, test fixtures).
#[async_trait]
pub trait FrameSource: Send {
    /// Initializes the capture source asynchronously.
    async fn initialize(&mut self) -> BoothResult<()>;

    /// Captures the next frame from the source asynchronously.
    async fn capture_frame(&mut self) -> BoothResult<RgbaFrame>;

    /// Returns the native resolution of the capture source, if known.
    fn input_size(&self) -> Option<Size>;

    /// Shuts down the capture source asynchronously.
    async fn shutdown(&mut self) -> BoothResult<()>;
}
