//! # Cartoon Booth Pipeline Library
//!
//! The processing core of an event kiosk that turns a visitor's photo into
//! a shareable caricature keepsake.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `capture`: the camera collaborator boundary (frame sources)
//! - `matcher`: deterministic local character matching over pixel features
//! - `genai`: async client for the generative image/text service
//! - `compose`: keepsake compositing (image + title + wrapped caption)
//! - `scale`: proportional share downscale (execution in `booth-scale`)
//! - `share`: QR payload construction with the optical-scan ceiling
//! - `session`: orchestration of one capture through the whole pipeline
//! - `config` / `error`: configuration validation and the error taxonomy
//!
//! ## Pipeline
//!
//! capture → (matcher, independent local path) → caricature + caption
//! (awaited jointly) → compositor → resizer → share payload. The matcher
//! never touches the network, which is what keeps the booth productive in
//! offline mode.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cartoon_booth::{BoothConfig, BoothSession};
//! use cartoon_booth::capture::StillSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = BoothConfig::default();
//! config.offline = true;
//!
//! let source = StillSource::new("visitor.jpg");
//! let mut session = BoothSession::new(config, Box::new(source));
//! let keepsake = session.run_once().await?;
//! std::fs::write("keepsake.jpg", &keepsake.image_jpeg)?;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod compose;
pub mod config;
pub mod error;
pub mod genai;
pub mod matcher;
pub mod scale;
pub mod session;
pub mod share;

/// Re-export error types for convenience
pub use error::{BoothError, BoothResult, Recoverable, Retryable};

/// Re-export the main entry points
pub use config::BoothConfig;
pub use session::{BoothSession, Keepsake};
