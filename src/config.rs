//! # Configuration Module
//!
//! Configuration structure and validation for booth pipeline runs. It is the
//! common interface between the CLI and the core library.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Description |
//! |-----------|------|-------------|
//! | `output` | `String` | Keepsake JPEG output path |
//! | `api_base` | `String` | Generative service base URL |
//! | `api_key` | `String` | Generative service API key |
//! | `image_model` | `String` | Model id for caricature generation |
//! | `text_model` | `String` | Model id for analysis/caption calls |
//! | `share_max_w` | `u32` | Max share-image width (QR payload sizing) |
//! | `share_max_h` | `u32` | Max share-image height |
//! | `payload_limit` | `usize` | Ceiling for the share payload string |
//! | `offline` | `bool` | Skip the generative service entirely |

/// Configuration for one booth pipeline run.
///
/// Defaults match the event kiosk: the share image is shrunk to fit
/// 400×600 and the payload ceiling is the 2800-character mark below which
/// dense QR codes still scan reliably on event hardware.
#[derive(Debug, Clone)]
pub struct BoothConfig {
    /// Keepsake JPEG output path.
    pub output: String,

    /// Base URL of the generative service.
    pub api_base: String,

    /// API key for the generative service. May be empty in offline mode.
    pub api_key: String,

    /// Model used for caricature image generation.
    pub image_model: String,

    /// Model used for person analysis and caption generation.
    pub text_model: String,

    /// Maximum width of the share image embedded in the QR payload.
    pub share_max_w: u32,

    /// Maximum height of the share image embedded in the QR payload.
    pub share_max_h: u32,

    /// Ceiling for the encoded share payload, in characters.
    pub payload_limit: usize,

    /// When set, the pipeline runs without the generative service: the
    /// matched character supplies the caption and the captured photo is
    /// composited directly.
    pub offline: bool,
}

impl Default for BoothConfig {
    fn default() -> Self {
        Self {
            output: crate::share::SHARE_FILENAME.to_string(),
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            image_model: "gemini-2.5-flash-image".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            share_max_w: 400,
            share_max_h: 600,
            payload_limit: 2800,
            offline: false,
        }
    }
}

impl BoothConfig {
    /// Creates a configuration for an online run with the given credentials,
    /// keeping the kiosk defaults for everything else.
    pub fn new(output: String, api_key: String) -> Self {
        Self {
            output,
            api_key,
            ..Self::default()
        }
    }

    /// Validates the configuration parameters.
    ///
    /// # Validation Rules
    ///
    /// - `share_max_w` and `share_max_h` must be greater than 0
    /// - `payload_limit` must be greater than 0
    /// - `api_key` must be non-empty unless `offline` is set
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all parameters are valid
    /// - `Err(String)` with a descriptive message if validation fails
    pub fn validate(&self) -> Result<(), String> {
        if self.share_max_w == 0 || self.share_max_h == 0 {
            return Err("Share bounds must be greater than 0".to_string());
        }
        if self.payload_limit == 0 {
            return Err("Payload limit must be greater than 0".to_string());
        }
        if !self.offline && self.api_key.is_empty() {
            return Err(
                "An API key is required for online runs (use --offline to skip the service)"
                    .to_string(),
            );
        }
        Ok(())
    }
}
