//! # Booth Session Orchestration
//!
//! Drives one capture through the full pipeline: frame → local character
//! match → generative service calls → composite → share downscale → QR
//! payload. The caricature and caption calls run concurrently and are
//! awaited jointly; the compositor and resizer are strictly sequential
//! because the resizer consumes the compositor's output.
//!
//! In offline mode the matched character stands in for the service: its
//! name becomes the title, a stock one-liner becomes the caption, and the
//! captured photo itself is composited. That path exercises the matcher as
//! the kiosk's local fallback when the service is unreachable.

use tracing::info;

use crate::capture::FrameSource;
use crate::capture::RgbaFrame;
use crate::compose::compose_keepsake;
use crate::config::BoothConfig;
use crate::error::BoothResult;
use crate::genai::{Caption, GenAiClient};
use crate::matcher::{CHARACTERS, CharacterEntry, Gender, match_character};
use crate::scale::resize_to_fit;
use crate::share::build_share_payload;

/// Everything one booth pass produces.
#[derive(Clone, Debug)]
pub struct Keepsake {
    /// Deterministically matched pool entry (independent of the service).
    pub character: CharacterEntry,
    /// Title and one-liner burned into the keepsake.
    pub caption: Caption,
    /// The flattened keepsake JPEG.
    pub image_jpeg: Vec<u8>,
    /// The share-sized JPEG embedded in the QR payload.
    pub share_jpeg: Vec<u8>,
    /// QR payload string, or `None` when it exceeded the scan ceiling.
    pub share_payload: Option<String>,
}

/// One configured booth pipeline over a frame source.
pub struct BoothSession {
    config: BoothConfig,
    client: GenAiClient,
    source: Box<dyn FrameSource>,
}

impl BoothSession {
    pub fn new(config: BoothConfig, source: Box<dyn FrameSource>) -> Self {
        let client = GenAiClient::new(&config);
        Self {
            config,
            client,
            source,
        }
    }

    /// Run one capture through the pipeline and return its artifacts.
    ///
    /// Decode failures and service refusals propagate; the caller is
    /// expected to surface them and return to a retry-capable capture
    /// state. Pronoun failures, caption-parse failures, and oversized
    /// share payloads are absorbed along the way.
    pub async fn run_once(&mut self) -> BoothResult<Keepsake> {
        self.source.initialize().await?;
        let frame = self.source.capture_frame().await?;
        info!(width = frame.width, height = frame.height, "captured frame");

        // Independent deterministic path; never blocks on the service.
        let character = *match_character(&frame, CHARACTERS);
        info!(character = character.name, "matched local character");

        let result = if self.config.offline {
            self.offline_pass(&frame, character).await
        } else {
            self.online_pass(&frame, character).await
        };

        self.source.shutdown().await?;
        result
    }

    async fn online_pass(
        &self,
        frame: &RgbaFrame,
        character: CharacterEntry,
    ) -> BoothResult<Keepsake> {
        let photo = frame.to_jpeg()?;

        let pronoun = self.client.detect_pronoun(&photo).await;
        info!(%pronoun, "person analysis complete");

        let (cartoon, caption) = tokio::try_join!(
            self.client.generate_caricature(&photo),
            self.client.generate_caption(&pronoun),
        )?;
        info!(title = %caption.title, "generation complete");

        self.finish(character, caption, &cartoon)
    }

    async fn offline_pass(
        &self,
        frame: &RgbaFrame,
        character: CharacterEntry,
    ) -> BoothResult<Keepsake> {
        let pronoun = match character.gender {
            Gender::Male => "his",
            Gender::Female => "her",
            Gender::Neutral => "their",
        };
        let caption = Caption {
            title: character.name.to_string(),
            analysis: format!(
                "Leading the charge with a smile, {pronoun} presence anchors the spirit of Navy Day."
            ),
        };
        let photo = frame.to_jpeg()?;
        self.finish(character, caption, &photo)
    }

    fn finish(
        &self,
        character: CharacterEntry,
        caption: Caption,
        source_jpeg: &[u8],
    ) -> BoothResult<Keepsake> {
        let image_jpeg = compose_keepsake(source_jpeg, &caption.title, &caption.analysis)?;
        let share_jpeg = resize_to_fit(
            &image_jpeg,
            self.config.share_max_w,
            self.config.share_max_h,
        )?;
        let share_payload = build_share_payload(&share_jpeg, self.config.payload_limit);
        info!(
            keepsake_bytes = image_jpeg.len(),
            share_bytes = share_jpeg.len(),
            has_qr = share_payload.is_some(),
            "keepsake assembled"
        );

        Ok(Keepsake {
            character,
            caption,
            image_jpeg,
            share_jpeg,
            share_payload,
        })
    }
}
