use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cartoon_booth::capture::StillSource;
use cartoon_booth::{BoothConfig, BoothSession};

/// Run one cartoon-booth pass over a captured photo:
/// - match a character locally from the photo's pixel statistics
/// - generate a caricature and caption (or synthesize them in --offline mode)
/// - composite, downscale, and emit the QR share payload
#[derive(Parser, Debug)]
#[command(name = "booth")]
#[command(about = "📸 Turn a captured photo into a shareable caricature keepsake")]
struct Args {
    /// Captured photo to process (any format the image crate decodes)
    photo: String,

    /// Keepsake JPEG output path
    #[arg(short, long, default_value = "navy-day-keepsake-2025.jpg")]
    output: String,

    /// Write the QR share payload string to this path when one fits
    #[arg(long)]
    share_payload: Option<String>,

    /// Skip the generative service; the matched character supplies the
    /// caption and the photo itself is composited
    #[arg(long)]
    offline: bool,

    /// Generative service API key (falls back to $GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Generative service base URL override
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = BoothConfig::default();
    config.output = args.output;
    config.offline = args.offline;
    config.api_key = args
        .api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .unwrap_or_default();
    if let Some(base_url) = args.base_url {
        config.api_base = base_url;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let source = StillSource::new(&args.photo);
    let mut session = BoothSession::new(config.clone(), Box::new(source));
    let keepsake = session.run_once().await?;

    std::fs::write(&config.output, &keepsake.image_jpeg)?;
    info!(
        output = %config.output,
        character = keepsake.character.name,
        title = %keepsake.caption.title,
        "keepsake written"
    );

    match (&args.share_payload, &keepsake.share_payload) {
        (Some(path), Some(payload)) => {
            std::fs::write(path, payload)?;
            info!(path = %path, chars = payload.len(), "share payload written");
        }
        (Some(_), None) => {
            info!("share payload unavailable for this image; use the download instead");
        }
        _ => {}
    }

    Ok(())
}
