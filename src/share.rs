//! # Share Payload Builder
//!
//! Packs the share-sized keepsake into a self-contained `data:text/html`
//! document: the image inline as a base64 JPEG plus a download link. The
//! whole payload is a single string intended to be rendered as a QR code
//! by the presentation layer; this module's only contract with it is the
//! length ceiling, above which dense QR codes stop scanning reliably on
//! event hardware. Oversized payloads degrade to "no QR" instead of
//! failing the flow.

use base64::{Engine as _, engine::general_purpose};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::warn;

/// Fixed download filename offered by the share page.
pub const SHARE_FILENAME: &str = "navy-day-keepsake-2025.jpg";

/// Characters escaped by `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )`. The payload must encode exactly
/// this set; widening or narrowing it shifts payload lengths and silently
/// moves the ceiling check.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The inline share page around the embedded image.
fn share_page_html(image_data_url: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
<title>Your Navy Day Cartoon</title>\
<style>body{{margin:0;font-family:sans-serif;background-color:#0f172a;color:white;text-align:center}}\
img{{max-width:100%;border-bottom:4px solid #facc15}}.container{{padding:20px}}h1{{font-size:1.5em}}\
a{{display:inline-block;margin-top:20px;padding:12px 24px;background-color:#3b82f6;color:white;\
text-decoration:none;font-weight:bold;border-radius:99px}}</style></head>\
<body><img src=\"{image_data_url}\" alt=\"Your Navy Day Cartoon\" />\
<div class=\"container\"><h1>Here's Your Keepsake!</h1>\
<a href=\"{image_data_url}\" download=\"{SHARE_FILENAME}\">Download Image</a></div></body></html>"
    )
}

/// Build the QR share payload for an already-downscaled JPEG.
///
/// Returns `None` when the encoded payload exceeds `limit` characters:
/// the share feature degrades rather than emitting a code that will not
/// scan.
pub fn build_share_payload(share_jpeg: &[u8], limit: usize) -> Option<String> {
    let image_data_url = format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(share_jpeg)
    );
    let html = share_page_html(&image_data_url);
    let payload = format!("data:text/html,{}", utf8_percent_encode(&html, URI_COMPONENT));

    if payload.len() > limit {
        warn!(
            len = payload.len(),
            limit, "share payload over the scan ceiling, degrading to no QR"
        );
        return None;
    }
    Some(payload)
}
