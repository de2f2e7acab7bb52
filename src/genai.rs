//! # Generative Service Client
//!
//! Async client for the Gemini-style `generateContent` REST API. Three
//! calls back the booth: a person pre-analysis that picks the caption
//! pronoun, the caricature image generation, and the title/analysis
//! caption generation.
//!
//! Responses arrive as loosely-structured JSON; parsing is factored into
//! pure functions over `serde_json::Value` so every failure path is
//! testable without a live service. Recovery policy follows the kiosk
//! flow: pronoun detection never fails (defaults to "their"), caption
//! *parsing* never fails (defaults to the stock caption), but transport
//! errors and generation refusals are terminal for the current pass.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::BoothConfig;
use crate::error::{BoothError, BoothResult};

/// Per-request ceiling; generation calls can be slow but not unbounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Caption substituted when the service's text cannot be parsed.
const DEFAULT_TITLE: &str = "Navy Star";
const DEFAULT_ANALYSIS: &str = "Ready for an adventure on the high seas!";

/// Structured caption returned by (or defaulted from) the text model.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub analysis: String,
}

impl Caption {
    /// The stock caption used when the model's answer is unparseable.
    pub fn fallback() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            analysis: DEFAULT_ANALYSIS.to_string(),
        }
    }
}

/// Client for the generative service.
pub struct GenAiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    image_model: String,
    text_model: String,
}

impl GenAiClient {
    pub fn new(config: &BoothConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, model, self.api_key
        )
    }

    async fn generate(&self, operation: &str, model: &str, body: Value) -> BoothResult<Value> {
        let response = self
            .http
            .post(self.endpoint(model))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| BoothError::network(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BoothError::service(
                operation,
                format!("status {}: {}", status, detail),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BoothError::network(operation, e))
    }

    /// Ask the service how many people are in the photo and their perceived
    /// gender, and derive the caption pronoun. Any failure (transport,
    /// refusal, malformed JSON) recovers to "their"; this call is never
    /// terminal.
    pub async fn detect_pronoun(&self, photo_jpeg: &[u8]) -> String {
        let body = json!({
            "contents": {
                "parts": [
                    inline_image_part(photo_jpeg),
                    { "text": "Analyze this photo and identify the number of people and their \
perceived gender(s). Respond in JSON. If there is one person, provide their gender. If there are \
two people, provide both genders." }
                ]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "count": { "type": "INTEGER", "description": "The number of people in the photo (1 or 2)." },
                        "genders": {
                            "type": "ARRAY",
                            "description": "An array of perceived genders ('male', 'female').",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["count", "genders"]
                }
            }
        });

        match self.generate("person_analysis", &self.text_model, body).await {
            Ok(response) => pronoun_from_analysis(response_text(&response)),
            Err(e) => {
                warn!(error = %e, "person analysis failed, defaulting pronoun to 'their'");
                "their".to_string()
            }
        }
    }

    /// Generate the caricature image for the captured photo.
    ///
    /// Terminal on refusal or on an unusable response; the caller resets
    /// to the capture step so the visitor can retry with another photo.
    pub async fn generate_caricature(&self, photo_jpeg: &[u8]) -> BoothResult<Vec<u8>> {
        let body = json!({
            "contents": {
                "parts": [
                    inline_image_part(photo_jpeg),
                    { "text": "Generate a high-quality, fun caricature of the person or people in \
this photo in the theme of the Indian Navy. The style should be a 'vivid' cartoon effect. Place \
them in a naval setting, perhaps on a ship deck or with naval symbols. Exaggerate their features \
for a humorous, artistic result, but ensure they are still recognizable." }
                ]
            },
            "generationConfig": {
                "responseModalities": ["IMAGE"]
            }
        });

        let response = self
            .generate("image_generation", &self.image_model, body)
            .await?;
        let image = parse_caricature_response(&response)?;
        debug!(bytes = image.len(), "received caricature image");
        Ok(image)
    }

    /// Generate the title and witty one-liner. Transport failures are
    /// terminal; an unparseable answer degrades to the stock caption.
    pub async fn generate_caption(&self, pronoun: &str) -> BoothResult<Caption> {
        let prompt = format!(
            "Analyze the person or people in the photo. Create a funny, flattering title for \
their caricature (e.g., 'Captain Cool', 'The Dynamic Duo'). Then, write a separate witty \
one-liner (20 words or less) about them. IMPORTANT: For the one-liner, use the pronoun \
'{pronoun}' to refer to them. For example: 'Leading the charge with a smile, {pronoun} presence \
anchors the spirit of Navy Day.' Keep it positive and fun for the Navy Day 2025 event."
        );
        let body = json!({
            "contents": { "parts": [{ "text": prompt }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "A short, funny, flattering title for the person or couple. Should be 2-4 words."
                        },
                        "analysis": {
                            "type": "STRING",
                            "description": format!("A witty one-liner, 20 words or less, using the pronoun '{pronoun}'.")
                        }
                    },
                    "required": ["title", "analysis"]
                }
            }
        });

        let response = self
            .generate("caption_generation", &self.text_model, body)
            .await?;
        Ok(parse_caption_text(response_text(&response)))
    }
}

fn inline_image_part(jpeg: &[u8]) -> Value {
    json!({
        "inlineData": {
            "mimeType": "image/jpeg",
            "data": general_purpose::STANDARD.encode(jpeg)
        }
    })
}

/// Concatenated text of the first candidate's parts, if any.
fn response_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Extract the caricature bytes from an image-generation response.
///
/// A missing candidate maps to the service's block reason when one is
/// given; a non-STOP finish reason or a candidate with no inline image
/// part is an unusable response.
fn parse_caricature_response(response: &Value) -> BoothResult<Vec<u8>> {
    let Some(candidate) = response
        .get("candidates")
        .and_then(|c| c.get(0))
        .filter(|c| !c.is_null())
    else {
        if let Some(reason) = response
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
            .and_then(Value::as_str)
        {
            return Err(BoothError::blocked(reason));
        }
        return Err(BoothError::service(
            "image_generation",
            "the model returned an empty response",
        ));
    };

    if let Some(finish) = candidate.get("finishReason").and_then(Value::as_str) {
        if finish != "STOP" {
            return Err(BoothError::service(
                "image_generation",
                format!("finish reason {}", finish),
            ));
        }
    }

    let inline = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.iter().find_map(|p| p.get("inlineData")))
        .ok_or_else(|| {
            BoothError::service(
                "image_generation",
                "the model did not return an image, possibly due to safety filters",
            )
        })?;

    let data = inline
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| BoothError::service("image_generation", "inline image part without data"))?;
    general_purpose::STANDARD
        .decode(data)
        .map_err(|e| BoothError::service("image_generation", format!("undecodable image data: {}", e)))
}

/// Parse the caption JSON, substituting the stock caption when the text is
/// missing or malformed. Never fails.
fn parse_caption_text(text: Option<String>) -> Caption {
    match text.as_deref().map(serde_json::from_str::<Caption>) {
        Some(Ok(caption)) => caption,
        Some(Err(e)) => {
            warn!(error = %e, "could not parse caption JSON, using fallback");
            Caption::fallback()
        }
        None => {
            warn!("caption response had no text, using fallback");
            Caption::fallback()
        }
    }
}

/// Derive the caption pronoun from the person-analysis JSON. One person of
/// known gender gets "his"/"her"; everything else, including unparseable
/// text, gets "their".
fn pronoun_from_analysis(text: Option<String>) -> String {
    #[derive(Deserialize)]
    struct PersonAnalysis {
        count: i64,
        genders: Vec<String>,
    }

    let parsed = text
        .as_deref()
        .and_then(|t| serde_json::from_str::<PersonAnalysis>(t).ok());
    match parsed {
        Some(analysis) if analysis.count == 1 => {
            match analysis.genders.first().map(|g| g.to_lowercase()) {
                Some(g) if g == "male" => "his".to_string(),
                Some(g) if g == "female" => "her".to_string(),
                _ => "their".to_string(),
            }
        }
        Some(_) => "their".to_string(),
        None => {
            warn!("could not determine person count/gender, defaulting to 'their'");
            "their".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_formatting() {
        let mut config = BoothConfig::default();
        config.api_base = "https://example.test/".to_string();
        config.api_key = "k123".to_string();
        let client = GenAiClient::new(&config);
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent?key=k123"
        );
    }

    #[test]
    fn test_caricature_inline_data_extracted() {
        let response = json!({
            "candidates": [{
                "finishReason": "STOP",
                "content": { "parts": [
                    { "text": "here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "AQID" } }
                ]}
            }]
        });
        let bytes = parse_caricature_response(&response).unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_caricature_block_reason_maps_to_blocked() {
        let response = json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        });
        let err = parse_caricature_response(&response).unwrap_err();
        assert_eq!(err.category(), "blocked");
    }

    #[test]
    fn test_caricature_bad_finish_reason_is_service_error() {
        let response = json!({
            "candidates": [{ "finishReason": "MAX_TOKENS", "content": { "parts": [] } }]
        });
        let err = parse_caricature_response(&response).unwrap_err();
        assert_eq!(err.category(), "service");
    }

    #[test]
    fn test_caricature_missing_image_part_is_service_error() {
        let response = json!({
            "candidates": [{ "finishReason": "STOP", "content": { "parts": [{ "text": "no image" }] } }]
        });
        let err = parse_caricature_response(&response).unwrap_err();
        assert_eq!(err.category(), "service");
    }

    #[test]
    fn test_caption_parses_valid_json() {
        let caption = parse_caption_text(Some(
            r#"{"title":"Captain Cool","analysis":"Smooth sailing ahead."}"#.to_string(),
        ));
        assert_eq!(caption.title, "Captain Cool");
        assert_eq!(caption.analysis, "Smooth sailing ahead.");
    }

    #[test]
    fn test_caption_falls_back_on_malformed_json() {
        assert_eq!(
            parse_caption_text(Some("not json at all".to_string())),
            Caption::fallback()
        );
        assert_eq!(parse_caption_text(None), Caption::fallback());
    }

    #[test]
    fn test_pronoun_selection() {
        let one_male = Some(r#"{"count":1,"genders":["Male"]}"#.to_string());
        assert_eq!(pronoun_from_analysis(one_male), "his");

        let one_female = Some(r#"{"count":1,"genders":["female"]}"#.to_string());
        assert_eq!(pronoun_from_analysis(one_female), "her");

        let duo = Some(r#"{"count":2,"genders":["male","female"]}"#.to_string());
        assert_eq!(pronoun_from_analysis(duo), "their");

        assert_eq!(pronoun_from_analysis(Some("garbage".to_string())), "their");
        assert_eq!(pronoun_from_analysis(None), "their");
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
        });
        assert_eq!(response_text(&response).unwrap(), "{\"a\":1}");
    }
}
