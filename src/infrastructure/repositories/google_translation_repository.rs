use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Google web translation implementation of the translation repository.
///
/// Talks to the `translate_a/single` endpoint used by the Google Translate
/// web client. The response is a nested JSON array whose first element holds
/// the translated segments.
pub struct GoogleTranslationRepository {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl GoogleTranslationRepository {
    pub fn new(client: Arc<reqwest::Client>, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, String> {
        let url = format!("{}/translate_a/single", self.base_url);

        tracing::info!(
            source,
            target,
            text_length = text.len(),
            "Calling translation API"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| format!("translation request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("translation API returned {}", response.status()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| format!("failed to parse translation response: {}", e))?;

        parse_translation(&payload)
            .ok_or_else(|| "translation response had an unexpected shape".to_string())
    }
}

/// Extract the translated text from the provider payload.
///
/// The payload looks like `[[["Hello","Salom",...], ...], null, "uz", ...]`;
/// each segment's first element is a translated chunk and the chunks
/// concatenate to the full translation. Returns `None` when the first
/// element is not a segment list.
fn parse_translation(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(chunk) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(chunk);
        }
    }

    Some(translated)
}
