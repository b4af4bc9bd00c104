use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use reqwest::header;
use std::sync::Arc;

/// The web TTS endpoint rejects requests without a browser User-Agent.
const TTS_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Language codes pinned explicitly for the synthesis endpoint; they are the
/// tags the translation side uses that the TTS side must keep receiving in
/// this exact form. Everything else passes through unchanged.
const TTS_LANG_OVERRIDES: &[(&str, &str)] = &[("zh-CN", "zh-CN"), ("kk", "kk"), ("ky", "ky")];

/// Google web TTS implementation of the TTS repository.
///
/// Talks to the `translate_tts` endpoint used by the Google Translate web
/// client; the response body is the MP3 audio itself.
pub struct GoogleTtsRepository {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(client: Arc<reqwest::Client>, base_url: String) -> Self {
        Self { client, base_url }
    }
}

/// Map a language code to the synthesis provider's naming.
fn provider_lang_code(lang: &str) -> &str {
    TTS_LANG_OVERRIDES
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, mapped)| *mapped)
        .unwrap_or(lang)
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, String> {
        let lang = provider_lang_code(lang);
        let url = format!("{}/translate_tts", self.base_url);

        tracing::info!(lang, text_length = text.len(), "Calling TTS API");

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, TTS_USER_AGENT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| format!("TTS request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("TTS API returned {}", response.status()));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("failed to read TTS audio: {}", e))?;

        if audio.is_empty() {
            return Err("TTS API returned no audio".to_string());
        }

        tracing::debug!(audio_size = audio.len(), "TTS audio received");

        Ok(audio.to_vec())
    }
}
