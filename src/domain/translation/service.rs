use super::error::TranslationServiceError;
use crate::infrastructure::audio_store::AudioStore;
use crate::infrastructure::repositories::{TranslationRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// All translations start from Uzbek. There is no source-language detection.
const SOURCE_LANGUAGE: &str = "uz";

#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub translated_text: String,
    pub audio_url: Option<String>,
}

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    audio_store: Arc<AudioStore>,
}

impl TranslationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        audio_store: Arc<AudioStore>,
    ) -> Self {
        Self {
            translation_repo,
            tts_repo,
            audio_store,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate Uzbek text into the target language and render speech for
    /// the translation.
    ///
    /// Speech rendering is best-effort: a synthesis or storage failure is
    /// logged and reported as an absent `audio_url`, never as a request
    /// failure. A translation failure, including an empty translation, is
    /// fatal.
    async fn translate_and_speak(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationOutcome, TranslationServiceError>;

    /// Render speech for the given text and return the public audio URL.
    ///
    /// Unlike the combined flow, synthesis failure here fails the operation,
    /// since audio is the sole product.
    async fn speak(&self, text: &str, lang: &str) -> Result<String, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate_and_speak(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationOutcome, TranslationServiceError> {
        tracing::info!(
            target_lang,
            text_length = text.len(),
            "Translation request"
        );

        let translated = self
            .translation_repo
            .translate(text, SOURCE_LANGUAGE, target_lang)
            .await
            .map_err(TranslationServiceError::Translation)?;

        if translated.trim().is_empty() {
            return Err(TranslationServiceError::Translation(
                "Tarjima bo'sh qaytdi".to_string(),
            ));
        }

        let audio_url = match self.render_speech(&translated, target_lang).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    target_lang,
                    "Speech synthesis failed, returning translation without audio"
                );
                None
            }
        };

        Ok(TranslationOutcome {
            translated_text: translated,
            audio_url,
        })
    }

    async fn speak(&self, text: &str, lang: &str) -> Result<String, TranslationServiceError> {
        tracing::info!(lang, text_length = text.len(), "Speech request");
        self.render_speech(text, lang).await
    }
}

impl TranslationService {
    /// Reclaim expired audio, synthesize new audio and persist it.
    ///
    /// Reclamation runs strictly before the new file is written, so a sweep
    /// can never remove the file this request is about to produce.
    async fn render_speech(
        &self,
        text: &str,
        lang: &str,
    ) -> Result<String, TranslationServiceError> {
        self.audio_store.reclaim().await;

        let audio = self
            .tts_repo
            .synthesize(text, lang)
            .await
            .map_err(TranslationServiceError::Synthesis)?;

        let artifact = self.audio_store.save(&audio).await?;

        tracing::info!(
            file = %artifact.filename,
            audio_size = audio.len(),
            "Audio artifact written"
        );

        Ok(artifact.url)
    }
}
