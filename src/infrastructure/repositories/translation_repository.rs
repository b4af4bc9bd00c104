use async_trait::async_trait;

/// Repository for translation operations.
/// Abstracts the underlying translation provider.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` from `source` into `target`.
    ///
    /// Returns the translated text. Implementations report transport
    /// failures, provider errors and unparseable payloads as errors; an
    /// empty translation is returned as-is and judged by the caller.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, String>;
}
