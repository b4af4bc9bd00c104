use async_trait::async_trait;

/// Repository for speech synthesis operations.
/// Abstracts the underlying TTS provider.
///
/// Implementations are responsible for:
/// - Mapping language codes to the provider's naming where it differs
/// - Provider-specific request shaping
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize speech for `text` in the given language.
    ///
    /// Returns audio bytes ready to persist (MP3 format).
    ///
    /// # Errors
    /// Returns an error if synthesis fails or the provider is unavailable.
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, String>;
}
