pub mod google_translation_repository;
pub mod google_tts_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use google_translation_repository::GoogleTranslationRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
