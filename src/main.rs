use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilgovoice_backend::controllers::translate::TranslateController;
use tilgovoice_backend::controllers::tts::TtsController;
use tilgovoice_backend::domain::translation::TranslationService;
use tilgovoice_backend::infrastructure::audio_store::AudioStore;
use tilgovoice_backend::infrastructure::config::{Config, LogFormat};
use tilgovoice_backend::infrastructure::http::start_http_server;
use tilgovoice_backend::infrastructure::repositories::{
    GoogleTranslationRepository, GoogleTtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TilGoVoice backend on {}:{}",
        config.host,
        config.port
    );

    // Shared HTTP client for both provider gateways
    let http_client = Arc::new(reqwest::Client::new());
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject the shared HTTP client)
    let translation_repo = Arc::new(GoogleTranslationRepository::new(
        http_client.clone(),
        config.translate_api_url.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client.clone(),
        config.tts_api_url.clone(),
    ));

    // 2. Instantiate the audio store (creates the directory)
    let audio_store = Arc::new(AudioStore::new(
        &config.audio_dir,
        Duration::from_secs(config.audio_max_age_seconds),
    )?);
    tracing::info!(
        dir = %config.audio_dir,
        max_age_seconds = config.audio_max_age_seconds,
        "Audio store ready"
    );

    // 3. Instantiate services (inject repositories and store)
    let translation_service = Arc::new(TranslationService::new(
        translation_repo,
        tts_repo,
        audio_store.clone(),
    ));

    // 4. Instantiate controllers (inject services)
    let translate_controller = Arc::new(TranslateController::new(translation_service.clone()));
    let tts_controller = Arc::new(TtsController::new(translation_service));

    // Start HTTP server with all routes
    start_http_server(config, audio_store, translate_controller, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tilgovoice_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tilgovoice_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
