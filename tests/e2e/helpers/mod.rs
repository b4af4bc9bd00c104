use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use wiremock::MockServer;

use tilgovoice_backend::controllers::translate::TranslateController;
use tilgovoice_backend::controllers::tts::TtsController;
use tilgovoice_backend::domain::translation::TranslationService;
use tilgovoice_backend::infrastructure::audio_store::AudioStore;
use tilgovoice_backend::infrastructure::http::build_router;
use tilgovoice_backend::infrastructure::repositories::{
    GoogleTranslationRepository, GoogleTtsRepository,
};


use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
    pub translate_server: MockServer,
    pub tts_server: MockServer,
    pub audio_dir: PathBuf,
    _audio_tmp: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let translate_server = MockServer::start().await;
        let tts_server = MockServer::start().await;

        let audio_tmp = TempDir::new()?;
        let audio_dir = audio_tmp.path().to_path_buf();

        // Wire the real application against the mock providers
        let http_client = Arc::new(reqwest::Client::new());
        let translation_repo = Arc::new(GoogleTranslationRepository::new(
            http_client.clone(),
            translate_server.uri(),
        ));
        let tts_repo = Arc::new(GoogleTtsRepository::new(
            http_client.clone(),
            tts_server.uri(),
        ));
        let audio_store = Arc::new(AudioStore::new(&audio_dir, Duration::from_secs(300))?);
        let translation_service = Arc::new(TranslationService::new(
            translation_repo,
            tts_repo,
            audio_store.clone(),
        ));
        let translate_controller = Arc::new(TranslateController::new(translation_service.clone()));
        let tts_controller = Arc::new(TtsController::new(translation_service));

        let app = build_router(audio_store, translate_controller, tts_controller);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&format!("http://{}", addr)),
            translate_server,
            tts_server,
            audio_dir,
            _audio_tmp: audio_tmp,
        })
    }

    /// Audio files currently present in the store's directory.
    pub fn audio_files(&self) -> Vec<String> {
        std::fs::read_dir(&self.audio_dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
