pub mod request_id;

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::controllers::{
    health, languages, translate::TranslateController, tts::TtsController,
};
use crate::infrastructure::audio_store::AudioStore;
use crate::infrastructure::config::Config;
use self::request_id::request_id_middleware;

/// Location of the single-page front-end, relative to the working directory.
const INDEX_PAGE: &str = "static/index.html";

/// Assemble the application router.
///
/// Generated audio is served from the store's directory under the public
/// audio prefix; the front-end page is served at the root.
pub fn build_router(
    audio_store: Arc<AudioStore>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let language_routes = Router::new().route("/api/languages", get(languages::list_languages));

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(audio_store.clone());

    Router::new()
        .route_service("/", ServeFile::new(INDEX_PAGE))
        .nest_service("/static/audio", ServeDir::new(audio_store.dir()))
        .merge(language_routes)
        .merge(translate_routes)
        .merge(tts_routes)
        .merge(health_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    audio_store: Arc<AudioStore>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(audio_store, translate_controller, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
