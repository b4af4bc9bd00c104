use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::audio_store::AudioStore;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(audio_store): State<Arc<AudioStore>>) -> impl IntoResponse {
    match tokio::fs::metadata(audio_store.dir()).await {
        Ok(metadata) if metadata.is_dir() => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "audio_store": "available"
            })),
        ),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "audio_store": "unavailable"
            })),
        ),
    }
}
