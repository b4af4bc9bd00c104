use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::translation::{TranslationService, TranslationServiceApi},
    error::{AppError, AppResult},
};

/// Request for POST /api/tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    pub audio_url: String,
}

pub struct TtsController {
    translation_service: Arc<TranslationService>,
}

impl TtsController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/tts - Convert text to speech
    ///
    /// Unlike /api/translate, a synthesis failure here fails the request.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<Json<TtsResponse>> {
        // Validate input
        let text = request.text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("Matn kiritilmagan".to_string()));
        }

        let audio_url = controller
            .translation_service
            .speak(text, &request.lang)
            .await?;

        Ok(Json(TtsResponse { audio_url }))
    }
}
