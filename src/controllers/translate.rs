use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::{
        languages::registry,
        translation::{TranslationService, TranslationServiceApi},
    },
    error::{AppError, AppResult},
};

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_target_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub target_lang: String,
    pub target_lang_name: String,
    pub target_lang_uz_name: String,
    /// Null when speech synthesis was unavailable for this request.
    pub audio_url: Option<String>,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate Uzbek text and render speech for it
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        // Validate input
        let text = request.text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("Matn kiritilmagan".to_string()));
        }

        let entry = registry::get(&request.target_lang).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Qo'llab-quvvatlanmaydigan til: {}",
                request.target_lang
            ))
        })?;

        let outcome = controller
            .translation_service
            .translate_and_speak(text, entry.code)
            .await?;

        Ok(Json(TranslateResponse {
            original_text: text.to_string(),
            translated_text: outcome.translated_text,
            target_lang: entry.code.to_string(),
            target_lang_name: entry.name.to_string(),
            target_lang_uz_name: entry.uz_name.to_string(),
            audio_url: outcome.audio_url,
        }))
    }
}
