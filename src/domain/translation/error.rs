use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("{0}")]
    Translation(String),
    #[error("{0}")]
    Synthesis(String),
    #[error("audio storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Translation(msg) | TranslationServiceError::Synthesis(msg) => {
                AppError::ExternalService(msg)
            }
            TranslationServiceError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}
