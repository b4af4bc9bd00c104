use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Audio store
    pub audio_dir: String,
    pub audio_max_age_seconds: u64,
    // Provider base URLs (overridable so tests can point them at mocks)
    pub translate_api_url: String,
    pub tts_api_url: String,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Every key has a default, so the binary runs with no environment at all.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            audio_dir: env::var("AUDIO_DIR").unwrap_or_else(|_| "static/audio".to_string()),
            audio_max_age_seconds: env::var("AUDIO_MAX_AGE_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            translate_api_url: env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| "https://translate.googleapis.com".to_string()),
            tts_api_url: env::var("TTS_API_URL")
                .unwrap_or_else(|_| "https://translate.google.com".to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
