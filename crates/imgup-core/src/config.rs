//! Configuration module
//!
//! Environment-driven configuration for the upload client. The API key is
//! injected at startup and never embedded in source.

use std::env;

use crate::error::AppError;

const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Static API key for the image-hosting service.
    pub api_key: String,
    /// Upload endpoint (multipart POST target).
    pub upload_url: String,
}

impl Config {
    /// Read configuration from environment: IMGBB_API_KEY (or API_KEY)
    /// required, IMGBB_API_URL optional.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("IMGBB_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| {
                AppError::Config("Missing API key. Set IMGBB_API_KEY or API_KEY".to_string())
            })?;

        let upload_url =
            env::var("IMGBB_API_URL").unwrap_or_else(|_| DEFAULT_UPLOAD_URL.to_string());

        let config = Self {
            api_key,
            upload_url: upload_url.trim_end_matches('/').to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn new(api_key: impl Into<String>, upload_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            upload_url: upload_url.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("API key must not be empty".to_string()));
        }
        if !self.upload_url.starts_with("http://") && !self.upload_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Upload URL must be an http(s) URL, got: {}",
                self.upload_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_default_endpoint() {
        let config = Config::new("key123", DEFAULT_UPLOAD_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_key() {
        let config = Config::new("  ", DEFAULT_UPLOAD_URL);
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let config = Config::new("key123", "ftp://example.com/upload");
        assert!(config.validate().is_err());
    }
}
