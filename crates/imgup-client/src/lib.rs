//! HTTP client for the image-hosting upload API.
//!
//! Provides `ImgbbClient`, a reqwest-based implementation of the core
//! `UploadService` trait: one multipart POST per upload, JSON response
//! parsing, and a helper for fetching the hosted image for display.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use imgup_core::{AppError, Config, UploadRequest, UploadResponse, UploadService};

/// Client for an imgbb-compatible upload endpoint.
#[derive(Clone, Debug)]
pub struct ImgbbClient {
    client: Client,
    upload_url: String,
}

impl ImgbbClient {
    /// Build a client for the given endpoint. No request timeout is
    /// configured; the platform default applies.
    pub fn new(upload_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            upload_url: upload_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.upload_url.clone())
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    fn build_form(request: &UploadRequest) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in request.form_fields() {
            form = form.text(name, value);
        }
        form
    }

    /// Download the hosted image bytes, used to verify/display the result.
    pub async fn fetch_hosted(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch hosted image")
            .map_err(AppError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Rejected(format!(
                "hosted image fetch failed with status {status}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read hosted image bytes")
            .map_err(AppError::Network)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl UploadService for ImgbbClient {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, AppError> {
        let form = Self::build_form(request);
        debug!(url = %self.upload_url, "posting multipart upload");

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload request")
            .map_err(AppError::Network)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<UploadResponse>()
                .await
                .context("Failed to parse upload response as JSON")
                .map_err(AppError::Network);
        }

        // The service reports rejections as non-2xx with the same JSON
        // shape; surface the parsed body so the flow sees success=false.
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        match serde_json::from_str::<UploadResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(AppError::Rejected(format!(
                "upload failed with status {status}: {body}"
            ))),
        }
    }
}
