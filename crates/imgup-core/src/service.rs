//! Upload service contract
//!
//! The HTTP client crate implements this trait against the remote
//! image-hosting API. A single call per upload action: no chunking, no
//! resumability, no retries.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{UploadRequest, UploadResponse};

/// Trait for submitting one multipart upload.
///
/// Transport and parse failures map to `AppError::Network`; a response the
/// service itself rejected (non-2xx with an unparseable body) maps to
/// `AppError::Rejected`. A parseable body is returned as-is, including
/// `success: false`.
#[async_trait]
pub trait UploadService: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, AppError>;
}

#[async_trait]
impl<T: UploadService + ?Sized> UploadService for std::sync::Arc<T> {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, AppError> {
        (**self).upload(request).await
    }
}
