//! Media picker contract
//!
//! The OS/media layer implements this trait; the flow controller consumes it.
//! One invocation per user action, no retry semantics.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{PickConfig, PickOutcome};

/// Trait for picking an image asset from local storage.
///
/// Implementations must honor `include_base64` by returning both a
/// displayable URI and the base64 encoding of the same bytes.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Open the picker once. Cancellation is a normal outcome, not an error.
    async fn pick(&self, config: &PickConfig) -> Result<PickOutcome, AppError>;
}

#[async_trait]
impl<T: MediaPicker + ?Sized> MediaPicker for std::sync::Arc<T> {
    async fn pick(&self, config: &PickConfig) -> Result<PickOutcome, AppError> {
        (**self).pick(config).await
    }
}
