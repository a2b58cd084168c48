//! Upload flow state machine
//!
//! A single controller instance owns all mutable state of the upload screen:
//! the picked asset, the user-editable options, the last hosted result, and
//! the display-loading flag. All mutation happens through transition methods;
//! there are no ambient globals.
//!
//! States: `Idle` (nothing picked) -> `AssetPicked` -> `Uploading` ->
//! `Uploaded`, with failures returning to `AssetPicked`. Failure never clears
//! the picked asset or the entered options.

use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{
    PickConfig, PickOutcome, PickedAsset, UploadOptions, UploadRequest, UploadedImage,
};
use crate::notifier::Notifier;
use crate::picker::MediaPicker;
use crate::service::UploadService;

const MSG_UPLOADING: &str = "Uploading...";
const MSG_UPLOADED: &str = "Image uploaded successfully";
const MSG_FAILED: &str = "Image upload failed";

/// Lifecycle state of the upload flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// No asset picked yet.
    Idle,
    /// An asset is present but not uploaded.
    AssetPicked,
    /// A request is in flight; doubles as the in-flight token.
    Uploading,
    /// The last upload succeeded and its result is displayed.
    Uploaded,
}

/// Controller for the single upload screen.
///
/// Generic over its three external collaborators so the flow can be driven
/// by a real picker/HTTP client or by test doubles.
pub struct UploadFlowController<P, S, N> {
    picker: P,
    service: S,
    notifier: N,
    pick_config: PickConfig,
    api_key: String,
    state: FlowState,
    asset: Option<PickedAsset>,
    options: UploadOptions,
    uploaded: Option<UploadedImage>,
    display_loading: bool,
}

impl<P, S, N> UploadFlowController<P, S, N>
where
    P: MediaPicker,
    S: UploadService,
    N: Notifier,
{
    pub fn new(picker: P, service: S, notifier: N, api_key: impl Into<String>) -> Self {
        Self {
            picker,
            service,
            notifier,
            pick_config: PickConfig::default(),
            api_key: api_key.into(),
            state: FlowState::Idle,
            asset: None,
            options: UploadOptions::default(),
            uploaded: None,
            display_loading: false,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn asset(&self) -> Option<&PickedAsset> {
        self.asset.as_ref()
    }

    pub fn options(&self) -> &UploadOptions {
        &self.options
    }

    pub fn uploaded(&self) -> Option<&UploadedImage> {
        self.uploaded.as_ref()
    }

    pub fn is_display_loading(&self) -> bool {
        self.display_loading
    }

    /// Invoke the picker once. Cancellation leaves all state untouched.
    /// A pick replaces only the picked-asset portion of state: any prior
    /// uploaded result survives until the next successful upload.
    pub async fn pick_asset(&mut self) -> Result<PickOutcome, AppError> {
        let outcome = self.picker.pick(&self.pick_config).await?;
        match &outcome {
            PickOutcome::Cancelled => {
                debug!("picker cancelled, state unchanged");
            }
            PickOutcome::Picked(asset) => {
                debug!(uri = %asset.uri, "asset picked");
                self.asset = Some(asset.clone());
                self.state = FlowState::AssetPicked;
            }
        }
        Ok(outcome)
    }

    /// Pure field mutator; no state transition.
    pub fn set_name(&mut self, text: impl Into<String>) {
        self.options.name = text.into();
    }

    /// Pure field mutator; no state transition. The text is stored as
    /// entered and forwarded without local validation or clamping.
    pub fn set_expiration(&mut self, text: impl Into<String>) {
        self.options.expiration = Some(text.into());
    }

    pub fn clear_expiration(&mut self) {
        self.options.expiration = None;
    }

    /// Upload the picked asset.
    ///
    /// Requires a picked asset and no upload in flight. Exactly one POST is
    /// issued; on any failure the flow returns to `AssetPicked` with asset,
    /// options, and any prior uploaded result intact. On success the hosted
    /// result replaces the previous one and the name field is cleared
    /// (expiration is deliberately left as entered).
    pub async fn upload_asset(&mut self) -> Result<UploadedImage, AppError> {
        if self.state == FlowState::Uploading {
            return Err(AppError::UploadInFlight);
        }
        let asset = self
            .asset
            .as_ref()
            .ok_or_else(|| AppError::NoAssetPicked("pick an image before uploading".to_string()))?;

        let request = UploadRequest {
            api_key: self.api_key.clone(),
            image_base64: asset.base64.clone(),
            name: self.options.name_if_set().map(str::to_string),
            expiration: self.options.expiration.clone(),
        };

        self.notifier.notify(MSG_UPLOADING);
        self.state = FlowState::Uploading;

        let response = match self.service.upload(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(code = err.error_code(), "upload failed: {err}");
                self.notifier.notify(MSG_FAILED);
                self.state = FlowState::AssetPicked;
                return Err(err);
            }
        };

        if !response.success {
            warn!(status = ?response.status, "upload rejected by service");
            self.notifier.notify(MSG_FAILED);
            self.state = FlowState::AssetPicked;
            return Err(AppError::Rejected(format!(
                "service responded with success=false (status {:?})",
                response.status
            )));
        }

        let Some(uploaded) = response.into_uploaded_image() else {
            self.notifier.notify(MSG_FAILED);
            self.state = FlowState::AssetPicked;
            return Err(AppError::InvalidResponse(
                "success response without a complete payload".to_string(),
            ));
        };

        debug!(url = %uploaded.url, size = uploaded.size_bytes, "upload complete");
        self.uploaded = Some(uploaded.clone());
        self.options.name.clear();
        self.notifier.notify(MSG_UPLOADED);
        self.state = FlowState::Uploaded;
        Ok(uploaded)
    }

    /// Render lifecycle hook: the hosted image started loading for display.
    /// Scoped to display only, never toggled by upload network activity.
    pub fn display_load_started(&mut self) {
        self.display_loading = true;
    }

    /// Render lifecycle hook: the hosted image finished loading.
    pub fn display_load_finished(&mut self) {
        self.display_loading = false;
    }
}
