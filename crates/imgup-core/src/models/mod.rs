//! Domain models shared across the imgup crates.

pub mod asset;
pub mod response;
pub mod upload;

pub use asset::{AssetKind, PickConfig, PickOutcome, PickedAsset};
pub use response::{HostedImageRef, UploadData, UploadResponse};
pub use upload::{UploadOptions, UploadRequest, UploadedImage};
