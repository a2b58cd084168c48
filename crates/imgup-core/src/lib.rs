//! Imgup Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! upload flow state machine shared across all imgup components. The HTTP
//! client and CLI crates implement the collaborator traits defined here.

pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod notifier;
pub mod picker;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use flow::{FlowState, UploadFlowController};
pub use models::{
    PickConfig, PickOutcome, PickedAsset, UploadOptions, UploadRequest, UploadResponse,
    UploadedImage,
};
pub use notifier::{NoOpNotifier, Notifier};
pub use picker::MediaPicker;
pub use service::UploadService;
