//! Error types module
//!
//! All errors surfaced by the upload flow are unified under the `AppError`
//! enum. Every variant is recovered locally: the flow notifies the user and
//! returns to its prior stable state; nothing is retried automatically.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like missing preconditions
    Debug,
    /// Warning level - for recoverable issues like a rejected upload
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No image picked: {0}")]
    NoAssetPicked(String),

    #[error("An upload is already in flight")]
    UploadInFlight,

    #[error("Network failure: {0}")]
    Network(#[source] anyhow::Error),

    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Picker error: {0}")]
    Picker(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Static metadata per variant: (error_code, recoverable, log_level).
fn static_metadata(err: &AppError) -> (&'static str, bool, LogLevel) {
    match err {
        AppError::NoAssetPicked(_) => ("NO_ASSET_PICKED", true, LogLevel::Debug),
        AppError::UploadInFlight => ("UPLOAD_IN_FLIGHT", true, LogLevel::Debug),
        AppError::Network(_) => ("NETWORK_FAILURE", true, LogLevel::Warn),
        AppError::Rejected(_) => ("UPLOAD_REJECTED", true, LogLevel::Warn),
        AppError::InvalidResponse(_) => ("INVALID_RESPONSE", true, LogLevel::Warn),
        AppError::Picker(_) => ("PICKER_ERROR", true, LogLevel::Warn),
        AppError::Config(_) => ("CONFIG_ERROR", false, LogLevel::Error),
    }
}

impl AppError {
    /// Machine-readable error code (e.g. "NETWORK_FAILURE").
    pub fn error_code(&self) -> &'static str {
        static_metadata(self).0
    }

    /// Whether the flow remains in a stable state the user can retry from.
    pub fn is_recoverable(&self) -> bool {
        static_metadata(self).1
    }

    pub fn log_level(&self) -> LogLevel {
        static_metadata(self).2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_network() {
        let err = AppError::Network(anyhow::anyhow!("connection reset"));
        assert_eq!(err.error_code(), "NETWORK_FAILURE");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_error_metadata_rejected() {
        let err = AppError::Rejected("success=false".to_string());
        assert_eq!(err.error_code(), "UPLOAD_REJECTED");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_error_metadata_precondition() {
        let err = AppError::NoAssetPicked("pick an image first".to_string());
        assert_eq!(err.error_code(), "NO_ASSET_PICKED");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_config() {
        let err = AppError::Config("IMGBB_API_KEY must be set".to_string());
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Error);
    }
}
