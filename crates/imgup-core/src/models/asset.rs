use serde::{Deserialize, Serialize};

/// Kind of media the picker is asked for. Only images are supported today;
/// the enum keeps the picker contract explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
}

/// Configuration handed to the media picker for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PickConfig {
    pub media_type: AssetKind,
    pub allow_editing: bool,
    /// Crop aspect ratio as (width, height).
    pub aspect_ratio: (u8, u8),
    /// Quality in [0.0, 1.0]; 1.0 is maximum.
    pub quality: f32,
    pub include_base64: bool,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            media_type: AssetKind::Image,
            allow_editing: true,
            aspect_ratio: (4, 3),
            quality: 1.0,
            include_base64: true,
        }
    }
}

/// An image selected from local storage.
///
/// Immutable once created; the base64 payload corresponds exactly to the
/// bytes at `uri` at pick time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedAsset {
    pub uri: String,
    pub base64: String,
}

impl PickedAsset {
    pub fn new(uri: impl Into<String>, base64: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            base64: base64.into(),
        }
    }
}

/// Result of a single picker invocation. Cancellation is benign and carries
/// no error semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(PickedAsset),
    Cancelled,
}

impl PickOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PickOutcome::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_config_defaults() {
        let config = PickConfig::default();
        assert_eq!(config.media_type, AssetKind::Image);
        assert!(config.allow_editing);
        assert_eq!(config.aspect_ratio, (4, 3));
        assert_eq!(config.quality, 1.0);
        assert!(config.include_base64);
    }

    #[test]
    fn pick_outcome_cancelled() {
        assert!(PickOutcome::Cancelled.is_cancelled());
        assert!(!PickOutcome::Picked(PickedAsset::new("file:///a.png", "aGk=")).is_cancelled());
    }
}
