//! Filesystem media picker for the CLI.
//!
//! Stands in for the OS media picker: takes a path from the command line or
//! prompts on stdin, reads the file, and returns the asset with its base64
//! encoding. An empty prompt answer maps to picker cancellation.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;

use imgup_core::{AppError, MediaPicker, PickConfig, PickOutcome, PickedAsset};

/// Picker backed by local files. With a preset path it picks that file;
/// without one it prompts on stdin, where an empty line cancels.
pub struct FilePicker {
    path: Option<PathBuf>,
}

impl FilePicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn read_asset(path: &Path, include_base64: bool) -> Result<PickedAsset, AppError> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Picker(format!("Failed to read {}: {e}", path.display())))?;

        let base64 = if include_base64 {
            base64::engine::general_purpose::STANDARD.encode(&bytes)
        } else {
            String::new()
        };

        Ok(PickedAsset::new(
            format!("file://{}", path.display()),
            base64,
        ))
    }

    fn prompt_for_path() -> Result<Option<PathBuf>, AppError> {
        print!("Image path (empty to cancel): ");
        std::io::stdout()
            .flush()
            .map_err(|e| AppError::Picker(format!("Failed to flush prompt: {e}")))?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| AppError::Picker(format!("Failed to read input: {e}")))?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }
}

#[async_trait]
impl MediaPicker for FilePicker {
    async fn pick(&self, config: &PickConfig) -> Result<PickOutcome, AppError> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => match Self::prompt_for_path()? {
                Some(path) => path,
                None => return Ok(PickOutcome::Cancelled),
            },
        };

        let asset = Self::read_asset(&path, config.include_base64)?;
        Ok(PickOutcome::Picked(asset))
    }
}
