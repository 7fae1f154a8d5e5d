use std::path::{Path, PathBuf};

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading { path: PathBuf },
    /// Image stays unset; `path` is kept so the upload can be retried.
    Failed { path: PathBuf, message: String },
}

impl UiState for UploadState {}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }

    /// Path to retry after a failure.
    pub fn retry_path(&self) -> Option<&Path> {
        match self {
            Self::Failed { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
