use std::path::PathBuf;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UploadIntent {
    Start { path: PathBuf },
    /// Storage returned a URL for `path`.
    Finished { path: PathBuf },
    Failed { path: PathBuf, message: String },
    Dismiss,
}

impl Intent for UploadIntent {}
