//! Upload adapter: turns a picked image file into a public URL.
//!
//! The storage service itself is external. [`ImageStore`] is the seam;
//! [`HttpImageStore`] posts the file as multipart form data.

mod file;
mod http;

pub use file::ImageFile;
pub use http::HttpImageStore;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while uploading an image.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not a PNG, JPEG or WEBP image")]
    NotAnImage { path: PathBuf },

    #[error("Connection to storage failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    #[error("Storage returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid storage response: {0}")]
    InvalidResponse(String),
}

impl UploadError {
    /// Short message suitable for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::NotFound { .. } => "File not found",
            UploadError::Read { .. } => "Could not read the file",
            UploadError::NotAnImage { .. } => "Only PNG, JPG or WEBP images are supported",
            UploadError::Connection { .. } => "Could not reach the image storage",
            UploadError::Status { .. } | UploadError::InvalidResponse(_) => {
                "Image storage rejected the upload"
            }
        }
    }
}

/// External image storage: accepts a file, returns a publicly addressable URL.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError>;
}

/// Read the image at `path` and hand it to `store`.
pub async fn upload_path(store: &dyn ImageStore, path: &Path) -> Result<String, UploadError> {
    let file = ImageFile::read(path).await?;
    tracing::debug!(
        path = %path.display(),
        mime = file.mime_type,
        bytes = file.bytes.len(),
        "Uploading image"
    );
    store.upload(file).await
}
