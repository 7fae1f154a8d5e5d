use image::ImageFormat;
use std::path::Path;

use super::UploadError;

/// An image file read from disk, ready to be sent to storage.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Read `path` and check that it holds a supported image.
    pub async fn read(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UploadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                UploadError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Self::from_bytes(file_name, bytes).ok_or_else(|| UploadError::NotAnImage {
            path: path.to_path_buf(),
        })
    }

    /// Detect the format from the file contents. Extensions are not trusted.
    pub fn from_bytes(file_name: String, bytes: Vec<u8>) -> Option<Self> {
        let mime_type = match image::guess_format(&bytes).ok()? {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            _ => return None,
        };

        Some(Self {
            file_name,
            mime_type,
            bytes,
        })
    }
}
