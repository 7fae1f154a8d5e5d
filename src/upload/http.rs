use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;

use super::{ImageFile, ImageStore, UploadError};

/// Storage service response body.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Uploads images as a multipart `file` field to a storage endpoint.
pub struct HttpImageStore {
    client: Client,
    upload_url: String,
}

impl HttpImageStore {
    pub fn new(client: Client, upload_url: impl Into<String>) -> Self {
        Self {
            client,
            upload_url: upload_url.into(),
        }
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(file.mime_type)
            .map_err(|source| UploadError::Connection { source })?;
        let form = Form::new().part("file", part);

        let start = Instant::now();
        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| UploadError::Connection { source })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, latency_ms, error = %message, "Image upload failed");
            return Err(UploadError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        if body.url.trim().is_empty() {
            return Err(UploadError::InvalidResponse("empty url".to_string()));
        }

        tracing::info!(latency_ms, url = %body.url, "Image uploaded");
        Ok(body.url)
    }
}
