//! Client for the description-generation backend.
//!
//! The backend takes a JSON `GenerationRequest` and answers with a JSON
//! array of `{language, description}` objects.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;

use super::error::GenerationError;
use super::request::GenerationRequest;
use super::LanguageDescription;

/// External generation backend.
#[async_trait]
pub trait DescriptionBackend: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<LanguageDescription>, GenerationError>;
}

/// POSTs requests to a fixed HTTP endpoint.
pub struct HttpDescriptionBackend {
    client: Client,
    endpoint: String,
}

impl HttpDescriptionBackend {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DescriptionBackend for HttpDescriptionBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<LanguageDescription>, GenerationError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            model = request.model.id(),
            length = request.length.as_str(),
            languages = ?request.languages,
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| GenerationError::Connection { source })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Generation backend error"
            );

            return Err(GenerationError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|source| GenerationError::Connection { source })?;

        let descriptions: Vec<LanguageDescription> = serde_json::from_str(&response_text)
            .map_err(|e| {
                GenerationError::InvalidResponse(format!("Failed to parse response JSON: {}", e))
            })?;

        if descriptions.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        tracing::info!(
            latency_ms,
            count = descriptions.len(),
            "Generation completed"
        );

        Ok(descriptions)
    }
}
