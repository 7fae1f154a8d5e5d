//! Error types for description generation.

use thiserror::Error;

/// Errors that can occur while calling the generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Request never produced a response (DNS, refused, timeout).
    #[error("Connection to generation backend failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-2xx status.
    #[error("Generation backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body was not a JSON array of `{language, description}` objects.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend returned no descriptions.
    #[error("Empty response from generation backend")]
    EmptyResponse,
}

impl GenerationError {
    /// Short message shown in the results panel.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Connection { source } if source.is_timeout() => {
                "The generation request timed out. Try again.".to_string()
            }
            GenerationError::Connection { .. } => {
                "Could not reach the generation service. Try again.".to_string()
            }
            GenerationError::Status { status, .. } => {
                format!("The generation service failed ({status}). Try again.")
            }
            GenerationError::InvalidResponse(_) | GenerationError::EmptyResponse => {
                "The generation service returned an unexpected response. Try again.".to_string()
            }
        }
    }
}
