//! Description generation: request building, eligibility and the backend client.

mod client;
mod error;
mod request;

pub use client::{DescriptionBackend, HttpDescriptionBackend};
pub use error::GenerationError;
pub use request::{check_eligibility, GenerationRequest, Ineligible};

use serde::{Deserialize, Serialize};

/// One generated description, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescription {
    pub language: String,
    pub description: String,
}

impl LanguageDescription {
    pub fn new(language: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            description: description.into(),
        }
    }
}
