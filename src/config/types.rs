use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::{LengthChoice, ModelChoice};

/// Sample product photo offered by the "use a sample image" shortcut.
pub const SAMPLE_IMAGE_URL: &str = "https://napkinsdev.s3.us-east-1.amazonaws.com/next-s3-uploads/91061dca-cebc-4215-ab2c-8bde6cb46cac/trader-wafer.JPG";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Default selections and network timeouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Model selected at startup.
    #[serde(default)]
    pub model: ModelChoice,
    /// Description length selected at startup.
    #[serde(default)]
    pub length: LengthChoice,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Description-generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Full URL of the generation endpoint.
    #[serde(default = "default_generation_endpoint")]
    pub endpoint: String,
}

/// Image storage service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Multipart upload endpoint; responds with `{"url": "..."}`.
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    #[serde(default = "default_sample_image_url")]
    pub sample_image_url: String,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_generation_endpoint() -> String {
    "http://localhost:3000/api/generateDescriptions".to_string()
}

fn default_upload_url() -> String {
    "http://localhost:3000/api/upload".to_string()
}

fn default_sample_image_url() -> String {
    SAMPLE_IMAGE_URL.to_string()
}

impl Defaults {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            model: ModelChoice::default(),
            length: LengthChoice::default(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generation_endpoint(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_url: default_upload_url(),
            sample_image_url: default_sample_image_url(),
        }
    }
}
