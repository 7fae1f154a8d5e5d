//! Configuration loading for descgen.
//!
//! Settings live in a TOML file; every section is optional and falls back
//! to defaults that target a locally running backend.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, GenerationConfig, StorageConfig, SAMPLE_IMAGE_URL};
